/// Reasons a course definition is rejected at session start.
#[derive(Debug)]
pub enum CourseError {
    /// A numeric setting is NaN or infinite.
    NonFinite(&'static str),
    /// Field bounds enclose zero or negative area.
    EmptyField { width: f32, height: f32 },
    /// Friction must lie in (0, 1].
    Friction(f32),
    /// Restitution must lie in [0, 1].
    Restitution(f32),
    /// A setting that must be strictly positive is not.
    NotPositive { name: &'static str, value: f32 },
    /// Hole radius is negative.
    NegativeHoleRadius(f32),
    /// The ball's diameter does not fit between the field bounds.
    BallTooLarge { radius: f32 },
    /// The ball's start position leaves part of the ball outside the field.
    BallOutsideField,
    /// The hole center lies outside the field.
    HoleOutsideField,
    /// min_intent_speed must be above stop_speed and at most max_speed.
    MinIntentSpeed { value: f32, stop_speed: f32, max_speed: f32 },
    /// sink_speed must be strictly greater than stop_speed.
    SinkSpeed { sink_speed: f32, stop_speed: f32 },
    /// The course file is not valid TOML or does not match the schema.
    Parse(String),
    /// The course file could not be read.
    Io(std::io::Error),
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(name) => write!(f, "{name} must be a finite number"),
            Self::EmptyField { width, height } => {
                write!(f, "field must have positive area, got {width}x{height}")
            },
            Self::Friction(v) => write!(f, "friction must be in (0, 1], got {v}"),
            Self::Restitution(v) => write!(f, "restitution must be in [0, 1], got {v}"),
            Self::NotPositive { name, value } => write!(f, "{name} must be > 0, got {value}"),
            Self::NegativeHoleRadius(v) => write!(f, "hole radius must be >= 0, got {v}"),
            Self::BallTooLarge { radius } => {
                write!(f, "ball radius {radius} does not fit inside the field")
            },
            Self::BallOutsideField => write!(f, "ball start position is outside the field"),
            Self::HoleOutsideField => write!(f, "hole position is outside the field"),
            Self::MinIntentSpeed {
                value,
                stop_speed,
                max_speed,
            } => write!(
                f,
                "min_intent_speed {value} must be within ({stop_speed}, {max_speed}]"
            ),
            Self::SinkSpeed {
                sink_speed,
                stop_speed,
            } => write!(
                f,
                "sink_speed {sink_speed} must be greater than stop_speed {stop_speed}"
            ),
            Self::Parse(m) => write!(f, "invalid course file: {m}"),
            Self::Io(e) => write!(f, "failed to read course file: {e}"),
        }
    }
}

impl std::error::Error for CourseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CourseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for CourseError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
