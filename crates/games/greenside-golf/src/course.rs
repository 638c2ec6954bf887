use std::path::Path;

use serde::{Deserialize, Serialize};

use greenside_core::Vec2;
use greenside_core::time::NOMINAL_FRAME;

use crate::error::CourseError;

/// Environment variable naming a course file to load.
pub const COURSE_ENV_VAR: &str = "GREENSIDE_COURSE";
/// Course file looked up when the environment variable is unset.
pub const DEFAULT_COURSE_PATH: &str = "config/course.toml";

/// Axis-aligned playing surface with its material constants.
///
/// `top` is the smaller y coordinate (screen space, y grows downward).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Field {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Fraction of speed retained after one second of free rolling.
    pub friction: f32,
    /// Fraction of the perpendicular speed retained on a wall impact.
    pub restitution: f32,
    /// Speed below which the ball is considered at rest.
    pub stop_speed: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: 800.0,
            bottom: 600.0,
            friction: 0.5,
            restitution: 0.7,
            stop_speed: 5.0,
        }
    }
}

impl Field {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether a circle of `radius` at `center` lies fully inside the bounds.
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= self.left
            && center.x + radius <= self.right
            && center.y - radius >= self.top
            && center.y + radius <= self.bottom
    }
}

/// Where the ball starts and how big it is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BallSpec {
    pub start: Vec2,
    pub radius: f32,
}

impl Default for BallSpec {
    fn default() -> Self {
        Self {
            start: Vec2::new(100.0, 300.0),
            radius: 10.0,
        }
    }
}

/// The target hole. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hole {
    pub position: Vec2,
    /// Ball center must be strictly closer than this to be captured.
    pub radius: f32,
}

impl Default for Hole {
    fn default() -> Self {
        Self {
            position: Vec2::new(700.0, 300.0),
            radius: 15.0,
        }
    }
}

/// Tuning for converting a drag gesture into a launch and for sinking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShotTuning {
    /// Launch speed per unit of drag distance.
    pub power_scale: f32,
    /// Launch speed cap.
    pub max_speed: f32,
    /// Launches slower than this are treated as accidental clicks.
    pub min_intent_speed: f32,
    /// The ball can drop into the hole while slower than this.
    pub sink_speed: f32,
}

impl Default for ShotTuning {
    fn default() -> Self {
        Self {
            power_scale: 4.0,
            max_speed: 1200.0,
            min_intent_speed: 20.0,
            sink_speed: 150.0,
        }
    }
}

/// A complete single-hole course definition, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CourseConfig {
    pub name: String,
    pub par: u8,
    pub field: Field,
    pub ball: BallSpec,
    pub hole: Hole,
    pub shot: ShotTuning,
    /// Whether `reset` also clears the shot counter.
    pub reset_clears_shots: bool,
    /// Largest step a single tick integrates (seconds).
    pub max_dt: f32,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            name: "Practice Green".to_string(),
            par: 3,
            field: Field::default(),
            ball: BallSpec::default(),
            hole: Hole::default(),
            shot: ShotTuning::default(),
            reset_clears_shots: true,
            max_dt: NOMINAL_FRAME,
        }
    }
}

impl CourseConfig {
    /// Check every authoring constraint. A course that fails here can never
    /// start a session.
    pub fn validate(&self) -> Result<(), CourseError> {
        let f = &self.field;
        let finite = [
            ("field.left", f.left),
            ("field.top", f.top),
            ("field.right", f.right),
            ("field.bottom", f.bottom),
            ("field.friction", f.friction),
            ("field.restitution", f.restitution),
            ("field.stop_speed", f.stop_speed),
            ("ball.start.x", self.ball.start.x),
            ("ball.start.y", self.ball.start.y),
            ("ball.radius", self.ball.radius),
            ("hole.position.x", self.hole.position.x),
            ("hole.position.y", self.hole.position.y),
            ("hole.radius", self.hole.radius),
            ("shot.power_scale", self.shot.power_scale),
            ("shot.max_speed", self.shot.max_speed),
            ("shot.min_intent_speed", self.shot.min_intent_speed),
            ("shot.sink_speed", self.shot.sink_speed),
            ("max_dt", self.max_dt),
        ];
        if let Some(&(name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CourseError::NonFinite(name));
        }

        if f.width() <= 0.0 || f.height() <= 0.0 {
            return Err(CourseError::EmptyField {
                width: f.width(),
                height: f.height(),
            });
        }
        if f.friction <= 0.0 || f.friction > 1.0 {
            return Err(CourseError::Friction(f.friction));
        }
        if !(0.0..=1.0).contains(&f.restitution) {
            return Err(CourseError::Restitution(f.restitution));
        }

        let positive = [
            ("field.stop_speed", f.stop_speed),
            ("ball.radius", self.ball.radius),
            ("shot.power_scale", self.shot.power_scale),
            ("shot.max_speed", self.shot.max_speed),
            ("max_dt", self.max_dt),
        ];
        if let Some(&(name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(CourseError::NotPositive { name, value });
        }

        if self.hole.radius < 0.0 {
            return Err(CourseError::NegativeHoleRadius(self.hole.radius));
        }
        let diameter = self.ball.radius * 2.0;
        if diameter >= f.width() || diameter >= f.height() {
            return Err(CourseError::BallTooLarge {
                radius: self.ball.radius,
            });
        }
        if !f.contains_circle(self.ball.start, self.ball.radius) {
            return Err(CourseError::BallOutsideField);
        }
        if !f.contains_circle(self.hole.position, 0.0) {
            return Err(CourseError::HoleOutsideField);
        }

        let s = &self.shot;
        if s.min_intent_speed <= f.stop_speed || s.min_intent_speed > s.max_speed {
            return Err(CourseError::MinIntentSpeed {
                value: s.min_intent_speed,
                stop_speed: f.stop_speed,
                max_speed: s.max_speed,
            });
        }
        if s.sink_speed <= f.stop_speed {
            return Err(CourseError::SinkSpeed {
                sink_speed: s.sink_speed,
                stop_speed: f.stop_speed,
            });
        }
        Ok(())
    }

    /// Parse and validate a course from TOML text. Missing keys take their
    /// default values.
    pub fn from_toml_str(contents: &str) -> Result<Self, CourseError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a course file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CourseError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `$GREENSIDE_COURSE`, then `config/course.toml`, falling
    /// back to the built-in course.
    pub fn load() -> Self {
        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var(COURSE_ENV_VAR)
            && !path.is_empty()
        {
            candidates.push(path);
        }
        candidates.push(DEFAULT_COURSE_PATH.to_string());

        for path in &candidates {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::from_path(path) {
                Ok(config) => {
                    tracing::info!(path = %path, course = %config.name, "Loaded course");
                    return config;
                },
                Err(e) => tracing::warn!("Failed to load {path}: {e}"),
            }
        }
        tracing::info!("No course file found, using the built-in course");
        Self::default()
    }
}
