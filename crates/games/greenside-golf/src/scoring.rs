use serde::{Deserialize, Serialize};

/// Name for a completed hole's stroke count relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTerm {
    HoleInOne,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    /// Three or more over par; holds the number of strokes over.
    Over(u32),
}

impl std::fmt::Display for ScoreTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoleInOne => write!(f, "Hole in one"),
            Self::Albatross => write!(f, "Albatross"),
            Self::Eagle => write!(f, "Eagle"),
            Self::Birdie => write!(f, "Birdie"),
            Self::Par => write!(f, "Par"),
            Self::Bogey => write!(f, "Bogey"),
            Self::DoubleBogey => write!(f, "Double bogey"),
            Self::Over(n) => write!(f, "+{n}"),
        }
    }
}

/// Final tally for a holed ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    pub strokes: u32,
    pub par: u8,
    pub relative_to_par: i32,
    pub term: ScoreTerm,
}

impl HoleResult {
    pub fn new(strokes: u32, par: u8) -> Self {
        Self {
            strokes,
            par,
            relative_to_par: relative_to_par(strokes, par),
            term: classify(strokes, par),
        }
    }
}

/// Signed stroke difference from par (negative is under par).
pub fn relative_to_par(strokes: u32, par: u8) -> i32 {
    i32::try_from(strokes)
        .unwrap_or(i32::MAX)
        .saturating_sub(i32::from(par))
}

/// Name a hole's result.
///
/// Scoring rules:
/// - One stroke: hole in one (takes precedence over the under-par names)
/// - 3 under: albatross, 2 under: eagle, 1 under: birdie
/// - Even: par
/// - 1 over: bogey, 2 over: double bogey, worse: `Over(n)`
pub fn classify(strokes: u32, par: u8) -> ScoreTerm {
    if strokes == 1 {
        return ScoreTerm::HoleInOne;
    }
    match relative_to_par(strokes, par) {
        i32::MIN..=-3 => ScoreTerm::Albatross,
        -2 => ScoreTerm::Eagle,
        -1 => ScoreTerm::Birdie,
        0 => ScoreTerm::Par,
        1 => ScoreTerm::Bogey,
        2 => ScoreTerm::DoubleBogey,
        n => ScoreTerm::Over(n as u32),
    }
}
