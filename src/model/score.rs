use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a hole relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreResult {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyPlus,
}

impl ScoreResult {
    /// `score_to_par` is strokes minus par, so negative is under par.
    #[must_use]
    pub fn from_score_to_par(score_to_par: i32) -> Self {
        match score_to_par {
            i32::MIN..=-2 => ScoreResult::EagleOrBetter,
            -1 => ScoreResult::Birdie,
            0 => ScoreResult::Par,
            1 => ScoreResult::Bogey,
            2 => ScoreResult::DoubleBogey,
            _ => ScoreResult::TripleBogeyPlus,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreResult::EagleOrBetter => "Eagle or better",
            ScoreResult::Birdie => "Birdie",
            ScoreResult::Par => "Par",
            ScoreResult::Bogey => "Bogey",
            ScoreResult::DoubleBogey => "Double Bogey",
            ScoreResult::TripleBogeyPlus => "Triple Bogey+",
        }
    }
}

impl From<i32> for ScoreResult {
    fn from(value: i32) -> Self {
        Self::from_score_to_par(value)
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
