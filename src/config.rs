use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Clamp applied to a peer percentile.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PercentileBounds {
    /// 5th to 95th.
    #[default]
    Standard,
    /// 10th to 90th.
    Narrow,
}

impl PercentileBounds {
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            PercentileBounds::Standard => (5.0, 95.0),
            PercentileBounds::Narrow => (10.0, 90.0),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub percentile_bounds: PercentileBounds,
    /// Strokes over par at which a round's score is capped.
    pub max_strokes_over_par: i32,
    pub handicap_multiplier: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            percentile_bounds: PercentileBounds::Standard,
            max_strokes_over_par: 40,
            handicap_multiplier: 0.96,
        }
    }
}
