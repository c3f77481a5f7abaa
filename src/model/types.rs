use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::NinePlayed;

pub const PLACEHOLDER: &str = "N/A";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HandicapIndex {
    /// Rounded to one decimal place, never negative.
    pub value: f64,
    pub rounds_used: usize,
    pub total_valid_rounds: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum HandicapOutcome {
    /// Fewer than three rounds carry a differential.
    Insufficient { valid_rounds: usize },
    Established(HandicapIndex),
}

impl HandicapOutcome {
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            HandicapOutcome::Established(index) => Some(index.value),
            HandicapOutcome::Insufficient { .. } => None,
        }
    }

    #[must_use]
    pub fn rounds_used(&self) -> usize {
        match self {
            HandicapOutcome::Established(index) => index.rounds_used,
            HandicapOutcome::Insufficient { .. } => 0,
        }
    }

    #[must_use]
    pub fn total_valid_rounds(&self) -> usize {
        match self {
            HandicapOutcome::Established(index) => index.total_valid_rounds,
            HandicapOutcome::Insufficient { valid_rounds } => *valid_rounds,
        }
    }
}

impl fmt::Display for HandicapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandicapOutcome::Established(index) => write!(f, "{:.1}", index.value),
            HandicapOutcome::Insufficient { .. } => write!(f, "{PLACEHOLDER}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Percentile {
    Unranked,
    Ranked(u8),
}

impl Percentile {
    #[must_use]
    pub fn value(self) -> Option<u8> {
        match self {
            Percentile::Ranked(p) => Some(p),
            Percentile::Unranked => None,
        }
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentile::Ranked(p) => write!(f, "{}", ordinal(u32::from(*p))),
            Percentile::Unranked => write!(f, "{PLACEHOLDER}"),
        }
    }
}

/// `1` -> `1st`, `12` -> `12th`, `53` -> `53rd`.
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MetricComparison {
    pub observed: Option<f64>,
    pub benchmark: f64,
    pub percentile: Percentile,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardStats {
    pub handicap_index: Option<f64>,
    pub category: String,
    pub rounds_used: usize,
    pub total_valid_rounds: usize,
    pub score_comparison: MetricComparison,
    pub fairway_comparison: MetricComparison,
    pub gir_comparison: MetricComparison,
    pub putting_comparison: MetricComparison,
    /// Percentage; `None` below five scored rounds.
    pub consistency_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    pub total_score: i32,
    pub total_putts: i32,
    pub fairways_hit: i32,
    pub fairways_total: i32,
    pub gir_hit: i32,
    pub gir_total: i32,
    pub nine_played: Option<NinePlayed>,
    pub holes_entered: u8,
}
