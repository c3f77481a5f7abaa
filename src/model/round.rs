use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NinePlayed {
    Front,
    Back,
    Full,
}

impl NinePlayed {
    /// The other half of an 18-hole course. `Full` has no complement.
    #[must_use]
    pub fn complement(self) -> Option<Self> {
        match self {
            NinePlayed::Front => Some(NinePlayed::Back),
            NinePlayed::Back => Some(NinePlayed::Front),
            NinePlayed::Full => None,
        }
    }

    #[must_use]
    pub fn contains(self, hole_number: u8) -> bool {
        match self {
            NinePlayed::Front => (1..=9).contains(&hole_number),
            NinePlayed::Back => (10..=18).contains(&hole_number),
            NinePlayed::Full => (1..=18).contains(&hole_number),
        }
    }
}

impl fmt::Display for NinePlayed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NinePlayed::Front => "front",
            NinePlayed::Back => "back",
            NinePlayed::Full => "full",
        };
        write!(f, "{s}")
    }
}

/// Fresh identifier for a round created without one.
#[must_use]
pub fn new_round_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub id: String,
    pub golfer_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    /// Total strokes.
    pub score: i32,
    #[serde(default)]
    pub putts: Option<i32>,
    #[serde(default)]
    pub fairways_hit: Option<i32>,
    #[serde(default)]
    pub greens_in_regulation: Option<i32>,
    pub holes_played: u8,
    #[serde(default)]
    pub nine_played: Option<NinePlayed>,
    /// Derived from the course; `None` when the course lacks a rating or slope.
    #[serde(default)]
    pub differential: Option<f64>,
    /// Set on rounds assembled from a front and a back nine.
    #[serde(default)]
    pub is_eighteen_equivalent: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Round {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        golfer_id: impl Into<String>,
        course_id: impl Into<String>,
        date: NaiveDate,
        score: i32,
        holes_played: u8,
    ) -> Self {
        Self {
            id: id.into(),
            golfer_id: golfer_id.into(),
            course_id: course_id.into(),
            date,
            score,
            putts: None,
            fairways_hit: None,
            greens_in_regulation: None,
            holes_played,
            nine_played: None,
            differential: None,
            is_eighteen_equivalent: false,
            notes: None,
        }
    }

    #[must_use]
    pub fn is_nine_hole(&self) -> bool {
        self.holes_played == 9
    }

    /// Multiplier that puts a 9-hole figure on the 18-hole scale.
    #[must_use]
    pub fn scale_factor(&self) -> i32 {
        if self.is_nine_hole() { 2 } else { 1 }
    }
}
