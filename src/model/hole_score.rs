use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissDirection {
    Left,
    Right,
    Center,
}

impl fmt::Display for MissDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissDirection::Left => "left",
            MissDirection::Right => "right",
            MissDirection::Center => "center",
        };
        write!(f, "{s}")
    }
}

/// One scored hole. Owned by exactly one round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleScore {
    pub round_id: String,
    pub hole_number: u8,
    pub score: i32,
    #[serde(default)]
    pub putts: Option<i32>,
    /// Only meaningful on par 4 and par 5 holes.
    #[serde(default)]
    pub fairway_hit: Option<bool>,
    #[serde(default)]
    pub fairway_miss_direction: Option<MissDirection>,
    #[serde(default)]
    pub green_in_regulation: bool,
    #[serde(default)]
    pub sand_save: bool,
    #[serde(default)]
    pub chip_in: bool,
    #[serde(default)]
    pub penalty_strokes: i32,
    #[serde(default)]
    pub notes: Option<String>,
}
