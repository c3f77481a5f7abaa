use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CoreError;
use crate::model::{NinePlayed, Round};

pub const NOMINAL_SLOPE: i32 = 113;
pub const MIN_SLOPE: i32 = 55;
pub const MAX_SLOPE: i32 = 155;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hole {
    pub number: u8,
    pub par: i32,
    #[serde(default)]
    pub yardage: i32,
    /// Difficulty ranking, 1 is hardest. Unique per course.
    pub handicap_rank: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub slope: Option<i32>,
    pub hole_count: u8,
    pub total_par: i32,
    #[serde(default)]
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn computed_total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// Holes covered by a round with the given nine and hole count.
    pub fn holes_played<'a>(
        &'a self,
        nine: Option<NinePlayed>,
        holes_played: u8,
    ) -> impl Iterator<Item = &'a Hole> + 'a {
        self.holes.iter().filter(move |h| match nine {
            Some(n) => n.contains(h.number),
            None => h.number <= holes_played,
        })
    }

    /// Par 4 and par 5 holes in the part of the course a round covers.
    /// `None` when the course carries no hole layout.
    #[must_use]
    pub fn fairway_opportunities(&self, round: &Round) -> Option<i32> {
        if self.holes.is_empty() {
            return None;
        }
        let count = self
            .holes_played(round.nine_played, round.holes_played)
            .filter(|h| h.par >= 4)
            .count();
        i32::try_from(count).ok()
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole count, pars, or handicap ranks are inconsistent.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.hole_count != 9 && self.hole_count != 18 {
            return Err(CoreError::Validation(format!(
                "course {} has {} holes, expected 9 or 18",
                self.id, self.hole_count
            )));
        }
        if let Some(slope) = self.slope {
            if slope <= 0 {
                return Err(CoreError::Validation(format!(
                    "course {} has non-positive slope {slope}",
                    self.id
                )));
            }
            if !(MIN_SLOPE..=MAX_SLOPE).contains(&slope) {
                tracing::warn!(course = %self.id, slope, "slope outside nominal range");
            }
        }
        if self.holes.is_empty() {
            return Ok(());
        }
        if self.holes.len() != usize::from(self.hole_count) {
            return Err(CoreError::Validation(format!(
                "course {} lists {} holes but has hole count {}",
                self.id,
                self.holes.len(),
                self.hole_count
            )));
        }

        let mut numbers = HashSet::new();
        let mut ranks = HashSet::new();
        for hole in &self.holes {
            if hole.number == 0 || hole.number > self.hole_count || !numbers.insert(hole.number) {
                return Err(CoreError::Validation(format!(
                    "course {} has invalid or duplicate hole number {}",
                    self.id, hole.number
                )));
            }
            if !(3..=5).contains(&hole.par) {
                return Err(CoreError::Validation(format!(
                    "hole {} on course {} has par {}",
                    hole.number, self.id, hole.par
                )));
            }
            if hole.handicap_rank == 0
                || hole.handicap_rank > self.hole_count
                || !ranks.insert(hole.handicap_rank)
            {
                return Err(CoreError::Validation(format!(
                    "hole {} on course {} has invalid or duplicate handicap rank {}",
                    hole.number, self.id, hole.handicap_rank
                )));
            }
        }
        Ok(())
    }
}
