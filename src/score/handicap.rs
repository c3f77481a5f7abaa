use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::differential::calculate_differential;
use crate::config::EngineConfig;
use crate::model::{HandicapIndex, HandicapOutcome, Round};
use crate::storage::RoundStore;

pub const MIN_ROUNDS_FOR_INDEX: usize = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatedDifferential {
    pub round_id: String,
    pub date: NaiveDate,
    pub differential: f64,
}

/// How many of the best differentials count toward the index for `valid_rounds`.
#[must_use]
pub fn differentials_to_use(valid_rounds: usize) -> Option<usize> {
    match valid_rounds {
        0..=2 => None,
        3..=4 => Some(1),
        5..=6 => Some(2),
        7..=8 => Some(3),
        9..=11 => Some(4),
        12..=14 => Some(5),
        15..=16 => Some(6),
        17..=18 => Some(7),
        _ => Some(8),
    }
}

#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Differentials for every round that can carry one, in date order.
///
/// Rounds whose course is missing or lacks a rating or slope are skipped.
#[must_use]
pub fn collect_differentials(
    store: &dyn RoundStore,
    rounds: &[Round],
    config: &EngineConfig,
) -> Vec<DatedDifferential> {
    let mut out: Vec<DatedDifferential> = rounds
        .iter()
        .filter_map(|round| {
            let Some(course) = store.get_course(&round.course_id) else {
                debug!(round = %round.id, course = %round.course_id, "course missing, round excluded");
                return None;
            };
            let Some(differential) = calculate_differential(round, &course, config) else {
                debug!(round = %round.id, course = %course.id, "course unrated, round excluded");
                return None;
            };
            Some(DatedDifferential {
                round_id: round.id.clone(),
                date: round.date,
                differential,
            })
        })
        .collect();
    out.sort_by_key(|d| d.date);
    out
}

/// Averages the best differentials according to the round-count table,
/// scales by the configured multiplier and floors at zero.
#[must_use]
pub fn calculate_handicap(
    differentials: &[DatedDifferential],
    config: &EngineConfig,
) -> HandicapOutcome {
    let total_valid_rounds = differentials.len();
    let Some(count) = differentials_to_use(total_valid_rounds) else {
        return HandicapOutcome::Insufficient {
            valid_rounds: total_valid_rounds,
        };
    };

    // sort_by is stable, ties keep round order
    let mut sorted: Vec<f64> = differentials.iter().map(|d| d.differential).collect();
    sorted.sort_by(f64::total_cmp);

    let best = &sorted[..count];
    let average = best.iter().sum::<f64>() / best.len() as f64;
    let scaled = average * config.handicap_multiplier;
    let value = if scaled > 0.0 { round_to_tenth(scaled) } else { 0.0 };

    HandicapOutcome::Established(HandicapIndex {
        value,
        rounds_used: count,
        total_valid_rounds,
    })
}

/// Handicap outcome for one golfer, or across every round, straight from the store.
#[must_use]
pub fn handicap_for_golfer(
    store: &dyn RoundStore,
    golfer_id: Option<&str>,
    config: &EngineConfig,
) -> HandicapOutcome {
    let rounds = store.list_rounds(golfer_id);
    let differentials = collect_differentials(store, &rounds, config);
    calculate_handicap(&differentials, config)
}
