use crate::config::EngineConfig;
use crate::model::{Course, NOMINAL_SLOPE, Round};

/// Score used for rating purposes: capped at `total_par + max_strokes_over_par`.
#[must_use]
pub fn adjusted_score(round: &Round, course: &Course, config: &EngineConfig) -> i32 {
    round
        .score
        .min(course.total_par + config.max_strokes_over_par)
}

/// Normalised scoring differential for one round on its course.
///
/// Returns `None` when the course has no rating or slope, so the round
/// drops out of handicap math.
#[must_use]
pub fn calculate_differential(round: &Round, course: &Course, config: &EngineConfig) -> Option<f64> {
    let rating = course.rating?;
    let slope = course.slope?;
    if slope <= 0 {
        return None;
    }

    let adjusted = adjusted_score(round, course, config) * round.scale_factor();
    Some((f64::from(adjusted) - rating) * f64::from(NOMINAL_SLOPE) / f64::from(slope))
}
