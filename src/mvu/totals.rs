use crate::model::{Course, HoleScore, NinePlayed, RoundSummary};

/// Which part of an 18-hole course a set of scored holes covers.
/// Anything other than a clean front, back or full eighteen gives `None`.
#[must_use]
pub fn derive_nine_played(hole_count: u8, hole_numbers: &[u8]) -> Option<NinePlayed> {
    if hole_count != 18 {
        return None;
    }
    match hole_numbers.len() {
        18 => Some(NinePlayed::Full),
        9 if hole_numbers.iter().all(|n| *n <= 9) => Some(NinePlayed::Front),
        9 if hole_numbers.iter().all(|n| *n >= 10) => Some(NinePlayed::Back),
        _ => None,
    }
}

/// Rolls scored holes up into round totals. Fairway opportunities count only
/// par 4 and par 5 holes; every scored hole is a GIR opportunity.
#[must_use]
pub fn round_totals(course: &Course, holes: &[HoleScore]) -> RoundSummary {
    let mut summary = RoundSummary::default();
    let mut numbers = Vec::with_capacity(holes.len());

    for hole in holes {
        numbers.push(hole.hole_number);
        summary.total_score += hole.score;
        summary.total_putts += hole.putts.unwrap_or(0);

        summary.gir_total += 1;
        if hole.green_in_regulation {
            summary.gir_hit += 1;
        }

        let par = course.hole(hole.hole_number).map_or(0, |h| h.par);
        if par >= 4 {
            summary.fairways_total += 1;
            if hole.fairway_hit == Some(true) {
                summary.fairways_hit += 1;
            }
        }
    }

    summary.holes_entered = u8::try_from(numbers.len()).unwrap_or(u8::MAX);
    summary.nine_played = derive_nine_played(course.hole_count, &numbers);
    summary
}
