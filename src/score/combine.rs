use crate::error::CoreError;
use crate::model::{NinePlayed, Round};
use crate::storage::RoundStore;

/// Looks up the saved round that would complete `round` to eighteen holes.
#[must_use]
pub fn detect_complementary_nine(store: &dyn RoundStore, round: &Round) -> Option<Round> {
    if !round.is_nine_hole() || round.is_eighteen_equivalent {
        return None;
    }
    let nine = round.nine_played?;
    store.find_complementary_nine(&round.golfer_id, &round.course_id, round.date, nine)
}

fn sum_both(a: Option<i32>, b: Option<i32>) -> Option<i32> {
    a.zip(b).map(|(a, b)| a + b)
}

/// Builds the 18-hole-equivalent round for a front and a back nine.
/// The differential is left for the repository to derive.
///
/// # Errors
///
/// Will return `Err` if the rounds are not a front and back nine of the same
/// golfer, course and date.
pub fn merge_nine_rounds(first: &Round, second: &Round, merged_id: &str) -> Result<Round, CoreError> {
    if first.golfer_id != second.golfer_id
        || first.course_id != second.course_id
        || first.date != second.date
    {
        return Err(CoreError::Validation(format!(
            "rounds {} and {} are not from the same golfer, course and date",
            first.id, second.id
        )));
    }
    let (front, back) = match (first.nine_played, second.nine_played) {
        (Some(NinePlayed::Front), Some(NinePlayed::Back)) => (first, second),
        (Some(NinePlayed::Back), Some(NinePlayed::Front)) => (second, first),
        _ => {
            return Err(CoreError::Validation(format!(
                "rounds {} and {} are not a front and a back nine",
                first.id, second.id
            )));
        }
    };
    if !front.is_nine_hole() || !back.is_nine_hole() {
        return Err(CoreError::Validation(format!(
            "rounds {} and {} must both be 9-hole rounds",
            front.id, back.id
        )));
    }

    let mut merged = Round::new(
        merged_id,
        front.golfer_id.clone(),
        front.course_id.clone(),
        front.date,
        front.score + back.score,
        18,
    );
    merged.putts = sum_both(front.putts, back.putts);
    merged.fairways_hit = sum_both(front.fairways_hit, back.fairways_hit);
    merged.greens_in_regulation = sum_both(front.greens_in_regulation, back.greens_in_regulation);
    merged.nine_played = Some(NinePlayed::Full);
    merged.is_eighteen_equivalent = true;
    merged.notes = Some(format!("Combined from rounds {} and {}", front.id, back.id));
    Ok(merged)
}
