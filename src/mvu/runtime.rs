use tracing::{debug, warn};

use super::hole::summarize;
use super::session::{Effect, HoleEntryModel, Msg, update};
use crate::error::CoreError;
use crate::score::detect_complementary_nine;
use crate::storage::Repository;

/// Runs the entry loop: seeds with `init_msg` and drains effects against the repository.
///
/// # Errors
///
/// Returns the first failure raised while running an effect.
pub fn run_session(
    model: &mut HoleEntryModel,
    init_msg: Msg,
    repo: &mut Repository,
) -> Result<(), CoreError> {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, repo);
        match msg {
            Msg::Failed(e) => {
                // Record failure and stop the loop.
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}

pub fn run_effect(effect: Effect, model: &HoleEntryModel, repo: &mut Repository) -> Msg {
    match effect {
        Effect::Summarize(hole) => match model.holes.get(&hole) {
            Some(state) => Msg::HoleSummarized(summarize(state)),
            None => Msg::Failed(CoreError::NotFound(format!("hole {hole}"))),
        },
        Effect::RecomputeTotals => Msg::TotalsComputed(model.compute_totals()),
        Effect::PersistRound { round, hole_scores } => {
            let round_id = round.id.clone();
            match repo.save_hole_round(round, hole_scores) {
                Ok(()) => match repo.round(&round_id) {
                    Some(saved) => Msg::Saved(saved.clone()),
                    None => Msg::Failed(CoreError::NotFound(format!("round {round_id}"))),
                },
                Err(e) => {
                    warn!(round = %round_id, error = %e, "hole-by-hole save failed");
                    Msg::Failed(e)
                }
            }
        }
        Effect::FindComplementaryNine(round) => {
            let found = detect_complementary_nine(&*repo, &round);
            debug!(round = %round.id, found = found.is_some(), "complementary nine lookup");
            Msg::ComplementaryNineFound(found)
        }
    }
}
