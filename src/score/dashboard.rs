use ahash::RandomState;
use std::collections::HashMap;

use super::benchmark::resolve_benchmark;
use super::handicap::{calculate_handicap, collect_differentials};
use super::percentile::compare_metric;
use super::stats::Summary;
use crate::config::EngineConfig;
use crate::model::{Course, DashboardStats, Round};
use crate::storage::RoundStore;

/// Observed per-golfer figures, all on an 18-hole scale where it applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservedMetrics {
    pub scores: Vec<f64>,
    pub average_score: Option<f64>,
    pub fairway_pct: Option<f64>,
    pub gir_pct: Option<f64>,
    pub putts_per_round: Option<f64>,
}

fn is_full_or_nine(round: &Round) -> bool {
    round.holes_played == 9 || round.holes_played == 18
}

fn pct(hit: i32, total: i32) -> Option<f64> {
    (total > 0).then(|| f64::from(hit) / f64::from(total) * 100.0)
}

#[must_use]
pub fn observed_metrics(store: &dyn RoundStore, rounds: &[Round]) -> ObservedMetrics {
    let scores: Vec<f64> = rounds
        .iter()
        .filter(|r| is_full_or_nine(r))
        .map(|r| f64::from(r.score * r.scale_factor()))
        .collect();

    let putts: Vec<f64> = rounds
        .iter()
        .filter(|r| is_full_or_nine(r))
        .filter_map(|r| r.putts.map(|p| f64::from(p * r.scale_factor())))
        .collect();

    let mut courses: HashMap<&str, Option<Course>, RandomState> = HashMap::default();
    let (fairways_hit, fairways_total) = rounds
        .iter()
        .filter_map(|r| {
            let hit = r.fairways_hit?;
            let course = courses
                .entry(r.course_id.as_str())
                .or_insert_with(|| store.get_course(&r.course_id))
                .as_ref()?;
            let opportunities = course.fairway_opportunities(r)?;
            Some((hit, opportunities))
        })
        .fold((0, 0), |(h, t), (hit, opp)| (h + hit, t + opp));

    let (gir_hit, gir_total) = rounds
        .iter()
        .filter_map(|r| r.greens_in_regulation.map(|g| (g, i32::from(r.holes_played))))
        .fold((0, 0), |(h, t), (hit, opp)| (h + hit, t + opp));

    ObservedMetrics {
        average_score: Summary::from_samples(&scores).map(|s| s.mean),
        putts_per_round: Summary::from_samples(&putts).map(|s| s.mean),
        fairway_pct: pct(fairways_hit, fairways_total),
        gir_pct: pct(gir_hit, gir_total),
        scores,
    }
}

/// Dashboard figures for one golfer, or for every round when `golfer_id` is `None`.
/// Reads the store only; identical snapshots give identical output.
#[must_use]
pub fn compute_dashboard(
    store: &dyn RoundStore,
    golfer_id: Option<&str>,
    config: &EngineConfig,
) -> DashboardStats {
    let rounds = store.list_rounds(golfer_id);
    let differentials = collect_differentials(store, &rounds, config);
    let handicap = calculate_handicap(&differentials, config);
    let band = resolve_benchmark(handicap.value());
    let observed = observed_metrics(store, &rounds);
    let bounds = config.percentile_bounds;

    let consistency_rating = Summary::from_samples(&observed.scores)
        .and_then(|s| s.consistency_rating())
        .map(|r| (r * 10.0).round() / 10.0);

    DashboardStats {
        handicap_index: handicap.value(),
        category: band.name.to_string(),
        rounds_used: handicap.rounds_used(),
        total_valid_rounds: handicap.total_valid_rounds(),
        score_comparison: compare_metric(observed.average_score, band.avg_score, true, bounds),
        fairway_comparison: compare_metric(observed.fairway_pct, band.fairway_pct, false, bounds),
        gir_comparison: compare_metric(observed.gir_pct, band.gir_pct, false, bounds),
        putting_comparison: compare_metric(observed.putts_per_round, band.putts, true, bounds),
        consistency_rating,
    }
}
