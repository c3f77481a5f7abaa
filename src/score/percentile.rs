use crate::config::PercentileBounds;
use crate::model::{MetricComparison, Percentile};

/// Points of percentile per 100% deviation from the benchmark.
const SPREAD: f64 = 45.0;
const MEDIAN: f64 = 50.0;

/// Places an observed metric against its band's reference value.
///
/// With `lower_is_better` (score, putts) beating the benchmark means coming in
/// under it; otherwise (fairway %, GIR %) it means coming in over it.
#[must_use]
pub fn percentile_rank(
    observed: Option<f64>,
    benchmark: Option<f64>,
    lower_is_better: bool,
    bounds: PercentileBounds,
) -> Percentile {
    let (Some(observed), Some(benchmark)) = (observed, benchmark) else {
        return Percentile::Unranked;
    };
    if benchmark == 0.0 || !observed.is_finite() || !benchmark.is_finite() {
        return Percentile::Unranked;
    }

    let (floor, ceiling) = bounds.range();
    let improvement = if lower_is_better {
        benchmark - observed
    } else {
        observed - benchmark
    };
    let raw = if improvement >= 0.0 {
        (MEDIAN + improvement / benchmark * SPREAD).min(ceiling)
    } else {
        (MEDIAN - (-improvement) / benchmark * SPREAD).max(floor)
    };

    // both bounds are within 0..=100
    Percentile::Ranked(raw.clamp(floor, ceiling).round() as u8)
}

#[must_use]
pub fn compare_metric(
    observed: Option<f64>,
    benchmark: f64,
    lower_is_better: bool,
    bounds: PercentileBounds,
) -> MetricComparison {
    MetricComparison {
        observed,
        benchmark,
        percentile: percentile_rank(observed, Some(benchmark), lower_is_better, bounds),
    }
}
