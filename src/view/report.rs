use std::fmt::Write;

use crate::model::{
    Course, DashboardStats, HandicapOutcome, HoleScore, MetricComparison, PLACEHOLDER, Round,
};
use crate::mvu::{HoleEntry, hole_summary};

fn observed(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.precision$}"))
}

fn comparison_line(label: &str, comparison: &MetricComparison, precision: usize) -> String {
    format!(
        "{label:<12} {:>7}  (peer {:.precision$})  {}",
        observed(comparison.observed, precision),
        comparison.benchmark,
        comparison.percentile
    )
}

#[must_use]
pub fn render_dashboard(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Handicap index: {}",
        observed(stats.handicap_index, 1)
    );
    let _ = writeln!(out, "Category:       {}", stats.category);
    let _ = writeln!(
        out,
        "Rounds used:    {} of {}",
        stats.rounds_used, stats.total_valid_rounds
    );
    let _ = writeln!(out, "{}", comparison_line("Score", &stats.score_comparison, 1));
    let _ = writeln!(out, "{}", comparison_line("Fairways %", &stats.fairway_comparison, 0));
    let _ = writeln!(out, "{}", comparison_line("GIR %", &stats.gir_comparison, 0));
    let _ = writeln!(out, "{}", comparison_line("Putts", &stats.putting_comparison, 1));
    let _ = writeln!(
        out,
        "Consistency:    {}",
        stats
            .consistency_rating
            .map_or_else(|| PLACEHOLDER.to_string(), |r| format!("{r:.0}%"))
    );
    out
}

#[must_use]
pub fn render_handicap(outcome: &HandicapOutcome) -> String {
    match outcome {
        HandicapOutcome::Established(index) => format!(
            "Handicap index: {outcome} (best {} of {} rounds)",
            index.rounds_used, index.total_valid_rounds
        ),
        HandicapOutcome::Insufficient { valid_rounds } => format!(
            "Handicap index: {outcome} (insufficient data, {valid_rounds} rated rounds)"
        ),
    }
}

#[must_use]
pub fn render_rounds(rounds: &[Round]) -> String {
    let mut out = String::new();
    for round in rounds {
        let nine = round
            .nine_played
            .map_or_else(String::new, |n| format!(" ({n})"));
        let _ = writeln!(
            out,
            "{} {} {} holes{} score {} differential {}",
            round.date,
            round.course_id,
            round.holes_played,
            nine,
            round.score,
            observed(round.differential, 1)
        );
    }
    out
}

/// One summary line per stored hole score.
#[must_use]
pub fn render_hole_lines(course: &Course, holes: &[HoleScore]) -> Vec<String> {
    holes
        .iter()
        .filter_map(|hole| {
            let par = course.hole(hole.hole_number)?.par;
            let summary = hole_summary(&HoleEntry::from(hole), par)?;
            Some(format!("Hole {}: {}", hole.hole_number, summary.text))
        })
        .collect()
}
