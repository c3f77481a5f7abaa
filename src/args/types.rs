use clap::{Parser, ValueEnum};
use serde_json::Value;

use crate::config::{EngineConfig, PercentileBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Report {
    /// Handicap, peer band and percentile comparisons.
    Dashboard,
    /// Handicap index only.
    Handicap,
    /// Each round with its differential.
    Rounds,
    /// Hole-by-hole summary lines for one round.
    Holes,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON snapshot holding golfers, courses, rounds and hole scores.
    #[arg(
        short = 's',
        long,
        value_name = "SNAPSHOT_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub snapshot: Value,
    /// Restrict the report to one golfer. All rounds are used otherwise.
    #[arg(short = 'g', long, value_name = "GOLFER_ID")]
    pub golfer: Option<String>,
    #[arg(short = 'r', long, value_enum, default_value_t = Report::Dashboard)]
    pub report: Report,
    /// Round to break down, for the holes report.
    #[arg(long, value_name = "ROUND_ID")]
    pub round: Option<String>,
    #[arg(long, value_enum, default_value_t = PercentileBounds::Standard)]
    pub percentile_bounds: PercentileBounds,
    /// Used when RUST_LOG is not set.
    #[arg(long, value_name = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub snapshot: Value,
    pub golfer: Option<String>,
    pub report: Report,
    pub round: Option<String>,
    pub engine: EngineConfig,
    pub log_level: String,
}
