pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

use crate::config::EngineConfig;

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent with each other.
pub fn args_checks() -> Result<CleanArgs, String> {
    clean_args(Args::parse())
}

/// # Errors
///
/// Will return `Err` if the holes report is asked for without a round.
pub fn clean_args(args: Args) -> Result<CleanArgs, String> {
    if args.report == Report::Holes && args.round.is_none() {
        return Err("--round is required for the holes report.".to_string());
    }
    Ok(CleanArgs {
        snapshot: args.snapshot,
        golfer: args.golfer,
        report: args.report,
        round: args.round,
        engine: EngineConfig {
            percentile_bounds: args.percentile_bounds,
            ..EngineConfig::default()
        },
        log_level: args.log_level,
    })
}
