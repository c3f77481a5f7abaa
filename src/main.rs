use anyhow::{Context, Result, anyhow};
use rusty_handicap::args::{self, Report};
use rusty_handicap::score::{compute_dashboard, handicap_for_golfer};
use rusty_handicap::storage::{Repository, RoundStore, Snapshot};
use rusty_handicap::view::report;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = args::args_checks().map_err(|e| anyhow!(e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("rusty-handicap {} starting", env!("CARGO_PKG_VERSION"));

    let snapshot: Snapshot =
        serde_json::from_value(args.snapshot).context("snapshot does not match the data model")?;
    let repo = Repository::from_snapshot(snapshot, args.engine.clone())?;
    let golfer = args.golfer.as_deref();
    if let Some(id) = golfer {
        if repo.golfer(id).is_none() {
            return Err(anyhow!("golfer {id} not found"));
        }
    }

    match args.report {
        Report::Dashboard => {
            let stats = compute_dashboard(&repo, golfer, &args.engine);
            print!("{}", report::render_dashboard(&stats));
        }
        Report::Handicap => {
            let outcome = handicap_for_golfer(&repo, golfer, &args.engine);
            println!("{}", report::render_handicap(&outcome));
        }
        Report::Rounds => {
            print!("{}", report::render_rounds(&repo.list_rounds(golfer)));
        }
        Report::Holes => {
            let round_id = args.round.as_deref().unwrap_or_default();
            let round = repo
                .round(round_id)
                .ok_or_else(|| anyhow!("round {round_id} not found"))?;
            let course = repo
                .get_course(&round.course_id)
                .ok_or_else(|| anyhow!("course {} not found", round.course_id))?;
            for line in report::render_hole_lines(&course, &repo.list_hole_scores(round_id)) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
