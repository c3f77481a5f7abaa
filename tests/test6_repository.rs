mod common;

use common::{bare_course, course_18, round, setup_repo};
use rusty_handicap::args::validation::check_readable_file_and_json;
use rusty_handicap::args::{Args, Report, clean_args};
use rusty_handicap::config::PercentileBounds;
use rusty_handicap::config::EngineConfig;
use rusty_handicap::error::CoreError;
use rusty_handicap::model::{Golfer, HoleScore};
use rusty_handicap::storage::{Repository, RoundStore};
use rusty_handicap::view::report::{render_hole_lines, render_rounds};
use std::io::Write;

fn hole_score(round_id: &str, hole_number: u8, score: i32) -> HoleScore {
    HoleScore {
        round_id: round_id.to_string(),
        hole_number,
        score,
        putts: Some(2),
        fairway_hit: None,
        fairway_miss_direction: None,
        green_in_regulation: false,
        sand_save: false,
        chip_in: false,
        penalty_strokes: 0,
        notes: None,
    }
}

#[test]
fn test_delete_golfer_cascades() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    repo.add_golfer(Golfer::new("g2", "Sam Lee"))?;

    let mut r1 = round("r1", "g1", "c1", 1, 40, 2);
    r1.nine_played = None;
    repo.save_hole_round(r1, vec![hole_score("r1", 1, 5), hole_score("r1", 2, 35)])?;
    repo.add_round(round("r2", "g2", "c1", 1, 90, 18))?;

    repo.delete_golfer("g1")?;
    assert!(repo.golfer("g1").is_none());
    assert!(repo.list_rounds(Some("g1")).is_empty());
    assert!(repo.list_hole_scores("r1").is_empty());
    assert_eq!(repo.list_rounds(None).len(), 1);
    Ok(())
}

#[test]
fn test_duplicate_ids_rejected() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    assert!(repo.add_golfer(Golfer::new("g1", "Again")).is_err());
    assert!(repo.add_course(course_18("c1", None, None)).is_err());
    repo.add_round(round("r1", "g1", "c1", 1, 90, 18))?;
    assert!(repo.add_round(round("r1", "g1", "c1", 2, 91, 18)).is_err());
    Ok(())
}

#[test]
fn test_round_for_unknown_golfer_rejected() {
    let mut repo = setup_repo();
    let result = repo.add_round(round("r1", "nobody", "c1", 1, 90, 18));
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[test]
fn test_course_validation() {
    let mut repo = Repository::new(EngineConfig::default());

    let mut wrong_count = course_18("a", Some(72.0), Some(113));
    wrong_count.hole_count = 12;
    assert!(repo.add_course(wrong_count).is_err());

    let mut duplicate_rank = course_18("b", Some(72.0), Some(113));
    duplicate_rank.holes[1].handicap_rank = duplicate_rank.holes[0].handicap_rank;
    assert!(repo.add_course(duplicate_rank).is_err());

    let mut bad_par = course_18("c", Some(72.0), Some(113));
    bad_par.holes[0].par = 6;
    assert!(repo.add_course(bad_par).is_err());

    let mut missing_hole = course_18("d", Some(72.0), Some(113));
    missing_hole.holes.pop();
    assert!(repo.add_course(missing_hole).is_err());

    assert!(repo.add_course(bare_course("e", None, None)).is_ok());
}

#[test]
fn test_total_par_comes_from_holes() -> Result<(), CoreError> {
    let mut repo = Repository::new(EngineConfig::default());
    let mut course = course_18("c", Some(70.0), Some(120));
    course.total_par = 0;
    repo.add_course(course)?;
    assert_eq!(repo.course("c").map(|c| c.total_par), Some(72));
    Ok(())
}

#[test]
fn test_fairway_and_gir_bounds() {
    let mut repo = setup_repo();

    let mut too_many_fairways = round("r1", "g1", "c1", 1, 90, 18);
    too_many_fairways.fairways_hit = Some(15);
    assert!(matches!(
        repo.add_round(too_many_fairways),
        Err(CoreError::Validation(_))
    ));

    let mut too_many_greens = round("r2", "g1", "c1", 1, 45, 9);
    too_many_greens.greens_in_regulation = Some(10);
    assert!(matches!(
        repo.add_round(too_many_greens),
        Err(CoreError::Validation(_))
    ));

    let mut ok = round("r3", "g1", "c1", 1, 90, 18);
    ok.fairways_hit = Some(14);
    ok.greens_in_regulation = Some(18);
    assert!(repo.add_round(ok).is_ok());
}

#[test]
fn test_update_round_keeps_hole_totals() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    let r1 = round("r1", "g1", "c1", 1, 9, 2);
    repo.save_hole_round(r1, vec![hole_score("r1", 1, 4), hole_score("r1", 2, 5)])?;

    let mut edited = repo.round("r1").cloned().expect("r1");
    edited.score = 70;
    edited.course_id = "c2".to_string();
    repo.update_round(edited)?;

    let stored = repo.round("r1").expect("r1");
    assert_eq!(stored.score, 9);
    assert_eq!(stored.holes_played, 2);
    assert!(stored.differential.is_none());
    Ok(())
}

#[test]
fn test_update_round_refreshes_differential() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    repo.add_round(round("r1", "g1", "c1", 1, 90, 18))?;

    let mut edited = repo.round("r1").cloned().expect("r1");
    edited.score = 80;
    repo.update_round(edited)?;

    let diff = repo.round("r1").and_then(|r| r.differential).expect("rated");
    assert!((diff - 7.9).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_save_hole_round_checks_totals() {
    let mut repo = setup_repo();
    let r1 = round("r1", "g1", "c1", 1, 10, 2);
    let result = repo.save_hole_round(r1, vec![hole_score("r1", 1, 4), hole_score("r1", 2, 5)]);
    assert!(matches!(result, Err(CoreError::Validation(_))));
    assert!(repo.round("r1").is_none());
    assert!(repo.list_hole_scores("r1").is_empty());
}

#[test]
fn test_delete_course_drops_differentials() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    repo.add_round(round("r1", "g1", "c1", 1, 90, 18))?;
    repo.delete_course("c1")?;

    assert!(repo.get_course("c1").is_none());
    assert!(repo.round("r1").and_then(|r| r.differential).is_none());
    assert!(repo.delete_course("c1").is_err());
    Ok(())
}

#[test]
fn test_delete_round_removes_holes() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    let r1 = round("r1", "g1", "c1", 1, 9, 2);
    repo.save_hole_round(r1, vec![hole_score("r1", 2, 5), hole_score("r1", 1, 4)])?;
    assert_eq!(
        repo.list_hole_scores("r1")
            .iter()
            .map(|h| h.hole_number)
            .collect::<Vec<_>>(),
        vec![1, 2]
    );

    repo.delete_round("r1")?;
    assert!(repo.list_hole_scores("r1").is_empty());
    Ok(())
}

#[test]
fn test_snapshot_json_reload() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    repo.add_round(round("r1", "g1", "c1", 1, 90, 18))?;
    let json = repo.to_json_string()?;

    let reloaded = Repository::from_json_str(&json, EngineConfig::default())?;
    assert_eq!(reloaded.snapshot(), repo.snapshot());
    Ok(())
}

#[test]
fn test_snapshot_with_orphan_hole_score_rejected() {
    let json = r#"{"golfers": [], "hole_scores": [{"round_id": "missing", "hole_number": 1, "score": 4}]}"#;
    let result = Repository::from_json_str(json, EngineConfig::default());
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

fn snapshot_with_holes(holes: &str) -> String {
    format!(
        r#"{{
            "golfers": [{{"id": "g1", "name": "Pat Doe"}}],
            "rounds": [{{"id": "r1", "golfer_id": "g1", "course_id": "c1",
                         "date": "2026-05-01", "score": 9, "holes_played": 2}}],
            "hole_scores": [{holes}]
        }}"#
    )
}

#[test]
fn test_snapshot_hole_scores_must_match_round() {
    let consistent = snapshot_with_holes(
        r#"{"round_id": "r1", "hole_number": 1, "score": 4},
           {"round_id": "r1", "hole_number": 2, "score": 5}"#,
    );
    assert!(Repository::from_json_str(&consistent, EngineConfig::default()).is_ok());

    let same_hole_twice = snapshot_with_holes(
        r#"{"round_id": "r1", "hole_number": 1, "score": 4},
           {"round_id": "r1", "hole_number": 1, "score": 5}"#,
    );
    let result = Repository::from_json_str(&same_hole_twice, EngineConfig::default());
    assert!(matches!(result, Err(CoreError::Validation(_))));

    let wrong_total = snapshot_with_holes(
        r#"{"round_id": "r1", "hole_number": 1, "score": 4},
           {"round_id": "r1", "hole_number": 2, "score": 6}"#,
    );
    let result = Repository::from_json_str(&wrong_total, EngineConfig::default());
    assert!(matches!(result, Err(CoreError::Validation(_))));

    let missing_hole = snapshot_with_holes(r#"{"round_id": "r1", "hole_number": 1, "score": 9}"#);
    let result = Repository::from_json_str(&missing_hole, EngineConfig::default());
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_save_hole_round_rejects_repeated_hole() {
    let mut repo = setup_repo();
    let r1 = round("r1", "g1", "c1", 1, 9, 2);
    let result = repo.save_hole_round(r1, vec![hole_score("r1", 1, 4), hole_score("r1", 1, 5)]);
    assert!(matches!(result, Err(CoreError::Validation(_))));
    assert!(repo.round("r1").is_none());
}

#[test]
fn test_readded_course_restores_differentials() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    repo.add_round(round("r1", "g1", "c1", 1, 90, 18))?;
    repo.delete_course("c1")?;
    assert!(repo.round("r1").and_then(|r| r.differential).is_none());

    repo.add_course(course_18("c1", Some(72.1), Some(113)))?;
    let diff = repo.round("r1").and_then(|r| r.differential).expect("rated again");
    assert!((diff - 17.9).abs() < 1e-9);

    let text = render_rounds(&repo.list_rounds(Some("g1")));
    assert!(text.contains("differential 17.9"));
    Ok(())
}

#[test]
fn test_snapshot_file_validation() -> Result<(), Box<dyn std::error::Error>> {
    let mut good = tempfile::NamedTempFile::new()?;
    write!(good, "{}", include_str!("test4/snapshot.json"))?;
    let path = good.path().to_string_lossy().to_string();
    assert!(check_readable_file_and_json(&path).is_ok());

    let mut wrong_key = tempfile::NamedTempFile::new()?;
    write!(wrong_key, r#"{{"players": []}}"#)?;
    let path = wrong_key.path().to_string_lossy().to_string();
    assert!(check_readable_file_and_json(&path).is_err());

    let mut not_json = tempfile::NamedTempFile::new()?;
    write!(not_json, "golfers: []")?;
    let path = not_json.path().to_string_lossy().to_string();
    assert!(check_readable_file_and_json(&path).is_err());

    assert!(check_readable_file_and_json("/definitely/not/here.json").is_err());
    Ok(())
}

fn args(report: Report, round: Option<&str>) -> Args {
    Args {
        snapshot: serde_json::json!({ "golfers": [] }),
        golfer: None,
        report,
        round: round.map(str::to_string),
        percentile_bounds: PercentileBounds::Narrow,
        log_level: "debug".to_string(),
    }
}

#[test]
fn test_clean_args() {
    assert!(clean_args(args(Report::Holes, None)).is_err());

    let cleaned = clean_args(args(Report::Holes, Some("r1"))).expect("round given");
    assert_eq!(cleaned.round.as_deref(), Some("r1"));
    assert_eq!(cleaned.engine.percentile_bounds, PercentileBounds::Narrow);
    assert_eq!(cleaned.engine.max_strokes_over_par, 40);

    assert!(clean_args(args(Report::Dashboard, None)).is_ok());
}

#[test]
fn test_hole_and_round_lines() -> Result<(), CoreError> {
    let mut repo = setup_repo();
    let mut second = hole_score("r1", 2, 3);
    second.green_in_regulation = true;
    second.putts = Some(1);
    let r1 = round("r1", "g1", "c1", 1, 8, 2);
    repo.save_hole_round(r1, vec![hole_score("r1", 1, 5), second])?;

    let course = repo.get_course("c1").expect("c1");
    let lines = render_hole_lines(&course, &repo.list_hole_scores("r1"));
    assert_eq!(
        lines,
        vec![
            "Hole 1: Score: 5 | Putts: 2 | Result: Bogey".to_string(),
            "Hole 2: Score: 3 | Putts: 1 | Result: Birdie | GIR".to_string(),
        ]
    );

    let text = render_rounds(&repo.list_rounds(Some("g1")));
    assert!(text.starts_with("2026-05-01 c1 2 holes score 8 differential"));
    Ok(())
}
