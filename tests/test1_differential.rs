mod common;

use common::{approx, course_18, round};
use rusty_handicap::config::EngineConfig;
use rusty_handicap::score::{adjusted_score, calculate_differential};

#[test]
fn test_eighteen_hole_differential() {
    let config = EngineConfig::default();
    let course = course_18("c1", Some(72.1), Some(113));
    let r = round("r1", "g1", "c1", 1, 90, 18);

    assert_eq!(adjusted_score(&r, &course, &config), 90);
    let diff = calculate_differential(&r, &course, &config).expect("rated course");
    assert!(approx(diff, 17.9), "got {diff}");
}

#[test]
fn test_nine_hole_round_is_doubled() {
    let config = EngineConfig::default();
    let course = course_18("c1", Some(72.1), Some(113));
    let r = round("r1", "g1", "c1", 1, 45, 9);

    let diff = calculate_differential(&r, &course, &config).expect("rated course");
    assert!(approx(diff, 17.9), "got {diff}");
}

#[test]
fn test_blow_up_round_is_capped() {
    let config = EngineConfig::default();
    let course = course_18("c1", Some(72.1), Some(113));
    let r = round("r1", "g1", "c1", 1, 130, 18);

    assert_eq!(adjusted_score(&r, &course, &config), 112);
    let diff = calculate_differential(&r, &course, &config).expect("rated course");
    assert!(approx(diff, 112.0 - 72.1));
}

#[test]
fn test_slope_scales_differential() {
    let config = EngineConfig::default();
    let course = course_18("c1", Some(70.0), Some(130));
    let r = round("r1", "g1", "c1", 1, 96, 18);

    let diff = calculate_differential(&r, &course, &config).expect("rated course");
    assert!(approx(diff, 26.0 * 113.0 / 130.0));
}

#[test]
fn test_missing_rating_or_slope_gives_none() {
    let config = EngineConfig::default();
    let r = round("r1", "g1", "c", 1, 90, 18);

    let cases = [
        (Some(72.1), Some(113), true),
        (None, Some(113), false),
        (Some(72.1), None, false),
        (None, None, false),
    ];
    for (rating, slope, expected) in cases {
        let course = course_18("c", rating, slope);
        assert_eq!(
            calculate_differential(&r, &course, &config).is_some(),
            expected,
            "rating {rating:?} slope {slope:?}"
        );
    }
}

#[test]
fn test_zero_slope_gives_none() {
    let config = EngineConfig::default();
    let course = course_18("c", Some(72.1), Some(0));
    let r = round("r1", "g1", "c", 1, 90, 18);
    assert!(calculate_differential(&r, &course, &config).is_none());
}

#[test]
fn test_differential_is_deterministic() {
    let config = EngineConfig::default();
    let course = course_18("c1", Some(71.3), Some(127));
    let r = round("r1", "g1", "c1", 1, 88, 18);

    let first = calculate_differential(&r, &course, &config);
    let second = calculate_differential(&r, &course, &config);
    assert_eq!(first.map(f64::to_bits), second.map(f64::to_bits));
}
