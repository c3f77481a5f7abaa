#![allow(dead_code)]

use chrono::NaiveDate;
use rusty_handicap::config::EngineConfig;
use rusty_handicap::model::{Course, Golfer, Hole, Round};
use rusty_handicap::storage::Repository;

pub const PARS_18: [i32; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5];
pub const RANKS_18: [u8; 18] = [7, 1, 17, 3, 9, 5, 15, 11, 13, 8, 16, 2, 4, 12, 6, 18, 10, 14];

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn holes_18() -> Vec<Hole> {
    PARS_18
        .iter()
        .zip(RANKS_18.iter())
        .enumerate()
        .map(|(idx, (&par, &rank))| Hole {
            number: u8::try_from(idx + 1).expect("hole number fits"),
            par,
            yardage: par * 100,
            handicap_rank: rank,
        })
        .collect()
}

/// 18 holes, par 72, 14 fairway holes.
pub fn course_18(id: &str, rating: Option<f64>, slope: Option<i32>) -> Course {
    Course {
        id: id.to_string(),
        name: format!("Course {id}"),
        rating,
        slope,
        hole_count: 18,
        total_par: 72,
        holes: holes_18(),
    }
}

/// 18-hole course with no hole layout.
pub fn bare_course(id: &str, rating: Option<f64>, slope: Option<i32>) -> Course {
    Course {
        holes: vec![],
        ..course_18(id, rating, slope)
    }
}

pub fn round(id: &str, golfer: &str, course: &str, day: u32, score: i32, holes: u8) -> Round {
    Round::new(id, golfer, course, date(2026, 5, day), score, holes)
}

/// Golfer `g1`, rated course `c1` (72.1 / 113) and unrated course `c2`.
pub fn setup_repo() -> Repository {
    let mut repo = Repository::new(EngineConfig::default());
    repo.add_golfer(Golfer::new("g1", "Pat Doe"))
        .expect("golfer added");
    repo.add_course(course_18("c1", Some(72.1), Some(113)))
        .expect("course added");
    repo.add_course(course_18("c2", None, Some(120)))
        .expect("course added");
    repo
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
