use serde::Serialize;

/// Reference statistics for one handicap band.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PeerBenchmark {
    pub name: &'static str,
    pub min_handicap: f64,
    /// Inclusive upper bound; `None` for the open-ended last band.
    pub max_handicap: Option<f64>,
    pub avg_score: f64,
    pub fairway_pct: f64,
    pub gir_pct: f64,
    pub putts: f64,
}

impl PeerBenchmark {
    #[must_use]
    pub fn contains(&self, handicap: f64) -> bool {
        handicap >= self.min_handicap && self.max_handicap.is_none_or(|max| handicap <= max)
    }
}

pub static BENCHMARKS: [PeerBenchmark; 5] = [
    PeerBenchmark {
        name: "scratch",
        min_handicap: 0.0,
        max_handicap: Some(5.0),
        avg_score: 72.0,
        fairway_pct: 75.0,
        gir_pct: 72.0,
        putts: 29.0,
    },
    PeerBenchmark {
        name: "single",
        min_handicap: 6.0,
        max_handicap: Some(9.0),
        avg_score: 78.0,
        fairway_pct: 65.0,
        gir_pct: 55.0,
        putts: 30.5,
    },
    PeerBenchmark {
        name: "mid",
        min_handicap: 10.0,
        max_handicap: Some(18.0),
        avg_score: 85.0,
        fairway_pct: 55.0,
        gir_pct: 40.0,
        putts: 32.0,
    },
    PeerBenchmark {
        name: "high",
        min_handicap: 19.0,
        max_handicap: Some(28.0),
        avg_score: 95.0,
        fairway_pct: 45.0,
        gir_pct: 25.0,
        putts: 34.0,
    },
    PeerBenchmark {
        name: "beginner",
        min_handicap: 29.0,
        max_handicap: None,
        avg_score: 105.0,
        fairway_pct: 35.0,
        gir_pct: 15.0,
        putts: 36.0,
    },
];

#[must_use]
pub fn beginner_band() -> &'static PeerBenchmark {
    &BENCHMARKS[BENCHMARKS.len() - 1]
}

/// Band for a handicap index.
///
/// Indexes between two integer ranges (5.5, 9.4, ...) fall into the band whose
/// upper bound they do not exceed, so the table has no gaps. A missing index
/// resolves to the beginner band.
#[must_use]
pub fn resolve_benchmark(handicap: Option<f64>) -> &'static PeerBenchmark {
    let Some(handicap) = handicap else {
        return beginner_band();
    };
    BENCHMARKS
        .iter()
        .find(|band| band.contains(handicap))
        .or_else(|| {
            BENCHMARKS
                .iter()
                .find(|band| band.max_handicap.is_some_and(|max| handicap <= max))
        })
        .unwrap_or_else(beginner_band)
}
