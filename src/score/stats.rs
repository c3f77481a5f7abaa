use serde::{Deserialize, Serialize};

pub const MIN_SAMPLES_FOR_CONSISTENCY: usize = 5;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// `None` for an empty sample.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }

    /// `100 - min(100, cv%)`; needs at least five samples and a non-zero mean.
    #[must_use]
    pub fn consistency_rating(&self) -> Option<f64> {
        if self.count < MIN_SAMPLES_FOR_CONSISTENCY || self.mean == 0.0 {
            return None;
        }
        let variation = (self.std_dev / self.mean.abs() * 100.0).min(100.0);
        Some(100.0 - variation)
    }
}

#[must_use]
pub fn consistency_rating(samples: &[f64]) -> Option<f64> {
    Summary::from_samples(samples).and_then(|s| s.consistency_rating())
}
