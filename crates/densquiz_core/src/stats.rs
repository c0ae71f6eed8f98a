//! Summary statistics shown as quiz markers

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::kde::DensityCurve;

/// Mean, median and estimated mode of one round's sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

impl SummaryStatistics {
    /// Mean and median come from the sample, mode from the curve's peak.
    pub fn compute(sample: &[f64], curve: &DensityCurve) -> Result<Self> {
        let mean = mean(sample).ok_or(QuizError::EmptySample)?;
        let median = median(sample).ok_or(QuizError::EmptySample)?;
        let mode = curve.mode().ok_or(QuizError::EmptySample)?;
        Ok(Self { mean, median, mode })
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Order-statistic median of a sorted copy; even lengths average the middle pair.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (n - 1 denominator)
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}
