//! Sample generation for the four quiz distribution shapes.
//!
//! Normal values come from the Box-Muller transform and skewed values from
//! inverse-CDF exponential sampling. Mixtures are concatenations of normal
//! sub-samples whose sizes follow [`split_count`].

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result, ensure_finite, ensure_positive};
use crate::random::RandomSource;

/// Default number of values per round
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Default rate for the skewed shape
pub const DEFAULT_LAMBDA: f64 = 2.0;

/// Left shift applied to exponential values so the visible range straddles zero
pub const EXPONENTIAL_SHIFT: f64 = 2.0;

/// An ordered, immutable set of sampled values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Concatenate two sub-populations, `self` first
    #[must_use]
    pub fn concat(mut self, other: Sample) -> Sample {
        self.values.extend(other.values);
        self
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// Distribution shapes offered by the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    Normal,
    Skewed,
    Bimodal,
    DifferentHeights,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Normal,
        DistributionKind::Skewed,
        DistributionKind::Bimodal,
        DistributionKind::DifferentHeights,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => "normal",
            DistributionKind::Skewed => "skewed",
            DistributionKind::Bimodal => "bimodal",
            DistributionKind::DifferentHeights => "different_heights",
        }
    }

    /// Draw `n` values of this shape with its default parameters.
    pub fn generate<S: RandomSource + ?Sized>(&self, src: &mut S, n: usize) -> Result<Sample> {
        match self {
            DistributionKind::Normal => generate_normal(src, 0.0, 1.0, n),
            DistributionKind::Skewed => generate_exponential(src, DEFAULT_LAMBDA, n),
            DistributionKind::Bimodal => generate_bimodal(src, n),
            DistributionKind::DifferentHeights => generate_different_heights(src, n),
        }
    }
}

/// Pick one of the four shapes uniformly at random.
pub fn pick_random_kind<S: RandomSource + ?Sized>(src: &mut S) -> DistributionKind {
    let len = DistributionKind::ALL.len();
    let idx = ((src.uniform() * len as f64) as usize).min(len - 1);
    DistributionKind::ALL[idx]
}

/// Size of the first component when `n` values are split by `weight`.
///
/// Rounds half up, so `split_count(5, 0.5) == 3` and the second component
/// receives the remaining `n - split_count(n, weight)` values.
pub fn split_count(n: usize, weight: f64) -> usize {
    let raw = (n as f64 * weight.clamp(0.0, 1.0) + 0.5).floor();
    (raw as usize).min(n)
}

/// Uniform draw in `(0, 1)`: exact zeros are redrawn so `ln(u)` stays finite.
fn nonzero_uniform<S: RandomSource + ?Sized>(src: &mut S) -> f64 {
    loop {
        let u = src.uniform();
        if u != 0.0 {
            return u;
        }
    }
}

/// Normal sampler using the Box-Muller transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMuller {
    mean: f64,
    std: f64,
}

impl BoxMuller {
    /// `std == 0` is allowed and yields the constant `mean`.
    pub fn new(mean: f64, std: f64) -> Result<Self> {
        ensure_finite("mean", mean)?;
        ensure_finite("std", std)?;
        if std < 0.0 {
            return Err(QuizError::InvalidInput {
                parameter: "std",
                value: std,
                reason: "must be non-negative",
            });
        }
        Ok(Self { mean, std })
    }

    pub fn draw<S: RandomSource + ?Sized>(&self, src: &mut S) -> f64 {
        let u = nonzero_uniform(src);
        let v = nonzero_uniform(src);
        let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
        self.mean + self.std * z
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.draw(rng)
    }
}

/// Exponential sampler shifted left by [`EXPONENTIAL_SHIFT`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftedExponential {
    lambda: f64,
}

impl ShiftedExponential {
    pub fn new(lambda: f64) -> Result<Self> {
        ensure_positive("lambda", lambda)?;
        Ok(Self { lambda })
    }

    pub fn draw<S: RandomSource + ?Sized>(&self, src: &mut S) -> f64 {
        let u = src.uniform();
        -(1.0 - u).ln() / self.lambda - EXPONENTIAL_SHIFT
    }
}

impl Distribution<f64> for ShiftedExponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.draw(rng)
    }
}

/// `n` normal values with the given mean and standard deviation.
pub fn generate_normal<S: RandomSource + ?Sized>(
    src: &mut S,
    mean: f64,
    std: f64,
    n: usize,
) -> Result<Sample> {
    let dist = BoxMuller::new(mean, std)?;
    Ok((0..n).map(|_| dist.draw(src)).collect::<Vec<_>>().into())
}

/// `n` exponential values with rate `lambda`, shifted left by 2.
pub fn generate_exponential<S: RandomSource + ?Sized>(
    src: &mut S,
    lambda: f64,
    n: usize,
) -> Result<Sample> {
    let dist = ShiftedExponential::new(lambda)?;
    Ok((0..n).map(|_| dist.draw(src)).collect::<Vec<_>>().into())
}

/// Two equal-weight clusters centred at -2 and 2 with unit spread.
pub fn generate_bimodal<S: RandomSource + ?Sized>(src: &mut S, n: usize) -> Result<Sample> {
    let left = split_count(n, 0.5);
    let low = generate_normal(src, -2.0, 1.0, left)?;
    let high = generate_normal(src, 2.0, 1.0, n - left)?;
    Ok(low.concat(high))
}

/// A 30% cluster at -1 (std 0.8) and a 70% cluster at 2 (std 1).
pub fn generate_different_heights<S: RandomSource + ?Sized>(
    src: &mut S,
    n: usize,
) -> Result<Sample> {
    let left = split_count(n, 0.3);
    let low = generate_normal(src, -1.0, 0.8, left)?;
    let high = generate_normal(src, 2.0, 1.0, n - left)?;
    Ok(low.concat(high))
}
