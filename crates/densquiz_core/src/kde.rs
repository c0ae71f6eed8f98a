//! Gaussian kernel density estimation over a fixed-resolution grid.
//!
//! The grid spans `[min - 1, max + 1]` of the sample with [`GRID_POINTS`]
//! evenly spaced positions, endpoints included. Kernel sums are delegated to a
//! [`KernelSum`] strategy so the summation can be swapped (sequential,
//! rayon-parallel) without touching the estimator's contract.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result, ensure_finite, ensure_positive};

/// Number of positions in every density curve
pub const GRID_POINTS: usize = 1000;

/// Kernel width used by the quiz
pub const DEFAULT_BANDWIDTH: f64 = 0.2;

/// Distance the grid extends beyond the sample range on each side
pub const GRID_PADDING: f64 = 1.0;

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Estimated density sampled on a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    positions: Vec<f64>,
    densities: Vec<f64>,
}

impl DensityCurve {
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `(position, density)` pairs in grid order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.densities.iter().copied())
    }

    /// Index of the highest density; the first one wins on ties.
    pub fn peak_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in self.densities.iter().enumerate() {
            match best {
                Some((_, max)) if d <= max => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Grid position of the highest density (the estimated mode)
    pub fn mode(&self) -> Option<f64> {
        self.peak_index().map(|i| self.positions[i])
    }

    pub fn peak_density(&self) -> Option<f64> {
        self.peak_index().map(|i| self.densities[i])
    }

    /// Spacing between neighbouring grid positions
    pub fn step(&self) -> f64 {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) if self.positions.len() > 1 => {
                (last - first) / (self.positions.len() - 1) as f64
            }
            _ => 0.0,
        }
    }
}

/// Unnormalized Gaussian kernel sum at `x`: `sum_d phi((x - d) / h)`.
#[inline]
pub fn kernel_sum_at(x: f64, sample: &[f64], bandwidth: f64) -> f64 {
    sample
        .iter()
        .map(|&d| {
            let u = (x - d) / bandwidth;
            (-0.5 * u * u).exp() * INV_SQRT_2PI
        })
        .sum()
}

/// Strategy for evaluating kernel sums over a whole grid.
///
/// Implementations must return one unnormalized sum per grid position, in
/// grid order, equal to [`kernel_sum_at`] for that position.
pub trait KernelSum {
    fn sums(&self, grid: &[f64], sample: &[f64], bandwidth: f64) -> Vec<f64>;
}

/// Sequential O(grid x sample) summation
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectSum;

impl KernelSum for DirectSum {
    fn sums(&self, grid: &[f64], sample: &[f64], bandwidth: f64) -> Vec<f64> {
        grid.iter()
            .map(|&x| kernel_sum_at(x, sample, bandwidth))
            .collect()
    }
}

/// Grid positions evaluated in parallel with rayon
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelSum;

#[cfg(feature = "parallel")]
impl KernelSum for ParallelSum {
    fn sums(&self, grid: &[f64], sample: &[f64], bandwidth: f64) -> Vec<f64> {
        use rayon::prelude::*;

        grid.par_iter()
            .map(|&x| kernel_sum_at(x, sample, bandwidth))
            .collect()
    }
}

/// `points` evenly spaced values from `lo` to `hi`, both included.
pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// A fitted kernel density that can be evaluated at any point
#[derive(Debug, Clone)]
pub struct KernelDensity<'a> {
    sample: &'a [f64],
    bandwidth: f64,
    min: f64,
    max: f64,
}

impl KernelDensity<'_> {
    /// Normalized density at `x`
    pub fn density_at(&self, x: f64) -> f64 {
        kernel_sum_at(x, self.sample, self.bandwidth) / self.normalizer()
    }

    /// Grid used for the curve: `[min - 1, max + 1]`
    pub fn grid(&self) -> Vec<f64> {
        linspace(self.min - GRID_PADDING, self.max + GRID_PADDING, GRID_POINTS)
    }

    fn normalizer(&self) -> f64 {
        self.sample.len() as f64 * self.bandwidth
    }
}

/// Gaussian KDE with a fixed bandwidth and a pluggable summation strategy
#[derive(Debug, Clone, Copy)]
pub struct DensityEstimator<K = DirectSum> {
    bandwidth: f64,
    strategy: K,
}

impl Default for DensityEstimator {
    fn default() -> Self {
        Self {
            bandwidth: DEFAULT_BANDWIDTH,
            strategy: DirectSum,
        }
    }
}

impl DensityEstimator {
    pub fn new(bandwidth: f64) -> Result<Self> {
        Self::with_strategy(bandwidth, DirectSum)
    }
}

impl<K: KernelSum> DensityEstimator<K> {
    pub fn with_strategy(bandwidth: f64, strategy: K) -> Result<Self> {
        ensure_positive("bandwidth", bandwidth)?;
        Ok(Self {
            bandwidth,
            strategy,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Validate the sample and bind it to this estimator's bandwidth.
    pub fn fit<'a>(&self, sample: &'a [f64]) -> Result<KernelDensity<'a>> {
        if sample.is_empty() {
            return Err(QuizError::EmptySample);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in sample {
            ensure_finite("sample value", value)?;
            min = min.min(value);
            max = max.max(value);
        }
        Ok(KernelDensity {
            sample,
            bandwidth: self.bandwidth,
            min,
            max,
        })
    }

    /// Evaluate the density on the full grid.
    pub fn estimate(&self, sample: &[f64]) -> Result<DensityCurve> {
        let kde = self.fit(sample)?;
        let positions = kde.grid();
        // Far from zero the grid step drops below the float spacing
        if !positions.windows(2).all(|w| w[0] < w[1]) {
            return Err(QuizError::InvalidInput {
                parameter: "sample range",
                value: kde.max,
                reason: "too far from zero to resolve the density grid",
            });
        }
        let norm = kde.normalizer();
        let densities = self
            .strategy
            .sums(&positions, sample, self.bandwidth)
            .into_iter()
            .map(|s| s / norm)
            .collect();
        Ok(DensityCurve {
            positions,
            densities,
        })
    }
}

/// Estimate with the default (sequential) strategy.
pub fn estimate_density(sample: &[f64], bandwidth: f64) -> Result<DensityCurve> {
    DensityEstimator::new(bandwidth)?.estimate(sample)
}
