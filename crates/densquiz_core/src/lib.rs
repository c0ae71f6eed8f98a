//! Numeric core of the density quiz
//!
//! This crate synthesizes random one-dimensional samples, estimates their
//! density and derives the statistics the player has to identify.
//! It provides:
//! - Sampling for four shapes (normal, skewed, bimodal, different heights)
//! - Gaussian kernel density estimation on a fixed 1000-point grid
//! - Mean, median and estimated mode
//! - Immutable round state with a shuffled color answer key
//!
//! # Example
//!
//! ```
//! use densquiz_core::{QuizRound, RoundConfig};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let round = QuizRound::generate(&RoundConfig::default(), &mut rng).unwrap();
//! assert_eq!(round.curve.len(), 1000);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod kde;
pub mod random;
pub mod round;
pub mod sampling;
pub mod stats;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::QuizError;
#[cfg(feature = "parallel")]
pub use kde::ParallelSum;
pub use kde::{DensityCurve, DensityEstimator, DirectSum, KernelSum, estimate_density};
pub use random::RandomSource;
pub use round::{
    AnswerKey, Marker, MarkerColor, QuizRound, RoundConfig, Statistic, Submission, Verdict,
};
pub use sampling::{DistributionKind, Sample, pick_random_kind};
pub use stats::SummaryStatistics;
