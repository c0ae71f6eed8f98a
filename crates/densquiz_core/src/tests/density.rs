//! Tests for density estimation
//!
//! These tests verify that:
//! - Curves have exactly 1000 strictly increasing positions
//! - Densities are non-negative and integrate to roughly one
//! - A single point produces a single bump centred on it
//! - Estimation is deterministic and independent of the summation strategy

use rand::{SeedableRng, rngs::SmallRng};

use crate::kde::{
    DEFAULT_BANDWIDTH, DensityEstimator, GRID_PADDING, GRID_POINTS, estimate_density,
};
use crate::QuizError;
use crate::sampling::{DistributionKind, generate_normal};

fn trapezoid_area(positions: &[f64], densities: &[f64]) -> f64 {
    positions
        .windows(2)
        .zip(densities.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
        .sum()
}

#[test]
fn test_curve_grid_shape() {
    let mut rng = SmallRng::seed_from_u64(1);
    for kind in DistributionKind::ALL {
        let sample = kind.generate(&mut rng, 500).unwrap();
        let curve = estimate_density(sample.values(), DEFAULT_BANDWIDTH).unwrap();

        assert_eq!(curve.len(), GRID_POINTS);
        assert_eq!(curve.densities().len(), GRID_POINTS);
        assert!(curve.positions().windows(2).all(|w| w[0] < w[1]));
        assert!(curve.densities().iter().all(|&d| d >= 0.0));
    }
}

#[test]
fn test_grid_spans_padded_range() {
    let sample = [-3.0, 0.5, 4.0];
    let curve = estimate_density(&sample, 0.5).unwrap();
    assert_eq!(curve.positions()[0], -3.0 - GRID_PADDING);
    assert_eq!(curve.positions()[GRID_POINTS - 1], 4.0 + GRID_PADDING);
}

#[test]
fn test_densities_non_negative_for_various_bandwidths() {
    let mut rng = SmallRng::seed_from_u64(2);
    let sample = generate_normal(&mut rng, 0.0, 1.0, 200).unwrap();
    for bandwidth in [0.01, 0.2, 1.0, 5.0] {
        let curve = estimate_density(sample.values(), bandwidth).unwrap();
        assert!(curve.densities().iter().all(|&d| d >= 0.0 && d.is_finite()));
    }
}

#[test]
fn test_area_close_to_one() {
    let mut rng = SmallRng::seed_from_u64(3);
    let sample = generate_normal(&mut rng, 0.0, 1.0, 2000).unwrap();
    let curve = estimate_density(sample.values(), DEFAULT_BANDWIDTH).unwrap();
    let area = trapezoid_area(curve.positions(), curve.densities());
    // Padding of 1 = 5 bandwidths loses almost no mass
    assert!((area - 1.0).abs() < 0.01, "area {area}");
}

#[test]
fn test_single_point_bump() {
    let curve = estimate_density(&[0.0], 0.2).unwrap();
    let mode = curve.mode().unwrap();
    assert!(mode.abs() <= curve.step(), "mode {mode} step {}", curve.step());

    // Symmetric around the sample point
    let first = curve.densities()[0];
    let last = curve.densities()[GRID_POINTS - 1];
    assert!((first - last).abs() < 1e-12);
}

#[test]
fn test_estimate_is_idempotent() {
    let mut rng = SmallRng::seed_from_u64(4);
    let sample = DistributionKind::Bimodal.generate(&mut rng, 800).unwrap();
    let estimator = DensityEstimator::new(DEFAULT_BANDWIDTH).unwrap();
    let a = estimator.estimate(sample.values()).unwrap();
    let b = estimator.estimate(sample.values()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_lazy_evaluation_matches_grid() {
    let mut rng = SmallRng::seed_from_u64(5);
    let sample = generate_normal(&mut rng, 1.0, 0.7, 300).unwrap();
    let estimator = DensityEstimator::new(0.3).unwrap();
    let curve = estimator.estimate(sample.values()).unwrap();
    let kde = estimator.fit(sample.values()).unwrap();

    for i in [0, 250, 500, 999] {
        let x = curve.positions()[i];
        let diff = (kde.density_at(x) - curve.densities()[i]).abs();
        assert!(diff < 1e-12, "index {i} differs by {diff}");
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_strategy_matches_direct() {
    use crate::kde::{DirectSum, ParallelSum};

    let mut rng = SmallRng::seed_from_u64(6);
    let sample = DistributionKind::DifferentHeights
        .generate(&mut rng, 1000)
        .unwrap();
    let direct = DensityEstimator::with_strategy(0.2, DirectSum)
        .unwrap()
        .estimate(sample.values())
        .unwrap();
    let parallel = DensityEstimator::with_strategy(0.2, ParallelSum)
        .unwrap()
        .estimate(sample.values())
        .unwrap();
    assert_eq!(direct, parallel);
}

#[test]
fn test_unresolvable_grid_rejected() {
    for value in [1e16, 1e17, f64::MAX] {
        let err = estimate_density(&[value], DEFAULT_BANDWIDTH).unwrap_err();
        assert!(
            matches!(
                err,
                QuizError::InvalidInput {
                    parameter: "sample range",
                    ..
                }
            ),
            "{value} gave {err:?}"
        );
    }

    // Large but still resolvable
    let curve = estimate_density(&[1e6], DEFAULT_BANDWIDTH).unwrap();
    assert!(curve.positions().windows(2).all(|w| w[0] < w[1]));
}
