//! Tests for round generation and answer checking

use rand::{SeedableRng, rngs::SmallRng};

use crate::error::QuizError;
use crate::round::{
    AnswerKey, MARKER_HEADROOM, MarkerColor, QuizRound, RoundConfig, Statistic, Submission,
    Verdict,
};
use crate::sampling::DistributionKind;
use crate::stats::{mean, median};

fn submission_from_key(key: &AnswerKey) -> Submission {
    Statistic::ALL
        .iter()
        .fold(Submission::new(), |s, &stat| s.with(key.color_for(stat), stat))
}

#[test]
fn test_same_seed_same_round() {
    let config = RoundConfig::default();
    let a = QuizRound::generate(&config, &mut SmallRng::seed_from_u64(314)).unwrap();
    let b = QuizRound::generate(&config, &mut SmallRng::seed_from_u64(314)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_round_contents() {
    let config = RoundConfig {
        sample_size: 400,
        bandwidth: 0.25,
    };
    let round = QuizRound::generate(&config, &mut SmallRng::seed_from_u64(1)).unwrap();

    assert_eq!(round.sample_size, 400);
    assert_eq!(round.bandwidth, 0.25);
    assert_eq!(round.curve.len(), 1000);
    assert_eq!(round.statistics.mode, round.curve.mode().unwrap());
    assert!(round.marker_height() > 0.0);
    assert_eq!(
        round.marker_height(),
        round.curve.peak_density().unwrap() * MARKER_HEADROOM
    );
}

#[test]
fn test_statistics_match_sample() {
    let config = RoundConfig::default();
    let mut sample_rng = SmallRng::seed_from_u64(2);
    let mut replay_rng = SmallRng::seed_from_u64(2);
    let mut color_rng = SmallRng::seed_from_u64(3);

    let round = QuizRound::with_kind(
        DistributionKind::Skewed,
        &config,
        &mut sample_rng,
        &mut color_rng,
    )
    .unwrap();
    let sample = DistributionKind::Skewed
        .generate(&mut replay_rng, config.sample_size)
        .unwrap();

    assert_eq!(round.kind, DistributionKind::Skewed);
    assert_eq!(round.statistics.mean, mean(sample.values()).unwrap());
    assert_eq!(round.statistics.median, median(sample.values()).unwrap());
    // Right skew pulls the mean above the median
    assert!(round.statistics.mean > round.statistics.median);
}

#[test]
fn test_answer_key_is_permutation() {
    let mut rng = SmallRng::seed_from_u64(10);
    for _ in 0..50 {
        let key = AnswerKey::shuffled(&mut rng);
        let mut colors = [key.mean, key.median, key.mode].map(|c| c.index());
        colors.sort_unstable();
        assert_eq!(colors, [0, 1, 2]);
    }
}

#[test]
fn test_markers_follow_key() {
    let round = QuizRound::generate(&RoundConfig::default(), &mut SmallRng::seed_from_u64(6))
        .unwrap();
    let markers = round.markers();

    assert_eq!(markers.map(|m| m.statistic), Statistic::ALL);
    for marker in markers {
        assert_eq!(marker.color, round.key.color_for(marker.statistic));
        assert_eq!(marker.position, marker.statistic.value_in(&round.statistics));
    }
}

#[test]
fn test_check_correct_submission() {
    let round = QuizRound::generate(&RoundConfig::default(), &mut SmallRng::seed_from_u64(7))
        .unwrap();
    let submission = submission_from_key(&round.key);
    assert_eq!(round.check(&submission), Ok(Verdict::Correct));
}

#[test]
fn test_check_swapped_submission() {
    let round = QuizRound::generate(&RoundConfig::default(), &mut SmallRng::seed_from_u64(8))
        .unwrap();
    let key = round.key;
    let swapped = Submission::new()
        .with(key.mean, Statistic::Median)
        .with(key.median, Statistic::Mean)
        .with(key.mode, Statistic::Mode);
    assert_eq!(round.check(&swapped), Ok(Verdict::Incorrect));

    let all_mean = MarkerColor::ALL
        .iter()
        .fold(Submission::new(), |s, &c| s.with(c, Statistic::Mean));
    assert_eq!(round.check(&all_mean), Ok(Verdict::Incorrect));
}

#[test]
fn test_check_incomplete_submission() {
    let round = QuizRound::generate(&RoundConfig::default(), &mut SmallRng::seed_from_u64(9))
        .unwrap();
    let partial = Submission::new()
        .with(MarkerColor::Red, Statistic::Mode)
        .with(MarkerColor::Green, Statistic::Mean);
    assert_eq!(
        round.check(&partial),
        Err(QuizError::Unanswered(MarkerColor::Blue))
    );
}

#[test]
fn test_invalid_config_rejected() {
    let config = RoundConfig {
        sample_size: 10,
        bandwidth: f64::NAN,
    };
    let result = QuizRound::generate(&config, &mut SmallRng::seed_from_u64(0));
    assert!(matches!(
        result,
        Err(QuizError::InvalidInput {
            parameter: "bandwidth",
            ..
        })
    ));
}

#[test]
fn test_single_value_round() {
    let config = RoundConfig {
        sample_size: 1,
        ..Default::default()
    };
    for kind in DistributionKind::ALL {
        let round = QuizRound::with_kind(
            kind,
            &config,
            &mut SmallRng::seed_from_u64(12),
            &mut SmallRng::seed_from_u64(13),
        )
        .unwrap();
        assert_eq!(round.sample_size, 1);
        assert_eq!(round.statistics.mean, round.statistics.median);
        assert!((round.statistics.mode - round.statistics.mean).abs() <= round.curve.step());
    }
}
