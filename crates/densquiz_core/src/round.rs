//! One quiz round: sample, curve, statistics and the color answer key.
//!
//! A [`QuizRound`] is built once, never mutated, and handed to the check
//! step together with the player's [`Submission`]. Starting over means
//! building a new round.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result, ensure_positive};
use crate::kde::{DEFAULT_BANDWIDTH, DensityCurve, DensityEstimator};
use crate::random::{RandomSource, split_stream};
use crate::sampling::{DEFAULT_SAMPLE_SIZE, DistributionKind, pick_random_kind};
use crate::stats::SummaryStatistics;

/// Marker lines are drawn this much taller than the curve's peak
pub const MARKER_HEADROOM: f64 = 1.1;

/// The statistics the player has to identify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Mean,
    Median,
    Mode,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Mean, Statistic::Median, Statistic::Mode];

    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Mode => "mode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Mode => "Mode",
        }
    }

    pub fn value_in(&self, stats: &SummaryStatistics) -> f64 {
        match self {
            Statistic::Mean => stats.mean,
            Statistic::Median => stats.median,
            Statistic::Mode => stats.mode,
        }
    }
}

/// Colors of the three marker lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Blue,
    Green,
}

impl MarkerColor {
    pub const ALL: [MarkerColor; 3] = [MarkerColor::Red, MarkerColor::Blue, MarkerColor::Green];

    pub fn name(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MarkerColor::Red => 0,
            MarkerColor::Blue => 1,
            MarkerColor::Green => 2,
        }
    }
}

/// Which color marks which statistic in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    pub mean: MarkerColor,
    pub median: MarkerColor,
    pub mode: MarkerColor,
}

impl AnswerKey {
    /// Shuffle the three colors, then hand them out as mean, median, mode.
    pub fn shuffled<S: RandomSource + ?Sized>(src: &mut S) -> Self {
        let mut colors = MarkerColor::ALL;
        src.shuffle(&mut colors[..]);
        Self {
            mean: colors[0],
            median: colors[1],
            mode: colors[2],
        }
    }

    pub fn color_for(&self, statistic: Statistic) -> MarkerColor {
        match statistic {
            Statistic::Mean => self.mean,
            Statistic::Median => self.median,
            Statistic::Mode => self.mode,
        }
    }

    pub fn statistic_for(&self, color: MarkerColor) -> Statistic {
        if self.mean == color {
            Statistic::Mean
        } else if self.median == color {
            Statistic::Median
        } else {
            Statistic::Mode
        }
    }
}

/// Sizing of a round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub sample_size: usize,
    pub bandwidth: f64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            bandwidth: DEFAULT_BANDWIDTH,
        }
    }
}

impl RoundConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(QuizError::InvalidInput {
                parameter: "sample_size",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        ensure_positive("bandwidth", self.bandwidth)?;
        Ok(())
    }
}

/// A vertical marker handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub statistic: Statistic,
    pub color: MarkerColor,
    pub position: f64,
}

/// The player's color -> statistic choices; unset entries are `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Submission {
    choices: [Option<Statistic>; 3],
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, color: MarkerColor, statistic: Statistic) -> Self {
        self.set(color, Some(statistic));
        self
    }

    pub fn set(&mut self, color: MarkerColor, statistic: Option<Statistic>) {
        self.choices[color.index()] = statistic;
    }

    pub fn get(&self, color: MarkerColor) -> Option<Statistic> {
        self.choices[color.index()]
    }

    pub fn is_complete(&self) -> bool {
        self.choices.iter().all(Option::is_some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Immutable state of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRound {
    pub kind: DistributionKind,
    pub sample_size: usize,
    pub bandwidth: f64,
    pub curve: DensityCurve,
    pub statistics: SummaryStatistics,
    pub key: AnswerKey,
}

impl QuizRound {
    /// Build a round with a random shape.
    ///
    /// The shape choice, the sample and the color shuffle each draw from
    /// their own stream split off `rng`.
    pub fn generate<R: Rng + ?Sized>(config: &RoundConfig, rng: &mut R) -> Result<Self> {
        let mut kind_rng = split_stream(rng);
        let mut sample_rng = split_stream(rng);
        let mut color_rng = split_stream(rng);

        let kind = pick_random_kind(&mut kind_rng);
        Self::with_kind(kind, config, &mut sample_rng, &mut color_rng)
    }

    /// Build a round for a fixed shape.
    pub fn with_kind<S, C>(
        kind: DistributionKind,
        config: &RoundConfig,
        sample_src: &mut S,
        color_src: &mut C,
    ) -> Result<Self>
    where
        S: RandomSource + ?Sized,
        C: RandomSource + ?Sized,
    {
        config.validate()?;

        let sample = kind.generate(sample_src, config.sample_size)?;
        let curve = estimate_curve(sample.values(), config.bandwidth)?;
        let statistics = SummaryStatistics::compute(sample.values(), &curve)?;
        let key = AnswerKey::shuffled(color_src);

        Ok(Self {
            kind,
            sample_size: sample.len(),
            bandwidth: config.bandwidth,
            curve,
            statistics,
            key,
        })
    }

    /// Markers in statistic order (mean, median, mode)
    pub fn markers(&self) -> [Marker; 3] {
        Statistic::ALL.map(|statistic| Marker {
            statistic,
            color: self.key.color_for(statistic),
            position: statistic.value_in(&self.statistics),
        })
    }

    /// Top of the marker lines
    pub fn marker_height(&self) -> f64 {
        self.curve.peak_density().unwrap_or(0.0) * MARKER_HEADROOM
    }

    /// Compare a submission with the answer key.
    ///
    /// Every color must have a choice; otherwise the submission is rejected
    /// with [`QuizError::Unanswered`] for the first empty color.
    pub fn check(&self, submission: &Submission) -> Result<Verdict> {
        let mut correct = true;
        for color in MarkerColor::ALL {
            let chosen = submission.get(color).ok_or(QuizError::Unanswered(color))?;
            if self.key.statistic_for(color) != chosen {
                correct = false;
            }
        }
        Ok(if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        })
    }
}

#[cfg(feature = "parallel")]
fn estimate_curve(sample: &[f64], bandwidth: f64) -> Result<DensityCurve> {
    DensityEstimator::with_strategy(bandwidth, crate::kde::ParallelSum)?.estimate(sample)
}

#[cfg(not(feature = "parallel"))]
fn estimate_curve(sample: &[f64], bandwidth: f64) -> Result<DensityCurve> {
    DensityEstimator::new(bandwidth)?.estimate(sample)
}
