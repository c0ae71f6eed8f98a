//! JSON rendering of a round for `--json`

use densquiz_core::{AnswerKey, DistributionKind, QuizRound, SummaryStatistics};
use serde::Serialize;

/// Plot payload: the curve, the statistics and which color marks which one
#[derive(Debug, Serialize)]
pub struct RoundExport<'a> {
    pub kind: DistributionKind,
    pub sample_size: usize,
    pub bandwidth: f64,
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub statistics: &'a SummaryStatistics,
    pub colors: &'a AnswerKey,
    pub marker_height: f64,
}

impl<'a> From<&'a QuizRound> for RoundExport<'a> {
    fn from(round: &'a QuizRound) -> Self {
        Self {
            kind: round.kind,
            sample_size: round.sample_size,
            bandwidth: round.bandwidth,
            x: round.curve.positions(),
            y: round.curve.densities(),
            statistics: &round.statistics,
            colors: &round.key,
            marker_height: round.marker_height(),
        }
    }
}

pub fn round_to_json(round: &QuizRound, pretty: bool) -> serde_json::Result<String> {
    let export = RoundExport::from(round);
    if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    }
}
