use densquiz_core::{QuizRound, RoundConfig, Verdict};
use rand::{SeedableRng, rngs::SmallRng};

use crate::form::AnswerForm;

/// Session state: the current round, the player's form and the last verdict.
///
/// The round itself is immutable; a refresh swaps in a freshly generated one.
pub struct QuizState {
    pub round: Option<QuizRound>,
    pub form: AnswerForm,
    pub verdict: Option<Verdict>,
    pub error_message: Option<String>,
    pub round_number: u64,
    pub exit: bool,
    config: RoundConfig,
    seed: u64,
    rng: SmallRng,
}

impl QuizState {
    /// Create the session and generate the first round.
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        let mut state = Self {
            round: None,
            form: AnswerForm::new(),
            verdict: None,
            error_message: None,
            round_number: 0,
            exit: false,
            config,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        };
        state.new_round();
        state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Discard the current round and build a new one; clears form and verdict.
    pub fn new_round(&mut self) {
        self.form.reset();
        self.verdict = None;
        self.round_number += 1;

        match QuizRound::generate(&self.config, &mut self.rng) {
            Ok(round) => {
                tracing::info!(
                    round = self.round_number,
                    kind = round.kind.name(),
                    mean = round.statistics.mean,
                    median = round.statistics.median,
                    mode = round.statistics.mode,
                    "New round"
                );
                tracing::debug!(key = ?round.key, "Answer key");
                self.round = Some(round);
                self.clear_error();
            }
            Err(e) => {
                tracing::error!("Failed to generate round: {e}");
                self.round = None;
                self.set_error(format!("Cannot build round: {e}"));
            }
        }
    }

    /// Check the form against the round's answer key.
    pub fn submit(&mut self) {
        let Some(round) = &self.round else {
            self.set_error("No round to answer".to_string());
            return;
        };

        match round.check(&self.form.submission()) {
            Ok(verdict) => {
                tracing::info!(round = self.round_number, ?verdict, "Answer submitted");
                self.verdict = Some(verdict);
                self.clear_error();
            }
            Err(e) => {
                tracing::debug!("Rejected submission: {e}");
                self.verdict = None;
                self.set_error(e.to_string());
            }
        }
    }

    /// Called after the player edits the form; a stale verdict no longer applies.
    pub fn form_changed(&mut self) {
        self.verdict = None;
        self.clear_error();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use densquiz_core::Statistic;

    fn answer_with_key(state: &mut QuizState) {
        let key = state.round.as_ref().unwrap().key;
        for _ in 0..3 {
            let color = state.form.focused_color();
            state.form.set_focused(Some(key.statistic_for(color)));
            state.form.focus_next();
        }
    }

    #[test]
    fn test_first_round_generated() {
        let state = QuizState::new(RoundConfig::default(), 1);
        assert!(state.round.is_some());
        assert_eq!(state.round_number, 1);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_correct_submission() {
        let mut state = QuizState::new(RoundConfig::default(), 2);
        answer_with_key(&mut state);
        state.submit();
        assert_eq!(state.verdict, Some(Verdict::Correct));
    }

    #[test]
    fn test_incomplete_submission_sets_error() {
        let mut state = QuizState::new(RoundConfig::default(), 3);
        state.form.set_focused(Some(Statistic::Mean));
        state.submit();
        assert_eq!(state.verdict, None);
        assert_eq!(
            state.error_message.as_deref(),
            Some("no statistic chosen for the blue marker")
        );
    }

    #[test]
    fn test_new_round_resets_form() {
        let mut state = QuizState::new(RoundConfig::default(), 4);
        answer_with_key(&mut state);
        state.submit();
        state.new_round();
        assert_eq!(state.round_number, 2);
        assert_eq!(state.verdict, None);
        assert!(!state.form.submission().is_complete());
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = QuizState::new(RoundConfig::default(), 99);
        let b = QuizState::new(RoundConfig::default(), 99);
        assert_eq!(a.round, b.round);
    }

    #[test]
    fn test_invalid_config_reported() {
        let config = RoundConfig {
            sample_size: 0,
            ..Default::default()
        };
        let state = QuizState::new(config, 5);
        assert!(state.round.is_none());
        assert!(state.error_message.is_some());
    }
}
