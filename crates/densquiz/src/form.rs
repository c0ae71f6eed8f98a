//! Answer form: one statistic choice per marker color

use densquiz_core::{MarkerColor, Statistic, Submission};

#[derive(Debug, Clone, Default)]
pub struct AnswerForm {
    submission: Submission,
    focused: usize,
}

impl AnswerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_color(&self) -> MarkerColor {
        MarkerColor::ALL[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % MarkerColor::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        let len = MarkerColor::ALL.len();
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn choice(&self, color: MarkerColor) -> Option<Statistic> {
        self.submission.get(color)
    }

    pub fn set_focused(&mut self, statistic: Option<Statistic>) {
        self.submission.set(self.focused_color(), statistic);
    }

    /// Step the focused row through unset -> mean -> median -> mode -> unset.
    pub fn cycle_focused(&mut self, forward: bool) {
        let current = self.choice(self.focused_color());
        let pos = current.and_then(|s| Statistic::ALL.iter().position(|&o| o == s));
        // Slot 0 is "unset", slots 1..=3 are the statistics
        let slot = pos.map_or(0, |p| p + 1);
        let slots = Statistic::ALL.len() + 1;
        let next = if forward {
            (slot + 1) % slots
        } else {
            (slot + slots - 1) % slots
        };
        let statistic = next.checked_sub(1).map(|i| Statistic::ALL[i]);
        self.set_focused(statistic);
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
