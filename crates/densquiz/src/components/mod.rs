pub mod answer_panel;
pub mod density_chart;
pub mod status_bar;

use crossterm::event::KeyEvent;
use densquiz_core::MarkerColor;
use ratatui::{Frame, style::Color};

use crate::state::QuizState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, state: &mut QuizState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, state: &QuizState);
}

/// Terminal color used for a marker
pub fn marker_color(color: MarkerColor) -> Color {
    match color {
        MarkerColor::Red => Color::Red,
        MarkerColor::Blue => Color::Blue,
        MarkerColor::Green => Color::Green,
    }
}
