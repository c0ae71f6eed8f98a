use crossterm::event::{KeyCode, KeyEvent};
use densquiz_core::{MarkerColor, Statistic, Verdict};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult, marker_color};
use crate::state::QuizState;

pub const CORRECT_MESSAGE: &str = "Correct, well done!!";
pub const INCORRECT_MESSAGE: &str = "Incorrect :(( Try again!";

pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => CORRECT_MESSAGE,
        Verdict::Incorrect => INCORRECT_MESSAGE,
    }
}

/// One row per marker color with the player's chosen statistic
pub struct AnswerPanel;

impl AnswerPanel {
    pub fn new() -> Self {
        Self
    }

    fn color_row(state: &QuizState, color: MarkerColor) -> Line<'static> {
        let focused = state.form.focused_color() == color;
        let cursor = if focused { "> " } else { "  " };
        let choice = match state.form.choice(color) {
            Some(statistic) => Span::styled(
                statistic.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("(choose)", Style::default().fg(Color::DarkGray)),
        };
        let label_style = if focused {
            Style::default()
                .fg(marker_color(color))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(marker_color(color))
        };

        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<6}", color.name()), label_style),
            Span::raw(" line is the "),
            choice,
        ])
    }
}

impl Component for AnswerPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut QuizState) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.form.focus_prev(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => state.form.focus_next(),
            KeyCode::Left | KeyCode::Char('h') => {
                state.form.cycle_focused(false);
                state.form_changed();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                state.form.cycle_focused(true);
                state.form_changed();
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                state.form.set_focused(Some(Statistic::ALL[idx]));
                state.form.focus_next();
                state.form_changed();
            }
            KeyCode::Backspace | KeyCode::Delete => {
                state.form.set_focused(None);
                state.form_changed();
            }
            KeyCode::Enter => state.submit(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &QuizState) {
        let mut lines: Vec<Line> = MarkerColor::ALL
            .iter()
            .map(|&color| Self::color_row(state, color))
            .collect();

        lines.push(Line::from(""));
        if let Some(verdict) = state.verdict {
            let color = match verdict {
                Verdict::Correct => Color::Green,
                Verdict::Incorrect => Color::Red,
            };
            lines.push(Line::from(Span::styled(
                verdict_message(verdict),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Which line is which? ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
