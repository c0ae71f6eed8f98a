use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use densquiz_core::RoundConfig;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, answer_panel::AnswerPanel, density_chart::DensityChart, status_bar::StatusBar,
};
use crate::state::QuizState;

pub struct App {
    state: QuizState,
    chart: DensityChart,
    answers: AnswerPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        Self {
            state: QuizState::new(config, seed),
            chart: DensityChart::new(),
            answers: AnswerPanel::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// runs the quiz loop until the player quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chart
                Constraint::Length(7), // Answers
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.chart.render(frame, chunks[0], &self.state);
        self.answers.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.state.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true
            }
            KeyCode::Char('r') => self.state.new_round(),
            _ => {
                self.answers.handle_key(key_event, &mut self.state);
            }
        }
    }
}
