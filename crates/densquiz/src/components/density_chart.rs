//! Density curve with the three statistic markers

use crossterm::event::KeyEvent;
use densquiz_core::QuizRound;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use super::{Component, EventResult, marker_color};
use crate::state::QuizState;

pub const CHART_TITLE: &str = "Identify the mode, median and mean";
const X_TITLE: &str = "Value";
const Y_TITLE: &str = "Probability density";

pub struct DensityChart;

impl DensityChart {
    pub fn new() -> Self {
        Self
    }

    fn render_round(frame: &mut Frame, area: Rect, block: Block, round: &QuizRound) {
        let curve: Vec<(f64, f64)> = round.curve.points().collect();
        let height = round.marker_height();

        // Each marker is a two-point vertical line from 0 to the marker height
        let marker_lines: Vec<_> = round
            .markers()
            .iter()
            .map(|m| {
                (
                    marker_color(m.color),
                    [(m.position, 0.0), (m.position, height)],
                )
            })
            .collect();

        // Unnamed datasets keep the legend hidden
        let mut datasets = vec![
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::White))
                .data(&curve),
        ];
        for (color, line) in &marker_lines {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(*color).add_modifier(Modifier::BOLD))
                    .data(&line[..]),
            );
        }

        let positions = round.curve.positions();
        let x_min = positions.first().copied().unwrap_or(-1.0);
        let x_max = positions.last().copied().unwrap_or(1.0);
        let y_max = if height > 0.0 { height } else { 1.0 };

        let x_axis = Axis::default()
            .title(Span::styled(X_TITLE, Style::default().fg(Color::DarkGray)))
            .bounds([x_min, x_max])
            .labels(vec![
                Span::raw(format!("{:.1}", x_min)),
                Span::raw(format!("{:.1}", (x_min + x_max) / 2.0)),
                Span::raw(format!("{:.1}", x_max)),
            ]);

        let y_axis = Axis::default()
            .title(Span::styled(Y_TITLE, Style::default().fg(Color::DarkGray)))
            .bounds([0.0, y_max])
            .labels(vec![
                Span::raw("0"),
                Span::raw(format!("{:.2}", y_max / 2.0)),
                Span::raw(format!("{:.2}", y_max)),
            ]);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

impl Component for DensityChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut QuizState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &QuizState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} (round {}) ", CHART_TITLE, state.round_number));

        match &state.round {
            Some(round) => Self::render_round(frame, area, block, round),
            None => {
                let msg = Paragraph::new("No round available. Press r to try again.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(msg, area);
            }
        }
    }
}
