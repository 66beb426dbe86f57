//! # ResultsPanel Component
//!
//! Right-hand panel with the two derived amounts and the RESET button.
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ Tip Amount            $3.00  │
//! │ / person                     │
//! │                              │
//! │ Total                $23.00  │
//! │ / person                     │
//! │                              │
//! │ ╭──────────────────────────╮ │
//! │ │          RESET           │ │
//! │ ╰──────────────────────────╯ │
//! ╰──────────────────────────────╯
//! ```
//!
//! Purely presentational: all values arrive formatted from core state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::text_field::ACCENT_COLOR;

pub struct ResultsPanel {
    pub tip_amount: String,
    pub total_per_person: String,
    /// False when every input is empty
    pub reset_enabled: bool,
    pub reset_focused: bool,
}

impl ResultsPanel {
    pub fn new(tip_amount: String, total_per_person: String) -> Self {
        Self {
            tip_amount,
            total_per_person,
            reset_enabled: false,
            reset_focused: false,
        }
    }

    pub fn reset(mut self, enabled: bool, focused: bool) -> Self {
        self.reset_enabled = enabled;
        self.reset_focused = focused;
        self
    }

    fn amount_row(frame: &mut Frame, area: Rect, label: &str, amount: &str) {
        let amount_width = amount.width() as u16 + 1;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(amount_width)]).areas(area);

        let caption = Paragraph::new(vec![
            Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("/ person", Style::default().fg(Color::Gray))),
        ]);
        frame.render_widget(caption, left);

        let value = Paragraph::new(Span::styled(
            amount.to_string(),
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        ))
        .right_aligned();
        frame.render_widget(value, right);
    }

    fn reset_style(&self) -> (Style, Style) {
        if !self.reset_enabled {
            let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
            (dim, dim)
        } else if self.reset_focused {
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (
                Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
                Style::default().fg(ACCENT_COLOR),
            )
        }
    }
}

impl Component for ResultsPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tip_area, _, total_area, _, reset_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(inner);

        Self::amount_row(frame, tip_area, "Tip Amount", &self.tip_amount);
        Self::amount_row(frame, total_area, "Total", &self.total_per_person);

        let (label, border) = self.reset_style();
        let button = Paragraph::new("RESET").centered().style(label).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        frame.render_widget(button, reset_area);
    }
}
