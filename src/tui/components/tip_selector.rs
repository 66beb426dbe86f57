//! # TipSelector Component
//!
//! The "Select Tip %" row: one button per preset. A button is highlighted
//! when the current tip equals its value, whether it got there by pressing
//! the button or by typing the same number into the custom field.
//!
//! Stateless: which button has keyboard focus is a prop from `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::validation::{PRESET_TIPS, TipPercent};
use crate::tui::component::Component;
use crate::tui::components::text_field::ACCENT_COLOR;

pub struct TipSelector {
    /// Current tip from core state
    pub tip: Option<TipPercent>,
    /// Index into `PRESET_TIPS` holding keyboard focus, if any
    pub focused: Option<usize>,
}

impl TipSelector {
    pub fn new(tip: Option<TipPercent>, focused: Option<usize>) -> Self {
        Self { tip, focused }
    }

    fn button_style(&self, index: usize, percent: u8) -> (Style, Style) {
        let selected = self.tip.is_some_and(|t| t.matches_preset(percent));
        let focused = self.focused == Some(index);

        let label = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else if selected {
            Style::default().fg(ACCENT_COLOR)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        (label, border)
    }
}

impl Component for TipSelector {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count = PRESET_TIPS.len() as u32;
        let columns = Layout::horizontal([Constraint::Ratio(1, count); PRESET_TIPS.len()])
            .spacing(1)
            .split(area);

        for (index, (percent, cell)) in PRESET_TIPS.iter().zip(columns.iter()).enumerate() {
            let (label, border) = self.button_style(index, *percent);
            let button = Paragraph::new(format!("{percent}%"))
                .centered()
                .style(label)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                );
            frame.render_widget(button, *cell);
        }
    }
}
