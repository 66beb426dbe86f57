//! # TextField Component
//!
//! A single-line, bordered numeric input with a label and an inline error
//! slot. Used for the bill, custom tip, and number-of-people fields.
//!
//! ## State Management
//!
//! The text itself is a prop: core state owns it (the bill and people raw
//! text, or the current tip value). Only the cursor lives here, in
//! `TextFieldState`, which persists in `TuiState` across frames.
//!
//! Editing never writes the text directly. `handle_event` builds the
//! would-be text and emits `FieldEdit::Changed(text)`; the parent turns that
//! into a core `Action`, and the next frame reads whatever core kept. The
//! custom tip field relies on this: invalid text is discarded by core, so it
//! disappears from the field.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TextFieldState` lives in `TuiState`
//! - `TextField` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;

pub const ERROR_COLOR: Color = Color::LightRed;
pub const ACCENT_COLOR: Color = Color::Cyan;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// The text would become this
    Changed(String),
    CursorMoved,
}

/// Persistent cursor state for one field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextFieldState {
    /// Cursor position as byte offset in the text (0..=text.len())
    pub cursor: usize,
}

impl TextFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull the cursor back inside `text` after core rewrote it.
    pub fn clamp(&mut self, text: &str) {
        if self.cursor > text.len() {
            self.cursor = text.len();
        }
        while !text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    /// Move the cursor to the end of `text` (used when focus enters a field).
    pub fn move_to_end(&mut self, text: &str) {
        self.cursor = text.len();
    }
}

/// Transient render and edit wrapper around a `TextFieldState`.
pub struct TextField<'a> {
    state: &'a mut TextFieldState,
    text: &'a str,
    pub label: &'a str,
    /// Shown before the text, e.g. the currency symbol.
    pub prefix: &'a str,
    /// Shown dimmed when the text is empty.
    pub placeholder: &'a str,
    /// Message for the error slot, drawn in the top border.
    pub error: Option<String>,
    pub focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(state: &'a mut TextFieldState, text: &'a str, label: &'a str) -> Self {
        state.clamp(text);
        Self {
            state,
            text,
            label,
            prefix: "",
            placeholder: "0",
            error: None,
            focused: false,
        }
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(ERROR_COLOR)
        } else if self.focused {
            Style::default().fg(ACCENT_COLOR)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// Screen position of the cursor inside `area`, clamped to the border.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let before = &self.text[..self.state.cursor];
        let offset = u16::try_from(self.prefix.width() + before.width()).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(BORDER_OFFSET + 1));
        let x = area.x.saturating_add(BORDER_OFFSET).saturating_add(offset).min(max_x);
        (x, area.y.saturating_add(BORDER_OFFSET))
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(Line::from(Span::styled(
                format!(" {} ", self.label),
                Style::default().add_modifier(Modifier::BOLD),
            )));

        if let Some(error) = &self.error {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {error} "),
                    Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
                ))
                .right_aligned(),
            );
        }

        let mut spans = vec![Span::styled(self.prefix, Style::default().fg(Color::Gray))];
        if self.text.is_empty() {
            spans.push(Span::styled(self.placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(
                self.text,
                Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

        if self.focused {
            frame.set_cursor_position(self.cursor_position(area));
        }
    }
}

impl EventHandler for TextField<'_> {
    type Event = FieldEdit;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let text = self.text;
        let pos = self.state.cursor;
        match event {
            TuiEvent::InputChar(c) => {
                let mut next = text.to_string();
                next.insert(pos, *c);
                self.state.cursor = pos + c.len_utf8();
                Some(FieldEdit::Changed(next))
            }
            TuiEvent::Paste(pasted) => {
                // Single-line field: drop any line breaks from the clipboard
                let pasted: String = pasted.chars().filter(|c| !c.is_control()).collect();
                if pasted.is_empty() {
                    return None;
                }
                let mut next = text.to_string();
                next.insert_str(pos, &pasted);
                self.state.cursor = pos + pasted.len();
                Some(FieldEdit::Changed(next))
            }
            TuiEvent::Backspace => {
                if pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(text, pos);
                let mut next = text.to_string();
                next.drain(prev..pos);
                self.state.cursor = prev;
                Some(FieldEdit::Changed(next))
            }
            TuiEvent::Delete => {
                if pos >= text.len() {
                    return None;
                }
                let end = next_char_boundary(text, pos);
                let mut next = text.to_string();
                next.drain(pos..end);
                Some(FieldEdit::Changed(next))
            }
            TuiEvent::CursorLeft => (pos > 0).then(|| {
                self.state.cursor = prev_char_boundary(text, pos);
                FieldEdit::CursorMoved
            }),
            TuiEvent::CursorRight => (pos < text.len()).then(|| {
                self.state.cursor = next_char_boundary(text, pos);
                FieldEdit::CursorMoved
            }),
            TuiEvent::CursorHome => (pos != 0).then(|| {
                self.state.cursor = 0;
                FieldEdit::CursorMoved
            }),
            TuiEvent::CursorEnd => (pos != text.len()).then(|| {
                self.state.cursor = text.len();
                FieldEdit::CursorMoved
            }),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
