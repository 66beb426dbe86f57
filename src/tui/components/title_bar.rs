//! # TitleBar Component
//!
//! Top status bar showing the app name and transient status.
//!
//! ## Responsibilities
//!
//! - Display app name and version
//! - Display status messages (e.g., "Tip: 15%", "Reset", config warnings)
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Tip Calculator v0.1.0 | Tip: 15%"`
//! 2. **Default**: `"Tip Calculator v0.1.0"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub const APP_TITLE: &str = "Tip Calculator";

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g., "Reset")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    fn text(&self) -> String {
        let name = format!("{APP_TITLE} v{}", env!("CARGO_PKG_VERSION"));
        if self.status_message.is_empty() {
            name
        } else {
            format!("{name} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    ///
    /// A plain Span rather than a Block: the title bar is always one line,
    /// with no borders or padding.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}
