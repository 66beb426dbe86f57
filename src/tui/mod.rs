//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm key → TuiEvent → TuiState::handle_event → Action
//!                                                      │
//!                     redraw ← TuiState::sync ← update(app, action)
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next draw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::TipCalculator;
use crate::core::validation::PRESET_TIPS;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEdit, TextField, TextFieldState};

pub use crate::tui::event::{TuiEvent, map_key};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Bill,
    /// Index into `PRESET_TIPS`
    Preset(usize),
    CustomTip,
    People,
    Reset,
}

impl Focus {
    /// Tab order: Bill → presets → Custom → People → Reset → Bill.
    /// Reset is skipped while it is disabled.
    pub fn next(self, can_reset: bool) -> Self {
        match self {
            Focus::Bill => Focus::Preset(0),
            Focus::Preset(_) => Focus::CustomTip,
            Focus::CustomTip => Focus::People,
            Focus::People if can_reset => Focus::Reset,
            Focus::People | Focus::Reset => Focus::Bill,
        }
    }

    pub fn prev(self, can_reset: bool) -> Self {
        match self {
            Focus::Bill if can_reset => Focus::Reset,
            Focus::Bill => Focus::People,
            Focus::Preset(_) => Focus::Bill,
            Focus::CustomTip => Focus::Preset(0),
            Focus::People => Focus::CustomTip,
            Focus::Reset => Focus::People,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub bill: TextFieldState,
    pub custom_tip: TextFieldState,
    pub people: TextFieldState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Bill, // User expects to type immediately
            bill: TextFieldState::new(),
            custom_tip: TextFieldState::new(),
            people: TextFieldState::new(),
        }
    }

    /// Route one event to the focused control. Returns the core action to
    /// apply, if any. Focus and cursor changes happen here directly.
    pub fn handle_event(&mut self, app: &TipCalculator, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Quit => return Some(Action::Quit),
            TuiEvent::Reset => return Some(Action::Reset),
            TuiEvent::Resize => return None,
            TuiEvent::FocusNext => {
                self.set_focus(self.focus.next(app.can_reset()), app);
                return None;
            }
            TuiEvent::FocusPrev => {
                self.set_focus(self.focus.prev(app.can_reset()), app);
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Bill => {
                self.edit_field(Focus::Bill, &app.bill, event, app)
                    .map(Action::BillInput)
            }
            Focus::CustomTip => {
                let tip_text = app.tip_text();
                self.edit_field(Focus::CustomTip, &tip_text, event, app)
                    .map(Action::CustomTipInput)
            }
            Focus::People => {
                self.edit_field(Focus::People, &app.people, event, app)
                    .map(Action::PeopleInput)
            }
            Focus::Preset(index) => self.handle_preset(index, event),
            Focus::Reset => match event {
                TuiEvent::Activate | TuiEvent::InputChar(' ') => Some(Action::Reset),
                _ => None,
            },
        }
    }

    /// Text editing for the focused field. Enter moves on to the next control.
    fn edit_field(
        &mut self,
        focus: Focus,
        text: &str,
        event: &TuiEvent,
        app: &TipCalculator,
    ) -> Option<String> {
        if matches!(event, TuiEvent::Activate) {
            self.set_focus(focus.next(app.can_reset()), app);
            return None;
        }

        let Some(state) = self.field_state(focus) else {
            return None;
        };
        match TextField::new(state, text, "").handle_event(event)? {
            FieldEdit::Changed(next) => Some(next),
            FieldEdit::CursorMoved => None,
        }
    }

    fn handle_preset(&mut self, index: usize, event: &TuiEvent) -> Option<Action> {
        let last = PRESET_TIPS.len() - 1;
        match event {
            TuiEvent::CursorLeft => self.focus = Focus::Preset(index.saturating_sub(1)),
            TuiEvent::CursorRight => self.focus = Focus::Preset((index + 1).min(last)),
            TuiEvent::CursorHome => self.focus = Focus::Preset(0),
            TuiEvent::CursorEnd => self.focus = Focus::Preset(last),
            TuiEvent::Activate | TuiEvent::InputChar(' ') => {
                return PRESET_TIPS.get(index).map(|p| Action::SelectPreset(*p));
            }
            _ => {}
        }
        None
    }

    fn field_state(&mut self, focus: Focus) -> Option<&mut TextFieldState> {
        match focus {
            Focus::Bill => Some(&mut self.bill),
            Focus::CustomTip => Some(&mut self.custom_tip),
            Focus::People => Some(&mut self.people),
            Focus::Preset(_) | Focus::Reset => None,
        }
    }

    fn set_focus(&mut self, focus: Focus, app: &TipCalculator) {
        self.focus = focus;
        let tip_text = app.tip_text();
        let text = match focus {
            Focus::Bill => app.bill.as_str(),
            Focus::CustomTip => tip_text.as_str(),
            Focus::People => app.people.as_str(),
            Focus::Preset(_) | Focus::Reset => return,
        };
        if let Some(state) = self.field_state(focus) {
            state.move_to_end(text);
        }
    }

    /// Bring presentation state back in line after core changed.
    pub fn sync(&mut self, app: &TipCalculator) {
        self.bill.clamp(&app.bill);
        self.custom_tip.clamp(&app.tip_text());
        self.people.clamp(&app.people);
        if self.focus == Focus::Reset && !app.can_reset() {
            self.focus = Focus::Bill;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the interactive form until the user quits.
///
/// `startup_status` seeds the title bar (e.g. a config warning).
pub fn run(config: &ResolvedConfig, startup_status: Option<String>) -> io::Result<()> {
    let mut app = TipCalculator::from_config(config);
    if let Some(status) = startup_status {
        app.status_message = status;
    }
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!(
        "Exiting with bill={:?} people={:?} tip={:?}",
        app.bill, app.people, app.tip
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut TipCalculator,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if let Some(action) = tui.handle_event(app, &event) {
                let effect = update(app, action);
                tui.sync(app);
                if effect == Effect::Quit {
                    return Ok(());
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}
