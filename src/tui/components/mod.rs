//! # TUI Components
//!
//! All UI components for the terminal form.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar
//! - `TipSelector`: Row of preset tip buttons
//! - `ResultsPanel`: Per-person amounts and the reset button
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextField`: Numeric input with label and error slot. The cursor is its
//!   own state; the text is a prop owned by core.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into global
//! state. The field text, the selected tip, and the formatted amounts all
//! come from `TipCalculator`; focus comes from `TuiState`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── text_field.rs     (Bill / custom tip / people inputs)
//! ├── tip_selector.rs   (Preset tip buttons)
//! └── results_panel.rs  (Amounts + reset)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod results_panel;
pub mod text_field;
pub mod tip_selector;
pub use results_panel::ResultsPanel;
pub use text_field::{FieldEdit, TextField, TextFieldState};
pub use tip_selector::TipSelector;
