//! # Calculator State
//!
//! Everything the form holds, in one place. No TUI-specific types here;
//! cursor positions and focus live in the `tui` module.
//!
//! ```text
//! TipCalculator
//! ├── bill: String                  // raw text, kept even when invalid
//! ├── people: String                // raw text, kept even when invalid
//! ├── tip: Option<TipPercent>       // cleared when custom input is invalid
//! ├── bill_error: Option<FieldError>
//! ├── people_error: Option<FieldError>
//! ├── tip_error: Option<FieldError>
//! ├── split: Split                  // cached derived amounts
//! ├── currency_symbol: String       // from config
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::split::{Split, format_money};
use crate::core::validation::{FieldError, TipPercent};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, PartialEq)]
pub struct TipCalculator {
    pub bill: String,
    pub people: String,
    pub tip: Option<TipPercent>,
    pub bill_error: Option<FieldError>,
    pub people_error: Option<FieldError>,
    pub tip_error: Option<FieldError>,
    /// Last derived amounts, refreshed by `recalculate()`.
    pub split: Split,
    pub currency_symbol: String,
    pub status_message: String,
}

impl TipCalculator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            bill: String::new(),
            people: String::new(),
            tip: None,
            bill_error: None,
            people_error: None,
            tip_error: None,
            split: Split::ZERO,
            currency_symbol: currency_symbol.into(),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.currency_symbol.clone())
    }

    /// Text shown in the custom tip field. Presets show here too.
    pub fn tip_text(&self) -> String {
        self.tip.map(|t| t.to_string()).unwrap_or_default()
    }

    /// Reset is offered once any of the three inputs holds something.
    pub fn can_reset(&self) -> bool {
        !(self.bill.is_empty() && self.people.is_empty() && self.tip.is_none())
    }

    /// True when no field currently shows an error.
    pub fn is_valid(&self) -> bool {
        self.bill_error.is_none() && self.people_error.is_none() && self.tip_error.is_none()
    }

    /// Re-derive the per-person amounts from the current inputs.
    pub fn recalculate(&mut self) {
        self.split = Split::from_inputs(&self.bill, &self.people, self.tip);
    }

    pub fn tip_amount_display(&self) -> String {
        format_money(&self.currency_symbol, self.split.tip_amount)
    }

    pub fn total_per_person_display(&self) -> String {
        format_money(&self.currency_symbol, self.split.total_per_person)
    }
}

impl Default for TipCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}
