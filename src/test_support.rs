//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::state::TipCalculator;

/// An empty calculator using the default `$` symbol.
pub fn test_calculator() -> TipCalculator {
    TipCalculator::default()
}

/// A calculator holding the 100 / 5 people / 15% example.
pub fn filled_calculator() -> TipCalculator {
    let mut calc = test_calculator();
    update(&mut calc, Action::BillInput("100".to_string()));
    update(&mut calc, Action::PeopleInput("5".to_string()));
    update(&mut calc, Action::SelectPreset(15));
    calc
}
