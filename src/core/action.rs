//! # Actions
//!
//! Everything that can happen in the calculator becomes an `Action`.
//! User types in the bill field? That's `Action::BillInput(text)`.
//! User picks the 15% button? That's `Action::SelectPreset(15)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the caller what to do
//! next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every input-changing arm ends with `recalculate()`, so the derived
//! amounts are always in step with the inputs once `update()` returns.

use log::{debug, warn};

use crate::core::state::TipCalculator;
use crate::core::validation::{TipPercent, validate_bill, validate_people, validate_tip};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// New raw text for the bill field.
    BillInput(String),
    /// New raw text for the number-of-people field.
    PeopleInput(String),
    /// New raw text for the custom tip field.
    CustomTipInput(String),
    /// One of the preset tip buttons was activated.
    SelectPreset(u8),
    Reset,
    Quit,
}

/// What the event loop must do after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Inputs changed and the derived amounts were refreshed.
    Recalculated,
    Quit,
}

pub fn update(state: &mut TipCalculator, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::BillInput(text) => {
            state.bill_error = validate_bill(&text).err();
            state.bill = text;
            state.recalculate();
            Effect::Recalculated
        }
        Action::PeopleInput(text) => {
            state.people_error = validate_people(&text).err();
            state.people = text;
            state.recalculate();
            Effect::Recalculated
        }
        Action::CustomTipInput(text) => {
            match validate_tip(&text) {
                Ok(tip) => {
                    state.tip_error = None;
                    state.tip = Some(tip);
                }
                Err(e) => {
                    // The typed value is dropped, unlike bill and people
                    state.tip_error = Some(e);
                    state.tip = None;
                }
            }
            state.recalculate();
            Effect::Recalculated
        }
        Action::SelectPreset(percent) => match TipPercent::preset(percent) {
            Some(tip) => {
                state.tip = Some(tip);
                state.tip_error = None;
                state.status_message = format!("Tip: {percent}%");
                state.recalculate();
                Effect::Recalculated
            }
            None => {
                warn!("Ignoring unknown preset tip {percent}%");
                Effect::None
            }
        },
        Action::Reset => {
            if !state.can_reset() {
                return Effect::None;
            }
            state.bill.clear();
            state.people.clear();
            state.tip = None;
            state.bill_error = None;
            state.people_error = None;
            state.tip_error = None;
            state.status_message = String::from("Reset");
            state.recalculate();
            Effect::Recalculated
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::split::Split;
    use crate::core::validation::FieldError;
    use crate::test_support::{filled_calculator, test_calculator};

    #[test]
    fn test_bill_input_valid_clears_error() {
        let mut calc = test_calculator();
        update(&mut calc, Action::BillInput("0".into()));
        assert_eq!(calc.bill_error, Some(FieldError::Zero));

        let effect = update(&mut calc, Action::BillInput("42".into()));
        assert_eq!(effect, Effect::Recalculated);
        assert_eq!(calc.bill, "42");
        assert_eq!(calc.bill_error, None);
    }

    #[test]
    fn test_bill_input_keeps_invalid_text() {
        let mut calc = test_calculator();
        update(&mut calc, Action::BillInput("12x".into()));
        assert_eq!(calc.bill, "12x");
        assert_eq!(calc.bill_error, None);

        update(&mut calc, Action::BillInput("x12".into()));
        assert_eq!(calc.bill, "x12");
        assert_eq!(calc.bill_error, Some(FieldError::NotPositive));
    }

    #[test]
    fn test_empty_bill_reports_not_positive() {
        // Clearing the field by backspacing is itself an input event
        let mut calc = test_calculator();
        update(&mut calc, Action::BillInput("".into()));
        assert_eq!(calc.bill, "");
        assert_eq!(calc.bill_error, Some(FieldError::NotPositive));
    }

    #[test]
    fn test_people_negative_keeps_text() {
        let mut calc = test_calculator();
        update(&mut calc, Action::PeopleInput("-3".into()));
        assert_eq!(calc.people, "-3");
        assert_eq!(
            calc.people_error.map(|e| e.to_string()).as_deref(),
            Some("Only positive numbers allowed")
        );
    }

    #[test]
    fn test_custom_tip_valid_sets_value() {
        let mut calc = test_calculator();
        update(&mut calc, Action::CustomTipInput("18".into()));
        assert_eq!(calc.tip.map(|t| t.value()), Some(18.0));
        assert_eq!(calc.tip_error, None);
    }

    #[test]
    fn test_custom_tip_over_range_discards_value() {
        let mut calc = test_calculator();
        update(&mut calc, Action::CustomTipInput("15".into()));
        update(&mut calc, Action::CustomTipInput("150".into()));
        assert_eq!(calc.tip, None);
        assert_eq!(calc.tip_text(), "");
        assert_eq!(
            calc.tip_error.map(|e| e.to_string()).as_deref(),
            Some("Tip percentage can't exceed 100%")
        );
    }

    #[test]
    fn test_custom_tip_not_a_number() {
        let mut calc = filled_calculator();
        update(&mut calc, Action::CustomTipInput("lots".into()));
        assert_eq!(calc.tip, None);
        assert_eq!(calc.tip_error, Some(FieldError::TipNotANumber));
        assert_eq!(calc.split, Split::ZERO);
    }

    #[test]
    fn test_custom_tip_zero() {
        let mut calc = test_calculator();
        update(&mut calc, Action::CustomTipInput("0".into()));
        assert_eq!(calc.tip, None);
        assert_eq!(calc.tip_error, Some(FieldError::TipNotPositive));
    }

    #[test]
    fn test_preset_selection_recalculates() {
        let mut calc = test_calculator();
        update(&mut calc, Action::BillInput("100".into()));
        update(&mut calc, Action::PeopleInput("5".into()));
        assert_eq!(calc.split, Split::ZERO);

        let effect = update(&mut calc, Action::SelectPreset(15));
        assert_eq!(effect, Effect::Recalculated);
        assert_eq!(calc.tip_amount_display(), "$3.00");
        assert_eq!(calc.total_per_person_display(), "$23.00");
    }

    #[test]
    fn test_preset_clears_stale_tip_error() {
        let mut calc = test_calculator();
        update(&mut calc, Action::CustomTipInput("500".into()));
        assert!(calc.tip_error.is_some());

        update(&mut calc, Action::SelectPreset(10));
        assert_eq!(calc.tip_error, None);
        assert_eq!(calc.tip_text(), "10");
    }

    #[test]
    fn test_unknown_preset_is_ignored() {
        let mut calc = filled_calculator();
        let before = calc.clone();
        assert_eq!(update(&mut calc, Action::SelectPreset(20)), Effect::None);
        assert_eq!(calc, before);
    }

    #[test]
    fn test_zero_bill_zeroes_outputs() {
        let mut calc = test_calculator();
        update(&mut calc, Action::BillInput("0".into()));
        update(&mut calc, Action::PeopleInput("4".into()));
        update(&mut calc, Action::SelectPreset(10));
        assert_eq!(calc.bill_error, Some(FieldError::Zero));
        assert_eq!(calc.tip_amount_display(), "$0.00");
        assert_eq!(calc.total_per_person_display(), "$0.00");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut calc = filled_calculator();
        update(&mut calc, Action::CustomTipInput("900".into()));

        let effect = update(&mut calc, Action::Reset);
        assert_eq!(effect, Effect::Recalculated);
        assert_eq!(calc.bill, "");
        assert_eq!(calc.people, "");
        assert_eq!(calc.tip, None);
        assert!(calc.is_valid());
        assert_eq!(calc.split, Split::ZERO);
    }

    #[test]
    fn test_reset_disabled_when_empty() {
        let mut calc = test_calculator();
        assert_eq!(update(&mut calc, Action::Reset), Effect::None);
        assert_eq!(calc, test_calculator());
    }

    #[test]
    fn test_reset_is_noop_when_only_errors_remain() {
        // An invalid custom tip clears the value but leaves its message
        let mut calc = test_calculator();
        update(&mut calc, Action::CustomTipInput("abc".into()));
        assert!(!calc.can_reset());
        assert_eq!(update(&mut calc, Action::Reset), Effect::None);
        assert_eq!(calc.tip_error, Some(FieldError::TipNotANumber));
    }

    #[test]
    fn test_same_inputs_twice_same_outputs() {
        let mut calc = test_calculator();
        update(&mut calc, Action::BillInput("63.20".into()));
        update(&mut calc, Action::PeopleInput("4".into()));
        update(&mut calc, Action::CustomTipInput("12.5".into()));
        let first = calc.split;

        update(&mut calc, Action::BillInput("63.20".into()));
        update(&mut calc, Action::PeopleInput("4".into()));
        update(&mut calc, Action::CustomTipInput("12.5".into()));
        assert_eq!(calc.split, first);
    }

    #[test]
    fn test_quit() {
        let mut calc = test_calculator();
        assert_eq!(update(&mut calc, Action::Quit), Effect::Quit);
    }
}
