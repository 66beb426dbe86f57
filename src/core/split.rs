//! # Bill Splitting
//!
//! The two derived values, as pure functions of the three inputs:
//!
//! ```text
//! fraction         = tip / 100
//! tip_per_person   = bill × fraction / people
//! total_per_person = (bill + bill × fraction) / people
//! ```
//!
//! Anything short of a positive bill, a positive head count and a set tip
//! yields zero for both.

use serde::Serialize;

use crate::core::numeric::{parse_decimal, parse_integer};
use crate::core::validation::TipPercent;

/// Per-person amounts derived from the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Split {
    pub tip_amount: f64,
    pub total_per_person: f64,
}

impl Split {
    pub const ZERO: Split = Split {
        tip_amount: 0.0,
        total_per_person: 0.0,
    };

    /// Compute from already-parsed values.
    pub fn compute(bill: Option<f64>, people: Option<i64>, tip: Option<TipPercent>) -> Self {
        match (bill, people, tip) {
            (Some(b), Some(p), Some(t)) if b > 0.0 && p > 0 && t.value() > 0.0 => {
                let people = p as f64;
                let tip_total = b * t.fraction();
                Split {
                    tip_amount: tip_total / people,
                    total_per_person: (b + tip_total) / people,
                }
            }
            _ => Split::ZERO,
        }
    }

    /// Compute straight from the raw field text, the way the form re-derives
    /// after every keystroke.
    pub fn from_inputs(bill: &str, people: &str, tip: Option<TipPercent>) -> Self {
        Self::compute(parse_decimal(bill), parse_integer(people), tip)
    }
}

/// Format an amount as currency with exactly two decimals (`$23.00`).
///
/// Rounds the exact binary value to the nearest cent with ties going away
/// from zero, so `0.125` shows as `0.13` while `1.005` (stored just below
/// the half) shows as `1.00`.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{symbol}{}", to_cents(amount))
}

fn to_cents(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if amount == 0.0 {
        return "0.00".to_string();
    }
    if !is_half_cent(amount) {
        return format!("{amount:.2}");
    }

    // On an exact tie `|amount| * 100` is n + 0.5 and representable
    let cents = (amount.abs() * 100.0).floor() + 1.0;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{:.2}", cents / 100.0)
}

/// True when `amount` sits exactly halfway between two cents.
///
/// That is, `200 × amount` is an odd integer. Writing the float as
/// `odd × 2^(tz + e)` gives `200 × amount = 25 × odd × 2^(tz + 3 + e)`,
/// odd exactly when the power is zero.
fn is_half_cent(amount: f64) -> bool {
    let bits = amount.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    i64::from(mantissa.trailing_zeros()) + 3 + exp == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_tip;

    fn preset(p: u8) -> Option<TipPercent> {
        TipPercent::preset(p)
    }

    #[test]
    fn test_split_hundred_five_ways_at_fifteen() {
        let split = Split::from_inputs("100", "5", preset(15));
        assert!((split.tip_amount - 3.0).abs() < 1e-9);
        assert!((split.total_per_person - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_matches_formula() {
        let bill = 142.55;
        let tip = validate_tip("15").unwrap();
        let split = Split::compute(Some(bill), Some(5), Some(tip));
        assert_eq!(split.tip_amount, bill * 0.15 / 5.0);
        assert_eq!(split.total_per_person, (bill + bill * 0.15) / 5.0);
        assert_eq!(format_money("$", split.tip_amount), "$4.28");
        assert_eq!(format_money("$", split.total_per_person), "$32.79");
    }

    #[test]
    fn test_split_zero_when_any_input_missing() {
        assert_eq!(Split::from_inputs("", "5", preset(15)), Split::ZERO);
        assert_eq!(Split::from_inputs("100", "", preset(15)), Split::ZERO);
        assert_eq!(Split::from_inputs("100", "5", None), Split::ZERO);
    }

    #[test]
    fn test_split_zero_when_not_positive() {
        assert_eq!(Split::from_inputs("0", "4", preset(10)), Split::ZERO);
        assert_eq!(Split::from_inputs("-50", "4", preset(10)), Split::ZERO);
        assert_eq!(Split::from_inputs("50", "0", preset(10)), Split::ZERO);
        assert_eq!(Split::from_inputs("50", "-3", preset(10)), Split::ZERO);
        assert_eq!(Split::from_inputs("abc", "3", preset(10)), Split::ZERO);
    }

    #[test]
    fn test_split_uses_parsed_prefix() {
        // "2.9" people parses as 2 heads
        let split = Split::from_inputs("100abc", "2.9", preset(10));
        assert_eq!(split.tip_amount, 5.0);
        assert_eq!(split.total_per_person, 55.0);
    }

    #[test]
    fn test_split_is_idempotent() {
        let first = Split::from_inputs("87.40", "3", preset(25));
        let second = Split::from_inputs("87.40", "3", preset(25));
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money("$", 0.0), "$0.00");
        assert_eq!(format_money("$", 3.0), "$3.00");
        assert_eq!(format_money("€", 12.5), "€12.50");
    }

    #[test]
    fn test_format_money_half_cent_rounds_up() {
        assert_eq!(format_money("$", 0.125), "$0.13");
        assert_eq!(format_money("$", 0.625), "$0.63");
        assert_eq!(format_money("$", 1.375), "$1.38");
    }

    #[test]
    fn test_format_money_near_half_uses_stored_value() {
        // 1.005 and 2.675 are stored slightly below the half
        assert_eq!(format_money("$", 1.005), "$1.00");
        assert_eq!(format_money("$", 2.675), "$2.67");
        assert_eq!(format_money("$", 0.126), "$0.13");
        assert_eq!(format_money("$", 0.124), "$0.12");
    }

    #[test]
    fn test_format_money_special_values() {
        assert_eq!(format_money("$", -0.0), "$0.00");
        assert_eq!(format_money("$", -0.125), "$-0.13");
        assert_eq!(format_money("$", f64::INFINITY), "$Infinity");
    }

    #[test]
    fn test_is_half_cent() {
        assert!(is_half_cent(0.125));
        assert!(is_half_cent(10.375));
        assert!(!is_half_cent(0.25));
        assert!(!is_half_cent(3.0));
        assert!(!is_half_cent(1.005));
        // 0.005 has no exact binary form
        assert!(!is_half_cent(0.005));
    }

    #[test]
    fn test_split_ten_eight_ways_rounds_half_up() {
        let split = Split::from_inputs("10", "8", preset(10));
        assert_eq!(split.tip_amount, 0.125);
        assert_eq!(format_money("$", split.tip_amount), "$0.13");
        assert_eq!(format_money("$", split.total_per_person), "$1.38");
    }
}
