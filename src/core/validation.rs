//! # Field Validation
//!
//! Each input field validates on its own; there is no cross-field coupling.
//! A failed check yields a `FieldError` whose `Display` is the exact message
//! shown in that field's error slot.
//!
//! ```text
//! bill    "abc" | "-2"  → NotPositive      "Only positive numbers allowed"
//!         "0"           → Zero             "Can't be zero"
//! people  (same two, integer parsing)
//! tip     "abc"         → TipNotANumber    "Tip percentage must be a valid number"
//!         "0" | "-5"    → TipNotPositive   "Tip percentage must be greater than 0"
//!         "150"         → TipTooLarge      "Tip percentage can't exceed 100%"
//! ```

use serde::Serialize;
use std::fmt;

use crate::core::numeric::{parse_decimal, parse_integer};

/// Tip percentages offered as one-key buttons.
pub const PRESET_TIPS: [u8; 5] = [5, 10, 15, 25, 50];

/// Upper bound (inclusive) for any tip percentage.
pub const MAX_TIP_PERCENT: f64 = 100.0;

/// A validation failure on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Bill or people text is not a number, or is negative.
    NotPositive,
    /// Bill or people parses to exactly zero.
    Zero,
    TipNotANumber,
    TipNotPositive,
    TipTooLarge,
}

/// Broad category of a `FieldError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The text does not parse as the expected numeric type.
    Format,
    /// The value parses but is zero (or not above zero, for tips).
    ZeroValue,
    /// The tip percentage is above 100.
    Range,
}

impl FieldError {
    pub fn kind(self) -> ErrorKind {
        match self {
            FieldError::NotPositive | FieldError::TipNotANumber => ErrorKind::Format,
            FieldError::Zero | FieldError::TipNotPositive => ErrorKind::ZeroValue,
            FieldError::TipTooLarge => ErrorKind::Range,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NotPositive => write!(f, "Only positive numbers allowed"),
            FieldError::Zero => write!(f, "Can't be zero"),
            FieldError::TipNotANumber => write!(f, "Tip percentage must be a valid number"),
            FieldError::TipNotPositive => write!(f, "Tip percentage must be greater than 0"),
            FieldError::TipTooLarge => write!(f, "Tip percentage can't exceed 100%"),
        }
    }
}

impl std::error::Error for FieldError {}

/// A tip percentage known to lie in (0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TipPercent(f64);

impl TipPercent {
    /// Range-check a numeric percentage.
    pub fn new(value: f64) -> Result<Self, FieldError> {
        if value.is_nan() {
            Err(FieldError::TipNotANumber)
        } else if value <= 0.0 {
            Err(FieldError::TipNotPositive)
        } else if value > MAX_TIP_PERCENT {
            Err(FieldError::TipTooLarge)
        } else {
            Ok(Self(value))
        }
    }

    /// Look up one of `PRESET_TIPS`. Returns `None` for anything else.
    pub fn preset(percent: u8) -> Option<Self> {
        PRESET_TIPS
            .contains(&percent)
            .then(|| Self(f64::from(percent)))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Fraction of the bill this tip represents (15% → 0.15).
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// True when this tip equals the given preset, however it was entered.
    pub fn matches_preset(self, percent: u8) -> bool {
        self.0 == f64::from(percent)
    }
}

impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops a trailing ".0" (15.0 → "15")
        write!(f, "{}", self.0)
    }
}

/// Validate bill text. Negative and unparseable bills share one message.
pub fn validate_bill(text: &str) -> Result<f64, FieldError> {
    match parse_decimal(text) {
        None => Err(FieldError::NotPositive),
        Some(n) if n < 0.0 => Err(FieldError::NotPositive),
        Some(n) if n == 0.0 => Err(FieldError::Zero),
        Some(n) => Ok(n),
    }
}

/// Validate number-of-people text using integer parsing.
pub fn validate_people(text: &str) -> Result<i64, FieldError> {
    match parse_integer(text) {
        None => Err(FieldError::NotPositive),
        Some(n) if n < 0 => Err(FieldError::NotPositive),
        Some(0) => Err(FieldError::Zero),
        Some(n) => Ok(n),
    }
}

/// Validate custom tip text.
pub fn validate_tip(text: &str) -> Result<TipPercent, FieldError> {
    let value = parse_decimal(text).ok_or(FieldError::TipNotANumber)?;
    TipPercent::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_form_copy() {
        assert_eq!(FieldError::NotPositive.to_string(), "Only positive numbers allowed");
        assert_eq!(FieldError::Zero.to_string(), "Can't be zero");
        assert_eq!(
            FieldError::TipNotANumber.to_string(),
            "Tip percentage must be a valid number"
        );
        assert_eq!(
            FieldError::TipNotPositive.to_string(),
            "Tip percentage must be greater than 0"
        );
        assert_eq!(
            FieldError::TipTooLarge.to_string(),
            "Tip percentage can't exceed 100%"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(FieldError::NotPositive.kind(), ErrorKind::Format);
        assert_eq!(FieldError::TipNotANumber.kind(), ErrorKind::Format);
        assert_eq!(FieldError::Zero.kind(), ErrorKind::ZeroValue);
        assert_eq!(FieldError::TipNotPositive.kind(), ErrorKind::ZeroValue);
        assert_eq!(FieldError::TipTooLarge.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_validate_bill() {
        assert_eq!(validate_bill("142.55"), Ok(142.55));
        assert_eq!(validate_bill("0"), Err(FieldError::Zero));
        assert_eq!(validate_bill("0.00"), Err(FieldError::Zero));
        assert_eq!(validate_bill("-3"), Err(FieldError::NotPositive));
        assert_eq!(validate_bill("abc"), Err(FieldError::NotPositive));
        assert_eq!(validate_bill(""), Err(FieldError::NotPositive));
    }

    #[test]
    fn test_validate_people() {
        assert_eq!(validate_people("5"), Ok(5));
        assert_eq!(validate_people("2.9"), Ok(2));
        assert_eq!(validate_people("0"), Err(FieldError::Zero));
        assert_eq!(validate_people("0.5"), Err(FieldError::Zero));
        assert_eq!(validate_people("-3"), Err(FieldError::NotPositive));
        assert_eq!(validate_people("many"), Err(FieldError::NotPositive));
    }

    #[test]
    fn test_validate_tip() {
        assert_eq!(validate_tip("18").map(TipPercent::value), Ok(18.0));
        assert_eq!(validate_tip("100").map(TipPercent::value), Ok(100.0));
        assert_eq!(validate_tip("0.5").map(TipPercent::value), Ok(0.5));
        assert_eq!(validate_tip("x"), Err(FieldError::TipNotANumber));
        assert_eq!(validate_tip("0"), Err(FieldError::TipNotPositive));
        assert_eq!(validate_tip("-5"), Err(FieldError::TipNotPositive));
        assert_eq!(validate_tip("150"), Err(FieldError::TipTooLarge));
        assert_eq!(validate_tip("100.01"), Err(FieldError::TipTooLarge));
    }

    #[test]
    fn test_presets() {
        for p in PRESET_TIPS {
            let tip = TipPercent::preset(p).unwrap();
            assert!(tip.matches_preset(p));
        }
        assert!(TipPercent::preset(20).is_none());
        assert!(TipPercent::preset(0).is_none());
    }

    #[test]
    fn test_custom_tip_matches_preset_by_value() {
        let tip = validate_tip("15").unwrap();
        assert!(tip.matches_preset(15));
        assert!(!tip.matches_preset(10));
    }

    #[test]
    fn test_tip_display_drops_trailing_zero() {
        assert_eq!(TipPercent::preset(15).unwrap().to_string(), "15");
        assert_eq!(validate_tip("12.5").unwrap().to_string(), "12.5");
    }

    #[test]
    fn test_tip_fraction() {
        assert_eq!(TipPercent::preset(50).unwrap().fraction(), 0.5);
        assert_eq!(TipPercent::preset(25).unwrap().fraction(), 0.25);
    }
}
