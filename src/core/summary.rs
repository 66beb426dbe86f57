//! # Summary Snapshot
//!
//! A serializable view of the calculator used by headless mode. Carries the
//! inputs as entered, any field errors, and both derived amounts as numbers
//! and as display strings.

use serde::Serialize;
use std::fmt;

use crate::core::state::TipCalculator;
use crate::core::validation::{ErrorKind, FieldError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub bill: String,
    pub people: String,
    pub tip_percent: Option<f64>,
    pub tip_amount: f64,
    pub total_per_person: f64,
    pub tip_amount_display: String,
    pub total_per_person_display: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldIssue>,
}

/// One field's validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, error: FieldError) -> Self {
        Self {
            field,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<&TipCalculator> for Summary {
    fn from(calc: &TipCalculator) -> Self {
        let errors = [
            ("bill", calc.bill_error),
            ("people", calc.people_error),
            ("tip", calc.tip_error),
        ]
        .into_iter()
        .filter_map(|(field, error)| error.map(|e| FieldIssue::new(field, e)))
        .collect();

        Self {
            bill: calc.bill.clone(),
            people: calc.people.clone(),
            tip_percent: calc.tip.map(|t| t.value()),
            tip_amount: calc.split.tip_amount,
            total_per_person: calc.split.total_per_person,
            tip_amount_display: calc.tip_amount_display(),
            total_per_person_display: calc.total_per_person_display(),
            errors,
        }
    }
}

impl Summary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tip = self
            .tip_percent
            .map(|t| format!("{t}%"))
            .unwrap_or_else(|| "-".to_string());
        writeln!(f, "{:<16}{}", "Bill:", self.bill)?;
        writeln!(f, "{:<16}{tip}", "Tip:")?;
        writeln!(f, "{:<16}{}", "People:", self.people)?;
        writeln!(f, "{:<16}{}", "Tip / person:", self.tip_amount_display)?;
        write!(f, "{:<16}{}", "Total / person:", self.total_per_person_display)?;
        for issue in &self.errors {
            write!(f, "\n{}: {}", issue.field, issue.message)?;
        }
        Ok(())
    }
}
