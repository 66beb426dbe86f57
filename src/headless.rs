//! # Headless Adapter
//!
//! One-shot mode for scripts: replay the given fields through the same
//! `update()` reducer the TUI uses and print the resulting summary.

use log::info;

use crate::OutputFormat;
use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::numeric::parse_integer;
use crate::core::state::TipCalculator;
use crate::core::summary::Summary;
use crate::core::validation::PRESET_TIPS;

/// Field values from the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct HeadlessInputs {
    pub bill: Option<String>,
    pub people: Option<String>,
    pub tip: Option<String>,
}

impl HeadlessInputs {
    /// Headless mode runs when at least one field was given.
    pub fn is_requested(&self) -> bool {
        self.bill.is_some() || self.people.is_some() || self.tip.is_some()
    }

    /// Actions in form order: bill, people, then tip.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(bill) = &self.bill {
            actions.push(Action::BillInput(bill.clone()));
        }
        if let Some(people) = &self.people {
            actions.push(Action::PeopleInput(people.clone()));
        }
        if let Some(tip) = &self.tip {
            actions.push(tip_action(tip));
        }
        actions
    }
}

/// A tip that names a preset exactly ("15") selects it; anything else is
/// typed into the custom field.
fn tip_action(text: &str) -> Action {
    let trimmed = text.trim();
    let preset = parse_integer(trimmed)
        .filter(|n| n.to_string() == trimmed)
        .and_then(|n| u8::try_from(n).ok())
        .filter(|n| PRESET_TIPS.contains(n));
    match preset {
        Some(p) => Action::SelectPreset(p),
        None => Action::CustomTipInput(text.to_string()),
    }
}

/// Run every action and return the final calculator state.
pub fn evaluate(config: &ResolvedConfig, inputs: &HeadlessInputs) -> TipCalculator {
    let mut app = TipCalculator::from_config(config);
    for action in inputs.actions() {
        update(&mut app, action);
    }
    app
}

/// Render the summary in the requested format.
pub fn render(app: &TipCalculator, format: OutputFormat) -> serde_json::Result<String> {
    let summary = Summary::from(app);
    info!(
        "Headless result: tip={} total={} errors={}",
        summary.tip_amount_display,
        summary.total_per_person_display,
        summary.errors.len()
    );
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => summary.to_json(),
    }
}
