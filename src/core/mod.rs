//! # Core Application Logic
//!
//! This module contains the calculator's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Headless  │
//!            │  Adapter   │            │  (--bill   │
//!            │ (ratatui)  │            │   --tip…)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `TipCalculator` struct, all form state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`validation`]: Per-field checks and their messages
//! - [`split`]: Derivation of the per-person amounts
//! - [`numeric`]: Lenient prefix number parsing
//! - [`summary`]: Serializable snapshot for headless output
//! - [`config`]: TOML config with env and CLI overrides (the one I/O exception)

pub mod action;
pub mod config;
pub mod numeric;
pub mod split;
pub mod state;
pub mod summary;
pub mod validation;
