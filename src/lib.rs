//! tipsplit library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How headless mode prints its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
