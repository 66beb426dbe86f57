use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use tipsplit::OutputFormat;
use tipsplit::core::config::{self, CliOverrides};
use tipsplit::headless::{self, HeadlessInputs};
use tipsplit::tui;

#[derive(Parser)]
#[command(name = "tipsplit", version, about = "Split a bill and tip between people")]
struct Args {
    /// Bill amount; with --people/--tip, prints the split and exits
    #[arg(long)]
    bill: Option<String>,

    /// Number of people sharing the bill
    #[arg(long)]
    people: Option<String>,

    /// Tip percentage (a preset like 15, or any value in (0, 100])
    #[arg(long)]
    tip: Option<String>,

    /// Output format for headless mode
    #[arg(long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Currency symbol shown before amounts
    #[arg(long)]
    currency: Option<String>,

    /// Config file (default: ~/.tipsplit/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logging isn't up yet, so a config problem is carried forward and
    // reported once the logger exists.
    let (file_config, config_problem) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (config::TipsplitConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        currency_symbol: args.currency,
        log_level: args.log_level,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("tipsplit starting up with config: {:?}", resolved);
    let startup_status = config_problem.map(|e| {
        log::warn!("Using default config: {}", e);
        format!("Config ignored: {e}")
    });

    let inputs = HeadlessInputs {
        bill: args.bill,
        people: args.people,
        tip: args.tip,
    };

    if inputs.is_requested() {
        if let Some(status) = &startup_status {
            eprintln!("{status}");
        }
        let app = headless::evaluate(&resolved, &inputs);
        return match headless::render(&app, args.format) {
            Ok(output) => {
                println!("{}", output.trim_end());
                if app.is_valid() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(e) => {
                log::error!("Failed to render summary: {}", e);
                eprintln!("tipsplit: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match tui::run(&resolved, startup_status) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("tipsplit: {e}");
            ExitCode::FAILURE
        }
    }
}
