//! periods - named reporting date ranges with search and selection

pub mod calendar;
pub mod cli;
pub mod domain;
pub mod picker;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use calendar::{FixedCalendarSource, SystemCalendarSource};
use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_list, handle_range},
};
use picker::PeriodPicker;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match &cli.command {
        Command::List(args) => {
            let picker = activated_picker(cli.on.as_deref())?;
            handle_list(args, &picker, &config)
        }
        Command::Range(args) => {
            let mut picker = activated_picker(cli.on.as_deref())?;
            handle_range(args, &mut picker, &config)
        }
        Command::Completions(args) => handle_completions(args),
    }
}

/// Builds a picker activated against the system clock, or a pinned date
/// when `--on` is given.
fn activated_picker(on: Option<&str>) -> Result<PeriodPicker> {
    let mut picker = PeriodPicker::new();

    match on {
        Some(date_str) => {
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .with_context(|| format!("invalid --on date (expected YYYY-MM-DD): {date_str}"))?;
            picker.activate(&FixedCalendarSource::new(date));
        }
        None => picker.activate(&SystemCalendarSource),
    }

    Ok(picker)
}
