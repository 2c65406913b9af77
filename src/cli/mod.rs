//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use output::OutputFormat;

/// periods - named reporting date ranges with search and selection
#[derive(Parser, Debug)]
#[command(name = "periods", version, about, long_about = None)]
pub struct Cli {
    /// Pin "today" to a fixed date (YYYY-MM-DD) instead of the system clock
    #[arg(long, global = true, value_name = "DATE")]
    pub on: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the named periods, optionally filtered
    #[command(name = "ls")]
    List(ListArgs),

    /// Resolve a named period to its start and end dates
    Range(RangeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter pattern (case-insensitive regex matched against each
    /// period's serialized form, dates included)
    pub filter: Option<String>,

    /// Output format (overrides the config file default)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `range` command
#[derive(Parser, Debug)]
pub struct RangeArgs {
    /// Period name, e.g. "last month" or "Quarter-to-date"
    pub period: String,

    /// Output format (overrides the config file default)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
