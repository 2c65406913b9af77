//! List command handler.

use anyhow::{Context, Result};

use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::PeriodRecord;
use crate::picker::{PeriodPicker, filter_periods};

pub fn handle_list(args: &ListArgs, picker: &PeriodPicker, config: &Config) -> Result<()> {
    // A one-shot command has no previous view to retain, so an invalid
    // pattern is reported as a user error instead
    let records: Vec<PeriodRecord> = match &args.filter {
        Some(pattern) => filter_periods(pattern, picker.backing())
            .with_context(|| "failed to filter periods".to_string())?,
        None => picker.backing().to_vec(),
    };

    match config.output_format(args.format) {
        OutputFormat::Human => {
            if records.is_empty() {
                println!("No periods found.");
            } else {
                println!("{:<16}  {:<20}  {:<20}", "Period", "Start", "End");
                println!(
                    "{:<16}  {:<20}  {:<20}",
                    "----------------", "--------------------", "--------------------"
                );

                for record in &records {
                    println!(
                        "{:<16}  {:<20}  {:<20}",
                        record.label(),
                        record.start_display(),
                        record.end_display()
                    );
                }

                println!();
                println!("{} period(s)", records.len());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(&records);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
