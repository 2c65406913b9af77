//! Range command handler.

use anyhow::{Context, Result};

use crate::cli::RangeArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, RangeListing};
use crate::domain::{PeriodLabel, PeriodRecord};
use crate::picker::PeriodPicker;

pub fn handle_range(args: &RangeArgs, picker: &mut PeriodPicker, config: &Config) -> Result<()> {
    let label: PeriodLabel = args
        .period
        .parse()
        .with_context(|| format!("unknown period: {}", args.period))?;

    let rows: Vec<PeriodRecord> = picker
        .backing()
        .iter()
        .filter(|r| r.label() == label)
        .cloned()
        .collect();
    picker.select(&rows);

    let selection = picker.selection();
    let (Some(start), Some(end)) = (selection.start(), selection.end()) else {
        // Capability never loaded for this activation
        println!("No period data.");
        return Ok(());
    };

    match config.output_format(args.format) {
        OutputFormat::Human => {
            println!("{label}");
            println!("start: {}", crate::calendar::format_machine(start));
            println!("end:   {}", crate::calendar::format_machine(end));
        }
        OutputFormat::Json => {
            let listing = RangeListing {
                period: label.to_string(),
                start: crate::calendar::format_machine(start),
                end: crate::calendar::format_machine(end),
            };
            let output = Output::new(listing);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
