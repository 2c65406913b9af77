//! Free-text filtering over generated period records.

use regex::RegexBuilder;
use thiserror::Error;

use crate::domain::PeriodRecord;

/// Error returned when a filter pattern is not valid regex syntax.
#[derive(Debug, Error)]
#[error("invalid filter pattern '{pattern}': {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    /// Returns the offending pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Filters `backing` down to the records whose serialized form matches
/// `pattern`, preserving order.
///
/// The pattern is a case-insensitive regex tested against each record's
/// full JSON serialization, so it matches partial date strings and display
/// text as well as period names. An empty pattern matches every record.
///
/// # Errors
///
/// Returns [`PatternError`] if the pattern is not valid regex syntax; the
/// caller chooses the recovery policy.
pub fn filter_periods(
    pattern: &str,
    backing: &[PeriodRecord],
) -> Result<Vec<PeriodRecord>, PatternError> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;

    Ok(backing
        .iter()
        .filter(|record| regex.is_match(&serialized(record)))
        .cloned()
        .collect())
}

/// The textual form a pattern is matched against: the record's full JSON
/// serialization, all fields included.
fn serialized(record: &PeriodRecord) -> String {
    serde_json::to_string(record).expect("period records serialize to JSON")
}
