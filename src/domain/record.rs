//! PeriodRecord: one named date range with display and machine renderings.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{format_display, format_machine};
use crate::domain::{DateRange, PeriodLabel};

/// A named reporting period with both human-readable and machine-readable
/// boundary renderings.
///
/// Records are immutable once generated: filtering produces subsets, never
/// edits. The display strings are derived from the boundaries at
/// construction, so they always agree with the machine dates.
///
/// Serialization emits all five fields (label, both display strings, both
/// machine dates), which is the textual form the search filter matches
/// against.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use periods::domain::{DateRange, PeriodLabel, PeriodRecord};
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// let record = PeriodRecord::new(PeriodLabel::LastQuarter, range);
/// assert_eq!(record.start_display(), "January 1st 2024");
/// assert_eq!(record.end_machine(), "2024-03-31");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRecord {
    #[serde(rename = "period")]
    label: PeriodLabel,
    start_display: String,
    end_display: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl PeriodRecord {
    /// Creates a record for `label` spanning `range`, rendering both
    /// boundary formats.
    pub fn new(label: PeriodLabel, range: DateRange) -> Self {
        PeriodRecord {
            label,
            start_display: format_display(range.start()),
            end_display: format_display(range.end()),
            start: range.start(),
            end: range.end(),
        }
    }

    /// Returns the period's label.
    pub fn label(&self) -> PeriodLabel {
        self.label
    }

    /// Returns the first day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the human-readable start boundary ("January 1st 2024").
    pub fn start_display(&self) -> &str {
        &self.start_display
    }

    /// Returns the human-readable end boundary.
    pub fn end_display(&self) -> &str {
        &self.end_display
    }

    /// Returns the machine-readable start boundary (`YYYY-MM-DD`).
    pub fn start_machine(&self) -> String {
        format_machine(self.start)
    }

    /// Returns the machine-readable end boundary (`YYYY-MM-DD`).
    pub fn end_machine(&self) -> String {
        format_machine(self.end)
    }

    /// Returns the inclusive range covered by the period.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn display_strings_agree_with_boundaries() {
        let record = PeriodRecord::new(
            PeriodLabel::ThisMonth,
            DateRange::new(d(2024, 5, 1), d(2024, 5, 31)),
        );
        assert_eq!(record.start_display(), "May 1st 2024");
        assert_eq!(record.end_display(), "May 31st 2024");
        assert_eq!(record.start_machine(), "2024-05-01");
        assert_eq!(record.end_machine(), "2024-05-31");
    }

    #[test]
    fn serialization_carries_all_fields() {
        let record = PeriodRecord::new(
            PeriodLabel::LastQuarter,
            DateRange::new(d(2024, 1, 1), d(2024, 3, 31)),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"period\":\"Last Quarter\""));
        assert!(json.contains("\"start_display\":\"January 1st 2024\""));
        assert!(json.contains("\"end_display\":\"March 31st 2024\""));
        assert!(json.contains("\"start\":\"2024-01-01\""));
        assert!(json.contains("\"end\":\"2024-03-31\""));
    }
}
