//! The selection holder: the chosen start and end dates.

use chrono::NaiveDate;

use crate::domain::PeriodRecord;

/// The currently chosen date range, initially unset.
///
/// A selection event carrying several records collapses to the first one;
/// an event carrying none is a no-op. Re-selection overwrites the previous
/// choice; there is no clear operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Selection::default()
    }

    /// Takes both boundaries from the first of `rows`, if any.
    pub fn select(&mut self, rows: &[PeriodRecord]) {
        if let Some(first) = rows.first() {
            self.start = Some(first.start());
            self.end = Some(first.end());
        }
    }

    /// Returns the selected start date, if a selection has been made.
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the selected end date, if a selection has been made.
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns true once a selection has been made.
    pub fn is_set(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateRange, PeriodLabel};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(label: PeriodLabel, start: NaiveDate, end: NaiveDate) -> PeriodRecord {
        PeriodRecord::new(label, DateRange::new(start, end))
    }

    #[test]
    fn starts_unset() {
        let selection = Selection::new();
        assert!(!selection.is_set());
        assert_eq!(selection.start(), None);
        assert_eq!(selection.end(), None);
    }

    #[test]
    fn select_takes_both_boundaries() {
        let mut selection = Selection::new();
        selection.select(&[record(
            PeriodLabel::LastMonth,
            d(2024, 4, 1),
            d(2024, 4, 30),
        )]);
        assert_eq!(selection.start(), Some(d(2024, 4, 1)));
        assert_eq!(selection.end(), Some(d(2024, 4, 30)));
        assert!(selection.is_set());
    }

    #[test]
    fn multiple_rows_collapse_to_first() {
        let mut selection = Selection::new();
        selection.select(&[
            record(PeriodLabel::ThisMonth, d(2024, 5, 1), d(2024, 5, 31)),
            record(PeriodLabel::ThisYear, d(2024, 1, 1), d(2024, 12, 31)),
        ]);
        assert_eq!(selection.start(), Some(d(2024, 5, 1)));
        assert_eq!(selection.end(), Some(d(2024, 5, 31)));
    }

    #[test]
    fn empty_selection_event_is_a_no_op() {
        let mut selection = Selection::new();
        selection.select(&[record(
            PeriodLabel::ThisMonth,
            d(2024, 5, 1),
            d(2024, 5, 31),
        )]);
        selection.select(&[]);
        assert_eq!(selection.start(), Some(d(2024, 5, 1)));
        assert_eq!(selection.end(), Some(d(2024, 5, 31)));
    }

    #[test]
    fn reselection_overwrites() {
        let mut selection = Selection::new();
        selection.select(&[record(
            PeriodLabel::ThisMonth,
            d(2024, 5, 1),
            d(2024, 5, 31),
        )]);
        selection.select(&[record(
            PeriodLabel::LastYear,
            d(2023, 1, 1),
            d(2023, 12, 31),
        )]);
        assert_eq!(selection.start(), Some(d(2023, 1, 1)));
        assert_eq!(selection.end(), Some(d(2023, 12, 31)));
    }
}
