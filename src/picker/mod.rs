//! The period picker component: generation, search, and selection.

mod filter;
mod generate;
mod selection;

pub use filter::{PatternError, filter_periods};
pub use generate::generate_periods;
pub use selection::Selection;

use tracing::{debug, warn};

use crate::calendar::{Calendar, CalendarSource};
use crate::domain::PeriodRecord;

/// A reporting-period picker.
///
/// Owns the authoritative backing list of generated periods, the currently
/// displayed subset, and the user's selection. Single-writer: the lists
/// change only through [`activate`](Self::activate) and
/// [`search`](Self::search), the selection only through
/// [`select`](Self::select).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use periods::calendar::FixedCalendarSource;
/// use periods::picker::PeriodPicker;
///
/// let mut picker = PeriodPicker::new();
/// picker.activate(&FixedCalendarSource::new(
///     NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
/// ));
/// assert_eq!(picker.displayed().len(), 9);
///
/// picker.search("quarter");
/// assert_eq!(picker.displayed().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct PeriodPicker {
    backing: Vec<PeriodRecord>,
    displayed: Vec<PeriodRecord>,
    selection: Selection,
}

impl PeriodPicker {
    /// Creates an empty, unactivated picker.
    pub fn new() -> Self {
        PeriodPicker::default()
    }

    /// Acquires the calendar capability and generates the period lists.
    ///
    /// If acquisition fails the failure is logged and the picker stays
    /// empty for this activation; there is no retry. The host keeps
    /// running either way.
    pub fn activate<S: CalendarSource>(&mut self, source: &S) {
        match source.acquire() {
            Ok(calendar) => {
                let records = generate_periods(calendar.today());
                self.backing = records.clone();
                self.displayed = records;
            }
            Err(err) => {
                warn!(error = %err, "calendar capability failed to load, period list stays empty");
            }
        }
    }

    /// Filters the displayed list from the backing list.
    ///
    /// An invalid pattern leaves the currently displayed list unchanged
    /// rather than clearing it.
    pub fn search(&mut self, term: &str) {
        match filter_periods(term, &self.backing) {
            Ok(results) => self.displayed = results,
            Err(err) => {
                debug!(error = %err, "invalid search pattern, keeping current view");
            }
        }
    }

    /// Applies a selection event to the selection holder.
    pub fn select(&mut self, rows: &[PeriodRecord]) {
        self.selection.select(rows);
    }

    /// Returns the currently displayed records.
    pub fn displayed(&self) -> &[PeriodRecord] {
        &self.displayed
    }

    /// Returns the full backing list.
    pub fn backing(&self) -> &[PeriodRecord] {
        &self.backing
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns true once activation has populated the period lists.
    pub fn is_populated(&self) -> bool {
        !self.backing.is_empty()
    }
}
