//! The injected date/time capability: clock access, calendar-unit
//! boundaries, and boundary formatting.
//!
//! The clock is a trait rather than an ambient global so that period
//! generation can be tested against fixed dates.

mod boundaries;
mod format;

pub use boundaries::{
    end_of_month, end_of_quarter, end_of_year, months_back, start_of_month, start_of_quarter,
    start_of_year,
};
pub use format::{format_display, format_machine};

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// Error returned when the calendar capability cannot be acquired.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("calendar capability unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Clock access: the current date in the host's local calendar.
pub trait Calendar {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// A fallible source of a calendar capability.
///
/// Acquisition happens once per activation; there is no retry. A failed
/// acquisition degrades the caller to an empty data set rather than
/// aborting the host.
pub trait CalendarSource {
    type Capability: Calendar;

    /// Attempts to acquire the calendar capability.
    fn acquire(&self) -> Result<Self::Capability, CapabilityError>;
}

/// Calendar backed by the host system's local clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Source for the system calendar. Acquisition cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct SystemCalendarSource;

impl CalendarSource for SystemCalendarSource {
    type Capability = SystemCalendar;

    fn acquire(&self) -> Result<SystemCalendar, CapabilityError> {
        Ok(SystemCalendar)
    }
}

/// Calendar pinned to a fixed date, for deterministic output and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar {
    today: NaiveDate,
}

impl FixedCalendar {
    /// Creates a calendar that always reports `today`.
    pub fn new(today: NaiveDate) -> Self {
        FixedCalendar { today }
    }
}

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Source for a fixed-date calendar. Acquisition cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendarSource {
    today: NaiveDate,
}

impl FixedCalendarSource {
    /// Creates a source whose calendar always reports `today`.
    pub fn new(today: NaiveDate) -> Self {
        FixedCalendarSource { today }
    }
}

impl CalendarSource for FixedCalendarSource {
    type Capability = FixedCalendar;

    fn acquire(&self) -> Result<FixedCalendar, CapabilityError> {
        Ok(FixedCalendar::new(self.today))
    }
}
