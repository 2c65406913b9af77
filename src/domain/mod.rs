//! Core types: PeriodLabel, PeriodRecord, DateRange

mod date_range;
mod label;
mod record;

pub use date_range::DateRange;
pub use label::{ParsePeriodLabelError, PeriodLabel};
pub use record::PeriodRecord;
