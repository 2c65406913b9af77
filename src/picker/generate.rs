//! The period generator: today's date in, nine named ranges out.

use chrono::NaiveDate;

use crate::calendar::{
    end_of_month, end_of_quarter, end_of_year, months_back, start_of_month, start_of_quarter,
    start_of_year,
};
use crate::domain::{DateRange, PeriodLabel, PeriodRecord};

/// Generates the nine named reporting periods for `today`.
///
/// Pure and infallible; always returns exactly nine records in the
/// canonical display order of [`PeriodLabel::ALL`]. "Previous" units are
/// the units containing `today` minus one month, one quarter, or one year
/// respectively, not offsets from the current unit's boundaries.
pub fn generate_periods(today: NaiveDate) -> Vec<PeriodRecord> {
    let in_prev_year = months_back(today, 12);
    let in_prev_quarter = months_back(today, 3);
    let in_prev_month = months_back(today, 1);

    let record = |label, start, end| PeriodRecord::new(label, DateRange::new(start, end));

    vec![
        record(
            PeriodLabel::LastYear,
            start_of_year(in_prev_year),
            end_of_year(in_prev_year),
        ),
        record(
            PeriodLabel::ThisYear,
            start_of_year(today),
            end_of_year(today),
        ),
        record(PeriodLabel::YearToDate, start_of_year(today), today),
        record(
            PeriodLabel::LastQuarter,
            start_of_quarter(in_prev_quarter),
            end_of_quarter(in_prev_quarter),
        ),
        record(
            PeriodLabel::ThisQuarter,
            start_of_quarter(today),
            end_of_quarter(today),
        ),
        record(PeriodLabel::QuarterToDate, start_of_quarter(today), today),
        record(
            PeriodLabel::LastMonth,
            start_of_month(in_prev_month),
            end_of_month(in_prev_month),
        ),
        record(
            PeriodLabel::ThisMonth,
            start_of_month(today),
            end_of_month(today),
        ),
        record(PeriodLabel::MonthToDate, start_of_month(today), today),
    ]
}
