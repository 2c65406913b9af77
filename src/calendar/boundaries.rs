//! Calendar-unit boundary arithmetic over `NaiveDate`.
//!
//! Start-of-unit is the first day of that unit, end-of-unit the last day.
//! "Previous" units are reached with [`months_back`], which clamps the day
//! of month the way calendar arithmetic requires (March 31 minus one month
//! is the last day of February).

use chrono::{Datelike, Months, NaiveDate};

/// First day of the year containing `date`.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("January 1st exists in every year")
}

/// Last day of the year containing `date`.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).expect("December 31st exists in every year")
}

/// First day of the quarter containing `date`.
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let month = quarter_start_month(date.month());
    NaiveDate::from_ymd_opt(date.year(), month, 1).expect("quarter start month is valid")
}

/// Last day of the quarter containing `date`.
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    last_day_after(start_of_quarter(date), 3)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("the 1st exists in every month")
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    last_day_after(start_of_month(date), 1)
}

/// `date` minus `months` calendar months, clamping the day of month.
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .expect("date stays within the supported calendar range")
}

/// First month of the quarter containing `month` (1, 4, 7, or 10).
fn quarter_start_month(month: u32) -> u32 {
    (month - 1) / 3 * 3 + 1
}

/// Day before the start of the unit `months` months after `unit_start`.
fn last_day_after(unit_start: NaiveDate, months: u32) -> NaiveDate {
    unit_start
        .checked_add_months(Months::new(months))
        .expect("date stays within the supported calendar range")
        .pred_opt()
        .expect("the day before a unit start exists")
}
