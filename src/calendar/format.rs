//! Boundary date rendering: human-readable and machine-readable forms.

use chrono::{Datelike, NaiveDate};

/// Renders a date as "Month Dth Year", e.g. "January 1st 2024".
pub fn format_display(date: NaiveDate) -> String {
    format!(
        "{} {}{} {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_machine(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// English ordinal suffix for a day of month (1st, 2nd, 3rd, 4th, 11th...).
fn ordinal_suffix(day: u32) -> &'static str {
    // 11th-13th take "th" despite ending in 1-3
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
