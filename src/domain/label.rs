//! The fixed vocabulary of period names.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the nine named reporting periods.
///
/// The variant order is the canonical display order: year periods first,
/// then quarter, then month, each group as last / this / to-date.
///
/// # Examples
///
/// ```
/// use periods::domain::PeriodLabel;
///
/// let label: PeriodLabel = "last month".parse().unwrap();
/// assert_eq!(label, PeriodLabel::LastMonth);
/// assert_eq!(label.as_str(), "Last Month");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PeriodLabel {
    #[serde(rename = "Last Year")]
    LastYear,
    #[serde(rename = "This Year")]
    ThisYear,
    #[serde(rename = "Year-to-date")]
    YearToDate,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "This Quarter")]
    ThisQuarter,
    #[serde(rename = "Quarter-to-date")]
    QuarterToDate,
    #[serde(rename = "Last Month")]
    LastMonth,
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Month-to-date")]
    MonthToDate,
}

/// Error returned when parsing an unknown period name.
#[derive(Debug, Clone)]
pub struct ParsePeriodLabelError(String);

impl fmt::Display for ParsePeriodLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown period name: {}", self.0)
    }
}

impl std::error::Error for ParsePeriodLabelError {}

impl PeriodLabel {
    /// All nine labels in canonical display order.
    pub const ALL: [PeriodLabel; 9] = [
        PeriodLabel::LastYear,
        PeriodLabel::ThisYear,
        PeriodLabel::YearToDate,
        PeriodLabel::LastQuarter,
        PeriodLabel::ThisQuarter,
        PeriodLabel::QuarterToDate,
        PeriodLabel::LastMonth,
        PeriodLabel::ThisMonth,
        PeriodLabel::MonthToDate,
    ];

    /// Returns the display name of the period.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodLabel::LastYear => "Last Year",
            PeriodLabel::ThisYear => "This Year",
            PeriodLabel::YearToDate => "Year-to-date",
            PeriodLabel::LastQuarter => "Last Quarter",
            PeriodLabel::ThisQuarter => "This Quarter",
            PeriodLabel::QuarterToDate => "Quarter-to-date",
            PeriodLabel::LastMonth => "Last Month",
            PeriodLabel::ThisMonth => "This Month",
            PeriodLabel::MonthToDate => "Month-to-date",
        }
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeriodLabel {
    type Err = ParsePeriodLabelError;

    /// Parses a period name case-insensitively; spaces and hyphens are
    /// interchangeable ("last month", "Last-Month", "LAST MONTH").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        match normalized.as_str() {
            "last-year" => Ok(PeriodLabel::LastYear),
            "this-year" => Ok(PeriodLabel::ThisYear),
            "year-to-date" => Ok(PeriodLabel::YearToDate),
            "last-quarter" => Ok(PeriodLabel::LastQuarter),
            "this-quarter" => Ok(PeriodLabel::ThisQuarter),
            "quarter-to-date" => Ok(PeriodLabel::QuarterToDate),
            "last-month" => Ok(PeriodLabel::LastMonth),
            "this-month" => Ok(PeriodLabel::ThisMonth),
            "month-to-date" => Ok(PeriodLabel::MonthToDate),
            _ => Err(ParsePeriodLabelError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_display_order() {
        let names: Vec<&str> = PeriodLabel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Last Year",
                "This Year",
                "Year-to-date",
                "Last Quarter",
                "This Quarter",
                "Quarter-to-date",
                "Last Month",
                "This Month",
                "Month-to-date",
            ]
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "LAST QUARTER".parse::<PeriodLabel>().unwrap(),
            PeriodLabel::LastQuarter
        );
        assert_eq!(
            "year-TO-date".parse::<PeriodLabel>().unwrap(),
            PeriodLabel::YearToDate
        );
    }

    #[test]
    fn parse_accepts_spaces_or_hyphens() {
        assert_eq!(
            "month to date".parse::<PeriodLabel>().unwrap(),
            PeriodLabel::MonthToDate
        );
        assert_eq!(
            "this-month".parse::<PeriodLabel>().unwrap(),
            PeriodLabel::ThisMonth
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("next month".parse::<PeriodLabel>().is_err());
        assert!("".parse::<PeriodLabel>().is_err());
    }

    #[test]
    fn serializes_to_display_name() {
        let json = serde_json::to_string(&PeriodLabel::QuarterToDate).unwrap();
        assert_eq!(json, "\"Quarter-to-date\"");
    }
}
