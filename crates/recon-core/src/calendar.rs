//! Business-day calendar checks for settlement date columns.
//!
//! Classification is pure: unparseable input becomes `DayClass::Invalid`
//! with a reason, never an error. Holidays are recurring month-day pairs;
//! the default set is the Brazilian national calendar used by B3.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

use recon_ingest::{Dataset, is_missing, render_value};
use recon_model::{DateRowStatus, DayClass, Result};

/// Brazilian national holidays as (day, month), recurring yearly.
const BRAZIL_HOLIDAYS: [(u32, u32); 8] = [
    (1, 1),   // Confraternização Universal
    (21, 4),  // Tiradentes
    (1, 5),   // Dia do Trabalho
    (7, 9),   // Independência
    (12, 10), // Nossa Senhora Aparecida
    (2, 11),  // Finados
    (15, 11), // Proclamação da República
    (25, 12), // Natal
];

/// Date formats accepted from spreadsheet exports. Brazilian sources use
/// day-first forms; ISO covers system exports and datetime cells.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M:%S"];

#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: Vec<(u32, u32)>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::brazil()
    }
}

impl HolidayCalendar {
    /// Calendar with the fixed Brazilian national holiday set.
    pub fn brazil() -> Self {
        Self {
            holidays: BRAZIL_HOLIDAYS.to_vec(),
        }
    }

    /// Calendar with a custom recurring (day, month) holiday set.
    pub fn with_holidays(holidays: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&(date.day(), date.month()))
    }

    /// Classify a raw cell as business day, weekend, holiday, or invalid.
    pub fn classify(&self, raw: &str) -> DayClass {
        let Some(date) = parse_date(raw) else {
            let reason = if raw.trim().is_empty() {
                "missing date".to_string()
            } else {
                format!("unparseable date `{}`", raw.trim())
            };
            return DayClass::Invalid(reason);
        };
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            DayClass::Weekend
        } else if self.is_holiday(date) {
            DayClass::Holiday
        } else {
            DayClass::BusinessDay
        }
    }
}

/// Parse a date cell, trying plain date forms first, then datetimes.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// One row of the paired date analysis.
#[derive(Debug, Clone)]
pub struct DateRow {
    pub index: usize,
    pub left: Option<String>,
    pub right: Option<String>,
    pub left_class: DayClass,
    pub right_class: DayClass,
    pub status: DateRowStatus,
}

/// Result of analyzing a date column from each dataset side by side.
#[derive(Debug, Clone)]
pub struct DateAnalysis {
    pub left_column: String,
    pub right_column: String,
    pub rows: Vec<DateRow>,
    /// Rows whose status is anything but OK.
    pub problems: usize,
}

/// Pair the two date columns row by row and classify each side.
///
/// Rows run to the longer column's length; a side past its own length is
/// classified as missing. Selections that name absent columns fail with
/// `UnknownColumn`.
pub fn analyze_dates(
    left: &Dataset,
    right: &Dataset,
    left_column: &str,
    right_column: &str,
    calendar: &HolidayCalendar,
) -> Result<DateAnalysis> {
    let left_values = left.column(left_column)?;
    let right_values = right.column(right_column)?;
    let height = left.height().max(right.height());

    let mut rows = Vec::with_capacity(height);
    let mut problems = 0usize;
    for index in 0..height {
        let left_cell = (index < left.height()).then(|| left.value(left_values, index));
        let right_cell = (index < right.height()).then(|| right.value(right_values, index));

        let left_text = left_cell
            .as_ref()
            .filter(|value| !is_missing(value))
            .map(render_value);
        let right_text = right_cell
            .as_ref()
            .filter(|value| !is_missing(value))
            .map(render_value);

        let left_class = calendar.classify(left_text.as_deref().unwrap_or(""));
        let right_class = calendar.classify(right_text.as_deref().unwrap_or(""));

        let status = match (left_class.is_business_day(), right_class.is_business_day()) {
            (true, true) => DateRowStatus::Ok,
            (false, false) => DateRowStatus::BothNonBusiness,
            (false, true) => DateRowStatus::LeftNonBusiness {
                reason: left_class.reason().to_string(),
            },
            (true, false) => DateRowStatus::RightNonBusiness {
                reason: right_class.reason().to_string(),
            },
        };
        if !status.is_ok() {
            problems += 1;
        }
        rows.push(DateRow {
            index,
            left: left_text,
            right: right_text,
            left_class,
            right_class,
            status,
        });
    }
    debug!(
        left = %left.label,
        right = %right.label,
        rows = rows.len(),
        problems,
        "date analysis complete"
    );
    Ok(DateAnalysis {
        left_column: left_column.to_string(),
        right_column: right_column.to_string(),
        rows,
        problems,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_year_is_a_holiday() {
        let calendar = HolidayCalendar::brazil();
        assert_eq!(calendar.classify("2024-01-01"), DayClass::Holiday);
    }

    #[test]
    fn saturday_is_weekend() {
        // 2024-03-09 fell on a Saturday.
        let calendar = HolidayCalendar::brazil();
        assert_eq!(calendar.classify("2024-03-09"), DayClass::Weekend);
    }

    #[test]
    fn ordinary_monday_is_business_day() {
        let calendar = HolidayCalendar::brazil();
        assert_eq!(calendar.classify("2024-03-11"), DayClass::BusinessDay);
    }

    #[test]
    fn day_first_formats_parse() {
        assert_eq!(
            parse_date("11/03/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 11)
        );
        assert_eq!(
            parse_date("11-03-2024"),
            NaiveDate::from_ymd_opt(2024, 3, 11)
        );
    }

    #[test]
    fn blank_and_garbage_are_invalid() {
        let calendar = HolidayCalendar::brazil();
        assert!(matches!(calendar.classify(""), DayClass::Invalid(_)));
        assert!(matches!(
            calendar.classify("not-a-date"),
            DayClass::Invalid(_)
        ));
    }

    #[test]
    fn custom_holiday_set_overrides_default() {
        let calendar = HolidayCalendar::with_holidays([(11, 3)]);
        assert_eq!(calendar.classify("2024-03-11"), DayClass::Holiday);
        assert_eq!(calendar.classify("2024-01-01"), DayClass::BusinessDay);
    }
}
