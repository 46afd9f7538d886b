//! Birth date parsing and validation.
//!
//! Dates arrive as `DD/MM/YYYY` text from the login/profile form. A
//! [`BirthDate`] can only be constructed through validation, so the
//! calculator functions downstream never see a malformed date.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A validated Gregorian birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate {
    day: u32,
    month: u32,
    year: i32,
}

impl BirthDate {
    /// Creates a birth date from components, enforcing calendar correctness
    /// and the accepted year range (1900 to the current year).
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month as i32));
        }

        let current_year = Utc::now().year();
        if year < MIN_BIRTH_YEAR || year > current_year {
            return Err(ValidationError::out_of_range(
                "year",
                MIN_BIRTH_YEAR,
                current_year,
                year,
            ));
        }

        let max_day = days_in_month(month, year);
        if day < 1 || day > max_day {
            return Err(ValidationError::out_of_range(
                "day",
                1,
                max_day as i32,
                day as i32,
            ));
        }

        Ok(Self { day, month, year })
    }

    /// Parses and validates a `DD/MM/YYYY` string.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = text.split('/').collect();

        let &[day_text, month_text, year_text] = parts.as_slice() else {
            return Err(ValidationError::invalid_format(
                "birth_date",
                "expected DD/MM/YYYY",
            ));
        };

        if day_text.len() != 2 || month_text.len() != 2 || year_text.len() != 4 {
            return Err(ValidationError::invalid_format(
                "birth_date",
                "expected DD/MM/YYYY",
            ));
        }

        let day = parse_segment(day_text, "day")?;
        let month = parse_segment(month_text, "month")?;
        let year = parse_segment(year_text, "year")? as i32;

        Self::new(day, month, year)
    }

    /// Boundary predicate used by form/HTTP validation.
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Four-digit year.
    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Number of days in the given month, leap-year aware.
///
/// Computed as the predecessor of the first day of the following month.
/// `month` must already be in 1-12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

fn parse_segment(text: &str, field: &'static str) -> Result<u32, ValidationError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(field, "not a number"));
    }
    text.parse::<u32>()
        .map_err(|_| ValidationError::invalid_format(field, "not a number"))
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_string()
    }
}
