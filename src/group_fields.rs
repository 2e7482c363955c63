use chrono::{NaiveDate, NaiveTime, ParseError};
use std::fmt;
use std::num::ParseIntError;

pub const FIELD_COUNT: usize = 11;

// Positions in a raw group row. Column 0 holds the subject name, which the
// group name in column 9 supersedes, so it is never read.
pub const CLASS_TYPE: usize = 1;
pub const TEACHER: usize = 2;
pub const WEEKDAY: usize = 3;
pub const START_TIME: usize = 4;
pub const END_TIME: usize = 5;
pub const PLACE: usize = 6;
pub const START_DATE: usize = 7;
pub const FREQUENCY: usize = 8;
pub const NAME: usize = 9;
pub const CAPACITY: usize = 10;

/// 24-hour clock, e.g. `14:00`. The hour may have one digit, minutes always two.
pub const TIME_LAYOUT: &str = "%H:%M";
/// Day, month, two-digit year, e.g. `05-03-20`. Every part has exactly two digits.
pub const DATE_LAYOUT: &str = "DD-MM-YY";

// Two-digit years from here on belong to the 1900s.
const CENTURY_PIVOT: i32 = 69;

/// Why a time or date column does not hold a valid value.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Wrong number of digits, stray whitespace or separators.
    Malformed { layout: &'static str },
    /// Right shape, but not a real time or calendar date.
    OutOfRange(ParseError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Malformed { layout } => write!(f, "does not match {layout}"),
            LayoutError::OutOfRange(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Malformed { .. } => None,
            LayoutError::OutOfRange(err) => Some(err),
        }
    }
}

impl From<ParseError> for LayoutError {
    fn from(value: ParseError) -> Self {
        Self::OutOfRange(value)
    }
}

fn all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_time(value: &str) -> Result<NaiveTime, LayoutError> {
    let malformed = LayoutError::Malformed { layout: "HH:MM" };
    let (hour, minute) = value.split_once(':').ok_or(malformed.clone())?;
    if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
        return Err(malformed);
    }
    Ok(NaiveTime::parse_from_str(value, TIME_LAYOUT)?)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, LayoutError> {
    let malformed = LayoutError::Malformed {
        layout: DATE_LAYOUT,
    };
    let parts: Vec<&str> = value.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(malformed);
    };
    if ![day, month, year]
        .iter()
        .all(|part| part.len() == 2 && all_digits(part))
    {
        return Err(malformed);
    }

    let short_year: i32 = year.parse().map_err(|_| malformed.clone())?;
    let full_year = if short_year >= CENTURY_PIVOT {
        1900 + short_year
    } else {
        2000 + short_year
    };
    let expanded = format!("{day}-{month}-{full_year:04}");
    Ok(NaiveDate::parse_from_str(&expanded, "%d-%m-%Y")?)
}

pub fn parse_number(value: &str) -> Result<i64, ParseIntError> {
    value.parse::<i64>()
}
