//! Calendar-date parsing and formatting conveniences.
//!
//! Thin wrappers over [`chrono`]'s `NaiveDate`: parse the common
//! `yyyy-MM-dd` shape (or an explicit format), build a date from validated
//! year/month/day components, and render the short ISO form back out.
//! Year, month, and day accessors come from the re-exported [`Datelike`]
//! trait.
//!
//! # Examples
//!
//! ```rust
//! use sequery::date::{Datelike, parse_date, short_date_string};
//!
//! let date = parse_date("2014-06-06")?;
//! assert_eq!((date.year(), date.month(), date.day()), (2014, 6, 6));
//! assert_eq!(short_date_string(date), "2014-06-06");
//! # Ok::<(), sequery::date::DateError>(())
//! ```

pub use chrono::{Datelike, NaiveDate};

use thiserror::Error;

/// The short ISO date format, `yyyy-MM-dd`.
pub const SHORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Failure to produce a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The text did not match the expected format.
    #[error("invalid date string: {0}")]
    Parse(#[from] chrono::ParseError),

    /// The components name no calendar date (such as month 13).
    #[error("no calendar date for {year:04}-{month:02}-{day:02}")]
    OutOfRange {
        /// The rejected year.
        year: i32,
        /// The rejected month.
        month: u32,
        /// The rejected day.
        day: u32,
    },
}

/// Parses a `yyyy-MM-dd` date string.
///
/// # Errors
///
/// Returns [`DateError::Parse`] when `text` does not match the format.
///
/// # Examples
///
/// ```rust
/// use sequery::date::parse_date;
///
/// assert!(parse_date("2014-06-06").is_ok());
/// assert!(parse_date("06/06/2014").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    parse_date_with(text, SHORT_DATE_FORMAT)
}

/// Parses a date string against an explicit [`chrono` format string].
///
/// # Errors
///
/// Returns [`DateError::Parse`] when `text` does not match `format`.
///
/// # Examples
///
/// ```rust
/// use sequery::date::parse_date_with;
///
/// assert!(parse_date_with("06/06/2014", "%d/%m/%Y").is_ok());
/// ```
///
/// [`chrono` format string]: chrono::format::strftime
pub fn parse_date_with(text: &str, format: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(text, format).map_err(DateError::from)
}

/// Builds a date from year, month, and day components.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] when the components name no calendar
/// date.
///
/// # Examples
///
/// ```rust
/// use sequery::date::from_ymd;
///
/// assert!(from_ymd(2014, 6, 6).is_ok());
/// assert!(from_ymd(2014, 13, 1).is_err());
/// assert!(from_ymd(2015, 2, 29).is_err());
/// ```
pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::OutOfRange { year, month, day })
}

/// Renders a date in the short ISO form, `yyyy-MM-dd`.
///
/// # Examples
///
/// ```rust
/// use sequery::date::{from_ymd, short_date_string};
///
/// let date = from_ymd(2014, 6, 6)?;
/// assert_eq!(short_date_string(date), "2014-06-06");
/// # Ok::<(), sequery::date::DateError>(())
/// ```
pub fn short_date_string(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}
