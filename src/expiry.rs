//! Card expiry validation.
//!
//! Expiry is evaluated at month granularity: a card is usable through the
//! last day of its expiry month, so a card expiring this month is valid.
//!
//! # Supported Formats
//!
//! [`parse_expiry`] accepts:
//!
//! - `MM/YY` - e.g., "12/25"
//! - `MM/YYYY` - e.g., "12/2025"
//! - `MMYY` - e.g., "1225"
//! - `MMYYYY` - e.g., "122025"
//! - `MM-YY` - e.g., "12-25"
//! - `MM-YYYY` - e.g., "12-2025"
//!
//! # Example
//!
//! ```
//! use cardcheck::expiry::{is_expiry_valid, parse_expiry};
//!
//! assert!(is_expiry_valid(12, 2099));
//! assert!(!is_expiry_valid(13, 2099));
//! assert!(!is_expiry_valid(1, 2020));
//!
//! let expiry = parse_expiry("12/30").unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2030);
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Returns whether a card expiring in `month`/`year` is still valid today.
///
/// Month outside 1-12 is invalid regardless of year.
#[inline]
pub fn is_expiry_valid(month: u8, year: u16) -> bool {
    is_expiry_valid_at(month, year, today())
}

/// Like [`is_expiry_valid`], evaluated against `today` instead of the clock.
///
/// # Example
///
/// ```
/// use cardcheck::expiry::is_expiry_valid_at;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert!(is_expiry_valid_at(10, 2026, today));
/// assert!(!is_expiry_valid_at(9, 2026, today));
/// assert!(is_expiry_valid_at(1, 2027, today));
/// ```
pub fn is_expiry_valid_at(month: u8, year: u16, today: NaiveDate) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }

    let year = i32::from(year);
    let month = u32::from(month);

    match year.cmp(&today.year()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => month >= today.month(),
        std::cmp::Ordering::Less => false,
    }
}

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Four-digit year (e.g., 2025)
    year: u16,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12).
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card expired before the current month.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(today())
    }

    /// Returns true if the card expired before the month of `today`.
    #[inline]
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        !is_expiry_valid_at(self.month, self.year, today)
    }

    /// Returns the number of months until expiration, 0 if already expired
    /// or expiring this month.
    pub fn months_until_expiry(&self) -> u32 {
        self.months_until_expiry_at(today())
    }

    /// Like [`months_until_expiry`](Self::months_until_expiry), counted from
    /// `today`.
    pub fn months_until_expiry_at(&self, today: NaiveDate) -> u32 {
        let expiry_months = i64::from(self.year) * 12 + i64::from(self.month);
        let current_months = i64::from(today.year()) * 12 + i64::from(today.month());

        u32::try_from(expiry_months - current_months).unwrap_or(0)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input string is empty.
    Empty,
    /// Invalid format - couldn't parse month/year.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
    /// The date is before the current month.
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expiry date is empty"),
            Self::InvalidFormat => {
                write!(f, "invalid expiry format (expected MM/YY or MM/YYYY)")
            }
            Self::InvalidMonth(m) => {
                write!(f, "invalid month {}: must be 1-12", m)
            }
            Self::Expired { month, year } => {
                write!(f, "card expired ({:02}/{})", month, year)
            }
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Parses an expiry date string without checking whether it has passed.
///
/// Two-digit years are taken as 20YY.
///
/// # Example
///
/// ```
/// use cardcheck::expiry::parse_expiry;
///
/// let expiry = parse_expiry("01/2030").unwrap();
/// assert_eq!(expiry.month(), 1);
/// assert_eq!(expiry.year(), 2030);
///
/// let expiry = parse_expiry("0628").unwrap();
/// assert_eq!(expiry.year(), 2028);
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    if let Some((month_str, year_str)) = input.split_once('/').or_else(|| input.split_once('-')) {
        return parse_month_year(month_str.trim(), year_str.trim());
    }

    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExpiryError::InvalidFormat);
    }

    match input.len() {
        4 => parse_month_year(&input[0..2], &input[2..4]),
        6 => parse_month_year(&input[0..2], &input[2..6]),
        _ => Err(ExpiryError::InvalidFormat),
    }
}

fn parse_month_year(month_str: &str, year_str: &str) -> Result<ExpiryDate, ExpiryError> {
    let month: u8 = month_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;

    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    let year: u16 = match year_str.len() {
        2 => {
            let yy: u16 = year_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;
            2000 + yy
        }
        4 => year_str.parse().map_err(|_| ExpiryError::InvalidFormat)?,
        _ => return Err(ExpiryError::InvalidFormat),
    };

    Ok(ExpiryDate { month, year })
}

/// Parses an expiry date string and rejects dates before the current month.
///
/// # Example
///
/// ```
/// use cardcheck::expiry::validate_expiry;
///
/// assert!(validate_expiry("12/99").is_ok());
/// assert!(validate_expiry("01/20").is_err());
/// ```
pub fn validate_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired() {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
