//! Card number formatting utilities.
//!
//! [`format`] groups whatever characters it is given, four at a time, so it
//! works equally on sanitized digits and on masked output such as
//! `************1111`. The brand-aware variants sanitize first and group at
//! the brand's gap offsets.
//!
//! # Example
//!
//! ```
//! use cardcheck::format::{format, format_card_number, format_with_separator};
//!
//! assert_eq!(format("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
//!
//! // American Express groups 4-6-5
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//! ```

use crate::brand::BrandDefinition;
use crate::detect::detect_brand;
use crate::sanitize::sanitize;

/// Inserts a space after every 4 characters, without a trailing space.
///
/// # Example
///
/// ```
/// use cardcheck::format;
///
/// assert_eq!(format("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format("4222222222222"), "4222 2222 2222 2");
/// assert_eq!(format("4111"), "4111");
/// ```
#[inline]
pub fn format(number: &str) -> String {
    format_with_separator(number, " ")
}

/// Inserts `separator` after every 4 characters, without a trailing one.
pub fn format_with_separator(number: &str, separator: &str) -> String {
    let len = number.chars().count();
    let mut result = String::with_capacity(number.len() + (len / 4) * separator.len());

    for (i, c) in number.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Formats a card number using the grouping of `brand`.
///
/// The input is sanitized first. A separator goes before each gap offset
/// that falls inside the number; brands without gaps fall back to groups of
/// four.
///
/// # Example
///
/// ```
/// use cardcheck::format::format_for_brand;
/// use cardcheck::{BrandId, BrandTable};
///
/// let amex = BrandTable::builtin().get(BrandId::AmericanExpress).unwrap();
/// assert_eq!(format_for_brand("3782-822463-10005", amex), "3782 822463 10005");
/// ```
pub fn format_for_brand(input: &str, brand: &BrandDefinition) -> String {
    format_for_brand_with_separator(input, brand, " ")
}

/// Formats a card number for `brand` with a custom separator.
pub fn format_for_brand_with_separator(
    input: &str,
    brand: &BrandDefinition,
    separator: &str,
) -> String {
    let digits = sanitize(input);

    if brand.gaps.is_empty() {
        return format_with_separator(&digits, separator);
    }

    let mut result = String::with_capacity(digits.len() + brand.gaps.len() * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && brand.gaps.contains(&i) {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Formats a card number using the grouping of its detected brand.
///
/// Numbers of unknown brand are grouped by four.
pub fn format_card_number(input: &str) -> String {
    let digits = sanitize(input);
    match detect_brand(&digits).definition() {
        Some(brand) => format_for_brand(&digits, brand),
        None => format(&digits),
    }
}
