//! Card number masking for display and logging.
//!
//! Masking replaces all but the last few digits with `*`. When the request
//! cannot be honoured (more visible digits than the number has) the caller
//! gets a [`MaskError`]; the unmasked input is never handed back in its
//! place.
//!
//! # Example
//!
//! ```
//! use cardcheck::mask::{mask, mask_digits};
//!
//! assert_eq!(mask("4111-1111-1111-1111", 4).unwrap(), "**** **** **** 1111");
//! assert_eq!(mask_digits("4111111111111111", 4).unwrap(), "************1111");
//! assert!(mask("123", 4).is_err());
//! ```

use crate::error::MaskError;
use crate::format::format;
use crate::sanitize::sanitize;

/// Character substituted for hidden digits.
pub const MASK_CHAR: char = '*';

/// Masks a digit string, keeping the last `visible_digits` characters.
///
/// The output is ungrouped and has the same length as the input. With
/// `visible_digits == 0` every character is masked.
///
/// # Errors
///
/// [`MaskError::VisibleDigitsExceedLength`] if `visible_digits` is larger
/// than the input.
pub fn mask_digits(digits: &str, visible_digits: usize) -> Result<String, MaskError> {
    let length = digits.chars().count();
    if visible_digits > length {
        return Err(MaskError::VisibleDigitsExceedLength {
            visible: visible_digits,
            length,
        });
    }

    let hidden = length - visible_digits;
    let mut result = String::with_capacity(digits.len());
    for (i, c) in digits.chars().enumerate() {
        result.push(if i < hidden { MASK_CHAR } else { c });
    }

    Ok(result)
}

/// Masks a card number for display: digits 1..n-k hidden, last
/// `visible_digits` shown, grouped by four.
///
/// Separators already present in `number` are dropped before masking, so
/// `"4111-1111-1111-1111"` and `"4111111111111111"` mask identically.
///
/// # Errors
///
/// [`MaskError::VisibleDigitsExceedLength`] if `visible_digits` is larger
/// than the number of digits in `number`.
///
/// # Example
///
/// ```
/// use cardcheck::mask;
///
/// assert_eq!(mask("4111111111111111", 4).unwrap(), "**** **** **** 1111");
/// assert_eq!(mask("378282246310005", 4).unwrap(), "**** **** ***0 005");
/// ```
pub fn mask(number: &str, visible_digits: usize) -> Result<String, MaskError> {
    let digits = sanitize(number);
    let masked = mask_digits(&digits, visible_digits)?;
    Ok(format(&masked))
}

/// Returns the last four digits of a card number, or `None` if it has fewer
/// than four.
#[inline]
pub fn last_four(number: &str) -> Option<String> {
    let digits = sanitize(number);
    digits
        .len()
        .checked_sub(4)
        .map(|start| digits[start..].to_string())
}
