//! Security code (CVV/CVC/CID) validation.
//!
//! Brands disagree on the name of the code printed on the card but agree on
//! its shape: a short all-digit string whose length is brand-specific.
//!
//! # Example
//!
//! ```
//! use cardcheck::{is_cvc_valid, BrandId, BrandTable};
//!
//! let amex = BrandTable::builtin().get(BrandId::AmericanExpress);
//! assert!(!is_cvc_valid("123", amex));
//! assert!(is_cvc_valid("1234", amex));
//!
//! // Without a brand, any brand's code length is accepted.
//! assert!(is_cvc_valid("123", None));
//! ```

use crate::brand::{BrandDefinition, BrandTable};
use std::fmt;

/// Errors that can occur during security code validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvcError {
    /// The input is empty.
    Empty,
    /// The code contains a non-digit character.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },
    /// No brand (or not the given brand) uses a code of this length.
    WrongLength {
        /// Actual length provided.
        length: usize,
        /// Length the brand expects, `None` when no brand was given.
        expected: Option<usize>,
    },
}

impl fmt::Display for CvcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "security code is empty"),
            Self::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }
            Self::WrongLength {
                length,
                expected: Some(expected),
            } => {
                write!(f, "security code must be {} digits, got {}", expected, length)
            }
            Self::WrongLength {
                length,
                expected: None,
            } => {
                write!(f, "no card brand uses a {} digit security code", length)
            }
        }
    }
}

impl std::error::Error for CvcError {}

/// Validates a security code, explaining any failure.
///
/// Returns the digit count on success.
///
/// # Example
///
/// ```
/// use cardcheck::cvc::{validate_cvc, CvcError};
/// use cardcheck::{BrandId, BrandTable};
///
/// let visa = BrandTable::builtin().get(BrandId::Visa);
/// assert_eq!(validate_cvc("123", visa), Ok(3));
/// assert_eq!(
///     validate_cvc("1234", visa),
///     Err(CvcError::WrongLength { length: 4, expected: Some(3) })
/// );
/// ```
pub fn validate_cvc(code: &str, brand: Option<&BrandDefinition>) -> Result<usize, CvcError> {
    validate_cvc_in(BrandTable::builtin(), code, brand)
}

/// Like [`validate_cvc`], with the unscoped check taken over `table`.
pub fn validate_cvc_in(
    table: &BrandTable,
    code: &str,
    brand: Option<&BrandDefinition>,
) -> Result<usize, CvcError> {
    if code.is_empty() {
        return Err(CvcError::Empty);
    }

    if let Some((position, character)) = code.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(CvcError::InvalidCharacter {
            character,
            position,
        });
    }

    // All ASCII digits, so bytes == chars.
    let length = code.len();
    let accepted = match brand {
        Some(brand) => brand.code.size == length,
        None => table.accepts_code_size(length),
    };

    if !accepted {
        return Err(CvcError::WrongLength {
            length,
            expected: brand.map(|b| b.code.size),
        });
    }

    Ok(length)
}

/// Returns whether `code` is a plausible security code.
///
/// False if the code is empty or contains a non-digit character. With a
/// brand, its length must equal the brand's code size; without one, it must
/// equal some brand's code size.
#[inline]
pub fn is_cvc_valid(code: &str, brand: Option<&BrandDefinition>) -> bool {
    validate_cvc(code, brand).is_ok()
}
