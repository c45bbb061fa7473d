//! Reasons a card fails validation, and the masking failure.
//!
//! Validation failures are values, not panics: [`InvalidReason`] is carried
//! inside a [`ValidationResult`](crate::ValidationResult) and its `Display`
//! output is the human-readable reason.

use std::fmt;

/// The first failing check of a composite validation.
///
/// Variants are listed in priority order: when several checks fail, the
/// earliest one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The Luhn checksum failed (or there were no digits at all).
    InvalidLuhn,
    /// No brand pattern matched.
    UnknownCardType,
    /// The length is not one of the brand's lengths.
    InvalidLength,
    /// The supplied security code does not fit the brand.
    InvalidCvc,
    /// The supplied expiry is before the current month.
    Expired,
    /// The brand is not in the caller's allow-list.
    BrandNotAllowed,
}

impl InvalidReason {
    /// Returns the reason message.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLuhn => "invalid Luhn",
            Self::UnknownCardType => "unknown card type",
            Self::InvalidLength => "invalid card length",
            Self::InvalidCvc => "invalid CVC",
            Self::Expired => "card expired",
            Self::BrandNotAllowed => "brand not allowed",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for InvalidReason {}

#[cfg(feature = "serde")]
impl serde::Serialize for InvalidReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Masking could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// More visible digits were requested than the number has.
    VisibleDigitsExceedLength {
        /// Requested visible digit count.
        visible: usize,
        /// Number of digits available.
        length: usize,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VisibleDigitsExceedLength { visible, length } => write!(
                f,
                "masking failed: visible digits ({}) cannot exceed card length ({})",
                visible, length
            ),
        }
    }
}

impl std::error::Error for MaskError {}
