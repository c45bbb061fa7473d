//! Composite card validation.
//!
//! [`validate_card`] runs every check on a raw card number and folds the
//! independent signals (checksum, length, security code, expiry, brand
//! allow-list) into a single [`ValidationResult`] with at most one reason.
//!
//! Validation is total: malformed input produces an invalid result with a
//! reason, never a panic.
//!
//! # Example
//!
//! ```
//! use cardcheck::{validate_card, BrandId, InvalidReason, ValidateOptions};
//!
//! let result = validate_card("4539 1488 0343 6467", &ValidateOptions::default());
//! assert!(result.is_valid());
//! assert_eq!(result.card_brand().id(), Some(BrandId::Visa));
//! assert_eq!(result.reason(), None);
//!
//! let result = validate_card("1234567890123456", &ValidateOptions::default());
//! assert!(!result.number_valid());
//! assert_eq!(result.reason(), Some(InvalidReason::InvalidLuhn));
//!
//! let options = ValidateOptions::new().cvc("123");
//! let result = validate_card("378282246310005", &options);
//! assert_eq!(result.reason(), Some(InvalidReason::InvalidCvc));
//! ```

use chrono::{Local, NaiveDate};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

use crate::brand::{BrandId, BrandTable, CardBrand};
use crate::cvc::validate_cvc_in;
use crate::error::InvalidReason;
use crate::expiry::{is_expiry_valid_at, ExpiryDate};
use crate::format::format;
use crate::length::is_length_valid_in;
use crate::luhn::is_luhn_valid;
use crate::mask::{mask, mask_digits};
use crate::sanitize::sanitize;

/// Digits left visible in masked output.
pub const VISIBLE_DIGITS: usize = 4;

/// Optional inputs to [`validate_card`].
///
/// Checks whose inputs are absent are skipped, not failed. An empty `cvc`
/// and a zero month or year count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Security code to check against the detected brand.
    pub cvc: Option<String>,
    /// Expiry month (1-12). Checked only together with `expiry_year`.
    pub expiry_month: Option<u8>,
    /// Four-digit expiry year. Checked only together with `expiry_month`.
    pub expiry_year: Option<u16>,
    /// If set, the detected brand must be one of these.
    pub allowed_brands: Option<Vec<BrandId>>,
}

impl ValidateOptions {
    /// Options with every optional check disabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the security code.
    pub fn cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Sets expiry month and year.
    pub fn expiry_month_year(mut self, month: u8, year: u16) -> Self {
        self.expiry_month = Some(month);
        self.expiry_year = Some(year);
        self
    }

    /// Sets expiry month and year from a parsed date.
    pub fn expiry(self, expiry: &ExpiryDate) -> Self {
        self.expiry_month_year(expiry.month(), expiry.year())
    }

    /// Restricts accepted brands.
    pub fn allowed_brands(mut self, brands: impl IntoIterator<Item = BrandId>) -> Self {
        self.allowed_brands = Some(brands.into_iter().collect());
        self
    }
}

/// Outcome of [`validate_card`].
///
/// Optional signals are `None` when the corresponding input was not
/// supplied. `reason` is `None` exactly when `is_valid` is true.
///
/// The `Debug` output leaves out the formatted (unmasked) number.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    is_valid: bool,
    card_brand: CardBrand,
    number_valid: bool,
    length_valid: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    cvc_valid: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    expiry_valid: Option<bool>,
    masked_number: Option<String>,
    formatted_number: String,
    display_number: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    reason: Option<InvalidReason>,
}

impl ValidationResult {
    /// Overall verdict.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Detected brand, or [`CardBrand::Unknown`].
    #[inline]
    pub const fn card_brand(&self) -> CardBrand {
        self.card_brand
    }

    /// Luhn checksum passed on a non-empty number.
    #[inline]
    pub const fn number_valid(&self) -> bool {
        self.number_valid
    }

    /// Length is valid for the detected brand (false when unknown).
    #[inline]
    pub const fn length_valid(&self) -> bool {
        self.length_valid
    }

    /// Security code check, if a code was supplied.
    #[inline]
    pub const fn cvc_valid(&self) -> Option<bool> {
        self.cvc_valid
    }

    /// Expiry check, if month and year were supplied.
    #[inline]
    pub const fn expiry_valid(&self) -> Option<bool> {
        self.expiry_valid
    }

    /// Ungrouped mask of the digits, e.g. `************1111`.
    ///
    /// `None` if the number has fewer than four digits.
    #[inline]
    pub fn masked_number(&self) -> Option<&str> {
        self.masked_number.as_deref()
    }

    /// Digits grouped by four. This is the full, unmasked number.
    #[inline]
    pub fn formatted_number(&self) -> &str {
        &self.formatted_number
    }

    /// Grouped mask for display, e.g. `**** **** **** 1111`.
    ///
    /// `None` if the number has fewer than four digits.
    #[inline]
    pub fn display_number(&self) -> Option<&str> {
        self.display_number.as_deref()
    }

    /// First failing check, `None` if valid.
    #[inline]
    pub const fn reason(&self) -> Option<InvalidReason> {
        self.reason
    }
}

impl fmt::Debug for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationResult")
            .field("is_valid", &self.is_valid)
            .field("card_brand", &self.card_brand.name())
            .field("number_valid", &self.number_valid)
            .field("length_valid", &self.length_valid)
            .field("cvc_valid", &self.cvc_valid)
            .field("expiry_valid", &self.expiry_valid)
            .field("display_number", &self.display_number)
            .field("reason", &self.reason)
            .finish()
    }
}

impl Drop for ValidationResult {
    fn drop(&mut self) {
        self.formatted_number.zeroize();
    }
}

/// Card validator bound to a brand table.
///
/// [`validate_card`] uses the built-in table; construct a validator with
/// [`CardValidator::with_table`] to detect against a custom one.
#[derive(Debug, Clone, Copy)]
pub struct CardValidator {
    table: &'static BrandTable,
}

impl Default for CardValidator {
    fn default() -> Self {
        Self::with_table(BrandTable::builtin())
    }
}

impl CardValidator {
    /// Creates a validator over the built-in table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator over `table`.
    #[inline]
    pub const fn with_table(table: &'static BrandTable) -> Self {
        Self { table }
    }

    /// The table this validator detects against.
    #[inline]
    pub const fn table(&self) -> &'static BrandTable {
        self.table
    }

    /// Validates `raw` using today's date for the expiry check.
    pub fn validate(&self, raw: &str, options: &ValidateOptions) -> ValidationResult {
        self.validate_at(raw, options, Local::now().date_naive())
    }

    /// Validates `raw`, evaluating expiry against `today`.
    pub fn validate_at(
        &self,
        raw: &str,
        options: &ValidateOptions,
        today: NaiveDate,
    ) -> ValidationResult {
        let sanitized = Zeroizing::new(sanitize(raw));
        let card_brand = self.table.detect(&sanitized);
        let brand = card_brand.definition();

        let masked_number = mask_digits(&sanitized, VISIBLE_DIGITS).ok();
        let formatted_number = format(&sanitized);
        let display_number = mask(raw, VISIBLE_DIGITS).ok();

        // An empty number sums to 0 under Luhn; it is still not a card.
        let number_valid = !sanitized.is_empty() && is_luhn_valid(&sanitized);

        let length_valid =
            brand.map_or(false, |b| is_length_valid_in(self.table, &sanitized, Some(b)));

        // Empty codes and zero month/year count as not supplied.
        let cvc_valid = options.cvc.as_deref().filter(|c| !c.is_empty()).map(|code| {
            brand.map_or(false, |b| validate_cvc_in(self.table, code, Some(b)).is_ok())
        });

        let expiry_valid = match (options.expiry_month, options.expiry_year) {
            (Some(month), Some(year)) if month != 0 && year != 0 => {
                Some(is_expiry_valid_at(month, year, today))
            }
            _ => None,
        };

        let brand_allowed = options
            .allowed_brands
            .as_ref()
            .map(|allowed| card_brand.id().map_or(false, |id| allowed.contains(&id)));

        let reason = if !number_valid {
            Some(InvalidReason::InvalidLuhn)
        } else if brand.is_none() {
            Some(InvalidReason::UnknownCardType)
        } else if !length_valid {
            Some(InvalidReason::InvalidLength)
        } else if cvc_valid == Some(false) {
            Some(InvalidReason::InvalidCvc)
        } else if expiry_valid == Some(false) {
            Some(InvalidReason::Expired)
        } else if brand_allowed == Some(false) {
            Some(InvalidReason::BrandNotAllowed)
        } else {
            None
        };

        let is_valid = number_valid
            && length_valid
            && cvc_valid.unwrap_or(true)
            && expiry_valid.unwrap_or(true)
            && brand_allowed.unwrap_or(true);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            brand = card_brand.id().map_or("unknown", |id| id.as_str()),
            digits = sanitized.len(),
            valid = is_valid,
            reason = reason.map(|r| r.as_str()),
            "card validated"
        );

        ValidationResult {
            is_valid,
            card_brand,
            number_valid,
            length_valid,
            cvc_valid,
            expiry_valid,
            masked_number,
            formatted_number,
            display_number,
            reason,
        }
    }
}

/// Validates a raw card number against the built-in brand table.
///
/// The input may contain spaces, dashes or any other non-digit characters;
/// they are stripped before checking.
#[inline]
pub fn validate_card(raw: &str, options: &ValidateOptions) -> ValidationResult {
    CardValidator::new().validate(raw, options)
}

/// Quick yes/no check of a card number with no optional inputs.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    validate_card(raw, &ValidateOptions::default()).is_valid()
}
