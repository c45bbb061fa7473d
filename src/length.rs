//! Card number length validation.

use crate::brand::{BrandDefinition, BrandTable};

/// Returns whether the length of `digits` is acceptable.
///
/// With a brand, the length must be one of that brand's lengths (a
/// placeholder brand with no lengths never passes). Without one, any
/// brand's length is accepted.
///
/// # Example
///
/// ```
/// use cardcheck::{is_length_valid, BrandId, BrandTable};
///
/// let visa = BrandTable::builtin().get(BrandId::Visa);
/// assert!(is_length_valid("4222222222222", visa));
/// assert!(!is_length_valid("422222222222", visa));
/// assert!(is_length_valid("378282246310005", None));
/// ```
#[inline]
pub fn is_length_valid(digits: &str, brand: Option<&BrandDefinition>) -> bool {
    is_length_valid_in(BrandTable::builtin(), digits, brand)
}

/// Like [`is_length_valid`], with the unscoped union taken over `table`.
pub fn is_length_valid_in(
    table: &BrandTable,
    digits: &str,
    brand: Option<&BrandDefinition>,
) -> bool {
    let length = digits.len();
    match brand {
        Some(brand) => brand.is_valid_length(length),
        None => table.accepts_length(length),
    }
}
