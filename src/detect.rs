//! Card brand detection by leading-digit patterns.
//!
//! Brands are tried in table order and each brand's patterns in list order.
//! The first matching pattern wins; a brand whose first pattern misses is
//! still checked against its remaining patterns.

use crate::brand::{BrandTable, CardBrand, Pattern};

/// Returns the number of decimal digits in `n` (1 for 0).
#[inline]
const fn decimal_width(mut n: u32) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl Pattern {
    /// Number of leading digits this rule inspects.
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Self::Prefix(prefix) => prefix.len(),
            Self::Range { min, .. } => decimal_width(*min),
        }
    }

    /// Returns true if `digits` starts with a sequence this rule accepts.
    ///
    /// A range rule never matches input shorter than its width.
    pub fn matches(&self, digits: &str) -> bool {
        match *self {
            Self::Prefix(prefix) => digits.starts_with(prefix),
            Self::Range { min, max } => {
                let lead = match digits.get(..self.width()) {
                    Some(lead) => lead,
                    None => return false,
                };
                if !lead.bytes().all(|b| b.is_ascii_digit()) {
                    return false;
                }
                lead.parse::<u32>()
                    .map(|value| (min..=max).contains(&value))
                    .unwrap_or(false)
            }
        }
    }
}

impl BrandTable {
    /// Detects the brand of `digits` against this table.
    pub fn detect(&self, digits: &str) -> CardBrand {
        self.iter()
            .find(|brand| brand.patterns.iter().any(|p| p.matches(digits)))
            .map_or(CardBrand::Unknown, CardBrand::Known)
    }
}

/// Detects the card brand of a sanitized digit string using the built-in
/// table.
///
/// # Example
///
/// ```
/// use cardcheck::{detect_brand, BrandId};
///
/// assert_eq!(detect_brand("4111111111111111").id(), Some(BrandId::Visa));
/// assert_eq!(detect_brand("2221000000000000").id(), Some(BrandId::Mastercard));
/// assert!(!detect_brand("0000000000000000").is_known());
/// ```
#[inline]
pub fn detect_brand(digits: &str) -> CardBrand {
    BrandTable::builtin().detect(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{BrandDefinition, BrandId, SecurityCode, SecurityCodeLabel};

    fn id_of(digits: &str) -> Option<BrandId> {
        detect_brand(digits).id()
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(id_of("4111111111111111"), Some(BrandId::Visa));
        assert_eq!(id_of("4222222222222"), Some(BrandId::Visa));
        assert_eq!(id_of("4"), Some(BrandId::Visa));
    }

    #[test]
    fn test_mastercard_detection() {
        // 51-55 range
        assert_eq!(id_of("5100000000000000"), Some(BrandId::Mastercard));
        assert_eq!(id_of("5500000000000004"), Some(BrandId::Mastercard));
        assert_eq!(id_of("5600000000000000"), None);
        // 2221-2720 range
        assert_eq!(id_of("2221000000000000"), Some(BrandId::Mastercard));
        assert_eq!(id_of("2720990000000000"), Some(BrandId::Mastercard));
        assert_eq!(id_of("2220990000000000"), None);
        assert_eq!(id_of("2721000000000000"), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(id_of("340000000000009"), Some(BrandId::AmericanExpress));
        assert_eq!(id_of("378282246310005"), Some(BrandId::AmericanExpress));
        assert_eq!(id_of("350000000000000"), None);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(id_of("6011000000000000"), Some(BrandId::Discover));
        assert_eq!(id_of("6440000000000000"), Some(BrandId::Discover));
        assert_eq!(id_of("6490000000000000"), Some(BrandId::Discover));
        assert_eq!(id_of("6500000000000000"), Some(BrandId::Discover));
        assert_eq!(id_of("6430000000000000"), None);
    }

    #[test]
    fn test_later_pattern_still_matches() {
        // Discover's first rule (6011) misses; the 65 rule must still be tried.
        assert_eq!(id_of("6512"), Some(BrandId::Discover));
    }

    #[test]
    fn test_placeholder_brands_never_match() {
        // JCB and Diners Club numbers are unknown until their tables are filled.
        assert_eq!(id_of("3530111333300000"), None);
        assert_eq!(id_of("30569309025904"), None);
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(id_of("0000000000000000"), None);
        assert_eq!(id_of("1000000000000000"), None);
        assert_eq!(id_of("9000000000000000"), None);
    }

    #[test]
    fn test_short_input_does_not_match_range() {
        assert_eq!(id_of("5"), None);
        assert_eq!(id_of("222"), None);
        assert_eq!(id_of("64"), None);
        assert_eq!(id_of(""), None);
    }

    #[test]
    fn test_range_rejects_non_digits() {
        let rule = Pattern::Range { min: 51, max: 55 };
        assert!(rule.matches("52"));
        assert!(!rule.matches("5x"));
        assert!(!rule.matches("+5"));
        // Multi-byte input must not panic on a char boundary.
        assert!(!rule.matches("5é"));
    }

    #[test]
    fn test_pattern_width() {
        assert_eq!(Pattern::Prefix("6011").width(), 4);
        assert_eq!(Pattern::Range { min: 51, max: 55 }.width(), 2);
        assert_eq!(Pattern::Range { min: 2221, max: 2720 }.width(), 4);
        assert_eq!(decimal_width(0), 1);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        static SHADOWED: [BrandDefinition; 2] = [
            BrandDefinition {
                id: BrandId::Maestro,
                display_name: "Maestro",
                patterns: &[Pattern::Prefix("5")],
                gaps: &[],
                lengths: &[16],
                code: SecurityCode {
                    size: 3,
                    label: SecurityCodeLabel::Cvc,
                },
            },
            BrandDefinition {
                id: BrandId::Mastercard,
                display_name: "Mastercard",
                patterns: &[Pattern::Range { min: 51, max: 55 }],
                gaps: &[],
                lengths: &[16],
                code: SecurityCode {
                    size: 3,
                    label: SecurityCodeLabel::Cvc,
                },
            },
        ];
        let table = BrandTable::new(&SHADOWED);
        assert_eq!(table.detect("5100000000000000").id(), Some(BrandId::Maestro));
    }
}
