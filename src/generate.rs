//! Test card number generation.
//!
//! Generated numbers start with one of the brand's own patterns, have one of
//! its lengths and end in a Luhn check digit, so they pass
//! [`validate_card`](crate::validate_card). They are not connected to real
//! accounts and are meant for tests only.
//!
//! Brands without patterns cannot be matched and therefore cannot be
//! generated: every generator returns `None` for them.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::{generate_card_deterministic, CardGenerator};
//! use cardcheck::BrandId;
//!
//! let card = generate_card_deterministic(BrandId::Visa).unwrap();
//! assert!(card.starts_with('4'));
//! assert!(cardcheck::is_valid(&card));
//!
//! // The first Mastercard rule is the range 51-55.
//! let card = CardGenerator::new(BrandId::Mastercard)
//!     .unwrap()
//!     .generate_deterministic()
//!     .unwrap();
//! assert!(card.starts_with("51"));
//!
//! assert!(generate_card_deterministic(BrandId::Jcb).is_none());
//! ```

use crate::brand::{BrandDefinition, BrandId, BrandTable, Pattern};
use crate::luhn;
use crate::sanitize::digit_values;

#[cfg(feature = "generate")]
use rand::Rng;

/// Leading digits of a pattern: the prefix itself, or the lower bound of a
/// range.
pub fn pattern_prefix(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Prefix(prefix) => (*prefix).to_string(),
        Pattern::Range { min, .. } => min.to_string(),
    }
}

/// The prefix deterministic generation uses for `brand`: its first pattern.
pub fn prefix_for_brand(brand: &BrandDefinition) -> Option<String> {
    brand.patterns.first().map(pattern_prefix)
}

/// Fills `prefix` with `fill` digits up to `length - 1` and appends the
/// check digit.
fn complete(prefix: &str, length: usize, mut fill: impl FnMut() -> u8) -> Option<String> {
    let mut digits = digit_values(prefix);
    if prefix.is_empty() || digits.len() != prefix.len() || digits.len() >= length {
        return None;
    }

    while digits.len() < length - 1 {
        digits.push(fill());
    }
    digits.push(luhn::check_digit(&digits));

    Some(digits.iter().map(|&d| char::from(b'0' + d)).collect())
}

/// Generates a number deterministically from a custom prefix.
///
/// Middle digits are zeros. Returns `None` if `prefix` is empty, contains
/// non-digits, or is not shorter than `length`.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card_deterministic_with_prefix;
///
/// let card = generate_card_deterministic_with_prefix("411111", 16).unwrap();
/// assert_eq!(card, "4111110000000005");
/// assert!(generate_card_deterministic_with_prefix("4111", 4).is_none());
/// ```
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> Option<String> {
    complete(prefix, length, || 0)
}

/// Generates the deterministic test number of `brand`.
///
/// The first pattern's prefix is padded with zeros to the brand's first
/// length and completed with its check digit.
pub fn generate_for_brand_deterministic(brand: &BrandDefinition) -> Option<String> {
    let prefix = prefix_for_brand(brand)?;
    let length = *brand.lengths.first()?;
    generate_card_deterministic_with_prefix(&prefix, length)
}

/// Generates the deterministic test number of a built-in brand.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card_deterministic;
/// use cardcheck::BrandId;
///
/// let amex = generate_card_deterministic(BrandId::AmericanExpress).unwrap();
/// assert_eq!(amex.len(), 15);
/// assert_eq!(amex, generate_card_deterministic(BrandId::AmericanExpress).unwrap());
/// ```
pub fn generate_card_deterministic(id: BrandId) -> Option<String> {
    BrandTable::builtin()
        .get(id)
        .and_then(generate_for_brand_deterministic)
}

/// Generates a random number for `brand` using `rng`.
///
/// Pattern, range value and length are picked at random from the brand's
/// definition. Seeded RNGs give reproducible output.
#[cfg(feature = "generate")]
pub fn generate_for_brand_with_rng<R: Rng>(
    brand: &BrandDefinition,
    rng: &mut R,
) -> Option<String> {
    if brand.patterns.is_empty() || brand.lengths.is_empty() {
        return None;
    }

    let prefix = match brand.patterns[rng.gen_range(0..brand.patterns.len())] {
        Pattern::Prefix(prefix) => prefix.to_string(),
        Pattern::Range { min, max } => rng.gen_range(min..=max).to_string(),
    };
    let length = brand.lengths[rng.gen_range(0..brand.lengths.len())];

    generate_card_with_rng(&prefix, length, rng)
}

/// Generates a random number for a built-in brand.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card;
/// use cardcheck::BrandId;
///
/// let card = generate_card(BrandId::Discover).unwrap();
/// assert!(cardcheck::is_valid(&card));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(id: BrandId) -> Option<String> {
    let brand = BrandTable::builtin().get(id)?;
    generate_for_brand_with_rng(brand, &mut rand::thread_rng())
}

/// Generates `count` random numbers for a built-in brand.
///
/// Empty for brands that cannot be generated.
#[cfg(feature = "generate")]
pub fn generate_cards(id: BrandId, count: usize) -> Vec<String> {
    let Some(brand) = BrandTable::builtin().get(id) else {
        return Vec::new();
    };
    let mut rng = rand::thread_rng();
    (0..count)
        .map_while(|_| generate_for_brand_with_rng(brand, &mut rng))
        .collect()
}

/// Generates a random number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card_with_prefix;
///
/// let card = generate_card_with_prefix("411111", 16).unwrap();
/// assert!(card.starts_with("411111"));
/// assert_eq!(card.len(), 16);
/// assert!(cardcheck::is_luhn_valid(&card));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> Option<String> {
    generate_card_with_rng(prefix, length, &mut rand::thread_rng())
}

/// Generates a random number from a prefix using a provided RNG.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(
    prefix: &str,
    length: usize,
    rng: &mut R,
) -> Option<String> {
    complete(prefix, length, || rng.gen_range(0..10))
}

/// Builder for generating numbers with a chosen prefix and length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Creates a generator for a built-in brand, seeded from its first
    /// pattern and first length.
    pub fn new(id: BrandId) -> Option<Self> {
        BrandTable::builtin().get(id).and_then(Self::for_brand)
    }

    /// Creates a generator for any brand definition.
    pub fn for_brand(brand: &BrandDefinition) -> Option<Self> {
        Some(Self {
            prefix: prefix_for_brand(brand)?,
            length: *brand.lengths.first()?,
        })
    }

    /// Creates a generator with a custom prefix and 16 digits.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 16,
        }
    }

    /// Sets the card length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates a number with zero fill.
    pub fn generate_deterministic(&self) -> Option<String> {
        generate_card_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a number with random fill.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> Option<String> {
        generate_card_with_prefix(&self.prefix, self.length)
    }

    /// Generates `count` numbers with random fill.
    #[cfg(feature = "generate")]
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        (0..count).map_while(|_| self.generate()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{detect_brand, is_luhn_valid, is_valid};

    #[test]
    fn test_deterministic_known_brands() {
        let cases = [
            (BrandId::Visa, "4000000000006"),
            (BrandId::Mastercard, "5100000000000008"),
            (BrandId::AmericanExpress, "340000000000009"),
            (BrandId::Discover, "6011000000000004"),
        ];
        for (id, expected) in cases {
            let card = generate_card_deterministic(id).unwrap();
            assert_eq!(card, expected);
            let brand = BrandTable::builtin().get(id).unwrap();
            assert_eq!(card.len(), brand.lengths[0]);
            assert!(is_valid(&card), "{}", card);
            assert_eq!(detect_brand(&card).id(), Some(id));
        }
    }

    #[test]
    fn test_deterministic_is_reproducible() {
        assert_eq!(
            generate_card_deterministic(BrandId::Visa),
            generate_card_deterministic(BrandId::Visa)
        );
    }

    #[test]
    fn test_placeholder_brands_not_generated() {
        for brand in BrandTable::builtin().iter().filter(|b| b.is_placeholder()) {
            assert!(generate_for_brand_deterministic(brand).is_none());
            assert!(CardGenerator::for_brand(brand).is_none());
        }
    }

    #[test]
    fn test_pattern_prefix() {
        assert_eq!(pattern_prefix(&Pattern::Prefix("6011")), "6011");
        assert_eq!(pattern_prefix(&Pattern::Range { min: 2221, max: 2720 }), "2221");
    }

    #[test]
    fn test_with_prefix() {
        let card = generate_card_deterministic_with_prefix("411111", 16).unwrap();
        assert!(card.starts_with("411111"));
        assert_eq!(card.len(), 16);
        assert!(is_valid(&card));
    }

    #[test]
    fn test_bad_prefix() {
        assert!(generate_card_deterministic_with_prefix("", 16).is_none());
        assert!(generate_card_deterministic_with_prefix("4x11", 16).is_none());
        assert!(generate_card_deterministic_with_prefix("4111", 4).is_none());
    }

    #[test]
    fn test_card_generator_builder() {
        let card = CardGenerator::new(BrandId::Visa)
            .unwrap()
            .length(19)
            .generate_deterministic()
            .unwrap();
        assert!(card.starts_with('4'));
        assert_eq!(card.len(), 19);
        assert!(is_valid(&card));
    }

    #[test]
    fn test_card_generator_custom_prefix() {
        let card = CardGenerator::with_prefix("123456")
            .generate_deterministic()
            .unwrap();
        assert!(card.starts_with("123456"));
        // No brand starts with 1, but the checksum holds.
        assert!(is_luhn_valid(&card));
        assert!(!is_valid(&card));
    }

    #[cfg(feature = "generate")]
    mod random_tests {
        use super::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        #[test]
        fn test_random_cards_valid_for_every_generatable_brand() {
            let mut rng = StdRng::seed_from_u64(7);
            for brand in BrandTable::builtin().iter().filter(|b| !b.is_placeholder()) {
                for _ in 0..50 {
                    let card = generate_for_brand_with_rng(brand, &mut rng).unwrap();
                    assert!(is_valid(&card), "{}", card);
                    assert_eq!(detect_brand(&card).id(), Some(brand.id));
                }
            }
        }

        #[test]
        fn test_seeded_rng_is_reproducible() {
            let a = generate_card_with_rng("4", 16, &mut StdRng::seed_from_u64(1));
            let b = generate_card_with_rng("4", 16, &mut StdRng::seed_from_u64(1));
            assert_eq!(a, b);
        }

        #[test]
        fn test_generate_cards() {
            let cards = generate_cards(BrandId::AmericanExpress, 10);
            assert_eq!(cards.len(), 10);
            assert!(cards.iter().all(|c| is_valid(c)));
            assert!(generate_cards(BrandId::Mir, 10).is_empty());
        }

        #[test]
        fn test_generate_cards_are_unique() {
            let cards = generate_cards(BrandId::Visa, 100);
            let unique: std::collections::HashSet<_> = cards.iter().collect();
            assert!(unique.len() >= 90);
        }

        #[test]
        fn test_card_generator_random() {
            let gen = CardGenerator::new(BrandId::Mastercard).unwrap();
            let cards = gen.generate_many(5);
            assert_eq!(cards.len(), 5);
            assert!(cards.iter().all(|c| is_valid(c)));
        }
    }
}
