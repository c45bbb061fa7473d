//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use cardcheck::{
    detect_brand, expiry, format, format::format_with_separator, generate::generate_card_deterministic,
    is_luhn_valid, is_valid, luhn, mask, mask::mask_digits, sanitize, validate_card, BrandId,
    BrandTable, CardBrand, InvalidReason, ValidateOptions,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Brands with detection patterns.
fn known_brand_strategy() -> impl Strategy<Value = BrandId> {
    prop_oneof![
        Just(BrandId::Visa),
        Just(BrandId::Mastercard),
        Just(BrandId::AmericanExpress),
        Just(BrandId::Discover),
    ]
}

/// Generates a valid card number for a brand with patterns.
fn valid_card_strategy() -> impl Strategy<Value = String> {
    known_brand_strategy().prop_filter_map("brand has patterns", generate_card_deterministic)
}

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates a string with separators (spaces, dashes) mixed in.
fn card_with_separators(card: String) -> impl Strategy<Value = String> {
    let len = card.len();
    proptest::collection::vec(
        prop_oneof![Just(""), Just(" "), Just("-"), Just("  "), Just(" - ")],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in card.chars().enumerate() {
            result.push_str(seps[i]);
            result.push(c);
        }
        result.push_str(seps[len]);
        result
    })
}

/// Turns a digit string into a Luhn-valid one by replacing its last digit.
fn with_check_digit(digits: &str) -> String {
    let body: Vec<u8> = digits[..digits.len() - 1]
        .bytes()
        .map(|b| b - b'0')
        .collect();
    let mut result = digits[..digits.len() - 1].to_string();
    result.push(char::from(b'0' + luhn::check_digit(&body)));
    result
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn check_digit_makes_valid(digits in digit_string_range(2..=19)) {
        prop_assert!(is_luhn_valid(&with_check_digit(&digits)));
    }

    #[test]
    fn single_digit_change_invalidates_luhn(
        digits in digit_string_range(2..=19),
        pos in any::<prop::sample::Index>(),
        delta in 1u8..=9,
    ) {
        let valid = with_check_digit(&digits);
        let mut bytes = valid.clone().into_bytes();
        let i = pos.index(bytes.len());
        bytes[i] = b'0' + (bytes[i] - b'0' + delta) % 10;
        let changed = String::from_utf8(bytes).unwrap();

        prop_assert!(!is_luhn_valid(&changed));
    }

    #[test]
    fn all_zeros_passes_luhn(len in 1usize..=19usize) {
        prop_assert!(is_luhn_valid(&"0".repeat(len)));
    }

    #[test]
    fn non_digits_fail_luhn(digits in digit_string_range(1..=19), junk in "[a-z -]") {
        let input = format!("{}{}", digits, junk);
        prop_assert!(!is_luhn_valid(&input));
    }
}

// =============================================================================
// COMPOSITE VALIDATION PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn validate_never_panics(input in ".*") {
        let result = validate_card(&input, &ValidateOptions::default());
        prop_assert_eq!(result.reason().is_none(), result.is_valid());
    }

    #[test]
    fn validate_never_panics_with_options(
        input in ".*",
        cvc in proptest::option::of(".{0,6}"),
        month in proptest::option::of(any::<u8>()),
        year in proptest::option::of(any::<u16>()),
    ) {
        let options = ValidateOptions {
            cvc,
            expiry_month: month,
            expiry_year: year,
            allowed_brands: None,
        };
        let result = validate_card(&input, &options);
        prop_assert_eq!(result.reason().is_none(), result.is_valid());
    }

    #[test]
    fn valid_cards_validate_successfully(card in valid_card_strategy()) {
        let result = validate_card(&card, &ValidateOptions::default());
        prop_assert!(result.is_valid());
        prop_assert!(result.card_brand().is_known());
    }

    #[test]
    fn separators_dont_affect_validation(
        formatted in valid_card_strategy().prop_flat_map(card_with_separators)
    ) {
        let plain = sanitize(&formatted);
        let a = validate_card(&formatted, &ValidateOptions::default());
        let b = validate_card(&plain, &ValidateOptions::default());

        prop_assert_eq!(a.is_valid(), b.is_valid());
        prop_assert_eq!(a.card_brand(), b.card_brand());
        prop_assert_eq!(a.formatted_number(), b.formatted_number());
    }

    #[test]
    fn luhn_failure_is_always_reported_first(digits in digit_string_range(1..=19)) {
        let result = validate_card(&digits, &ValidateOptions::new().cvc("x"));
        if !is_luhn_valid(&digits) {
            prop_assert_eq!(result.reason(), Some(InvalidReason::InvalidLuhn));
        }
    }

    #[test]
    fn unknown_brand_never_valid(digits in digit_string_range(1..=19)) {
        let result = validate_card(&digits, &ValidateOptions::default());
        if result.card_brand() == CardBrand::Unknown {
            prop_assert!(!result.is_valid());
            prop_assert!(!result.length_valid());
        }
    }

    #[test]
    fn disallowed_brand_never_valid(card in valid_card_strategy()) {
        let brand = detect_brand(&card).id().unwrap();
        let others: Vec<BrandId> = BrandId::ALL.iter().copied().filter(|b| *b != brand).collect();
        let result = validate_card(&card, &ValidateOptions::new().allowed_brands(others));

        prop_assert_eq!(result.reason(), Some(InvalidReason::BrandNotAllowed));
    }

    #[test]
    fn is_valid_consistent_with_validate(input in ".*") {
        prop_assert_eq!(
            is_valid(&input),
            validate_card(&input, &ValidateOptions::default()).is_valid()
        );
    }
}

// =============================================================================
// DETECTION PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn detection_is_prefix_stable(card in valid_card_strategy(), tail in digit_string_range(0..=4)) {
        let brand = detect_brand(&card);
        let extended = format!("{}{}", card, tail);
        prop_assert_eq!(detect_brand(&extended), brand);
    }

    #[test]
    fn detected_brand_has_patterns(digits in digit_string_range(0..=19)) {
        if let Some(brand) = detect_brand(&digits).definition() {
            prop_assert!(!brand.is_placeholder());
            prop_assert!(brand.patterns.iter().any(|p| p.matches(&digits)));
        }
    }

    #[test]
    fn detection_is_first_match(digits in digit_string_range(0..=19)) {
        let first = BrandTable::builtin()
            .iter()
            .find(|b| b.patterns.iter().any(|p| p.matches(&digits)))
            .map(|b| b.id);
        prop_assert_eq!(detect_brand(&digits).id(), first);
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn format_roundtrip(digits in digit_string_range(0..=19)) {
        prop_assert_eq!(sanitize(&format(&digits)), digits);
    }

    #[test]
    fn format_is_idempotent_through_sanitize(digits in digit_string_range(0..=19)) {
        let once = format(&digits);
        prop_assert_eq!(format(&sanitize(&once)), once);
    }

    #[test]
    fn formatting_adds_separators(digits in digit_string_range(1..=19)) {
        let formatted = format_with_separator(&digits, "-");
        prop_assert_eq!(formatted.matches('-').count(), (digits.len() - 1) / 4);
        prop_assert!(!formatted.ends_with('-'));
    }

    #[test]
    fn sanitize_keeps_only_digits(input in ".*") {
        let digits = sanitize(&input);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(sanitize(&digits), digits.clone());
    }
}

// =============================================================================
// MASKING PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn masked_never_exposes_full_number(card in valid_card_strategy()) {
        let masked = mask(&card, 4).unwrap();
        prop_assert!(!masked.contains(&card));
        prop_assert!(masked.contains('*'));
    }

    #[test]
    fn mask_digits_preserves_length(digits in digit_string_range(0..=19), visible in 0usize..=8) {
        match mask_digits(&digits, visible) {
            Ok(masked) => {
                prop_assert_eq!(masked.len(), digits.len());
                prop_assert_eq!(&masked[digits.len() - visible..], &digits[digits.len() - visible..]);
                prop_assert!(masked[..digits.len() - visible].bytes().all(|b| b == b'*'));
            }
            Err(_) => prop_assert!(visible > digits.len()),
        }
    }

    #[test]
    fn masked_shows_last_four(card in digit_string_range(4..=19)) {
        let masked = mask(&card, 4).unwrap();
        let visible: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(visible, card[card.len() - 4..].to_string());
    }
}

// =============================================================================
// EXPIRY PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn valid_month_parses(month in 1u8..=12u8, year in 0u16..=99u16) {
        let input = format!("{:02}/{:02}", month, year);
        let exp = expiry::parse_expiry(&input).unwrap();
        prop_assert_eq!(exp.month(), month);
        prop_assert_eq!(exp.year(), 2000 + year);
    }

    #[test]
    fn invalid_month_rejected(month in prop_oneof![Just(0u8), 13u8..=99u8], year in 0u16..=99u16) {
        let input = format!("{:02}/{:02}", month, year);
        prop_assert!(expiry::parse_expiry(&input).is_err());
        prop_assert!(!cardcheck::is_expiry_valid(month, 2000 + year));
    }

    #[test]
    fn expiry_format_roundtrip(month in 1u8..=12u8, year in 2000u16..=2099u16) {
        let exp = expiry::ExpiryDate::new(month, year).unwrap();
        let parsed = expiry::parse_expiry(&exp.format_short()).unwrap();
        prop_assert_eq!(parsed, exp);
    }
}

// =============================================================================
// CVC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn amex_needs_four_digits(code in digit_string_range(1..=6)) {
        let amex = BrandTable::builtin().get(BrandId::AmericanExpress);
        prop_assert_eq!(cardcheck::is_cvc_valid(&code, amex), code.len() == 4);
    }

    #[test]
    fn visa_needs_three_digits(code in digit_string_range(1..=6)) {
        let visa = BrandTable::builtin().get(BrandId::Visa);
        prop_assert_eq!(cardcheck::is_cvc_valid(&code, visa), code.len() == 3);
    }
}
