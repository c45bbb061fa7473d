//! Fuzz target for composite card validation.
//!
//! Tests that validate_card() never panics and that the verdict and the
//! reason always agree.

#![no_main]

use cardcheck::{is_valid, validate_card, BrandId, ValidateOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate_card(data, &ValidateOptions::default());
    assert_eq!(result.reason().is_none(), result.is_valid());
    assert_eq!(is_valid(data), result.is_valid());

    // Feed the same input through every optional check
    let mid = (0..=data.len() / 2)
        .rev()
        .find(|&i| data.is_char_boundary(i))
        .unwrap_or(0);
    let (number, code) = data.split_at(mid);
    let options = ValidateOptions::new()
        .cvc(code)
        .expiry_month_year(data.len() as u8, 2000 + data.len() as u16)
        .allowed_brands([BrandId::Visa, BrandId::AmericanExpress]);
    let result = validate_card(number, &options);
    assert_eq!(result.reason().is_none(), result.is_valid());

    if let Some(masked) = result.masked_number() {
        assert_eq!(masked.len(), cardcheck::sanitize(number).len());
    }
});
