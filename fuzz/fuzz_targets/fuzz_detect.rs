//! Fuzz target for brand detection.
//!
//! Tests that detection never panics and only returns brands whose own
//! patterns match the input.

#![no_main]

use cardcheck::{detect_brand, sanitize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Raw input, including non-digits
    let _ = detect_brand(data);

    let digits = sanitize(data);
    if let Some(brand) = detect_brand(&digits).definition() {
        assert!(!brand.is_placeholder());
        assert!(brand.patterns.iter().any(|p| p.matches(&digits)));
    }
});
