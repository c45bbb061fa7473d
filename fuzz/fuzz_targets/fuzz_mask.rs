//! Fuzz target for masking and formatting.
//!
//! Tests that masking never leaks hidden digits and that formatting keeps
//! every digit.

#![no_main]

use cardcheck::format::{format_card_number, format_with_separator};
use cardcheck::{format, mask, sanitize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = sanitize(data);

    for visible in [0, 4, 6] {
        match mask(data, visible) {
            Ok(masked) => {
                let shown: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
                assert_eq!(shown, digits[digits.len() - visible..]);
            }
            Err(_) => assert!(visible > digits.len()),
        }
    }

    assert_eq!(sanitize(&format(&digits)), digits);
    assert_eq!(sanitize(&format_card_number(data)), digits);
    let _ = format_with_separator(data, "-");
});
