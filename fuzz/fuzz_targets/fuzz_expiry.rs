//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use cardcheck::expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = expiry::validate_expiry(data);

    if let Ok(exp) = expiry::parse_expiry(data) {
        assert!((1..=12).contains(&exp.month()));
        let _ = exp.is_expired();
        let _ = exp.months_until_expiry();
        assert_eq!(expiry::parse_expiry(&exp.format_long()), Ok(exp));
        let _ = exp.to_string();
    }
});
