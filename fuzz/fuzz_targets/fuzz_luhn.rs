//! Fuzz target for the Luhn algorithm.
//!
//! Tests that Luhn functions never panic and maintain invariants.

#![no_main]

use cardcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    let text: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();

    let valid = luhn::is_luhn_valid(&text);
    assert_eq!(valid, luhn::compute_checksum(&digits) % 10 == 0);

    if !digits.is_empty() && digits.len() <= 18 {
        let check = luhn::check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = text.clone();
        with_check.push(char::from(b'0' + check));
        assert!(luhn::is_luhn_valid(&with_check), "Adding check digit should make valid");
    }

    // Raw bytes are rarely all digits
    if let Ok(raw) = std::str::from_utf8(data) {
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            assert!(!luhn::is_luhn_valid(raw));
        }
    }
});
