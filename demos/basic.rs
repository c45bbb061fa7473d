//! Basic card validation example.
//!
//! Run with: `cargo run --example basic`

use cardcheck::{
    detect_brand, is_valid, mask, validate_card, BrandTable, InvalidReason, ValidateOptions,
};

fn main() {
    println!("=== Basic Card Validation ===\n");

    // Example 1: Validate a Visa card with every optional check
    let visa_number = "4539-1488-0343-6467";
    println!("Validating: {}", visa_number);

    let options = ValidateOptions::new()
        .cvc("123")
        .expiry_month_year(12, 2099);
    let result = validate_card(visa_number, &options);
    println!("  Valid: {}", if result.is_valid() { "yes" } else { "no" });
    println!("  Brand: {}", result.card_brand().name());
    println!("  Formatted: {}", result.formatted_number());
    if let Some(masked) = result.display_number() {
        println!("  Masked: {}", masked);
    }
    println!("  CVC: {:?}", result.cvc_valid());
    println!("  Expiry: {:?}", result.expiry_valid());
    println!();

    // Example 2: Quick boolean check
    let test_cards = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("4111111111111112", "Invalid (bad checksum)"),
    ];

    println!("Quick validation checks:");
    for (number, description) in test_cards {
        println!(
            "  {} - {}: {}",
            number,
            description,
            if is_valid(number) { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: Reasons for rejection
    println!("Rejection reasons:");

    let failing = [
        ("1234567890123456", ValidateOptions::default(), "Bad checksum"),
        ("3530111333300000", ValidateOptions::default(), "Unrecognised brand"),
        ("411111111111116", ValidateOptions::default(), "Wrong length"),
        ("378282246310005", ValidateOptions::new().cvc("123"), "Short CID"),
        ("4111111111111111", ValidateOptions::new().expiry_month_year(1, 2020), "Expired"),
    ];

    for (number, options, description) in failing {
        let result = validate_card(number, &options);
        let label = match result.reason() {
            None => "none",
            Some(InvalidReason::InvalidLuhn) => "InvalidLuhn",
            Some(InvalidReason::UnknownCardType) => "UnknownCardType",
            Some(InvalidReason::InvalidLength) => "InvalidLength",
            Some(InvalidReason::InvalidCvc) => "InvalidCvc",
            Some(InvalidReason::Expired) => "Expired",
            Some(InvalidReason::BrandNotAllowed) => "BrandNotAllowed",
        };
        match result.reason() {
            Some(reason) => println!("  {}: {} - {}", description, label, reason),
            None => println!("  {}: Unexpectedly valid", description),
        }
    }
    println!();

    // Example 4: Masking errors surface as Err
    match mask("12", 4) {
        Ok(masked) => println!("Masked: {}", masked),
        Err(e) => println!("Mask error: {}\n", e),
    }

    // Example 5: Detection and the brand table
    println!("Detected: {}", detect_brand("2221000000000009").name());
    println!("\nKnown brands:");
    for brand in BrandTable::builtin().iter() {
        let lengths: Vec<String> = brand.lengths.iter().map(|l| l.to_string()).collect();
        println!(
            "  {:18} - Lengths: {:12} {}: {} digits",
            brand.display_name,
            if lengths.is_empty() { "-".to_string() } else { lengths.join(", ") },
            brand.code.label,
            brand.code.size
        );
    }
}
