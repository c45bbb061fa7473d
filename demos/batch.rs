//! Batch processing example.
//!
//! Run with: `cargo run --example batch`

use cardcheck::{batch, BatchValidator, BrandId, ValidateOptions};

fn main() {
    println!("=== Batch Card Validation ===\n");

    // Sample card numbers (mix of valid and invalid)
    let cards = vec![
        "4111111111111111", // Valid Visa
        "5500000000000004", // Valid Mastercard
        "378282246310005",  // Valid Amex
        "6011111111111117", // Valid Discover
        "4111111111111112", // Invalid (bad checksum)
        "invalid",          // Invalid (no digits)
        "3530111333300000", // Unknown brand
    ];

    // Method 1: BatchValidator
    println!("Using BatchValidator:");
    let validator = BatchValidator::new();

    let results = validator.validate_all(&cards);
    println!("  Total cards: {}", results.len());
    println!("  Valid: {}", results.iter().filter(|r| r.is_valid()).count());
    println!("  Invalid: {}", results.iter().filter(|r| !r.is_valid()).count());
    println!();

    println!("  Valid cards:");
    for card in validator.validate_valid_only(&cards) {
        println!(
            "    {} - {}",
            card.display_number().unwrap_or("-"),
            card.card_brand().name()
        );
    }
    println!();

    // Method 2: Partitioned results with failure reasons
    println!("Partitioned:");
    let (valid, invalid) = validator.validate_partitioned(&cards);
    println!("  {} valid", valid.len());
    for (index, reason) in invalid {
        println!("  [{}] {}: {}", index, cards[index], reason);
    }
    println!();

    // Method 3: Shared options with an allow-list
    println!("Visa and Mastercard only:");
    let options = ValidateOptions::new().allowed_brands([BrandId::Visa, BrandId::Mastercard]);
    let restricted = BatchValidator::with_options(options);
    for (card, result) in cards.iter().zip(restricted.validate_all(&cards)) {
        match result.reason() {
            None => println!("  {} accepted", card),
            Some(reason) => println!("  {} rejected: {}", card, reason),
        }
    }
    println!();

    // Performance demonstration with larger dataset
    println!("Performance Test:");
    let large_dataset: Vec<&str> = cards.iter().copied().cycle().take(10000).collect();

    let start = std::time::Instant::now();
    let (count, _) = batch::count_valid(&large_dataset);
    let elapsed = start.elapsed();

    println!("  Validated {} cards in {:?}", large_dataset.len(), elapsed);
    println!("  Valid: {}", count);
    println!(
        "  Rate: {:.2} cards/sec",
        large_dataset.len() as f64 / elapsed.as_secs_f64()
    );
}
