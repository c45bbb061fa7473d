//! # cardcheck
//!
//! Payment card number validation for Rust.
//!
//! ## Features
//!
//! - Card brand detection from leading-digit patterns
//! - Luhn checksum and per-brand length validation
//! - Security code (CVC/CVV/CID) and expiry validation
//! - Masking and grouping for display
//! - A composite validator that reports one reason per failure
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate_card, is_valid, BrandId, ValidateOptions};
//!
//! let result = validate_card("4111-1111-1111-1111", &ValidateOptions::default());
//! assert!(result.is_valid());
//! assert_eq!(result.card_brand().id(), Some(BrandId::Visa));
//!
//! // Safe for logs and UIs
//! assert_eq!(result.display_number(), Some("**** **** **** 1111"));
//!
//! // Quick boolean check
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Optional Checks
//!
//! ```rust
//! use cardcheck::{validate_card, BrandId, InvalidReason, ValidateOptions};
//!
//! let options = ValidateOptions::new()
//!     .cvc("1234")
//!     .expiry_month_year(12, 2099)
//!     .allowed_brands([BrandId::AmericanExpress]);
//!
//! let result = validate_card("3782 822463 10005", &options);
//! assert!(result.is_valid());
//! assert_eq!(result.cvc_valid(), Some(true));
//!
//! let result = validate_card("4111111111111111", &options);
//! assert_eq!(result.reason(), Some(InvalidReason::InvalidCvc));
//! ```
//!
//! ## Building Blocks
//!
//! ```rust
//! use cardcheck::{detect_brand, format, is_length_valid, is_luhn_valid, mask, sanitize};
//!
//! let digits = sanitize("3782-822463-10005");
//! assert!(is_luhn_valid(&digits));
//!
//! let brand = detect_brand(&digits);
//! assert_eq!(brand.name(), "American Express");
//! assert!(is_length_valid(&digits, brand.definition()));
//!
//! assert_eq!(format(&digits), "3782 8224 6310 005");
//! assert_eq!(mask(&digits, 4).unwrap(), "**** **** ***0 005");
//! ```
//!
//! ## Expiry Parsing
//!
//! ```rust
//! use cardcheck::expiry;
//!
//! let exp = expiry::parse_expiry("12/30").unwrap();
//! assert_eq!(exp.month(), 12);
//! assert_eq!(exp.year(), 2030);
//!
//! let exp = expiry::parse_expiry("01/20").unwrap();
//! assert!(exp.is_expired());
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use cardcheck::{BatchValidator, batch};
//!
//! let batch_validator = BatchValidator::new();
//! let cards = vec!["4111111111111111", "5500000000000004", "invalid"];
//!
//! let results = batch_validator.validate_all(&cards);
//! assert_eq!(results.len(), 3);
//!
//! let (valid_count, _) = batch::count_valid(&cards);
//! assert_eq!(valid_count, 2);
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Patterns | Lengths | Code |
//! |-------|----------|---------|------|
//! | Visa | 4 | 13, 16, 19 | CVV 3 |
//! | Mastercard | 51-55, 2221-2720 | 16 | CVC 3 |
//! | American Express | 34, 37 | 15 | CID 4 |
//! | Discover | 6011, 644-649, 65 | 16, 19 | CID 3 |
//!
//! Diners Club, Elo, Hiper, Hipercard, JCB, Maestro, Mir, UnionPay and Verve
//! are listed with their security code label but have no patterns yet, so
//! numbers are never detected as those brands.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for results, brands and reasons |
//! | `parallel` | Rayon-based batch validation |
//! | `generate` | Random test card generation |
//! | `tracing` | Debug events from the validator |
//! | `cli` | `cardcheck` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod brand;
pub mod cvc;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod format;
pub mod generate;
pub mod length;
pub mod luhn;
pub mod mask;
pub mod sanitize;
pub mod validate;

// Re-export main types at crate root
pub use batch::BatchValidator;
pub use brand::{
    BrandDefinition, BrandId, BrandTable, CardBrand, ParseBrandIdError, Pattern, SecurityCode,
    SecurityCodeLabel, BRANDS,
};
pub use error::{InvalidReason, MaskError};
pub use validate::{is_valid, validate_card, CardValidator, ValidateOptions, ValidationResult};

// Re-export the individual checks
pub use cvc::{is_cvc_valid, validate_cvc, CvcError};
pub use detect::detect_brand;
pub use expiry::{is_expiry_valid, parse_expiry, ExpiryDate, ExpiryError};
pub use format::format;
pub use length::is_length_valid;
pub use luhn::is_luhn_valid;
pub use mask::mask;
pub use sanitize::sanitize;
