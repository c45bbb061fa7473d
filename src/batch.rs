//! Batch validation of many card numbers.
//!
//! A [`BatchValidator`] applies one set of [`ValidateOptions`] to every card
//! in a slice. With the `parallel` feature the work can be spread over a
//! rayon thread pool; results come back in input order either way.

use crate::error::InvalidReason;
use crate::validate::{CardValidator, ValidateOptions, ValidationResult};

/// Validates slices of card numbers with shared options.
///
/// # Example
///
/// ```
/// use cardcheck::{BatchValidator, BrandId, ValidateOptions};
///
/// let batch = BatchValidator::new();
/// let cards = ["4111111111111111", "5500000000000004", "378282246310005"];
/// let results = batch.validate_all(&cards);
///
/// for (card, result) in cards.iter().zip(results.iter()) {
///     match result.reason() {
///         None => println!("{}: {} valid", card, result.card_brand()),
///         Some(reason) => println!("{}: invalid - {}", card, reason),
///     }
/// }
///
/// let visa_only = BatchValidator::with_options(
///     ValidateOptions::new().allowed_brands([BrandId::Visa]),
/// );
/// assert_eq!(visa_only.validate_valid_only(&cards).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchValidator {
    validator: CardValidator,
    options: ValidateOptions,
}

impl BatchValidator {
    /// Creates a batch validator with no optional checks.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch validator applying `options` to every card.
    #[inline]
    pub fn with_options(options: ValidateOptions) -> Self {
        Self {
            validator: CardValidator::new(),
            options,
        }
    }

    /// Replaces the underlying card validator.
    pub fn validator(mut self, validator: CardValidator) -> Self {
        self.validator = validator;
        self
    }

    /// The options applied to each card.
    #[inline]
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    #[inline]
    fn check(&self, card: &str) -> ValidationResult {
        self.validator.validate(card, &self.options)
    }

    /// Validates every card, in input order.
    pub fn validate_all<S: AsRef<str>>(&self, cards: &[S]) -> Vec<ValidationResult> {
        cards.iter().map(|c| self.check(c.as_ref())).collect()
    }

    /// Validates every card and keeps only the valid results.
    pub fn validate_valid_only<S: AsRef<str>>(&self, cards: &[S]) -> Vec<ValidationResult> {
        cards
            .iter()
            .map(|c| self.check(c.as_ref()))
            .filter(ValidationResult::is_valid)
            .collect()
    }

    /// Splits a batch into valid results and `(index, reason)` failures.
    pub fn validate_partitioned<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> (Vec<ValidationResult>, Vec<(usize, InvalidReason)>) {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (i, card) in cards.iter().enumerate() {
            let result = self.check(card.as_ref());
            match result.reason() {
                None => valid.push(result),
                Some(reason) => invalid.push((i, reason)),
            }
        }

        (valid, invalid)
    }

    /// Validates every card on the rayon thread pool, in input order.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(&self, cards: &[S]) -> Vec<ValidationResult> {
        use rayon::prelude::*;
        cards.par_iter().map(|c| self.check(c.as_ref())).collect()
    }

    /// Counts `(valid, invalid)` cards on the rayon thread pool.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn count_valid_parallel<S: AsRef<str> + Sync>(&self, cards: &[S]) -> (usize, usize) {
        use rayon::prelude::*;

        let valid = cards
            .par_iter()
            .filter(|c| self.check(c.as_ref()).is_valid())
            .count();

        (valid, cards.len() - valid)
    }
}

/// Validates a slice of cards with default options.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_batch;
///
/// let results = validate_batch(&["4111111111111111", "5500000000000004"]);
/// assert!(results.iter().all(|r| r.is_valid()));
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<ValidationResult> {
    BatchValidator::new().validate_all(cards)
}

/// Counts `(valid, invalid)` cards with default options.
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// assert_eq!(count_valid(&cards), (2, 1));
/// ```
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let batch = BatchValidator::new();
    let valid = cards
        .iter()
        .filter(|c| batch.check(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}

/// Validates a slice of cards in parallel with default options.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<ValidationResult> {
    BatchValidator::new().validate_parallel(cards)
}

/// Counts `(valid, invalid)` cards in parallel with default options.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    BatchValidator::new().count_valid_parallel(cards)
}
