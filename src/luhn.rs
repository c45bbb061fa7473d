//! Luhn (mod 10) checksum.
//!
//! The checksum catches every single-digit typo and most adjacent
//! transpositions. It says nothing about whether the number was issued.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns whether a digit string satisfies the Luhn checksum.
///
/// The empty string sums to 0 and is therefore valid; reject empty numbers
/// through length validation instead. A string containing anything other
/// than ASCII digits is invalid.
///
/// # Example
///
/// ```
/// use cardcheck::is_luhn_valid;
///
/// assert!(is_luhn_valid("4539148803436467"));
/// assert!(!is_luhn_valid("8273123273520569"));
/// ```
#[inline]
pub fn is_luhn_valid(digits: &str) -> bool {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    compute_checksum(&values) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) over digit values.
///
/// The rightmost digit is position 0 and is not doubled; every odd
/// position counting from the right is doubled.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u64 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize % 10] as u64
            } else {
                d as u64
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it Luhn-valid.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::check_digit;
///
/// // 411111111111111 + 1
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    // Appending a digit shifts every existing position left by one, so the
    // digits doubled now are the even positions of the partial number.
    let sum: u64 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize % 10] as u64
            } else {
                d as u64
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert!(is_luhn_valid("4539148803436467"));
        assert!(!is_luhn_valid("8273123273520569"));
    }

    #[test]
    fn test_valid_cards() {
        assert!(is_luhn_valid("4111111111111111"));
        assert!(is_luhn_valid("4012888888881881"));
        assert!(is_luhn_valid("5500000000000004"));
        assert!(is_luhn_valid("5105105105105100"));
        assert!(is_luhn_valid("378282246310005"));
        assert!(is_luhn_valid("6011111111111117"));
        assert!(is_luhn_valid("30569309025904"));
    }

    #[test]
    fn test_invalid_cards() {
        // Changed last digit
        assert!(!is_luhn_valid("4111111111111112"));
        assert!(!is_luhn_valid("1234567890123456"));
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(is_luhn_valid(""));
    }

    #[test]
    fn test_non_digits_are_invalid() {
        assert!(!is_luhn_valid("4111 1111 1111 1111"));
        assert!(!is_luhn_valid("abc"));
    }

    #[test]
    fn test_single_digit() {
        assert!(is_luhn_valid("0"));
        assert!(!is_luhn_valid("1"));
        assert!(!is_luhn_valid("5"));
    }

    #[test]
    fn test_checksum_of_long_input() {
        let nines = vec![9u8; 1_000_000];
        assert_eq!(compute_checksum(&nines), 9_000_000);
        assert_eq!(check_digit(&nines), 0);
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]), 1);
        assert_eq!(check_digit(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 4);
        assert_eq!(check_digit(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0]), 5);
        assert_eq!(check_digit(&[]), 0);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
