//! Input normalization.
//!
//! Every other component works on sanitized digits only: the ASCII digits of
//! the raw input, in their original order.

/// Strips everything except ASCII digits from `input`.
///
/// Never fails; empty input yields an empty string.
///
/// # Example
///
/// ```
/// use cardcheck::sanitize;
///
/// assert_eq!(sanitize("4111-1111 1111.1111"), "4111111111111111");
/// assert_eq!(sanitize("no digits"), "");
/// ```
#[inline]
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns true if `input` is non-empty and consists of ASCII digits only.
#[inline]
pub fn is_sanitized(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Converts sanitized digits to their numeric values (0-9).
///
/// Non-digit characters are skipped.
#[inline]
pub(crate) fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
