//! Text matching helpers shared by schema inference and predicate evaluation.
//!
//! # Case folding
//!
//! Predicates compare the string form of a value against a literal after
//! lower-casing both sides with Unicode lower-case mapping. `fold` is the
//! single place that mapping happens, so the filter executor and any
//! pre-folded literal sets agree.
//!
//! # Date detection
//!
//! A string is date-like when it *starts with* `yyyy-m-d` or `yyyy/m/d`:
//! four ASCII digits, a separator, one or two digits, a separator, one or two
//! digits. The separators may differ from each other. Anything may follow,
//! so `2014-03-07T10:00` and `2014-3-7 (approx)` are both dates.

use alloc::string::String;

// =========================================================================
// Case folding
// =========================================================================

/// Lower-cases `text` for case-insensitive comparison.
#[inline]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Case-insensitive equality.
///
/// ```
/// use querymate_core::pattern_match::eq_ignore_case;
/// assert!(eq_ignore_case("Germany", "GERMANY"));
/// assert!(!eq_ignore_case("Germany", "German"));
/// ```
pub fn eq_ignore_case(value: &str, literal: &str) -> bool {
    if value.is_ascii() && literal.is_ascii() {
        return value.eq_ignore_ascii_case(literal);
    }
    fold(value) == fold(literal)
}

/// Case-insensitive substring test. An empty needle matches everything.
///
/// ```
/// use querymate_core::pattern_match::contains_ignore_case;
/// assert!(contains_ignore_case("Beta Market", "market"));
/// assert!(!contains_ignore_case("Gamma", "market"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(fold(needle).as_str())
}

// =========================================================================
// Date detection
// =========================================================================

/// Returns true if `text` starts with a `yyyy-m-d` / `yyyy/m/d` date.
pub fn is_date_prefix(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if !take_digits(bytes, &mut pos, 4, 4) {
        return false;
    }
    if !take_separator(bytes, &mut pos) {
        return false;
    }
    if !take_digits(bytes, &mut pos, 1, 2) {
        return false;
    }
    if !take_separator(bytes, &mut pos) {
        return false;
    }
    // Only the leading digit is required; a third digit is just trailing text.
    take_digits(bytes, &mut pos, 1, 2)
}

/// Consumes between `min` and `max` ASCII digits.
fn take_digits(bytes: &[u8], pos: &mut usize, min: usize, max: usize) -> bool {
    let start = *pos;
    while *pos < bytes.len() && *pos - start < max && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    *pos - start >= min
}

fn take_separator(bytes: &[u8], pos: &mut usize) -> bool {
    match bytes.get(*pos) {
        Some(b'-') | Some(b'/') => {
            *pos += 1;
            true
        }
        _ => false,
    }
}

// =========================================================================
// Tests
// =========================================================================
