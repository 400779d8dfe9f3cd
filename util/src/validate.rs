//! Literal-format validators for option values.
//!
//! Each predicate decides whether a string is lexically valid for one value
//! kind. A literal passes in two stages: it must match the grammar for the
//! kind, and the corresponding numeric parse must succeed. The second stage
//! catches magnitudes the grammar alone cannot bound, such as
//! `9223372036854775808` (one past `i64::MAX`, still nineteen digits).
//!
//! The predicates return `false` for anything else; they never panic.

use std::sync::LazyLock;

use regex::Regex;

/// Grammar constants shared by the validators.
static PATTERNS: LazyLock<LiteralPatterns> = LazyLock::new(LiteralPatterns::new);

struct LiteralPatterns {
    signed: Regex,
    unsigned: Regex,
    real: Regex,
    double: Regex,
    boolean: Regex,
}

impl LiteralPatterns {
    fn new() -> Self {
        Self {
            // Optional sign, then zero or a non-zero-leading digit run capped
            // near the 64-bit decimal widths.
            signed: Regex::new(r"^[+-]?(0|[1-9][0-9]{0,18})$").expect("static regex must compile"),
            unsigned: Regex::new(r"^\+?(0|[1-9][0-9]{0,19})$").expect("static regex must compile"),
            // Integer part is mandatory; a dot requires fraction digits.
            real: Regex::new(r"^[+-]?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]{1,4})?$")
                .expect("static regex must compile"),
            double: Regex::new(r"^[+-]?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]{1,3})?$")
                .expect("static regex must compile"),
            boolean: Regex::new(r"^(?i)(true|false)$").expect("static regex must compile"),
        }
    }
}

/// Returns `true` when `s` is a valid signed 64-bit integer literal.
///
/// An optional leading `+` or `-` is allowed, so `"-0"` is valid here even
/// though it is not for [`is_valid_unsigned`].
///
/// # Examples
///
/// ```
/// use typed_argv_util::validate::is_valid_signed;
///
/// assert!(is_valid_signed("-123412341234"));
/// assert!(is_valid_signed("9223372036854775807"));
/// assert!(!is_valid_signed("9223372036854775808"));
/// assert!(!is_valid_signed("12three"));
/// ```
pub fn is_valid_signed(s: &str) -> bool {
    PATTERNS.signed.is_match(s) && s.parse::<i64>().is_ok()
}

/// Returns `true` when `s` is a valid unsigned 64-bit integer literal.
///
/// Only a leading `+` is permitted; a minus sign is rejected even for zero.
///
/// # Examples
///
/// ```
/// use typed_argv_util::validate::is_valid_unsigned;
///
/// assert!(is_valid_unsigned("18446744073709551615"));
/// assert!(!is_valid_unsigned("18446744073709551616"));
/// assert!(!is_valid_unsigned("-0"));
/// ```
pub fn is_valid_unsigned(s: &str) -> bool {
    PATTERNS.unsigned.is_match(s) && s.parse::<u64>().is_ok()
}

/// Returns `true` when `s` is a valid floating-point literal with up to a
/// four-digit exponent.
///
/// The integer part is required (`".5"` is rejected) and a decimal point must
/// be followed by fraction digits (`"1.e5"` is rejected).
pub fn is_valid_real(s: &str) -> bool {
    PATTERNS.real.is_match(s) && s.parse::<f64>().is_ok()
}

/// Like [`is_valid_real`], with the exponent capped at three digits to stay
/// near the `f64` decimal-exponent range.
pub fn is_valid_double(s: &str) -> bool {
    PATTERNS.double.is_match(s) && s.parse::<f64>().is_ok()
}

/// Returns `true` when `s` is exactly `true` or `false`, ignoring case.
///
/// No surrounding whitespace and no numeric forms are accepted.
pub fn is_valid_boolean(s: &str) -> bool {
    PATTERNS.boolean.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_accepts_signed_digit_runs() {
        assert!(is_valid_signed("123412341234"));
        assert!(is_valid_signed("+123412341234"));
        assert!(is_valid_signed("-123412341234"));
    }

    #[test]
    fn test_signed_zero_allows_either_sign() {
        assert!(is_valid_signed("0"));
        assert!(is_valid_signed("-0"));
        assert!(is_valid_signed("+0"));
    }

    #[test]
    fn test_signed_rejects_garbage() {
        assert!(!is_valid_signed("-123helpfw"));
        assert!(!is_valid_signed("+ 123  extender"));
        assert!(!is_valid_signed(""));
        assert!(!is_valid_signed("hello"));
    }

    #[test]
    fn test_signed_64bit_boundaries() {
        assert!(is_valid_signed("9223372036854775807"));
        assert!(!is_valid_signed("9223372036854775808"));
        assert!(is_valid_signed("-9223372036854775808"));
        assert!(!is_valid_signed("-9223372036854775809"));
    }

    #[test]
    fn test_unsigned_accepts_plus_only() {
        assert!(is_valid_unsigned("9223372036854775807"));
        assert!(is_valid_unsigned("+9223372036854775807"));
        assert!(is_valid_unsigned("+0"));
        assert!(!is_valid_unsigned("-0"));
        assert!(!is_valid_unsigned("-1"));
        assert!(!is_valid_unsigned("-1256"));
    }

    #[test]
    fn test_unsigned_rejects_garbage() {
        assert!(!is_valid_unsigned("123helpfw"));
        assert!(!is_valid_unsigned("+ 123  extender"));
        assert!(!is_valid_unsigned(""));
        assert!(!is_valid_unsigned("hello"));
    }

    #[test]
    fn test_unsigned_64bit_boundaries() {
        assert!(is_valid_unsigned("18446744073709551615"));
        assert!(!is_valid_unsigned("18446744073709551616"));
    }

    #[test]
    fn test_double_accepts_sign_fraction_exponent() {
        assert!(is_valid_double("-1.623e150"));
        assert!(is_valid_double("1.623e150"));
        assert!(is_valid_double("+1.623e150"));
        assert!(is_valid_double("-1.623e-150"));
        assert!(is_valid_double("1.623e-150"));
        assert!(is_valid_double("+1.623"));
        assert!(is_valid_double("-1.623"));
        assert!(is_valid_double("+123123"));
        assert!(is_valid_double("-123123"));
        assert!(is_valid_double("123123"));
    }

    #[test]
    fn test_double_rejects_malformed_literals() {
        assert!(!is_valid_double("123helpfw"));
        assert!(!is_valid_double("+ 123  extender"));
        assert!(!is_valid_double(""));
        assert!(!is_valid_double("hello"));
        assert!(!is_valid_double("-1.623e-150.53"));
        assert!(!is_valid_double("+.623e-150"));
        assert!(!is_valid_double("1.e-150"));
    }

    #[test]
    fn test_double_zero_allows_either_sign() {
        assert!(is_valid_double("0"));
        assert!(is_valid_double("+0"));
        assert!(is_valid_double("-0"));
    }

    #[test]
    fn test_real_allows_four_digit_exponent() {
        assert!(is_valid_real("1.5e4000"));
        assert!(!is_valid_double("1.5e4000"));
        assert!(!is_valid_real("1.5e40000"));
    }

    #[test]
    fn test_boolean_ignores_case() {
        assert!(is_valid_boolean("true"));
        assert!(is_valid_boolean("false"));
        assert!(is_valid_boolean("fAlSe"));
        assert!(is_valid_boolean("TrUE"));
        assert!(is_valid_boolean("TRUE"));
        assert!(is_valid_boolean("FALSE"));
    }

    #[test]
    fn test_boolean_rejects_whitespace_and_numbers() {
        assert!(!is_valid_boolean("tr e"));
        assert!(!is_valid_boolean(" false"));
        assert!(!is_valid_boolean("hello"));
        assert!(!is_valid_boolean("12345"));
        assert!(!is_valid_boolean(""));
    }
}
