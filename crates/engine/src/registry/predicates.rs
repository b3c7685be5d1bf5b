//! Built-in value predicate library
//!
//! General-purpose type and value checks imported into every validator
//! registry at bootstrap (see [`RegistryConfig`](crate::RegistryConfig)).
//! Each predicate `p` is exposed four ways under the library prefix:
//!
//! | Name        | Accepts                                                    |
//! |-------------|------------------------------------------------------------|
//! | `is.p`      | values satisfying `p`                                      |
//! | `is.not.p`  | values not satisfying `p`                                  |
//! | `is.all.p`  | arrays whose every element satisfies `p`, or a value that does |
//! | `is.any.p`  | arrays with some element satisfying `p`, or a value that does  |
//!
//! The library only tests values; it has no entries that reconfigure it.
//! Every predicate ignores the property being written.

use super::tree::RegistrationTree;
use super::validator::Validator;
use once_cell::sync::Lazy;
use propertyobject_core::Value;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A single-value predicate
pub type ValuePredicate = fn(&Value) -> bool;

/// Every predicate in the library, by name
pub const PREDICATES: &[(&str, ValuePredicate)] = &[
    // type checks
    ("array", is_array),
    ("boolean", is_boolean),
    ("char", is_char),
    ("json", is_json),
    ("nan", is_nan),
    ("null", is_null),
    ("number", is_number),
    ("object", is_object),
    ("string", is_string),
    // presence checks
    ("empty", is_empty),
    ("existy", is_existy),
    ("truthy", is_truthy),
    ("falsy", is_falsy),
    ("space", is_space),
    // pattern checks
    ("affirmative", is_affirmative),
    ("alphaNumeric", is_alpha_numeric),
    ("caPostalCode", is_ca_postal_code),
    ("creditCard", is_credit_card),
    ("dateString", is_date_string),
    ("email", is_email),
    ("eppPhone", is_epp_phone),
    ("hexadecimal", is_hexadecimal),
    ("hexColor", is_hex_color),
    ("ip", is_ip),
    ("ipv4", is_ipv4),
    ("ipv6", is_ipv6),
    ("nanpPhone", is_nanp_phone),
    ("socialSecurityNumber", is_social_security_number),
    ("timeString", is_time_string),
    ("ukPostCode", is_uk_post_code),
    ("url", is_url),
    ("usZipCode", is_us_zip_code),
    // string checks
    ("upperCase", is_upper_case),
    ("lowerCase", is_lower_case),
    ("capitalized", is_capitalized),
    ("palindrome", is_palindrome),
    // arithmetic checks
    ("even", is_even),
    ("odd", is_odd),
    ("positive", is_positive),
    ("negative", is_negative),
    ("decimal", is_decimal),
    ("integer", is_integer),
    ("finite", is_finite),
    ("infinite", is_infinite),
    ("leapYear", is_leap_year),
    // array checks
    ("sorted", is_sorted),
];

/// Build the library as a registration tree
///
/// Top-level leaves hold the plain predicates; the `not`, `all` and `any`
/// branches hold the negated and quantified forms.
pub fn library() -> RegistrationTree<Validator> {
    let mut plain = RegistrationTree::branch();
    let mut not = RegistrationTree::branch();
    let mut all = RegistrationTree::branch();
    let mut any = RegistrationTree::branch();

    for &(name, predicate) in PREDICATES {
        plain = plain.with_leaf(name, Validator::from_value_predicate(predicate));
        not = not.with_leaf(
            name,
            Validator::from_value_predicate(move |v| !predicate(v)),
        );
        all = all.with_leaf(
            name,
            Validator::from_value_predicate(move |v| match v {
                Value::Array(items) => items.iter().all(predicate),
                other => predicate(other),
            }),
        );
        any = any.with_leaf(
            name,
            Validator::from_value_predicate(move |v| match v {
                Value::Array(items) => items.iter().any(predicate),
                other => predicate(other),
            }),
        );
    }

    plain.with("not", not).with("all", all).with("any", any)
}

// ============================================================================
// Type checks
// ============================================================================

fn is_array(v: &Value) -> bool {
    v.is_array()
}

fn is_boolean(v: &Value) -> bool {
    v.is_bool()
}

fn is_char(v: &Value) -> bool {
    v.as_str().is_some_and(|s| s.chars().count() == 1)
}

/// Plain key/value object
fn is_json(v: &Value) -> bool {
    v.is_object()
}

fn is_nan(v: &Value) -> bool {
    v.as_float().is_some_and(f64::is_nan)
}

fn is_null(v: &Value) -> bool {
    v.is_null()
}

/// Any number except NaN
fn is_number(v: &Value) -> bool {
    v.is_number() && !is_nan(v)
}

/// Objects and arrays
fn is_object(v: &Value) -> bool {
    v.is_object() || v.is_array()
}

fn is_string(v: &Value) -> bool {
    v.is_string()
}

// ============================================================================
// Presence checks
// ============================================================================

/// Empty object, empty array or empty string
fn is_empty(v: &Value) -> bool {
    match v {
        Value::Object(o) => o.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn is_existy(v: &Value) -> bool {
    !v.is_null()
}

/// Anything present except `false`
fn is_truthy(v: &Value) -> bool {
    is_existy(v) && *v != Value::Bool(false)
}

fn is_falsy(v: &Value) -> bool {
    !is_truthy(v)
}

/// A single whitespace character (tab through carriage return, or space)
fn is_space(v: &Value) -> bool {
    match v.as_str() {
        Some(s) if s.chars().count() == 1 => s
            .chars()
            .next()
            .is_some_and(|c| matches!(c, '\t'..='\r' | ' ')),
        _ => false,
    }
}

// ============================================================================
// Pattern checks (strings only)
// ============================================================================

fn compile(pattern: &str) -> Regex {
    // Patterns are literals in this file; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

static AFFIRMATIVE: Lazy<Regex> = Lazy::new(|| compile(r"^(?:1|t(?:rue)?|y(?:es)?|ok(?:ay)?)$"));
static ALPHA_NUMERIC: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9]+$"));
static CA_POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-VXY][0-9][A-Z]\s?[0-9][A-Z][0-9]$"));
static CREDIT_CARD: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9]{2})[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$",
    )
});
static DATE_STRING: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^(?:1[0-2]|0?[1-9])(?:/(?:3[01]|[12][0-9]|0?[1-9])/|-(?:3[01]|[12][0-9]|0?[1-9])-)(?:[0-9]{2})?[0-9]{2}$",
    )
});
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+$",
    )
});
static EPP_PHONE: Lazy<Regex> = Lazy::new(|| compile(r"^\+[0-9]{1,3}\.[0-9]{4,14}(?:x.+)?$"));
static HEXADECIMAL: Lazy<Regex> = Lazy::new(|| compile(r"^(?:0x)?[0-9a-fA-F]+$"));
static HEX_COLOR: Lazy<Regex> = Lazy::new(|| compile(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$"));
static NANP_PHONE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^\(?([2-9][0-9]{2})\)?[-. ]?([2-9][0-9]{2})[-. ]?([0-9]{4})$")
});
static SOCIAL_SECURITY_NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"^([0-8][0-9]{2})-?([0-9]{2})-?([0-9]{4})$"));
static TIME_STRING: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:2[0-3]|[01]?[0-9]):[0-5]?[0-9]:[0-5]?[0-9]$"));
static UK_POST_CODE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(?:[A-Z]{1,2}[0-9RCHNQ][0-9A-Z]?\s?[0-9][ABD-HJLNP-UW-Z]{2}|[A-Z]{2}-?[0-9]{4})$")
});
static URL: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^(?:(?:https?|ftp)://)?(?:(?:[a-z0-9\x{a1}-\x{ffff}](?:[a-z0-9\x{a1}-\x{ffff}-]*[a-z0-9\x{a1}-\x{ffff}])?\.)+[a-z\x{a1}-\x{ffff}]{2,}|(?:[0-9]{1,3}\.){3}[0-9]{1,3})(?::[0-9]{2,5})?(?:/\S*)?$",
    )
});
static US_ZIP_CODE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{5}(?:-[0-9]{4})?$"));

fn matches(pattern: &Regex, v: &Value) -> bool {
    v.as_str().is_some_and(|s| pattern.is_match(s))
}

fn is_affirmative(v: &Value) -> bool {
    matches(&AFFIRMATIVE, v)
}

fn is_alpha_numeric(v: &Value) -> bool {
    matches(&ALPHA_NUMERIC, v)
}

/// Canadian postal code; the letters D, F, I, O, Q and U never appear
fn is_ca_postal_code(v: &Value) -> bool {
    matches(&CA_POSTAL_CODE, v)
        && v.as_str()
            .is_some_and(|s| !s.contains(['D', 'F', 'I', 'O', 'Q', 'U']))
}

/// Visa, MasterCard, Discover, Amex, Diners Club or JCB number
fn is_credit_card(v: &Value) -> bool {
    matches(&CREDIT_CARD, v)
}

fn is_date_string(v: &Value) -> bool {
    matches(&DATE_STRING, v)
}

fn is_email(v: &Value) -> bool {
    matches(&EMAIL, v)
}

fn is_epp_phone(v: &Value) -> bool {
    matches(&EPP_PHONE, v)
}

fn is_hexadecimal(v: &Value) -> bool {
    matches(&HEXADECIMAL, v)
}

fn is_hex_color(v: &Value) -> bool {
    matches(&HEX_COLOR, v)
}

fn is_nanp_phone(v: &Value) -> bool {
    matches(&NANP_PHONE, v)
}

/// US social security number with area 000, 666 and all-zero groups excluded
fn is_social_security_number(v: &Value) -> bool {
    let Some(parts) = v.as_str().and_then(|s| SOCIAL_SECURITY_NUMBER.captures(s)) else {
        return false;
    };
    !matches!(&parts[1], "000" | "666") && &parts[2] != "00" && &parts[3] != "0000"
}

fn is_time_string(v: &Value) -> bool {
    matches(&TIME_STRING, v)
}

fn is_uk_post_code(v: &Value) -> bool {
    matches(&UK_POST_CODE, v)
}

fn is_url(v: &Value) -> bool {
    matches(&URL, v)
}

fn is_us_zip_code(v: &Value) -> bool {
    matches(&US_ZIP_CODE, v)
}

fn is_ipv4(v: &Value) -> bool {
    v.as_str().is_some_and(|s| s.parse::<Ipv4Addr>().is_ok())
}

fn is_ipv6(v: &Value) -> bool {
    v.as_str().is_some_and(|s| s.parse::<Ipv6Addr>().is_ok())
}

fn is_ip(v: &Value) -> bool {
    is_ipv4(v) || is_ipv6(v)
}

// ============================================================================
// String checks
// ============================================================================

fn is_upper_case(v: &Value) -> bool {
    v.as_str().is_some_and(|s| s == s.to_uppercase())
}

fn is_lower_case(v: &Value) -> bool {
    v.as_str().is_some_and(|s| s == s.to_lowercase())
}

/// Every space-separated word starts with an uppercase letter
fn is_capitalized(v: &Value) -> bool {
    v.as_str().is_some_and(|s| {
        s.split(' ').all(|word| {
            word.chars()
                .next()
                .map_or(true, |c| c.to_uppercase().eq(std::iter::once(c)))
        })
    })
}

/// Reads the same both ways, ignoring case and non-alphanumerics
fn is_palindrome(v: &Value) -> bool {
    v.as_str().is_some_and(|s| {
        let cleaned: Vec<char> = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        cleaned.iter().eq(cleaned.iter().rev())
    })
}

// ============================================================================
// Arithmetic checks
// ============================================================================

fn number(v: &Value) -> Option<f64> {
    if is_number(v) {
        v.as_f64()
    } else {
        None
    }
}

fn is_even(v: &Value) -> bool {
    match v {
        Value::Int(i) => i % 2 == 0,
        _ => number(v).is_some_and(|n| n % 2.0 == 0.0),
    }
}

fn is_odd(v: &Value) -> bool {
    match v {
        Value::Int(i) => i % 2 != 0,
        _ => number(v).is_some_and(|n| n.abs() % 2.0 == 1.0),
    }
}

fn is_positive(v: &Value) -> bool {
    number(v).is_some_and(|n| n > 0.0)
}

fn is_negative(v: &Value) -> bool {
    number(v).is_some_and(|n| n < 0.0)
}

/// A number whose remainder by 1 is not zero; infinities count
fn is_decimal(v: &Value) -> bool {
    match v {
        Value::Int(_) => false,
        _ => number(v).is_some_and(|n| n % 1.0 != 0.0),
    }
}

/// A number without a fractional part
fn is_integer(v: &Value) -> bool {
    match v {
        Value::Int(_) => true,
        _ => number(v).is_some_and(|n| n.is_finite() && n.fract() == 0.0),
    }
}

fn is_finite(v: &Value) -> bool {
    number(v).is_some_and(f64::is_finite)
}

fn is_infinite(v: &Value) -> bool {
    number(v).is_some_and(f64::is_infinite)
}

/// Gregorian leap year
fn is_leap_year(v: &Value) -> bool {
    match v {
        Value::Int(y) => (y % 4 == 0 && y % 100 != 0) || y % 400 == 0,
        _ => number(v).is_some_and(|y| (y % 4.0 == 0.0 && y % 100.0 != 0.0) || y % 400.0 == 0.0),
    }
}

// ============================================================================
// Array checks
// ============================================================================

/// Ascending array of numbers, or of strings
fn is_sorted(v: &Value) -> bool {
    let Some(items) = v.as_array() else {
        return false;
    };
    items.windows(2).all(|pair| match (&pair[0], &pair[1]) {
        (Value::String(a), Value::String(b)) => a <= b,
        (a, b) => match (number(a), number(b)) {
            (Some(a), Some(b)) => a <= b,
            _ => false,
        },
    })
}
