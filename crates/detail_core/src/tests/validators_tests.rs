use super::*;

#[test]
fn required_rejects_only_empty() {
    assert!(!required(""));
    assert!(required(" "));
    assert!(required("Al"));
}

#[test]
fn min_length_passes_empty_and_long_enough() {
    let check = min_length(2);
    assert!(check(""));
    assert!(!check("A"));
    assert!(check("Al"));
    assert!(check("Alice"));
}

#[test]
fn max_length_passes_empty_and_short_enough() {
    let check = max_length(15);
    assert!(check(""));
    assert!(check("abcdefghijklmno"));
    assert!(!check("abcdefghijklmnop"));
}

#[test]
fn length_checks_count_characters_not_bytes() {
    assert!(max_length(3)("été"));
    assert!(min_length(2)("ü!"));
    assert!(!min_length(2)("ü"));
}

#[test]
fn length_properties_hold_over_a_range_of_inputs() {
    for n in 0..40 {
        let value = "x".repeat(n);
        assert_eq!(min_length(2)(&value), n == 0 || n >= 2, "min_length for len {n}");
        assert_eq!(max_length(15)(&value), n == 0 || n <= 15, "max_length for len {n}");
    }
}

#[test]
fn is_number_follows_numeric_coercion() {
    assert!(is_number("42"));
    assert!(is_number("-3.5"));
    assert!(is_number("1e3"));
    assert!(is_number(" 7 "));
    assert!(is_number(""));
    assert!(is_number("Infinity"));
    assert!(is_number("-Infinity"));
    assert!(!is_number("abc"));
    assert!(!is_number("NaN"));
    assert!(!is_number("inf"));
    assert!(!is_number("12px"));
}

#[test]
fn is_number_accepts_prefixed_integer_literals() {
    assert!(is_number("0x10"));
    assert!(is_number("0XfF"));
    assert!(is_number("0o17"));
    assert!(is_number("0b101"));
    assert!(is_number(" 0x1a "));
    assert!(!is_number("0x"));
    assert!(!is_number("0xg1"));
    assert!(!is_number("0o8"));
    assert!(!is_number("0b102"));
    assert!(!is_number("-0x10"));
}

#[test]
fn valid_email_is_case_insensitive() {
    assert!(valid_email("jo@example.com"));
    assert!(valid_email("JO.SMITH+camp@Example.ORG"));
    assert!(!valid_email("jo@example"));
    assert!(!valid_email("jo example.com"));
    assert!(!valid_email("jo@example.online"));
    assert!(!valid_email(""));
}
