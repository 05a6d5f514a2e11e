// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{error, output};
use yare::parameterized;

#[parameterized(
    round_up = { 1.25, 1, "1.3" },
    below_tie = { 1.005, 2, "1.00" },
    whole_tie = { 2.5, 0, "3" },
    negative_tie = { -1.5, 0, "-2" },
    pad_zeros = { 3.0, 3, "3.000" },
    carry = { 9.999, 2, "10.00" },
    small = { 0.000001, 3, "0.000" },
    pi = { std::f64::consts::PI, 4, "3.1416" },
)]
fn fixed_digits(n: f64, digits: usize, expected: &str) {
    assert_eq!(fixed(n, digits), expected);
}

#[parameterized(
    hex = { 255.0, 16, "ff" },
    binary = { 10.0, 2, "1010" },
    negative = { -10.0, 2, "-1010" },
    zero = { 0.0, 2, "0" },
    half = { 0.5, 2, "0.1" },
    base36 = { 35.0, 36, "z" },
)]
fn radix_text(n: f64, radix: u32, expected: &str) {
    assert_eq!(radix_string(n, radix), expected);
}

#[parameterized(
    plain = { "42", 0.0, 42.0 },
    leading_space = { "  7px", 0.0, 7.0 },
    negative = { "-12.9", 0.0, -12.0 },
    detect_hex = { "0x1A", 0.0, 26.0 },
    explicit_hex = { "0xff", 16.0, 255.0 },
    binary = { "1011", 2.0, 11.0 },
    base36 = { "z", 36.0, 35.0 },
)]
fn int_prefix(text: &str, radix: f64, expected: f64) {
    assert_eq!(parse_int_prefix(text, radix), expected);
}

#[parameterized(
    empty = { "", 0.0 },
    letters = { "abc", 0.0 },
    radix_one = { "1", 1.0 },
    radix_too_big = { "1", 37.0 },
    digit_out_of_range = { "2", 2.0 },
)]
fn int_prefix_nan(text: &str, radix: f64) {
    assert!(parse_int_prefix(text, radix).is_nan());
}

#[parameterized(
    trailing_text = { "3.14abc", 3.14 },
    leading_dot = { ".5", 0.5 },
    exponent = { "1e3x", 1000.0 },
    dangling_exponent = { "2e", 2.0 },
    signed = { "-0.25", -0.25 },
    infinity = { "Infinityx", f64::INFINITY },
)]
fn float_prefix(text: &str, expected: f64) {
    assert_eq!(parse_float_prefix(text), expected);
}

#[test]
fn float_prefix_without_digits_is_nan() {
    assert!(parse_float_prefix("e5").is_nan());
    assert!(parse_float_prefix(".").is_nan());
}

#[test]
fn methods_from_script() {
    let out = output(
        r#"
        console.log((1.005).toFixed(2), (255).toString(16), (5).toString(2));
        console.log(Number("12"), Number(""), Number(), Number("x"));
        console.log(Number.isInteger(5), Number.isInteger(5.5), Number.isSafeInteger(2 ** 53));
        console.log(isNaN("abc"), Number.isNaN("abc"), isFinite("12"), Number.isFinite("12"));
        console.log(parseInt("08"), parseFloat("1.5e2"), Number.MAX_SAFE_INTEGER);
        "#,
    );
    assert_eq!(
        out,
        "1.00 ff 101\n12 0 0 NaN\ntrue false false\ntrue false true false\n8 150 9007199254740991"
    );
}

#[parameterized(
    fixed_range = { "(1).toFixed(101)", "toFixed() digits argument must be between 0 and 100" },
    radix_range = { "(1).toString(1)", "toString() radix must be between 2 and 36" },
)]
fn range_errors(source: &str, message: &str) {
    assert_eq!(error(source), message);
}
