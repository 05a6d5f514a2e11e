// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::test_support::{error, output};
use yare::parameterized;

fn eval(expr: &str) -> String {
    output(&format!("console.log({expr})"))
}

#[parameterized(
    char_at = { "'abc'.charAt(1)", "b" },
    char_at_out_of_range = { "'abc'.charAt(9) === ''", "true" },
    char_code_at = { "'A'.charCodeAt(0)", "65" },
    char_code_at_nan = { "'A'.charCodeAt(3)", "NaN" },
    at_negative = { "'abc'.at(-1)", "c" },
    from_char_code = { "String.fromCharCode(72, 105)", "Hi" },
    unicode_length = { "'héllo'.length", "5" },
    unicode_slice = { "'héllo'.slice(1, 3)", "él" },
)]
fn character_access(expr: &str, expected: &str) {
    assert_eq!(eval(expr), expected);
}

#[parameterized(
    index_of = { "'hello'.indexOf('l')", "2" },
    index_of_from = { "'hello'.indexOf('l', 3)", "3" },
    index_of_missing = { "'hello'.indexOf('z')", "-1" },
    index_of_empty = { "'abc'.indexOf('', 10)", "3" },
    last_index_of = { "'hello'.lastIndexOf('l')", "3" },
    includes = { "'hello'.includes('ell')", "true" },
    starts_with = { "'hello'.startsWith('he')", "true" },
    starts_with_at = { "'hello'.startsWith('l', 2)", "true" },
    ends_with = { "'hello'.endsWith('lo')", "true" },
    ends_with_end = { "'hello'.endsWith('l', 3)", "true" },
)]
fn searching(expr: &str, expected: &str) {
    assert_eq!(eval(expr), expected);
}

#[parameterized(
    slice_negative = { "'hello'.slice(-3)", "llo" },
    slice_reversed = { "'hello'.slice(3, 1).length", "0" },
    substring_swaps = { "'hello'.substring(3, 1)", "el" },
    substring_negative = { "'hello'.substring(-2, 2)", "he" },
    upper = { "'abc'.toUpperCase()", "ABC" },
    lower = { "'ÀB'.toLowerCase()", "àb" },
    trim = { "'[' + '  x \\n'.trim() + ']'", "[x]" },
    trim_start = { "'[' + '  x '.trimStart() + ']'", "[x ]" },
    trim_end = { "'[' + '  x '.trimEnd() + ']'", "[  x]" },
)]
fn slicing_and_case(expr: &str, expected: &str) {
    assert_eq!(eval(expr), expected);
}

#[parameterized(
    split = { "'a,b,,c'.split(',').length", "4" },
    split_chars = { "'abc'.split('').join('|')", "a|b|c" },
    split_limit = { "'a b c'.split(' ', 2).join('|')", "a|b" },
    split_undefined = { "'a,b'.split().length", "1" },
    split_empty_string = { "''.split('').length", "0" },
    repeat = { "'ab'.repeat(3)", "ababab" },
    repeat_zero = { "'ab'.repeat(0).length", "0" },
    pad_start = { "'5'.padStart(3, '0')", "005" },
    pad_start_cycles = { "'x'.padStart(6, 'ab')", "ababax" },
    pad_end = { "'5'.padEnd(3) + '|'", "5  |" },
    pad_shorter = { "'hello'.padStart(2)", "hello" },
    concat = { "'a'.concat(1, null)", "a1null" },
    locale_compare = { "['b', 'a', 'c'].sort((x, y) => x.localeCompare(y)).join('')", "abc" },
)]
fn building(expr: &str, expected: &str) {
    assert_eq!(eval(expr), expected);
}

#[parameterized(
    first_only = { "'a-b-c'.replace('-', '+')", "a+b-c" },
    all = { "'a-b-c'.replaceAll('-', '+')", "a+b+c" },
    missing = { "'abc'.replace('z', 'y')", "abc" },
    dollar = { "'abc'.replace('b', '$$')", "a$c" },
    matched = { "'abc'.replace('b', '[$&]')", "a[b]c" },
    before_after = { "'abc'.replace('b', \"$'$`\")", "acac" },
    unknown_dollar = { "'abc'.replace('b', '$1')", "a$1c" },
    callback = { "'a-b'.replaceAll('-', (m, i) => `<${m}${i}>`)", "a<-1>b" },
)]
fn replacing(expr: &str, expected: &str) {
    assert_eq!(eval(expr), expected);
}

#[test]
fn conversions() {
    assert_eq!(eval("String(), String(null), String([1, [2]]), String({})"), " null 1,2 [object Object]");
}

#[parameterized(
    negative_repeat = { "'a'.repeat(-1)", "Invalid count value: -1" },
    infinite_repeat = { "'a'.repeat(Infinity)", "Invalid count value: Infinity" },
)]
fn errors(source: &str, message: &str) {
    assert_eq!(error(source), message);
}
