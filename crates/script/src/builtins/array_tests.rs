// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::test_support::{error, output};
use yare::parameterized;

#[parameterized(
    push = { "const a = [1]; console.log(a.push(2, 3), a)", "3 1,2,3" },
    pop = { "const a = [1, 2]; console.log(a.pop(), a, [].pop())", "2 1 undefined" },
    shift = { "const a = [1, 2]; console.log(a.shift(), a)", "1 2" },
    unshift = { "const a = [3]; console.log(a.unshift(1, 2), a)", "3 1,2,3" },
    splice_remove = { "const a = [1, 2, 3, 4]; console.log(a.splice(1, 2), a)", "2,3 1,4" },
    splice_insert = { "const a = [1, 4]; a.splice(1, 0, 2, 3); console.log(a)", "1,2,3,4" },
    splice_negative = { "const a = [1, 2, 3]; console.log(a.splice(-1), a)", "3 1,2" },
    reverse = { "const a = [1, 2, 3]; a.reverse(); console.log(a)", "3,2,1" },
    fill = { "console.log([1, 2, 3, 4].fill(0, 1, 3))", "1,0,0,4" },
)]
fn mutators(source: &str, expected: &str) {
    assert_eq!(output(source), expected);
}

#[parameterized(
    slice = { "[1, 2, 3, 4].slice(1, -1)", "2,3" },
    slice_empty = { "[1, 2].slice(5).length", "0" },
    concat = { "[1].concat(2, [3, [4]]).length", "4" },
    join_default = { "[1, null, 'a'].join()", "1,,a" },
    join_sep = { "[1, 2].join(' - ')", "1 - 2" },
    index_of = { "[1, 2, 1].indexOf(1, 1)", "2" },
    last_index_of = { "[1, 2, 1].lastIndexOf(1)", "2" },
    index_of_nan = { "[NaN].indexOf(NaN)", "-1" },
    includes_nan = { "[NaN].includes(NaN)", "true" },
    at_negative = { "[1, 2, 3].at(-1)", "3" },
    at_out_of_range = { "[1].at(5)", "undefined" },
    flat_default = { "[1, [2, [3]]].flat().length", "3" },
    flat_infinity = { "[1, [2, [3, [4]]]].flat(Infinity).join('')", "1234" },
    keys = { "[...['a', 'b'].keys()].join()", "0,1" },
    entries = { "['a'].entries()[0].join(':')", "0:a" },
    to_string = { "[1, [2, 3]].toString()", "1,2,3" },
)]
fn accessors(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[parameterized(
    map = { "[1, 2, 3].map((x, i) => x * i)", "0,2,6" },
    filter = { "[1, 2, 3, 4].filter(x => x % 2 === 0)", "2,4" },
    find = { "[5, 12, 8].find(x => x > 10)", "12" },
    find_missing = { "[1].find(x => x > 10)", "undefined" },
    find_index = { "[5, 12, 8].findIndex(x => x > 10)", "1" },
    find_last = { "[5, 12, 18].findLast(x => x > 10)", "18" },
    find_last_index = { "[5, 12, 18].findLastIndex(x => x > 100)", "-1" },
    reduce = { "[1, 2, 3].reduce((a, b) => a + b)", "6" },
    reduce_initial = { "[1, 2, 3].reduce((a, b) => a + b, 10)", "16" },
    reduce_right = { "['a', 'b', 'c'].reduceRight((a, b) => a + b)", "cba" },
    some = { "[1, 2].some(x => x > 1)", "true" },
    every = { "[1, 2].every(x => x > 1)", "false" },
    every_empty = { "[].every(x => false)", "true" },
    flat_map = { "[1, 2].flatMap(x => [x, x * 10])", "1,10,2,20" },
)]
fn callbacks(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[test]
fn for_each_passes_index_and_array() {
    let out = output("['a', 'b'].forEach((x, i, arr) => console.log(x, i, arr.length))");
    assert_eq!(out, "a 0 2\nb 1 2");
}

#[test]
fn callbacks_see_this_arg() {
    let out = output("const o = { k: 3 }; console.log([1, 2].map(function (x) { return x * this.k }, o))");
    assert_eq!(out, "3,6");
}

#[parameterized(
    default_is_text_order = { "[10, 9, 1, 100].sort()", "1,10,100,9" },
    numeric = { "[10, 9, 1, 100].sort((a, b) => a - b)", "1,9,10,100" },
    descending = { "[1, 3, 2].sort((a, b) => b - a)", "3,2,1" },
    undefined_last = { "[3, undefined, 1].sort().map(String)", "1,3,undefined" },
)]
fn sorting(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[test]
fn sort_is_stable() {
    let out = output(
        r#"
        const people = [{ n: "a", age: 30 }, { n: "b", age: 20 }, { n: "c", age: 30 }, { n: "d", age: 20 }];
        console.log(people.sort((x, y) => x.age - y.age).map(p => p.n).join(""));
        "#,
    );
    assert_eq!(out, "bdac");
}

#[parameterized(
    is_array = { "Array.isArray([]), Array.isArray({})", "true false" },
    from_string = { "Array.from('abc').join('-')", "a-b-c" },
    from_length = { "Array.from({ length: 3 }, (_, i) => i * 2)", "0,2,4" },
    of = { "Array.of(7).length", "1" },
    construct_length = { "Array(3).length, new Array(2, 3)", "3 2,3" },
)]
fn statics(expr: &str, expected: &str) {
    assert_eq!(output(&format!("console.log({expr})")), expected);
}

#[parameterized(
    not_callable = { "[1].map(5)", "5 is not a function" },
    missing_callback = { "[1].forEach()", "undefined is not a function" },
    bad_comparator = { "[1].sort(1)", "The comparison function must be either a function or undefined" },
    empty_reduce = { "[].reduce((a, b) => a)", "Reduce of empty array with no initial value" },
    bad_length = { "new Array(-1)", "Invalid array length" },
    from_null = { "Array.from(null)", "null is not iterable" },
)]
fn errors(source: &str, message: &str) {
    assert_eq!(error(source), message);
}

#[test]
fn comparator_exception_propagates() {
    let out = output(
        r#"
        try { [2, 1].sort(() => { throw new Error("boom") }) } catch (e) { console.log(e.message) }
        "#,
    );
    assert_eq!(out, "boom");
}
