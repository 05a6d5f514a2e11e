// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for how values render in captured output.

use crate::prelude::*;

/// Arguments of one call join with a single space
#[test]
fn multi_argument_join() {
    run("console.log('Hello', 'World', 42)").outputs("Hello World 42");
}

/// Error and warning channels carry prefixes
#[test]
fn channel_prefixes() {
    run("console.error('Failed'); console.warn('Careful'); console.info('fyi'); console.debug('dbg')")
        .outputs("Error: Failed\nWarning: Careful\nfyi\ndbg");
}

/// Primitive values render naturally
#[test]
fn primitives() {
    run("console.log(null, undefined, true, false, 3.5, -0, 1e21, 0.1 + 0.2, NaN, -Infinity)")
        .outputs("null undefined true false 3.5 0 1e+21 0.30000000000000004 NaN -Infinity");
}

/// Objects render as the placeholder, never serialized
#[test]
fn objects_are_placeholders() {
    run("console.log({ a: 1, b: [2] })").outputs("[object Object]");
}

/// Arrays join with commas, flattening nested arrays and blanking nullish items
#[test]
fn arrays_join() {
    run("console.log([1, [2, [3, 4]], null, undefined, 'x'])").outputs("1,2,3,4,,,x");
    run("console.log([])").outputs("");
}

/// Errors and functions use their string form
#[test]
fn errors_and_functions() {
    run("console.log(new TypeError('bad'))").outputs("TypeError: bad");
    run("const add = (a, b) => a + b; console.log(add)").outputs("(a, b) => a + b");
}

/// Concatenation and templates use the same conversion
#[test]
fn string_conversion_is_shared() {
    run("const xs = [1, 2]; console.log('' + xs, `${xs}`, String(xs), xs + '')").outputs("1,2 1,2 1,2 1,2");
}
