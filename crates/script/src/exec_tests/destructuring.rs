// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for destructuring declarations, parameters, and assignment.

use super::{error, output};

#[test]
fn array_destructuring() {
    let out = output("const [a, , b = 9, ...rest] = [1, 2, undefined, 4, 5]; console.log(a, b, rest)");
    assert_eq!(out, "1 9 4,5");
}

#[test]
fn array_destructuring_from_string() {
    assert_eq!(output("const [first, second] = 'hi'; console.log(first, second)"), "h i");
}

#[test]
fn object_destructuring() {
    let out = output(
        r#"
        const { name, age: years = 30, missing = "none", ...others } = { name: "Ada", x: 1, y: 2 };
        console.log(name, years, missing, Object.keys(others).join(""));
        "#,
    );
    assert_eq!(out, "Ada 30 none xy");
}

#[test]
fn nested_destructuring() {
    let out = output("const { user: { tags: [first] } } = { user: { tags: ['admin', 'dev'] } }; console.log(first)");
    assert_eq!(out, "admin");
}

#[test]
fn parameter_destructuring() {
    let out = output(
        r#"
        function describe({ name, size = "M" }, [x, y]) { return `${name}:${size}:${x + y}`; }
        console.log(describe({ name: "shirt" }, [1, 2]));
        "#,
    );
    assert_eq!(out, "shirt:M:3");
}

#[test]
fn swap_with_array_assignment() {
    assert_eq!(output("let a = 1, b = 2; [a, b] = [b, a]; console.log(a, b)"), "2 1");
}

#[test]
fn object_assignment_to_members() {
    let out = output("const t = {}; let x; ({ a: t.first, b: x = 5 } = { a: 1 }); console.log(t.first, x)");
    assert_eq!(out, "1 5");
}

#[test]
fn defaults_are_lazy() {
    let out = output("let calls = 0; const f = () => ++calls; const [a = f()] = [1]; const [b = f()] = []; console.log(a, b, calls)");
    assert_eq!(out, "1 1 1");
}

#[test]
fn destructuring_null_is_type_error() {
    assert_eq!(error("const { a } = null;"), "Cannot destructure 'null' as it is null.");
}

#[test]
fn destructuring_non_iterable_is_type_error() {
    assert_eq!(error("const [a] = 5;"), "5 is not iterable");
}

#[test]
fn for_of_destructures_entries() {
    let out = output("const out = []; for (const [k, v] of Object.entries({ a: 1, b: 2 })) out.push(k + v); console.log(out)");
    assert_eq!(out, "a1,b2");
}
