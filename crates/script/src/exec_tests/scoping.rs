// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for declarations, hoisting, and block scope.

use super::{error, output};

#[test]
fn var_is_hoisted_as_undefined() {
    assert_eq!(output("console.log(x); var x = 1; console.log(x)"), "undefined\n1");
}

#[test]
fn function_declarations_are_hoisted() {
    assert_eq!(output("console.log(twice(4)); function twice(n) { return n * 2 }"), "8");
}

#[test]
fn let_is_block_scoped() {
    assert_eq!(output("let x = 1; { let x = 2; console.log(x) } console.log(x)"), "2\n1");
}

#[test]
fn var_is_function_scoped() {
    assert_eq!(output("function f() { if (true) { var v = 1 } return v } console.log(f())"), "1");
}

#[test]
fn temporal_dead_zone() {
    assert_eq!(error("console.log(x); let x = 1;"), "Cannot access 'x' before initialization");
}

#[test]
fn temporal_dead_zone_in_inner_block() {
    assert_eq!(error("let x = 1; { console.log(x); let x = 2; }"), "Cannot access 'x' before initialization");
}

#[test]
fn const_cannot_be_reassigned() {
    assert_eq!(error("const x = 1; x = 2;"), "Assignment to constant variable.");
    assert_eq!(error("const x = 1; x++;"), "Assignment to constant variable.");
}

#[test]
fn const_object_is_still_mutable() {
    assert_eq!(output("const o = { n: 1 }; o.n = 2; console.log(o.n)"), "2");
}

#[test]
fn undeclared_read_is_reference_error() {
    assert_eq!(error("console.log(missing)"), "missing is not defined");
}

#[test]
fn assignment_to_undeclared_creates_global() {
    assert_eq!(output("function f() { leaked = 3 } f(); console.log(leaked)"), "3");
}

#[test]
fn let_loop_captures_each_iteration() {
    let out = output(
        r#"
        const fns = [];
        for (let i = 0; i < 3; i++) { fns.push(() => i); }
        console.log(fns.map(f => f()).join(","));
        "#,
    );
    assert_eq!(out, "0,1,2");
}

#[test]
fn var_loop_shares_one_binding() {
    let out = output(
        r#"
        const fns = [];
        for (var i = 0; i < 3; i++) { fns.push(() => i); }
        console.log(fns.map(f => f()).join(","));
        "#,
    );
    assert_eq!(out, "3,3,3");
}

#[test]
fn for_of_binding_is_fresh_per_iteration() {
    let out = output(
        r#"
        const fns = [];
        for (const x of ["a", "b"]) { fns.push(() => x); }
        console.log(fns.map(f => f()).join(""));
        "#,
    );
    assert_eq!(out, "ab");
}

#[test]
fn catch_parameter_is_scoped_to_handler() {
    let out = output("let e = 'outer'; try { throw 'inner' } catch (e) { console.log(e) } console.log(e)");
    assert_eq!(out, "inner\nouter");
}

#[test]
fn global_constants_are_read_only() {
    assert_eq!(output("console.log(undefined, NaN, Infinity)"), "undefined NaN Infinity");
    assert!(!error("undefined = 1").is_empty());
}
