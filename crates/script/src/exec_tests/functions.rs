// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for calls, closures, `this`, and `new`.

use super::{error, output};

#[test]
fn closures_keep_state() {
    let out = output(
        r#"
        function counter() { let n = 0; return () => ++n; }
        const c = counter();
        c(); c();
        console.log(c(), counter()());
        "#,
    );
    assert_eq!(out, "3 1");
}

#[test]
fn default_and_rest_parameters() {
    let out = output(
        r#"
        function f(a, b = a * 2, ...rest) { return [a, b, rest.length].join(" "); }
        console.log(f(1), "|", f(1, 5, 7, 8), "|", f(1, undefined));
        "#,
    );
    assert_eq!(out, "1 2 0 | 1 5 2 | 1 2 0");
}

#[test]
fn missing_arguments_are_undefined() {
    assert_eq!(output("function f(a, b) { return b } console.log(f(1))"), "undefined");
}

#[test]
fn spread_arguments() {
    assert_eq!(output("const xs = [3, 1, 2]; console.log(Math.max(...xs), Math.min(0, ...xs))"), "3 0");
}

#[test]
fn recursion() {
    assert_eq!(output("const fib = n => n < 2 ? n : fib(n - 1) + fib(n - 2); console.log(fib(15))"), "610");
}

#[test]
fn named_function_expression_sees_itself() {
    assert_eq!(output("const f = function fact(n) { return n <= 1 ? 1 : n * fact(n - 1) }; console.log(f(5))"), "120");
}

#[test]
fn method_this() {
    let out = output(
        r#"
        const account = {
            balance: 10,
            deposit(n) { this.balance += n; return this; },
        };
        account.deposit(5).deposit(1);
        console.log(account.balance);
        "#,
    );
    assert_eq!(out, "16");
}

#[test]
fn arrow_takes_this_from_enclosing_function() {
    let out = output(
        r#"
        const obj = {
            items: [1, 2],
            factor: 3,
            scaled() { return this.items.map(x => x * this.factor); },
        };
        console.log(obj.scaled());
        "#,
    );
    assert_eq!(out, "3,6");
}

#[test]
fn constructor_functions() {
    let out = output(
        r#"
        function Point(x, y) { this.x = x; this.y = y; }
        const p = new Point(1, 2);
        console.log(p.x + p.y, p instanceof Point, {} instanceof Point);
        "#,
    );
    assert_eq!(out, "3 true false");
}

#[test]
fn constructor_returning_object_replaces_instance() {
    assert_eq!(output("function F() { this.a = 1; return { a: 2 } } console.log(new F().a)"), "2");
}

#[test]
fn functions_render_as_source() {
    assert_eq!(output("const f = (a) => a + 1; console.log(String(f))"), "(a) => a + 1");
    assert_eq!(output("console.log(String(Math.max))"), "function max() { [native code] }");
}

#[test]
fn higher_order_functions() {
    let out = output(
        r#"
        const compose = (...fns) => x => fns.reduceRight((acc, f) => f(acc), x);
        const inc = x => x + 1, dbl = x => x * 2;
        console.log(compose(inc, dbl)(5));
        "#,
    );
    assert_eq!(out, "11");
}

#[test]
fn immediately_invoked_function() {
    assert_eq!(output("const r = (function () { return 42 })(); console.log(r)"), "42");
}

#[test]
fn calling_non_function_names_the_callee() {
    assert_eq!(error("const o = {}; o.missing()"), "o.missing is not a function");
    assert_eq!(error("let n = 5; n()"), "n is not a function");
}

#[test]
fn arrows_are_not_constructors() {
    assert_eq!(error("const A = () => {}; new A()"), "A is not a constructor");
}
