// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for branches, loops, and switch.

use super::output;

#[test]
fn if_else_chain() {
    let out = output(
        r#"
        function grade(n) {
            if (n >= 90) return "A";
            else if (n >= 80) return "B";
            else return "C";
        }
        console.log(grade(95), grade(85), grade(10));
        "#,
    );
    assert_eq!(out, "A B C");
}

#[test]
fn while_with_break_and_continue() {
    let out = output(
        r#"
        let i = 0, sum = 0;
        while (true) {
            i++;
            if (i % 2 === 0) continue;
            if (i > 9) break;
            sum += i;
        }
        console.log(sum);
        "#,
    );
    assert_eq!(out, "25");
}

#[test]
fn do_while_runs_at_least_once() {
    assert_eq!(output("let n = 0; do { n++ } while (false); console.log(n)"), "1");
}

#[test]
fn for_loop_accumulates() {
    assert_eq!(output("let s = ''; for (let i = 0; i < 5; i++) s += i; console.log(s)"), "01234");
}

#[test]
fn for_of_over_array_and_string() {
    let out = output("const out = []; for (const x of [1, 2]) out.push(x); for (const c of 'ab') out.push(c); console.log(out)");
    assert_eq!(out, "1,2,a,b");
}

#[test]
fn for_in_over_object_and_array() {
    let out = output(
        r#"
        const keys = [];
        for (const k in { a: 1, b: 2 }) keys.push(k);
        for (const i in ["x", "y"]) keys.push(typeof i);
        console.log(keys.join(" "));
        "#,
    );
    assert_eq!(out, "a b string string");
}

#[test]
fn for_in_orders_integer_keys_first() {
    let out = output("const ks = []; for (const k in { b: 1, 2: 1, a: 1, 1: 1 }) ks.push(k); console.log(ks.join(''))");
    assert_eq!(out, "12ba");
}

#[test]
fn nested_loop_break_only_exits_inner() {
    let out = output(
        r#"
        let pairs = 0;
        for (let i = 0; i < 3; i++) {
            for (let j = 0; j < 3; j++) {
                if (j > i) break;
                pairs++;
            }
        }
        console.log(pairs);
        "#,
    );
    assert_eq!(out, "6");
}

#[test]
fn switch_falls_through_until_break() {
    let out = output(
        r#"
        function name(n) {
            let out = "";
            switch (n) {
                case 1: out += "one ";
                case 2: out += "two "; break;
                case 3: out += "three "; break;
                default: out += "many ";
            }
            return out.trim();
        }
        console.log(name(1), "|", name(2), "|", name(7));
        "#,
    );
    assert_eq!(out, "one two | two | many");
}

#[test]
fn switch_uses_strict_equality() {
    assert_eq!(output("switch ('1') { case 1: console.log('num'); break; default: console.log('other') }"), "other");
}

#[test]
fn switch_default_in_middle() {
    let out = output("switch (5) { case 1: console.log(1); default: console.log('d'); case 2: console.log(2) }");
    assert_eq!(out, "d\n2");
}

#[test]
fn return_from_inside_loop() {
    let out = output("function first(xs) { for (const x of xs) { if (x > 1) return x } return -1 } console.log(first([1, 5, 9]))");
    assert_eq!(out, "5");
}
