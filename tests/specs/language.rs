// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for typical learner programs.

use crate::prelude::*;

/// Functions, arrays and higher-order methods
#[test]
fn array_pipeline() {
    run(r#"
        const scores = [72, 95, 88, 61];
        const passed = scores.filter(s => s >= 70).map(s => s + 5);
        const total = passed.reduce((sum, s) => sum + s, 0);
        console.log(passed, total, Math.max(...scores));
    "#)
    .succeeds()
    .outputs("77,100,93 270 95");
}

/// Objects, destructuring and template literals
#[test]
fn objects_and_templates() {
    run(r#"
        const user = { name: "Ada", langs: ["js", "rust"] };
        const { name, langs: [first, ...rest] } = user;
        console.log(`${name} knows ${first} and ${rest.length} more`);
        console.log(Object.keys(user).join("|"), JSON.stringify(user));
    "#)
    .succeeds()
    .outputs("Ada knows js and 1 more\nname|langs {\"name\":\"Ada\",\"langs\":[\"js\",\"rust\"]}");
}

/// Closures keep private state
#[test]
fn closures() {
    run(r#"
        function counter() {
            let n = 0;
            return { inc: () => ++n, get: () => n };
        }
        const c = counter();
        c.inc(); c.inc();
        console.log(c.get());
    "#)
    .outputs("2");
}

/// Const reassignment is a TypeError
#[test]
fn const_reassignment() {
    run("const x = 1;\nx = 2;").fails_with(ErrorKind::Runtime, "Assignment to constant variable.");
}

/// Reading a let binding before its declaration fails
#[test]
fn temporal_dead_zone() {
    run("console.log(x); let x = 1;").fails_with(ErrorKind::Runtime, "Cannot access 'x' before initialization");
}

/// Unsupported syntax is reported, not ignored
#[test]
fn unsupported_syntax() {
    let result = run("class Dog {}").result();
    assert_eq!(result.error_kind(), Some(ErrorKind::Syntax));
    assert_eq!(result.error(), Some("SyntaxError: classes are not supported (line 1, column 1)"));
}
