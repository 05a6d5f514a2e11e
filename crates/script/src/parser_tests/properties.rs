// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for parser invariants.

use crate::parser::Parser;
use proptest::prelude::*;

/// Identifiers that are never keywords.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_map(|s| format!("v_{s}"))
}

/// Arithmetic over identifiers and small integers.
fn arith_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![ident_strategy(), (0u32..1000).prop_map(|n| n.to_string())];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "%", "<", "===", "&&", "??"]), inner)
            .prop_map(|(a, op, b)| format!("({a} {op} {b})"))
    })
}

proptest! {
    /// Invariant: generated declarations always parse.
    #[test]
    fn declarations_parse(name in ident_strategy(), expr in arith_strategy()) {
        let source = format!("let {name} = {expr};\nconsole.log({name});");
        let program = Parser::parse(&source);
        prop_assert!(program.is_ok(), "failed to parse {:?}: {:?}", source, program);
        prop_assert_eq!(program.unwrap().body.len(), 2);
    }

    /// Invariant: the program span covers the whole input.
    #[test]
    fn program_span_covers_input(expr in arith_strategy()) {
        let program = Parser::parse(&expr).unwrap();
        prop_assert_eq!(program.span.start, 0);
        prop_assert_eq!(program.span.end, expr.len());
    }

    /// Invariant: parsing arbitrary text never panics.
    #[test]
    fn arbitrary_input_does_not_panic(input in "\\PC{0,40}") {
        let _ = Parser::parse(&input);
    }

    /// Invariant: every statement span lies within the input.
    #[test]
    fn statement_spans_in_bounds(a in arith_strategy(), b in arith_strategy()) {
        let source = format!("{a}\n{b}");
        let program = Parser::parse(&source).unwrap();
        for stmt in &program.body {
            let span = stmt.span();
            prop_assert!(span.start <= span.end && span.end <= source.len());
        }
    }
}
