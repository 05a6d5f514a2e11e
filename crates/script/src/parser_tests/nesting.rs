// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::parse_error::ParseError;
use crate::parser::{Parser, MAX_NESTING_DEPTH};
use crate::test_support::on_large_stack;

#[test]
fn moderate_nesting_parses() {
    let depth = MAX_NESTING_DEPTH / 4;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(Parser::parse(&source).is_ok());
}

#[test]
fn deep_parentheses_fail_cleanly() {
    on_large_stack(|| {
        let depth = MAX_NESTING_DEPTH * 4;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(matches!(Parser::parse(&source), Err(ParseError::NestingTooDeep { .. })));
    });
}

#[test]
fn deep_arrays_fail_cleanly() {
    on_large_stack(|| {
        let depth = MAX_NESTING_DEPTH * 4;
        let source = format!("x = {}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(matches!(Parser::parse(&source), Err(ParseError::NestingTooDeep { .. })));
    });
}

#[test]
fn deep_blocks_fail_cleanly() {
    on_large_stack(|| {
        let depth = MAX_NESTING_DEPTH * 4;
        let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
        assert!(matches!(Parser::parse(&source), Err(ParseError::NestingTooDeep { .. })));
    });
}

#[test]
fn deep_unary_chain_fails_cleanly() {
    on_large_stack(|| {
        let source = format!("{}x", "!".repeat(MAX_NESTING_DEPTH * 4));
        assert!(matches!(Parser::parse(&source), Err(ParseError::NestingTooDeep { .. })));
    });
}

#[test]
fn deep_patterns_fail_cleanly() {
    on_large_stack(|| {
        let depth = MAX_NESTING_DEPTH * 4;
        let source = format!("let {}a{} = x", "[".repeat(depth), "]".repeat(depth));
        assert!(matches!(Parser::parse(&source), Err(ParseError::NestingTooDeep { .. })));
    });
}
