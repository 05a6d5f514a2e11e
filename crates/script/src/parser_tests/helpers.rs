// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for parser tests.

use crate::ast::*;
use crate::parser::Parser;

/// Parse a single expression statement.
/// Panics if the input is not exactly one expression statement.
pub fn parse_expr(input: &str) -> Expr {
    let program = Parser::parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
    assert_eq!(program.body.len(), 1, "expected one statement in {input:?}");
    match program.body.into_iter().next() {
        Some(Stmt::Expr(expr)) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Parse a single statement.
pub fn parse_stmt(input: &str) -> Stmt {
    let program = Parser::parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
    assert_eq!(program.body.len(), 1, "expected one statement in {input:?}");
    program.body.into_iter().next().unwrap()
}

/// Name of an identifier expression.
pub fn ident_name(expr: &Expr) -> &str {
    match expr {
        Expr::Ident { name, .. } => name,
        other => panic!("expected identifier, got {other:?}"),
    }
}

/// Value of a number literal.
pub fn number(expr: &Expr) -> f64 {
    match expr {
        Expr::Number { value, .. } => *value,
        other => panic!("expected number, got {other:?}"),
    }
}

/// Operands of a binary expression with the given operator.
pub fn binary(expr: &Expr, expected: BinaryOp) -> (&Expr, &Expr) {
    match expr {
        Expr::Binary { op, left, right, .. } if *op == expected => (left, right),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
