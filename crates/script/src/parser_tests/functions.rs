// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::rc::Rc;

use super::helpers::{parse_expr, parse_stmt};
use crate::ast::*;

fn function_expr(input: &str) -> Rc<FunctionNode> {
    match parse_expr(input) {
        Expr::Function(func) => func,
        other => panic!("expected function, got {other:?}"),
    }
}

#[test]
fn declaration_keeps_name_and_source() {
    let source = "function add(a, b = 1) { return a + b }";
    let Stmt::Function(func) = parse_stmt(source) else {
        panic!("expected function declaration");
    };
    assert_eq!(func.name.as_deref(), Some("add"));
    assert_eq!(func.params.len(), 2);
    assert!(func.params[1].default.is_some());
    assert!(!func.is_arrow);
    assert_eq!(func.source.as_ref(), source);
}

#[test]
fn anonymous_function_expression() {
    let func = function_expr("(function () {})");
    assert!(func.name.is_none());
    assert_eq!(func.source.as_ref(), "function () {}");
}

#[test]
fn arrow_with_single_param() {
    let func = function_expr("x => x * 2");
    assert!(func.is_arrow);
    assert_eq!(func.params.len(), 1);
    assert!(matches!(func.body, FunctionBody::Expr(_)));
    assert_eq!(func.source.as_ref(), "x => x * 2");
}

#[test]
fn arrow_with_block_and_patterns() {
    let func = function_expr("({ a }, [b], ...rest) => { return a }");
    assert_eq!(func.params.len(), 3);
    assert!(matches!(func.params[0].target, Pattern::Object { .. }));
    assert!(matches!(func.params[1].target, Pattern::Array { .. }));
    assert!(func.params[2].rest);
    assert!(matches!(func.body, FunctionBody::Block(_)));
}

#[test]
fn arrow_without_params() {
    let func = function_expr("() => 1");
    assert!(func.params.is_empty());
}

#[test]
fn parenthesised_expression_is_not_an_arrow() {
    assert!(matches!(parse_expr("(a, b)"), Expr::Sequence { .. }));
}

#[test]
fn arrow_returning_object_literal() {
    let func = function_expr("() => ({ a: 1 })");
    assert!(matches!(&func.body, FunctionBody::Expr(body) if matches!(**body, Expr::Object { .. })));
}

#[test]
fn method_shorthand_source_starts_at_key() {
    let Expr::Object { props, .. } = parse_expr("({ greet(name) { return name } })") else {
        panic!("expected object");
    };
    let ObjectProp::KeyValue { value: Expr::Function(func), .. } = &props[0] else {
        panic!("expected method");
    };
    assert_eq!(func.name.as_deref(), Some("greet"));
    assert_eq!(func.source.as_ref(), "greet(name) { return name }");
}

#[test]
fn immediately_invoked() {
    assert!(matches!(parse_expr("(function () { return 1 })()"), Expr::Call { .. }));
}
