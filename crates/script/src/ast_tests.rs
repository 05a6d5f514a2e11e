// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Parser;

fn first_declarator(source: &str) -> Declarator {
    let program = Parser::parse(source).unwrap();
    match program.body.into_iter().next() {
        Some(Stmt::Var(mut decl)) => decl.declarators.remove(0),
        other => panic!("expected declaration, got {other:?}"),
    }
}

#[test]
fn bound_names_in_source_order() {
    let decl = first_declarator("const { a, b: [c, , d = 1], ...rest } = obj;");
    let names: Vec<String> = decl.target.bound_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, vec!["a", "c", "d", "rest"]);
}

#[test]
fn member_patterns_bind_nothing() {
    let pattern = Pattern::Member(Box::new(Expr::Ident { name: "x".into(), span: Span::new(0, 1) }));
    assert!(pattern.bound_names().is_empty());
}

#[test]
fn statement_spans_cover_source() {
    let source = "let x = 1;\nif (x) { x++; }";
    let program = Parser::parse(source).unwrap();
    let spans: Vec<&str> = program.body.iter().map(|s| &source[s.span().start..s.span().end]).collect();
    assert_eq!(spans, vec!["let x = 1", "if (x) { x++; }"]);
}

#[test]
fn lexical_kinds() {
    assert!(DeclKind::Let.is_lexical());
    assert!(DeclKind::Const.is_lexical());
    assert!(!DeclKind::Var.is_lexical());
}
