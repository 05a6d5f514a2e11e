// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{parse_expr, parse_stmt};
use super::macros::parse_error_tests;
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::parser::Parser;

fn declared_pattern(input: &str) -> Pattern {
    match parse_stmt(input) {
        Stmt::Var(mut decl) => decl.declarators.remove(0).target,
        other => panic!("expected declaration, got {other:?}"),
    }
}

#[test]
fn array_pattern_with_holes_defaults_and_rest() {
    let Pattern::Array { elements, rest, .. } = declared_pattern("let [a, , b = 2, ...others] = xs") else {
        panic!("expected array pattern");
    };
    assert_eq!(elements.len(), 3);
    assert!(elements[1].is_none());
    assert!(elements[2].as_ref().is_some_and(|e| e.default.is_some()));
    assert!(matches!(rest.as_deref(), Some(Pattern::Ident { name, .. }) if name.as_ref() == "others"));
}

#[test]
fn object_pattern_with_rename_default_and_rest() {
    let Pattern::Object { props, rest, .. } = declared_pattern("const { a, b: renamed = 1, ...others } = obj") else {
        panic!("expected object pattern");
    };
    assert_eq!(props.len(), 2);
    assert!(matches!(&props[1].key, PropKey::Named(k) if k.as_ref() == "b"));
    assert!(matches!(&props[1].value, Pattern::Ident { name, .. } if name.as_ref() == "renamed"));
    assert!(props[1].default.is_some());
    assert!(rest.is_some());
}

#[test]
fn nested_patterns() {
    let pattern = declared_pattern("const { data: [first, { id }] } = res");
    let names: Vec<String> = pattern.bound_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, vec!["first", "id"]);
}

#[test]
fn swap_by_array_assignment() {
    let Expr::Assign { target, .. } = parse_expr("[a, b] = [b, a]") else {
        panic!("expected assignment");
    };
    assert!(matches!(*target, Pattern::Array { ref elements, .. } if elements.len() == 2));
}

#[test]
fn object_assignment_with_defaults() {
    let Expr::Assign { target, .. } = parse_expr("({ a, b = 2 } = obj)") else {
        panic!("expected assignment");
    };
    let Pattern::Object { props, .. } = *target else {
        panic!("expected object pattern");
    };
    assert!(props[0].default.is_none());
    assert!(props[1].default.is_some());
}

#[test]
fn member_targets_in_assignment_patterns() {
    let Expr::Assign { target, .. } = parse_expr("[o.x, arr[0]] = pair") else {
        panic!("expected assignment");
    };
    let Pattern::Array { elements, .. } = *target else {
        panic!("expected array pattern");
    };
    assert!(elements.iter().flatten().all(|e| matches!(e.target, Pattern::Member(_))));
}

parse_error_tests! {
    literal_target: "1 = 2" => ParseError::InvalidAssignmentTarget { .. },
    call_target: "f() = 1" => ParseError::InvalidAssignmentTarget { .. },
    compound_pattern_target: "[a] += 1" => ParseError::InvalidAssignmentTarget { .. },
    optional_member_target: "a?.b = 1" => ParseError::InvalidAssignmentTarget { .. },
    spread_not_last: "[...a, b] = xs" => ParseError::InvalidAssignmentTarget { .. },
    update_literal: "1++" => ParseError::InvalidAssignmentTarget { .. },
    const_without_init: "const x;" => ParseError::MissingInitializer { .. },
    pattern_without_init: "let [a];" => ParseError::MissingInitializer { .. },
    member_in_declaration: "let a.b = 1" => ParseError::UnexpectedToken { .. },
}
