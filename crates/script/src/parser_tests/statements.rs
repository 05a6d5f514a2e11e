// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{ident_name, parse_stmt};
use super::macros::parse_tests;
use crate::ast::*;
use crate::parser::Parser;

parse_tests! {
    empty_input: "" => statements: 0,
    only_whitespace: "  \n\t" => statements: 0,
    only_comments: "// one\n/* two */" => statements: 0,
    semicolons: "a; b; c" => statements: 3,
    newline_separated: "a\nb\nc" => statements: 3,
    empty_statement: ";" => statements: 1,
    block_counts_once: "{ a; b; }" => statements: 1,
    function_and_call: "function f() {}\nf()" => statements: 2,
    trailing_semicolon: "let x = 1;" => statements: 1,
}

#[test]
fn declaration_kinds() {
    for (input, expected) in [("var a", DeclKind::Var), ("let a", DeclKind::Let), ("const a = 1", DeclKind::Const)] {
        match parse_stmt(input) {
            Stmt::Var(decl) => assert_eq!(decl.kind, expected, "{input}"),
            other => panic!("expected declaration, got {other:?}"),
        }
    }
}

#[test]
fn multiple_declarators() {
    let Stmt::Var(decl) = parse_stmt("let a = 1, b, c = a") else {
        panic!("expected declaration");
    };
    assert_eq!(decl.declarators.len(), 3);
    assert!(decl.declarators[1].init.is_none());
    assert_eq!(decl.declarators[0].target.bound_names()[0].as_ref(), "a");
}

#[test]
fn if_else_chain() {
    let Stmt::If { alternate: Some(alternate), .. } = parse_stmt("if (a) b; else if (c) d; else e;") else {
        panic!("expected if with else");
    };
    assert!(matches!(*alternate, Stmt::If { alternate: Some(_), .. }));
}

#[test]
fn classic_for_loop() {
    let Stmt::For { init, test, update, .. } = parse_stmt("for (let i = 0; i < 3; i++) {}") else {
        panic!("expected for");
    };
    assert!(matches!(init, Some(ForInit::Var(_))));
    assert!(test.is_some());
    assert!(update.is_some());
}

#[test]
fn empty_for_head() {
    let Stmt::For { init, test, update, .. } = parse_stmt("for (;;) break;") else {
        panic!("expected for");
    };
    assert!(init.is_none() && test.is_none() && update.is_none());
}

#[test]
fn for_of_and_for_in() {
    let Stmt::ForEach { kind, binding, iterable, .. } = parse_stmt("for (const [k, v] of pairs) {}") else {
        panic!("expected for...of");
    };
    assert_eq!(kind, ForEachKind::Of);
    assert!(matches!(binding, ForBinding::Decl { kind: DeclKind::Const, target: Pattern::Array { .. } }));
    assert_eq!(ident_name(&iterable), "pairs");

    let Stmt::ForEach { kind, binding, .. } = parse_stmt("for (key in obj) {}") else {
        panic!("expected for...in");
    };
    assert_eq!(kind, ForEachKind::In);
    assert!(matches!(binding, ForBinding::Assign(Pattern::Ident { .. })));
}

#[test]
fn loops_and_jumps() {
    assert!(matches!(parse_stmt("while (x) { continue; }"), Stmt::While { .. }));
    assert!(matches!(parse_stmt("do { break } while (x)"), Stmt::DoWhile { .. }));
}

#[test]
fn switch_cases() {
    let Stmt::Switch { cases, .. } = parse_stmt("switch (x) { case 1: case 2: a(); break; default: b() }") else {
        panic!("expected switch");
    };
    assert_eq!(cases.len(), 3);
    assert!(cases[0].body.is_empty());
    assert_eq!(cases[1].body.len(), 2);
    assert!(cases[2].test.is_none());
}

#[test]
fn try_forms() {
    let Stmt::Try { handler, finalizer, .. } = parse_stmt("try { a() } catch (e) { b() } finally { c() }") else {
        panic!("expected try");
    };
    assert!(matches!(handler, Some(CatchClause { param: Some(Pattern::Ident { .. }), .. })));
    assert!(finalizer.is_some());

    let Stmt::Try { handler, finalizer, .. } = parse_stmt("try { a() } catch { b() }") else {
        panic!("expected try");
    };
    assert!(matches!(handler, Some(CatchClause { param: None, .. })));
    assert!(finalizer.is_none());
}

#[test]
fn return_without_value_before_newline() {
    let Stmt::Function(func) = parse_stmt("function f() {\n  return\n  1\n}") else {
        panic!("expected function");
    };
    let FunctionBody::Block(block) = &func.body else {
        panic!("expected block body");
    };
    assert!(matches!(block.body[0], Stmt::Return { value: None, .. }));
    assert_eq!(block.body.len(), 2);
}

#[test]
fn throw_statement() {
    let Stmt::Throw { value, .. } = parse_stmt("throw new Error('x')") else {
        panic!("expected throw");
    };
    assert!(matches!(value, Expr::New { .. }));
}
