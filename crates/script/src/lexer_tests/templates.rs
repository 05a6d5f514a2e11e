// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template literal tests.

use crate::lexer::Lexer;
use crate::token::{TemplatePart, TokenKind};

fn text(s: &str) -> TemplatePart {
    TemplatePart::Text(s.into())
}

fn expr(source: &str, offset: usize) -> TemplatePart {
    TemplatePart::Expr { source: source.into(), offset }
}

lex_tests! {
    plain_template: "`hello`" => [TokenKind::Template(vec![text("hello")])],
    empty_template: "``" => [TokenKind::Template(vec![text("")])],
    single_interpolation: "`a ${x} b`" => [TokenKind::Template(vec![text("a "), expr("x", 5), text(" b")])],
    interpolation_only: "`${x}`" => [TokenKind::Template(vec![expr("x", 3)])],
    object_literal_inside: "`${ {a: 1}.a }`" => [TokenKind::Template(vec![expr(" {a: 1}.a ", 3)])],
    brace_in_string_inside: "`${'}'}`" => [TokenKind::Template(vec![expr("'}'", 3)])],
    nested_template: "`a${`b${c}`}`" => [TokenKind::Template(vec![text("a"), expr("`b${c}`", 4)])],
    escaped_dollar: r"`\${x}`" => [TokenKind::Template(vec![text("${x}")])],
    multiline: "`a\nb`" => [TokenKind::Template(vec![text("a\nb")])],
    crlf_normalized: "`a\r\nb`" => [TokenKind::Template(vec![text("a\nb")])],
}

#[test]
fn interpolation_offset_is_absolute() {
    let source = "let s = `v=${value}`";
    let tokens = Lexer::tokenize(source).unwrap();
    let TokenKind::Template(parts) = &tokens[3].kind else {
        panic!("expected template, got {:?}", tokens[3].kind);
    };
    let TemplatePart::Expr { source: inner, offset } = &parts[1] else {
        panic!("expected interpolation, got {:?}", parts[1]);
    };
    assert_eq!(&source[*offset..*offset + inner.len()], "value");
}
