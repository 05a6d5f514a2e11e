// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::macros::{parse_error_tests, unsupported_tests};
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::LexerError;

parse_error_tests! {
    dangling_operator: "1 +" => ParseError::UnexpectedEof { .. },
    unclosed_paren: "f(1" => ParseError::UnexpectedEof { .. },
    unclosed_block: "{ a" => ParseError::UnexpectedEof { .. },
    missing_semicolon: "a b" => ParseError::UnexpectedToken { .. },
    stray_close: ")" => ParseError::UnexpectedToken { .. },
    try_alone: "try {}" => ParseError::UnexpectedEof { .. },
    try_without_handler: "try {} x" => ParseError::UnexpectedToken { .. },
    throw_newline: "throw\nnew Error()" => ParseError::UnexpectedToken { .. },
    unary_exponent_base: "-2 ** 2" => ParseError::UnexpectedToken { .. },
    duplicate_default: "switch (x) { default: default: }" => ParseError::UnexpectedToken { .. },
    anonymous_declaration: "function () {}" => ParseError::UnexpectedToken { .. },
    unterminated_string: "'abc" => ParseError::Lexer(LexerError::UnterminatedString { .. }),
    bad_interpolation: "`${1 +}`" => ParseError::InTemplate { .. },
    empty_interpolation: "`${}`" => ParseError::InTemplate { .. },
}

unsupported_tests! {
    class_declaration: "class A {}" => "classes",
    class_expression: "const A = class {}" => "classes",
    async_function: "async function f() {}" => "async functions",
    async_arrow: "const f = async () => 1" => "async functions",
    await_expression: "await x" => "async functions",
    generator: "function* g() {}" => "generators",
    generator_method: "({ *g() {} })" => "generators",
    getter: "({ get x() { return 1 } })" => "getters and setters",
    regex_literal: "const r = /ab+c/" => "regular expressions",
    tagged_template: "tag`x`" => "tagged templates",
    labelled_statement: "outer: for (;;) {}" => "labelled statements",
    labelled_break: "for (;;) { break outer }" => "labelled statements",
    for_of_initializer: "for (let x = 1 of xs) {}" => "initializers in for-of/for-in heads",
}

#[test]
fn property_named_get_is_not_an_accessor() {
    assert!(Parser::parse("({ get: 1, set() {}, async })").is_ok());
}

#[test]
fn error_span_points_at_token() {
    let err = Parser::parse("let x = )").unwrap_err();
    let span = err.span().unwrap();
    assert_eq!((span.start, span.end), (8, 9));
}

#[test]
fn eof_error_has_no_span() {
    assert!(Parser::parse("1 +").unwrap_err().span().is_none());
}

#[test]
fn describe_reports_line_and_column() {
    let source = "let a = 1;\nlet b = ;";
    let err = Parser::parse(source).unwrap_err();
    let message = err.describe(source);
    assert!(message.ends_with("(line 2, column 9)"), "{message}");
}

#[test]
fn template_error_keeps_inner_span() {
    let source = "`ok ${a b}`";
    let err = Parser::parse(source).unwrap_err();
    let span = err.span().unwrap();
    assert_eq!(&source[span.start..span.end], "b");
}

#[test]
fn diagnostic_has_caret() {
    let source = "let x = )";
    let diagnostic = Parser::parse(source).unwrap_err().diagnostic(source).unwrap();
    assert!(diagnostic.contains("let x = )"));
    assert!(diagnostic.contains('^'));
}
