// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted string tests: escapes and line continuations.

use crate::lexer::Lexer;
use crate::token::TokenKind;

fn string(text: &str) -> TokenKind {
    TokenKind::Str(text.into())
}

lex_tests! {
    double_quoted: r#""hello""# => [string("hello")],
    single_quoted: "'hello'" => [string("hello")],
    other_quote_inside: r#"'say "hi"'"# => [string("say \"hi\"")],
    empty_string: "''" => [string("")],
    common_escapes: r#""a\nb\tc\\d\'e""# => [string("a\nb\tc\\d'e")],
    hex_escape: r#""\x41""# => [string("A")],
    unicode_escape: r#""\u00e9""# => [string("é")],
    braced_unicode_escape: r#""\u{1F600}""# => [string("\u{1F600}")],
    null_escape: r#""\0""# => [string("\0")],
    unknown_escape_is_literal: r#""\q""# => [string("q")],
    line_continuation: "'a\\\nb'" => [string("ab")],
}

span_tests! {
    string_span_includes_quotes: "x = 'ab'" => [(0, 1), (2, 3), (4, 8)],
}
