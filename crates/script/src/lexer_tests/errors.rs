// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error tests.

use crate::error::LexerError;
use crate::lexer::Lexer;

lex_error_tests! {
    unterminated_double: "\"abc" => LexerError::UnterminatedString { .. },
    unterminated_single: "'abc" => LexerError::UnterminatedString { .. },
    newline_in_string: "'ab\ncd'" => LexerError::UnterminatedString { .. },
    unterminated_template: "`abc" => LexerError::UnterminatedTemplate { .. },
    unterminated_interpolation: "`${a`" => LexerError::UnterminatedTemplate { .. } | LexerError::UnterminatedInterpolation { .. },
    unterminated_comment: "a /* b" => LexerError::UnterminatedComment { .. },
    bad_hex_escape: r#""\xZZ""# => LexerError::InvalidEscape { .. },
    bad_unicode_escape: r#""\u12""# => LexerError::InvalidEscape { .. },
    single_ampersand: "a & b" => LexerError::UnexpectedChar { ch: '&', .. },
    single_pipe: "a | b" => LexerError::UnexpectedChar { ch: '|', .. },
    caret: "a ^ b" => LexerError::UnexpectedChar { ch: '^', .. },
    hash: "#x" => LexerError::UnexpectedChar { ch: '#', .. },
}

#[test]
fn unexpected_char_span_points_at_char() {
    let err = Lexer::tokenize("let x = 1 @ 2").unwrap_err();
    assert_eq!(err.span().start, 10);
    assert_eq!(err.span().end, 11);
}

#[test]
fn diagnostic_shows_caret() {
    let source = "let a = 1;\nlet b = 'oops";
    let err = Lexer::tokenize(source).unwrap_err();
    let diagnostic = err.diagnostic(source);
    assert!(diagnostic.contains("unterminated string literal"), "{diagnostic}");
    assert!(diagnostic.contains("let b = 'oops"), "{diagnostic}");
    assert!(diagnostic.contains('^'), "{diagnostic}");
}
