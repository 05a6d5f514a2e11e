// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric literal tests.

use crate::lexer::Lexer;
use crate::token::TokenKind;
use yare::parameterized;

#[parameterized(
    integer = { "42", 42.0 },
    decimal = { "3.25", 3.25 },
    leading_dot = { ".5", 0.5 },
    trailing_dot = { "7.", 7.0 },
    exponent = { "1e3", 1000.0 },
    negative_exponent = { "25e-1", 2.5 },
    signed_exponent = { "2E+2", 200.0 },
    hex = { "0xff", 255.0 },
    octal = { "0o17", 15.0 },
    binary = { "0b101", 5.0 },
    separators = { "1_000_000", 1_000_000.0 },
)]
fn number_literal(input: &str, expected: f64) {
    let tokens = Lexer::tokenize(input).unwrap();
    assert_eq!(tokens.len(), 1, "input: {input}");
    assert_eq!(tokens[0].kind, TokenKind::Number(expected));
}

lex_tests! {
    member_after_number_needs_space: "1 .toString" => [
        TokenKind::Number(1.0),
        TokenKind::Punct(crate::token::Punct::Dot),
        TokenKind::Ident("toString".into()),
    ],
}

lex_error_tests! {
    empty_hex: "0x" => crate::error::LexerError::InvalidNumber { .. },
    ident_after_digits: "12abc" => crate::error::LexerError::InvalidNumber { .. },
    dangling_exponent: "1e" => crate::error::LexerError::InvalidNumber { .. },
}
