// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric literals: decimal, exponent, hex/octal/binary, `_` separators.

use super::{Lexer, LexerError};
use crate::token::{self, Token, TokenKind};

impl Lexer<'_> {
    pub(super) fn lex_number(&mut self, start: usize) -> Result<Token, LexerError> {
        if self.peek_char() == Some('0') {
            let radix = match self.peek_second() {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                return self.lex_radix_number(start, radix);
            }
        }

        let mut text = String::new();
        let mut seen_dot = false;
        let mut seen_exp = false;

        while let Some(ch) = self.peek_char() {
            match ch {
                '0'..='9' => text.push(ch),
                '_' => {}
                '.' if !seen_dot && !seen_exp => {
                    seen_dot = true;
                    text.push(ch);
                }
                'e' | 'E' if !seen_exp => {
                    seen_exp = true;
                    text.push('e');
                    self.chars.next();
                    if let Some(sign @ ('+' | '-')) = self.peek_char() {
                        text.push(sign);
                        self.chars.next();
                    }
                    continue;
                }
                _ => break,
            }
            self.chars.next();
        }

        let end = self.current_position();
        // `1abc` is an error, as in the host language.
        if self.peek_char().is_some_and(token::is_ident_start) {
            return Err(LexerError::InvalidNumber {
                text: self.input[start..end].to_string(),
                span: self.span(start, end),
            });
        }

        let value = text.parse::<f64>().map_err(|_| LexerError::InvalidNumber {
            text: self.input[start..end].to_string(),
            span: self.span(start, end),
        })?;
        Ok(Token::new(TokenKind::Number(value), self.span(start, end)))
    }

    fn lex_radix_number(&mut self, start: usize, radix: u32) -> Result<Token, LexerError> {
        self.chars.next(); // '0'
        self.chars.next(); // prefix letter

        let mut value = 0f64;
        let mut digits = 0usize;
        while let Some(ch) = self.peek_char() {
            if ch == '_' {
                self.chars.next();
                continue;
            }
            let Some(d) = ch.to_digit(radix) else {
                break;
            };
            value = value * radix as f64 + d as f64;
            digits += 1;
            self.chars.next();
        }

        let end = self.current_position();
        if digits == 0 || self.peek_char().is_some_and(token::is_ident_char) {
            return Err(LexerError::InvalidNumber {
                text: self.input[start..end].to_string(),
                span: self.span(start, end),
            });
        }
        Ok(Token::new(TokenKind::Number(value), self.span(start, end)))
    }
}
