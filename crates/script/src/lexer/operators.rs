// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Punctuators and operators, longest match first.

use super::{Lexer, LexerError};
use crate::token::{Punct, Token, TokenKind};

impl Lexer<'_> {
    pub(super) fn lex_punct(&mut self, start: usize, ch: char) -> Result<Token, LexerError> {
        self.chars.next();

        let punct = match ch {
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            '[' => Punct::LBracket,
            ']' => Punct::RBracket,
            ';' => Punct::Semi,
            ',' => Punct::Comma,
            ':' => Punct::Colon,
            '.' => {
                if self.peek_char() == Some('.') && self.peek_second() == Some('.') {
                    self.chars.next();
                    self.chars.next();
                    Punct::Ellipsis
                } else {
                    Punct::Dot
                }
            }
            '?' => match self.peek_char() {
                Some('?') => {
                    self.chars.next();
                    self.with_assign(Punct::QuestionQuestion, Punct::QuestionQuestionAssign)
                }
                // `a?.5:1` is a conditional, not optional chaining
                Some('.') if !self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                    self.chars.next();
                    Punct::QuestionDot
                }
                _ => Punct::Question,
            },
            '+' => match self.peek_char() {
                Some('+') => {
                    self.chars.next();
                    Punct::PlusPlus
                }
                _ => self.with_assign(Punct::Plus, Punct::PlusAssign),
            },
            '-' => match self.peek_char() {
                Some('-') => {
                    self.chars.next();
                    Punct::MinusMinus
                }
                _ => self.with_assign(Punct::Minus, Punct::MinusAssign),
            },
            '*' => match self.peek_char() {
                Some('*') => {
                    self.chars.next();
                    self.with_assign(Punct::StarStar, Punct::StarStarAssign)
                }
                _ => self.with_assign(Punct::Star, Punct::StarAssign),
            },
            '/' => self.with_assign(Punct::Slash, Punct::SlashAssign),
            '%' => self.with_assign(Punct::Percent, Punct::PercentAssign),
            '!' => match self.peek_char() {
                Some('=') => {
                    self.chars.next();
                    self.with_assign(Punct::BangEq, Punct::BangEqEq)
                }
                _ => Punct::Bang,
            },
            '=' => match self.peek_char() {
                Some('=') => {
                    self.chars.next();
                    self.with_assign(Punct::EqEq, Punct::EqEqEq)
                }
                Some('>') => {
                    self.chars.next();
                    Punct::Arrow
                }
                _ => Punct::Assign,
            },
            '<' => self.with_assign(Punct::Lt, Punct::LtEq),
            '>' => self.with_assign(Punct::Gt, Punct::GtEq),
            '&' if self.peek_char() == Some('&') => {
                self.chars.next();
                self.with_assign(Punct::AndAnd, Punct::AndAndAssign)
            }
            '|' if self.peek_char() == Some('|') => {
                self.chars.next();
                self.with_assign(Punct::OrOr, Punct::OrOrAssign)
            }
            _ => {
                return Err(LexerError::UnexpectedChar {
                    ch,
                    span: self.span(start, start + ch.len_utf8()),
                })
            }
        };

        let end = self.current_position();
        Ok(Token::new(TokenKind::Punct(punct), self.span(start, end)))
    }

    /// Consume a trailing `=` if present, choosing between the two forms.
    fn with_assign(&mut self, plain: Punct, assign: Punct) -> Punct {
        if self.peek_char() == Some('=') {
            self.chars.next();
            assign
        } else {
            plain
        }
    }
}
