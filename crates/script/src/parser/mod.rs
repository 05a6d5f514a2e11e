// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser that transforms tokens into an Abstract Syntax
//! Tree.

mod expressions;
mod functions;
mod patterns;
mod statements;

use super::ast::Program;
use super::lexer::Lexer;
use super::parse_error::ParseError;
use super::token::{Keyword, Punct, Span, Token, TokenKind};

/// Deepest nesting of statements and expressions accepted before parsing
/// fails, keeping recursion within the native stack.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'a> {
    /// Full source text; function nodes keep a slice of it.
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Parse a whole script, or error on invalid syntax.
    pub fn parse(source: &'a str) -> Result<Program, ParseError> {
        let tokens = Lexer::tokenize(source)?;
        let mut parser = Parser { source, tokens, pos: 0, depth: 0 };
        parser.parse_program()
    }

    /// Grammar: statement*
    fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.at_end() {
            body.push(self.parse_statement()?);
        }
        Ok(Program { body, span: Span::new(0, self.source.len()) })
    }

    /// Run `parse` one nesting level deeper.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            let span = self.peek().map(|t| t.span).unwrap_or_else(|| Span::empty(self.prev_end()));
            return Err(ParseError::NestingTooDeep { span });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // ── Token cursor ────────────────────────────────────────────────────

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    #[inline]
    fn peek_nth_kind(&self, n: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + n).map(|t| &t.kind)
    }

    #[inline]
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn at_punct(&self, punct: Punct) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Punct(p)) if *p == punct)
    }

    #[inline]
    fn at_keyword(&self, kw: Keyword) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Keyword(k)) if *k == kw)
    }

    /// Contextual keywords such as `of` and `async` lex as identifiers.
    #[inline]
    fn at_ident(&self, name: &str) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Ident(n)) if n == name)
    }

    fn eat_punct(&mut self, punct: Punct) -> bool {
        if self.at_punct(punct) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.at_keyword(kw) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `punct` or fail; returns its span.
    fn expect_punct(&mut self, punct: Punct) -> Result<Span, ParseError> {
        if self.at_punct(punct) {
            let span = self.tokens[self.pos].span;
            self.pos += 1;
            Ok(span)
        } else {
            Err(self.unexpected_token(&format!("'{}'", punct.as_str())))
        }
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<Span, ParseError> {
        if self.at_keyword(kw) {
            let span = self.tokens[self.pos].span;
            self.pos += 1;
            Ok(span)
        } else {
            Err(self.unexpected_token(&format!("'{}'", kw.as_str())))
        }
    }

    /// Start offset of the current token (or end of input).
    fn current_start(&self) -> usize {
        self.peek().map(|t| t.span.start).unwrap_or_else(|| self.prev_end())
    }

    /// End offset of the most recently consumed token.
    fn prev_end(&self) -> usize {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span.end
        } else {
            0
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end().max(start))
    }

    /// True when a line break precedes the current token.
    fn newline_before(&self) -> bool {
        self.peek().is_some_and(|t| t.newline_before)
    }

    /// Statement terminator with automatic semicolon insertion: an explicit
    /// `;`, or a `}`, end of input, or line break before the next token.
    fn consume_semicolon(&mut self) -> Result<(), ParseError> {
        if self.eat_punct(Punct::Semi) {
            return Ok(());
        }
        if self.at_end() || self.at_punct(Punct::RBrace) || self.newline_before() {
            return Ok(());
        }
        Err(self.unexpected_token("';' or newline"))
    }

    fn unexpected_token(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind.clone(),
                expected: expected.to_string(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof { expected: expected.to_string() },
        }
    }

    fn unsupported(&self, feature: &str) -> ParseError {
        let span = self.peek().map(|t| t.span).unwrap_or_else(|| Span::empty(self.prev_end()));
        ParseError::Unsupported { feature: feature.to_string(), span }
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
