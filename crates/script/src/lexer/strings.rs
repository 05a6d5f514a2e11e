// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted strings, escape sequences, and template literals.

use super::{Lexer, LexerError};
use crate::token::{TemplatePart, Token, TokenKind};

/// Track quote state while scanning a `${...}` interpolation for its
/// closing brace.
struct QuoteState {
    quote: Option<char>,
    escaped: bool,
}

impl QuoteState {
    fn new() -> Self {
        Self { quote: None, escaped: false }
    }

    /// Process a character. Returns true when the character is inside a
    /// string literal and must not be treated as a brace.
    fn process(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return true;
        }
        match (self.quote, ch) {
            (Some(_), '\\') => {
                self.escaped = true;
                true
            }
            (Some(q), c) if c == q => {
                self.quote = None;
                true
            }
            (Some(_), _) => true,
            (None, '\'' | '"') => {
                self.quote = Some(ch);
                true
            }
            (None, _) => false,
        }
    }
}

impl Lexer<'_> {
    /// Lex a `'...'` or `"..."` string literal.
    pub(super) fn lex_string(&mut self, start: usize, quote: char) -> Result<Token, LexerError> {
        self.chars.next(); // opening quote
        let mut value = String::new();

        loop {
            match self.chars.next() {
                Some((_, c)) if c == quote => break,
                Some((pos, '\\')) => {
                    if let Some(ch) = self.lex_escape(pos)? {
                        value.push(ch);
                    }
                }
                Some((_, '\n' | '\r')) | None => {
                    return Err(LexerError::UnterminatedString { span: self.span(start, start + 1) });
                }
                Some((_, c)) => value.push(c),
            }
        }

        let end = self.current_position();
        Ok(Token::new(TokenKind::Str(value), self.span(start, end)))
    }

    /// Process the escape after a backslash at `pos`. Returns `None` for a
    /// line continuation.
    fn lex_escape(&mut self, pos: usize) -> Result<Option<char>, LexerError> {
        let Some((_, ch)) = self.chars.next() else {
            return Err(LexerError::InvalidEscape { span: self.span(pos, pos + 1) });
        };
        let escaped = match ch {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'v' => '\u{b}',
            '0' if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) => '\0',
            'x' => self.lex_hex_escape(pos, 2)?,
            'u' => {
                if self.peek_char() == Some('{') {
                    self.chars.next();
                    self.lex_braced_unicode(pos)?
                } else {
                    self.lex_hex_escape(pos, 4)?
                }
            }
            '\r' => {
                if self.peek_char() == Some('\n') {
                    self.chars.next();
                }
                return Ok(None);
            }
            '\n' | '\u{2028}' | '\u{2029}' => return Ok(None),
            other => other,
        };
        Ok(Some(escaped))
    }

    fn lex_hex_escape(&mut self, pos: usize, digits: usize) -> Result<char, LexerError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let d = self.peek_char().and_then(|c| c.to_digit(16));
            let Some(d) = d else {
                return Err(LexerError::InvalidEscape { span: self.span(pos, self.current_position()) });
            };
            code = code * 16 + d;
            self.chars.next();
        }
        // Lone surrogates cannot be represented; substitute U+FFFD.
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn lex_braced_unicode(&mut self, pos: usize) -> Result<char, LexerError> {
        let mut code = 0u32;
        let mut digits = 0;
        loop {
            match self.chars.next() {
                Some((_, '}')) if digits > 0 => break,
                Some((_, c)) if c.is_ascii_hexdigit() && digits < 6 => {
                    code = code * 16 + c.to_digit(16).unwrap_or(0);
                    digits += 1;
                }
                _ => {
                    return Err(LexerError::InvalidEscape {
                        span: self.span(pos, self.current_position()),
                    })
                }
            }
        }
        char::from_u32(code).ok_or(LexerError::InvalidEscape {
            span: self.span(pos, self.current_position()),
        })
    }

    /// Lex a backtick template literal, capturing `${...}` interpolations as
    /// raw source for the parser to re-lex.
    pub(super) fn lex_template(&mut self, start: usize) -> Result<Token, LexerError> {
        self.chars.next(); // opening backtick
        let mut parts = Vec::new();
        let mut text = String::new();

        loop {
            match self.chars.next() {
                Some((_, '`')) => break,
                Some((pos, '\\')) => {
                    if let Some(ch) = self.lex_escape(pos)? {
                        text.push(ch);
                    }
                }
                Some((pos, '$')) if self.peek_char() == Some('{') => {
                    self.chars.next();
                    if !text.is_empty() {
                        parts.push(TemplatePart::Text(std::mem::take(&mut text)));
                    }
                    let offset = pos + 2;
                    let source = self.read_interpolation(pos)?;
                    parts.push(TemplatePart::Expr { source, offset: self.base + offset });
                }
                Some((_, '\r')) => {
                    // Template literals normalize CRLF to LF
                    if self.peek_char() == Some('\n') {
                        self.chars.next();
                    }
                    text.push('\n');
                }
                Some((_, c)) => text.push(c),
                None => {
                    return Err(LexerError::UnterminatedTemplate { span: self.span(start, start + 1) })
                }
            }
        }

        if !text.is_empty() || parts.is_empty() {
            parts.push(TemplatePart::Text(text));
        }

        let end = self.current_position();
        Ok(Token::new(TokenKind::Template(parts), self.span(start, end)))
    }

    /// Read the body of a `${...}` up to its matching `}`. Nested braces,
    /// quoted strings, and nested templates are skipped over.
    fn read_interpolation(&mut self, dollar_pos: usize) -> Result<String, LexerError> {
        let mut depth = 1usize;
        let mut body = String::new();
        let mut quotes = QuoteState::new();

        while let Some((pos, ch)) = self.chars.next() {
            if quotes.process(ch) {
                body.push(ch);
                continue;
            }
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body);
                    }
                }
                '`' => {
                    // Nested template: capture it verbatim including its own
                    // interpolations.
                    let nested_end = self.skip_nested_template(pos)?;
                    body.push_str(&self.input[pos..nested_end]);
                    continue;
                }
                _ => {}
            }
            body.push(ch);
        }

        Err(LexerError::UnterminatedInterpolation { span: self.span(dollar_pos, dollar_pos + 2) })
    }

    /// Skip a nested template whose opening backtick at `start` was already
    /// consumed. Returns the end offset (after the closing backtick).
    fn skip_nested_template(&mut self, start: usize) -> Result<usize, LexerError> {
        loop {
            match self.chars.next() {
                Some((pos, '`')) => return Ok(pos + 1),
                Some((_, '\\')) => {
                    self.chars.next();
                }
                Some((pos, '$')) if self.peek_char() == Some('{') => {
                    self.chars.next();
                    self.read_interpolation(pos)?;
                }
                Some(_) => {}
                None => {
                    return Err(LexerError::UnterminatedTemplate { span: self.span(start, start + 1) })
                }
            }
        }
    }
}
