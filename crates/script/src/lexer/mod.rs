// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script lexer for tokenizing learner source.

mod numbers;
mod operators;
mod strings;

use super::token::{self, Keyword, Span, Token, TokenKind};

pub use crate::error::LexerError;

/// Lexer that turns script source into tokens, tracking line breaks for
/// automatic semicolon insertion.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset of `input` inside the full source. Non-zero when lexing
    /// a template interpolation.
    base: usize,
    /// A line terminator was skipped since the last token.
    saw_newline: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self::with_offset(input, 0)
    }

    /// Create a lexer whose spans start at `base` instead of zero.
    pub fn with_offset(input: &'a str, base: usize) -> Self {
        Self { input, chars: input.char_indices().peekable(), base, saw_newline: false }
    }

    /// Tokenize the entire input.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        Lexer::new(input).collect_tokens()
    }

    /// Tokenize an interpolation that starts at byte `base` of the full source.
    pub fn tokenize_at(input: &str, base: usize) -> Result<Vec<Token>, LexerError> {
        Lexer::with_offset(input, base).collect_tokens()
    }

    fn collect_tokens(mut self) -> Result<Vec<Token>, LexerError> {
        // Pre-allocate based on heuristic: ~1 token per 4 characters
        let mut tokens = Vec::with_capacity(self.input.len() / 4 + 1);
        while let Some(mut token) = self.next_token()? {
            token.newline_before = std::mem::take(&mut self.saw_newline);
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Peek one character past the next.
    fn peek_second(&self) -> Option<char> {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next().map(|(_, c)| c)
    }

    /// Current position (relative to `input`).
    fn current_position(&self) -> usize {
        self.chars.clone().next().map(|(pos, _)| pos).unwrap_or(self.input.len())
    }

    /// Absolute span for a range relative to `input`.
    #[inline]
    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.base + start, self.base + end)
    }

    /// Get the next token, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_trivia()?;

        let Some(&(pos, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '"' | '\'' => self.lex_string(pos, ch)?,
            '`' => self.lex_template(pos)?,
            '0'..='9' => self.lex_number(pos)?,
            '.' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => self.lex_number(pos)?,
            c if token::is_ident_start(c) => self.lex_word(pos),
            _ => self.lex_punct(pos, ch)?,
        };
        Ok(Some(token))
    }

    /// Skip whitespace and comments, remembering whether a line break was
    /// crossed.
    fn skip_trivia(&mut self) -> Result<(), LexerError> {
        loop {
            match self.peek_char() {
                Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => {
                    self.saw_newline = true;
                    self.chars.next();
                }
                Some(c) if c.is_whitespace() || c == '\u{feff}' => {
                    self.chars.next();
                }
                Some('/') => match self.peek_second() {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.chars.next();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexerError> {
        let start = self.current_position();
        self.chars.next(); // '/'
        self.chars.next(); // '*'
        let mut prev = '\0';
        while let Some((_, c)) = self.chars.next() {
            if c == '\n' || c == '\r' {
                self.saw_newline = true;
            }
            if prev == '*' && c == '/' {
                return Ok(());
            }
            prev = c;
        }
        Err(LexerError::UnterminatedComment { span: self.span(start, start + 2) })
    }

    /// Lex an identifier or keyword.
    fn lex_word(&mut self, start: usize) -> Token {
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if !token::is_ident_char(ch) {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        let word = &self.input[start..end];
        let kind = match Keyword::from_ident(word) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(word.to_string()),
        };
        Token::new(kind, self.span(start, end))
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
