// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types for the script lexer.

use std::fmt;

pub use crate::span::{diagnostic_context, locate_span, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// A line terminator appeared between the previous token and this one.
    /// Drives automatic semicolon insertion.
    pub newline_before: bool,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span, newline_before: false }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    /// Quoted string with escapes already processed.
    Str(String),
    /// Backtick template literal.
    Template(Vec<TemplatePart>),
    Ident(String),
    Keyword(Keyword),
    Punct(Punct),
}

/// One segment of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Literal text with escapes processed.
    Text(String),
    /// Raw source of a `${...}` interpolation and the byte offset of its
    /// first character in the enclosing source.
    Expr { source: String, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Default,
    Delete,
    Do,
    Else,
    False,
    Finally,
    For,
    Function,
    If,
    In,
    Instanceof,
    Let,
    New,
    Null,
    Return,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
}

impl Keyword {
    pub fn from_ident(word: &str) -> Option<Keyword> {
        Some(match word {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "default" => Keyword::Default,
            "delete" => Keyword::Delete,
            "do" => Keyword::Do,
            "else" => Keyword::Else,
            "false" => Keyword::False,
            "finally" => Keyword::Finally,
            "for" => Keyword::For,
            "function" => Keyword::Function,
            "if" => Keyword::If,
            "in" => Keyword::In,
            "instanceof" => Keyword::Instanceof,
            "let" => Keyword::Let,
            "new" => Keyword::New,
            "null" => Keyword::Null,
            "return" => Keyword::Return,
            "switch" => Keyword::Switch,
            "this" => Keyword::This,
            "throw" => Keyword::Throw,
            "true" => Keyword::True,
            "try" => Keyword::Try,
            "typeof" => Keyword::Typeof,
            "var" => Keyword::Var,
            "void" => Keyword::Void,
            "while" => Keyword::While,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::False => "false",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::Let => "let",
            Keyword::New => "new",
            Keyword::Null => "null",
            Keyword::Return => "return",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semi,
    Comma,
    Dot,
    /// `...`
    Ellipsis,
    Question,
    /// `?.`
    QuestionDot,
    /// `??`
    QuestionQuestion,
    Colon,
    /// `=>`
    Arrow,
    Plus,
    Minus,
    Star,
    /// `**`
    StarStar,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Bang,
    Assign,
    /// `==`
    EqEq,
    /// `===`
    EqEqEq,
    /// `!=`
    BangEq,
    /// `!==`
    BangEqEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    PlusAssign,
    MinusAssign,
    StarAssign,
    StarStarAssign,
    SlashAssign,
    PercentAssign,
    AndAndAssign,
    OrOrAssign,
    QuestionQuestionAssign,
}

impl Punct {
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::LBrace => "{",
            Punct::RBrace => "}",
            Punct::LBracket => "[",
            Punct::RBracket => "]",
            Punct::Semi => ";",
            Punct::Comma => ",",
            Punct::Dot => ".",
            Punct::Ellipsis => "...",
            Punct::Question => "?",
            Punct::QuestionDot => "?.",
            Punct::QuestionQuestion => "??",
            Punct::Colon => ":",
            Punct::Arrow => "=>",
            Punct::Plus => "+",
            Punct::Minus => "-",
            Punct::Star => "*",
            Punct::StarStar => "**",
            Punct::Slash => "/",
            Punct::Percent => "%",
            Punct::PlusPlus => "++",
            Punct::MinusMinus => "--",
            Punct::Bang => "!",
            Punct::Assign => "=",
            Punct::EqEq => "==",
            Punct::EqEqEq => "===",
            Punct::BangEq => "!=",
            Punct::BangEqEq => "!==",
            Punct::Lt => "<",
            Punct::Gt => ">",
            Punct::LtEq => "<=",
            Punct::GtEq => ">=",
            Punct::AndAnd => "&&",
            Punct::OrOr => "||",
            Punct::PlusAssign => "+=",
            Punct::MinusAssign => "-=",
            Punct::StarAssign => "*=",
            Punct::StarStarAssign => "**=",
            Punct::SlashAssign => "/=",
            Punct::PercentAssign => "%=",
            Punct::AndAndAssign => "&&=",
            Punct::OrOrAssign => "||=",
            Punct::QuestionQuestionAssign => "??=",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Str(_) => write!(f, "string"),
            TokenKind::Template(_) => write!(f, "template literal"),
            TokenKind::Ident(name) => write!(f, "identifier '{}'", name),
            TokenKind::Keyword(kw) => write!(f, "keyword '{}'", kw.as_str()),
            TokenKind::Punct(p) => write!(f, "'{}'", p.as_str()),
        }
    }
}

pub(crate) fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

pub(crate) fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
