// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expressions, from comma sequences down to primaries.

use std::rc::Rc;

use super::Parser;
use crate::ast::*;
use crate::lexer::Lexer;
use crate::normalize::format_number;
use crate::parse_error::ParseError;
use crate::token::{Keyword, Punct, Span, TemplatePart, TokenKind};

/// Binding power of a binary or logical operator.
#[derive(Clone, Copy)]
enum Infix {
    Binary(BinaryOp),
    Logical(LogicalOp),
}

fn infix_operator(kind: &TokenKind) -> Option<(Infix, u8)> {
    let op = match kind {
        TokenKind::Punct(p) => match p {
            Punct::QuestionQuestion => (Infix::Logical(LogicalOp::Nullish), 1),
            Punct::OrOr => (Infix::Logical(LogicalOp::Or), 2),
            Punct::AndAnd => (Infix::Logical(LogicalOp::And), 3),
            Punct::EqEq => (Infix::Binary(BinaryOp::Eq), 7),
            Punct::BangEq => (Infix::Binary(BinaryOp::NotEq), 7),
            Punct::EqEqEq => (Infix::Binary(BinaryOp::StrictEq), 7),
            Punct::BangEqEq => (Infix::Binary(BinaryOp::StrictNotEq), 7),
            Punct::Lt => (Infix::Binary(BinaryOp::Lt), 8),
            Punct::Gt => (Infix::Binary(BinaryOp::Gt), 8),
            Punct::LtEq => (Infix::Binary(BinaryOp::LtEq), 8),
            Punct::GtEq => (Infix::Binary(BinaryOp::GtEq), 8),
            Punct::Plus => (Infix::Binary(BinaryOp::Add), 10),
            Punct::Minus => (Infix::Binary(BinaryOp::Sub), 10),
            Punct::Star => (Infix::Binary(BinaryOp::Mul), 11),
            Punct::Slash => (Infix::Binary(BinaryOp::Div), 11),
            Punct::Percent => (Infix::Binary(BinaryOp::Rem), 11),
            _ => return None,
        },
        TokenKind::Keyword(Keyword::In) => (Infix::Binary(BinaryOp::In), 8),
        TokenKind::Keyword(Keyword::Instanceof) => (Infix::Binary(BinaryOp::Instanceof), 8),
        _ => return None,
    };
    Some(op)
}

fn assign_operator(kind: &TokenKind) -> Option<AssignOp> {
    let TokenKind::Punct(p) = kind else {
        return None;
    };
    Some(match p {
        Punct::Assign => AssignOp::Assign,
        Punct::PlusAssign => AssignOp::Compound(BinaryOp::Add),
        Punct::MinusAssign => AssignOp::Compound(BinaryOp::Sub),
        Punct::StarAssign => AssignOp::Compound(BinaryOp::Mul),
        Punct::SlashAssign => AssignOp::Compound(BinaryOp::Div),
        Punct::PercentAssign => AssignOp::Compound(BinaryOp::Rem),
        Punct::StarStarAssign => AssignOp::Compound(BinaryOp::Pow),
        Punct::AndAndAssign => AssignOp::Logical(LogicalOp::And),
        Punct::OrOrAssign => AssignOp::Logical(LogicalOp::Or),
        Punct::QuestionQuestionAssign => AssignOp::Logical(LogicalOp::Nullish),
        _ => return None,
    })
}

impl Parser<'_> {
    /// Grammar: assignment (',' assignment)*
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let first = self.parse_assignment()?;
        if !self.at_punct(Punct::Comma) {
            return Ok(first);
        }
        let mut exprs = vec![first];
        while self.eat_punct(Punct::Comma) {
            exprs.push(self.parse_assignment()?);
        }
        Ok(Expr::Sequence { exprs, span: self.span_from(start) })
    }

    pub(super) fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::assignment)
    }

    /// Grammar: arrow | conditional (assign_op assignment)?
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        if self.at_arrow_function() {
            return Ok(Expr::Function(self.parse_arrow()?));
        }
        if self.at_ident("async") && !self.peek_nth_newline(1) {
            let async_function = matches!(
                self.peek_nth_kind(1),
                Some(TokenKind::Keyword(Keyword::Function) | TokenKind::Ident(_))
            ) || self.arrow_starts_at(self.pos + 1);
            if async_function {
                return Err(self.unsupported("async functions"));
            }
        }
        if self.at_ident("yield") {
            return Err(self.unsupported("generators"));
        }

        let start = self.current_start();
        let left = self.parse_conditional()?;

        let Some(op) = self.peek_kind().and_then(assign_operator) else {
            return Ok(left);
        };
        let target = match op {
            AssignOp::Assign => self.expr_to_pattern(left)?,
            // Compound operators only accept simple targets.
            _ => match left {
                Expr::Ident { name, span } => Pattern::Ident { name, span },
                Expr::Member { optional: false, .. } => Pattern::Member(Box::new(left)),
                other => return Err(ParseError::InvalidAssignmentTarget { span: other.span() }),
            },
        };
        self.advance();
        let value = self.parse_assignment()?;
        Ok(Expr::Assign {
            op,
            target: Box::new(target),
            value: Box::new(value),
            span: self.span_from(start),
        })
    }

    /// Grammar: binary ('?' assignment ':' assignment)?
    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let test = self.parse_binary(1)?;
        if !self.eat_punct(Punct::Question) {
            return Ok(test);
        }
        let consequent = self.parse_assignment()?;
        self.expect_punct(Punct::Colon)?;
        let alternate = self.parse_assignment()?;
        Ok(Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span: self.span_from(start),
        })
    }

    /// Precedence climbing over binary and logical operators; all of them
    /// are left-associative.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let mut left = self.parse_exponent()?;

        loop {
            let Some((op, prec)) = self.peek_kind().and_then(infix_operator) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = Box::new(self.parse_binary(prec + 1)?);
            let span = self.span_from(start);
            left = match op {
                Infix::Binary(op) => Expr::Binary { op, left: Box::new(left), right, span },
                Infix::Logical(op) => Expr::Logical { op, left: Box::new(left), right, span },
            };
        }

        Ok(left)
    }

    /// Grammar: unary_op unary | ('++' | '--') unary | postfix
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let op = match self.peek_kind() {
            Some(TokenKind::Punct(Punct::Minus)) => Some(UnaryOp::Neg),
            Some(TokenKind::Punct(Punct::Plus)) => Some(UnaryOp::Plus),
            Some(TokenKind::Punct(Punct::Bang)) => Some(UnaryOp::Not),
            Some(TokenKind::Keyword(Keyword::Typeof)) => Some(UnaryOp::Typeof),
            Some(TokenKind::Keyword(Keyword::Void)) => Some(UnaryOp::Void),
            Some(TokenKind::Keyword(Keyword::Delete)) => Some(UnaryOp::Delete),
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            let arg = self.nested(Self::parse_unary)?;
            return Ok(Expr::Unary { op, arg: Box::new(arg), span: self.span_from(start) });
        }

        let update = match self.peek_kind() {
            Some(TokenKind::Punct(Punct::PlusPlus)) => Some(UpdateOp::Increment),
            Some(TokenKind::Punct(Punct::MinusMinus)) => Some(UpdateOp::Decrement),
            _ => None,
        };
        if let Some(op) = update {
            self.advance();
            let arg = self.nested(Self::parse_unary)?;
            let target = self.simple_target(arg)?;
            return Ok(Expr::Update {
                op,
                prefix: true,
                target: Box::new(target),
                span: self.span_from(start),
            });
        }

        if self.at_ident("await") {
            return Err(self.unsupported("async functions"));
        }

        self.parse_postfix()
    }

    /// Grammar: unary ('**' exponent)?   (right-associative)
    fn parse_exponent(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let unary_operand = matches!(
            self.peek_kind(),
            Some(
                TokenKind::Punct(Punct::Minus | Punct::Plus | Punct::Bang)
                    | TokenKind::Keyword(Keyword::Typeof | Keyword::Void | Keyword::Delete)
            )
        );
        let base = self.parse_unary()?;
        if !self.at_punct(Punct::StarStar) {
            return Ok(base);
        }
        if unary_operand {
            // `-2 ** 2` is ambiguous and rejected
            return Err(self.unexpected_token("parentheses around unary operand of '**'"));
        }
        self.advance();
        let exponent = self.nested(Self::parse_exponent)?;
        Ok(Expr::Binary {
            op: BinaryOp::Pow,
            left: Box::new(base),
            right: Box::new(exponent),
            span: self.span_from(start),
        })
    }

    /// Grammar: call_member ('++' | '--')?   (no line break before the operator)
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let expr = self.parse_call_member()?;
        if self.newline_before() {
            return Ok(expr);
        }
        let op = match self.peek_kind() {
            Some(TokenKind::Punct(Punct::PlusPlus)) => UpdateOp::Increment,
            Some(TokenKind::Punct(Punct::MinusMinus)) => UpdateOp::Decrement,
            _ => return Ok(expr),
        };
        self.advance();
        let target = self.simple_target(expr)?;
        Ok(Expr::Update { op, prefix: false, target: Box::new(target), span: self.span_from(start) })
    }

    fn simple_target(&self, expr: Expr) -> Result<Pattern, ParseError> {
        match expr {
            Expr::Ident { name, span } => Ok(Pattern::Ident { name, span }),
            Expr::Member { optional: false, .. } => Ok(Pattern::Member(Box::new(expr))),
            other => Err(ParseError::InvalidAssignmentTarget { span: other.span() }),
        }
    }

    /// Member access, calls, and optional chaining. Any `?.` in the chain
    /// wraps the whole chain in [`Expr::Chain`].
    fn parse_call_member(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_start();
        let mut expr = if self.at_keyword(Keyword::New) { self.parse_new()? } else { self.parse_primary()? };
        let mut in_chain = false;

        loop {
            let Some(kind) = self.peek_kind() else {
                break;
            };
            match kind {
                TokenKind::Punct(Punct::Dot) => {
                    self.advance();
                    let property = MemberProp::Named(self.parse_member_name()?);
                    expr = self.member(expr, property, false, start);
                }
                TokenKind::Punct(Punct::QuestionDot) => {
                    self.advance();
                    in_chain = true;
                    if self.at_punct(Punct::LParen) {
                        let args = self.parse_arguments()?;
                        expr = Expr::Call {
                            callee: Box::new(expr),
                            args,
                            optional: true,
                            span: self.span_from(start),
                        };
                    } else if self.eat_punct(Punct::LBracket) {
                        let index = self.parse_expression()?;
                        self.expect_punct(Punct::RBracket)?;
                        expr = self.member(expr, MemberProp::Computed(Box::new(index)), true, start);
                    } else {
                        let property = MemberProp::Named(self.parse_member_name()?);
                        expr = self.member(expr, property, true, start);
                    }
                }
                TokenKind::Punct(Punct::LBracket) => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect_punct(Punct::RBracket)?;
                    expr = self.member(expr, MemberProp::Computed(Box::new(index)), false, start);
                }
                TokenKind::Punct(Punct::LParen) => {
                    let args = self.parse_arguments()?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                        optional: false,
                        span: self.span_from(start),
                    };
                }
                TokenKind::Template(_) => return Err(self.unsupported("tagged templates")),
                _ => break,
            }
        }

        if in_chain {
            expr = Expr::Chain { expr: Box::new(expr), span: self.span_from(start) };
        }
        Ok(expr)
    }

    fn member(&self, object: Expr, property: MemberProp, optional: bool, start: usize) -> Expr {
        Expr::Member { object: Box::new(object), property, optional, span: self.span_from(start) }
    }

    /// Property name after `.`; keywords are allowed (`obj.default`).
    fn parse_member_name(&mut self) -> Result<Rc<str>, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Ident(name)) => {
                let name: Rc<str> = name.as_str().into();
                self.advance();
                Ok(name)
            }
            Some(TokenKind::Keyword(kw)) => {
                let name: Rc<str> = kw.as_str().into();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected_token("property name")),
        }
    }

    /// Grammar: 'new' (new | member_expr) arguments?
    fn parse_new(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_keyword(Keyword::New)?.start;
        let mut callee = if self.at_keyword(Keyword::New) { self.parse_new()? } else { self.parse_primary()? };

        // The callee takes member accesses but stops at the first call.
        loop {
            if self.eat_punct(Punct::Dot) {
                let property = MemberProp::Named(self.parse_member_name()?);
                callee = self.member(callee, property, false, start);
            } else if self.eat_punct(Punct::LBracket) {
                let index = self.parse_expression()?;
                self.expect_punct(Punct::RBracket)?;
                callee = self.member(callee, MemberProp::Computed(Box::new(index)), false, start);
            } else {
                break;
            }
        }

        let args = if self.at_punct(Punct::LParen) { self.parse_arguments()? } else { Vec::new() };
        Ok(Expr::New { callee: Box::new(callee), args, span: self.span_from(start) })
    }

    /// Grammar: '(' (('...')? assignment (',' ('...')? assignment)* ','?)? ')'
    fn parse_arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        self.expect_punct(Punct::LParen)?;
        let mut args = Vec::new();
        while !self.eat_punct(Punct::RParen) {
            if self.eat_punct(Punct::Ellipsis) {
                args.push(Argument::Spread(self.parse_assignment()?));
            } else {
                args.push(Argument::Item(self.parse_assignment()?));
            }
            if !self.at_punct(Punct::RParen) {
                self.expect_punct(Punct::Comma)?;
            }
        }
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected_token("expression"));
        };
        let span = token.span;

        match token.kind {
            TokenKind::Number(value) => {
                self.advance();
                Ok(Expr::Number { value, span })
            }
            TokenKind::Str(value) => {
                self.advance();
                Ok(Expr::Str { value: value.into(), span })
            }
            TokenKind::Template(parts) => {
                self.advance();
                self.parse_template(parts, span)
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Ident { name: name.into(), span })
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Ok(Expr::Bool { value: true, span })
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Ok(Expr::Bool { value: false, span })
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::Null(span))
            }
            TokenKind::Keyword(Keyword::This) => {
                self.advance();
                Ok(Expr::This(span))
            }
            TokenKind::Keyword(Keyword::Function) => Ok(Expr::Function(self.parse_function(false)?)),
            TokenKind::Keyword(Keyword::Class) => Err(self.unsupported("classes")),
            TokenKind::Punct(Punct::LParen) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_punct(Punct::RParen)?;
                Ok(expr)
            }
            TokenKind::Punct(Punct::LBracket) => self.parse_array_literal(),
            TokenKind::Punct(Punct::LBrace) => self.parse_object_literal(),
            TokenKind::Punct(Punct::Slash | Punct::SlashAssign) => Err(self.unsupported("regular expressions")),
            _ => Err(self.unexpected_token("expression")),
        }
    }

    /// Grammar: '[' (element (',' element)*)? ']' where holes are allowed.
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_punct(Punct::LBracket)?.start;
        let mut elements = Vec::new();
        while !self.eat_punct(Punct::RBracket) {
            if self.at_punct(Punct::Comma) {
                // Hole: `[1, , 3]`
                let hole = self.current_start();
                self.advance();
                elements.push(ArrayElement::Item(Expr::Ident {
                    name: "undefined".into(),
                    span: Span::empty(hole),
                }));
                continue;
            }
            if self.eat_punct(Punct::Ellipsis) {
                elements.push(ArrayElement::Spread(self.parse_assignment()?));
            } else {
                elements.push(ArrayElement::Item(self.parse_assignment()?));
            }
            if !self.at_punct(Punct::RBracket) {
                self.expect_punct(Punct::Comma)?;
            }
        }
        Ok(Expr::Array { elements, span: self.span_from(start) })
    }

    /// Grammar: '{' (prop (',' prop)* ','?)? '}'
    ///   prop = '...' assignment | key ':' assignment | key params block | ident ('=' assignment)?
    fn parse_object_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_punct(Punct::LBrace)?.start;
        let mut props = Vec::new();

        while !self.eat_punct(Punct::RBrace) {
            if self.eat_punct(Punct::Ellipsis) {
                props.push(ObjectProp::Spread(self.parse_assignment()?));
            } else {
                props.push(self.parse_object_prop()?);
            }
            if !self.at_punct(Punct::RBrace) {
                self.expect_punct(Punct::Comma)?;
            }
        }

        Ok(Expr::Object { props, span: self.span_from(start) })
    }

    fn parse_object_prop(&mut self) -> Result<ObjectProp, ParseError> {
        if self.at_punct(Punct::Star) {
            return Err(self.unsupported("generators"));
        }
        let is_accessor_or_async = (self.at_ident("get") || self.at_ident("set") || self.at_ident("async"))
            && !matches!(
                self.peek_nth_kind(1),
                Some(TokenKind::Punct(Punct::Colon | Punct::LParen | Punct::Comma | Punct::RBrace | Punct::Assign))
            );
        if is_accessor_or_async {
            let feature = if self.at_ident("async") { "async functions" } else { "getters and setters" };
            return Err(self.unsupported(feature));
        }

        let key_start = self.current_start();
        let shorthand = match self.peek_kind() {
            Some(TokenKind::Ident(name)) => Some(Rc::<str>::from(name.as_str())),
            _ => None,
        };
        let key = self.parse_property_key()?;

        if self.at_punct(Punct::LParen) {
            let name = match &key {
                PropKey::Named(name) => Some(name.clone()),
                PropKey::Computed(_) => None,
            };
            let method = self.parse_method(name, key_start)?;
            return Ok(ObjectProp::KeyValue { key, value: Expr::Function(method) });
        }

        if self.eat_punct(Punct::Colon) {
            let value = self.parse_assignment()?;
            return Ok(ObjectProp::KeyValue { key, value });
        }

        // Shorthand `{ name }`, or `{ name = fallback }` inside a pattern
        let Some(name) = shorthand else {
            return Err(self.unexpected_token("':'"));
        };
        let ident_span = self.span_from(key_start);
        let ident = Expr::Ident { name: name.clone(), span: ident_span };
        if self.eat_punct(Punct::Assign) {
            let default = self.parse_assignment()?;
            let value = Expr::Assign {
                op: AssignOp::Assign,
                target: Box::new(Pattern::Ident { name, span: ident_span }),
                value: Box::new(default),
                span: self.span_from(key_start),
            };
            return Ok(ObjectProp::KeyValue { key, value });
        }
        Ok(ObjectProp::KeyValue { key, value: ident })
    }

    /// Object keys: identifiers, keywords, strings, numbers, or `[expr]`.
    pub(super) fn parse_property_key(&mut self) -> Result<PropKey, ParseError> {
        let Some(kind) = self.peek_kind().cloned() else {
            return Err(self.unexpected_token("property name"));
        };
        let key = match kind {
            TokenKind::Ident(name) => PropKey::Named(name.into()),
            TokenKind::Keyword(kw) => PropKey::Named(kw.as_str().into()),
            TokenKind::Str(value) => PropKey::Named(value.into()),
            TokenKind::Number(n) => PropKey::Named(format_number(n).into()),
            TokenKind::Punct(Punct::LBracket) => {
                self.advance();
                let expr = self.parse_assignment()?;
                self.expect_punct(Punct::RBracket)?;
                return Ok(PropKey::Computed(Box::new(expr)));
            }
            _ => return Err(self.unexpected_token("property name")),
        };
        self.advance();
        Ok(key)
    }

    /// Re-lex and parse each `${...}` of a template literal.
    fn parse_template(&mut self, parts: Vec<TemplatePart>, span: Span) -> Result<Expr, ParseError> {
        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                TemplatePart::Text(text) => segments.push(TemplateSegment::Text(text)),
                TemplatePart::Expr { source, offset } => {
                    let expr = self
                        .parse_interpolation(&source, offset)
                        .map_err(|inner| ParseError::InTemplate { inner: Box::new(inner), span })?;
                    segments.push(TemplateSegment::Expr(expr));
                }
            }
        }
        Ok(Expr::Template { segments, span })
    }

    fn parse_interpolation(&self, source: &str, offset: usize) -> Result<Expr, ParseError> {
        let tokens = Lexer::tokenize_at(source, offset)?;
        let mut inner = Parser { source: self.source, tokens, pos: 0, depth: self.depth };
        if inner.at_end() {
            return Err(inner.unexpected_token("expression"));
        }
        let expr = inner.parse_expression()?;
        if !inner.at_end() {
            return Err(inner.unexpected_token("'}'"));
        }
        Ok(expr)
    }

    /// True if the upcoming tokens start an arrow function: `x =>` or a
    /// parenthesised list followed by `=>`.
    fn at_arrow_function(&self) -> bool {
        self.arrow_starts_at(self.pos)
    }

    fn arrow_starts_at(&self, start: usize) -> bool {
        let kind_at = |i: usize| self.tokens.get(i).map(|t| &t.kind);
        match kind_at(start) {
            Some(TokenKind::Ident(_)) => matches!(kind_at(start + 1), Some(TokenKind::Punct(Punct::Arrow))),
            Some(TokenKind::Punct(Punct::LParen)) => {
                let mut depth = 0usize;
                let mut i = start;
                while let Some(token) = self.tokens.get(i) {
                    match token.kind {
                        TokenKind::Punct(Punct::LParen | Punct::LBracket | Punct::LBrace) => depth += 1,
                        TokenKind::Punct(Punct::RParen | Punct::RBracket | Punct::RBrace) => {
                            depth = depth.saturating_sub(1);
                            if depth == 0 {
                                return matches!(
                                    self.tokens.get(i + 1).map(|t| &t.kind),
                                    Some(TokenKind::Punct(Punct::Arrow))
                                );
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }
                false
            }
            _ => false,
        }
    }

    fn peek_nth_newline(&self, n: usize) -> bool {
        self.tokens.get(self.pos + n).is_some_and(|t| t.newline_before)
    }
}
