// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destructuring patterns for declarations, parameters, and assignment.

use std::rc::Rc;

use super::Parser;
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::token::{Punct, TokenKind};

impl Parser<'_> {
    /// Grammar: ident | array_pattern | object_pattern
    pub(super) fn parse_binding_target(&mut self) -> Result<Pattern, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Ident(name)) => {
                let name: Rc<str> = name.as_str().into();
                let span = self.advance().map(|t| t.span).unwrap_or_default();
                Ok(Pattern::Ident { name, span })
            }
            Some(TokenKind::Punct(Punct::LBracket)) => self.nested(Self::parse_array_pattern),
            Some(TokenKind::Punct(Punct::LBrace)) => self.nested(Self::parse_object_pattern),
            _ => Err(self.unexpected_token("identifier or destructuring pattern")),
        }
    }

    /// Grammar: '[' (element? (',' element?)*)? (',' '...' pattern)? ']'
    fn parse_array_pattern(&mut self) -> Result<Pattern, ParseError> {
        let start = self.expect_punct(Punct::LBracket)?.start;
        let mut elements = Vec::new();
        let mut rest = None;

        while !self.eat_punct(Punct::RBracket) {
            if self.eat_punct(Punct::Comma) {
                elements.push(None);
                continue;
            }
            if self.eat_punct(Punct::Ellipsis) {
                rest = Some(Box::new(self.parse_binding_target()?));
                self.expect_punct(Punct::RBracket)?;
                break;
            }
            let target = self.parse_binding_target()?;
            let default = if self.eat_punct(Punct::Assign) { Some(self.parse_assignment()?) } else { None };
            elements.push(Some(PatternElem { target, default }));
            if !self.at_punct(Punct::RBracket) {
                self.expect_punct(Punct::Comma)?;
            }
        }

        Ok(Pattern::Array { elements, rest, span: self.span_from(start) })
    }

    /// Grammar: '{' (prop (',' prop)*)? (',' '...' ident)? '}'
    ///   prop = key ':' pattern ('=' default)? | ident ('=' default)?
    fn parse_object_pattern(&mut self) -> Result<Pattern, ParseError> {
        let start = self.expect_punct(Punct::LBrace)?.start;
        let mut props = Vec::new();
        let mut rest = None;

        while !self.eat_punct(Punct::RBrace) {
            if self.eat_punct(Punct::Ellipsis) {
                rest = Some(Box::new(self.parse_binding_target()?));
                self.expect_punct(Punct::RBrace)?;
                break;
            }

            let key_span = self.peek().map(|t| t.span).unwrap_or_default();
            let shorthand = match self.peek_kind() {
                Some(TokenKind::Ident(name)) => Some(Rc::<str>::from(name.as_str())),
                _ => None,
            };
            let key = self.parse_property_key()?;

            let value = if self.eat_punct(Punct::Colon) {
                self.parse_binding_target()?
            } else if let Some(name) = shorthand {
                Pattern::Ident { name, span: key_span }
            } else {
                return Err(self.unexpected_token("':'"));
            };
            let default = if self.eat_punct(Punct::Assign) { Some(self.parse_assignment()?) } else { None };
            props.push(PatternProp { key, value, default });

            if !self.at_punct(Punct::RBrace) {
                self.expect_punct(Punct::Comma)?;
            }
        }

        Ok(Pattern::Object { props, rest, span: self.span_from(start) })
    }

    /// Reinterpret an already-parsed expression as an assignment target,
    /// e.g. the left side of `[a, b] = [b, a]`.
    pub(super) fn expr_to_pattern(&self, expr: Expr) -> Result<Pattern, ParseError> {
        match expr {
            Expr::Ident { name, span } => Ok(Pattern::Ident { name, span }),
            Expr::Member { optional: false, .. } => Ok(Pattern::Member(Box::new(expr))),
            Expr::Array { elements, span } => {
                let mut items = Vec::with_capacity(elements.len());
                let mut rest = None;
                let count = elements.len();
                for (i, element) in elements.into_iter().enumerate() {
                    match element {
                        ArrayElement::Spread(inner) if i + 1 == count => {
                            rest = Some(Box::new(self.expr_to_pattern(inner)?));
                        }
                        ArrayElement::Spread(inner) => {
                            return Err(ParseError::InvalidAssignmentTarget { span: inner.span() })
                        }
                        ArrayElement::Item(Expr::Ident { name, span }) if name.as_ref() == "undefined" && span.is_empty() => {
                            items.push(None);
                        }
                        ArrayElement::Item(item) => items.push(Some(self.expr_to_elem(item)?)),
                    }
                }
                Ok(Pattern::Array { elements: items, rest, span })
            }
            Expr::Object { props, span } => {
                let mut out = Vec::with_capacity(props.len());
                let mut rest = None;
                let count = props.len();
                for (i, prop) in props.into_iter().enumerate() {
                    match prop {
                        ObjectProp::Spread(inner) if i + 1 == count => {
                            rest = Some(Box::new(self.expr_to_pattern(inner)?));
                        }
                        ObjectProp::Spread(inner) => {
                            return Err(ParseError::InvalidAssignmentTarget { span: inner.span() })
                        }
                        ObjectProp::KeyValue { key, value } => {
                            let PatternElem { target, default } = self.expr_to_elem(value)?;
                            out.push(PatternProp { key, value: target, default });
                        }
                    }
                }
                Ok(Pattern::Object { props: out, rest, span })
            }
            other => Err(ParseError::InvalidAssignmentTarget { span: other.span() }),
        }
    }

    /// `target = default` inside a destructuring assignment.
    fn expr_to_elem(&self, expr: Expr) -> Result<PatternElem, ParseError> {
        match expr {
            Expr::Assign { op: AssignOp::Assign, target, value, .. } => {
                Ok(PatternElem { target: *target, default: Some(*value) })
            }
            other => Ok(PatternElem { target: self.expr_to_pattern(other)?, default: None }),
        }
    }
}
