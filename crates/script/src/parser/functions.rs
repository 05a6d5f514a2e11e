// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Function declarations, function expressions, arrows, and methods.

use std::rc::Rc;

use super::Parser;
use crate::ast::{FunctionBody, FunctionNode, Param, Pattern};
use crate::parse_error::ParseError;
use crate::token::{Keyword, Punct, TokenKind};

impl Parser<'_> {
    /// Grammar: 'function' ident? params block
    ///
    /// The name is required for declarations.
    pub(super) fn parse_function(&mut self, is_declaration: bool) -> Result<Rc<FunctionNode>, ParseError> {
        let start = self.expect_keyword(Keyword::Function)?.start;
        if self.at_punct(Punct::Star) {
            return Err(self.unsupported("generators"));
        }

        let name = match self.peek_kind() {
            Some(TokenKind::Ident(name)) => {
                let name: Rc<str> = name.as_str().into();
                self.advance();
                Some(name)
            }
            _ if is_declaration => return Err(self.unexpected_token("function name")),
            _ => None,
        };

        let params = self.parse_params()?;
        let body = FunctionBody::Block(self.parse_block()?);
        Ok(self.finish_function(name, params, body, false, start))
    }

    /// Grammar: (ident | params) '=>' (block | assignment)
    pub(super) fn parse_arrow(&mut self) -> Result<Rc<FunctionNode>, ParseError> {
        let start = self.current_start();
        let params = match self.peek_kind() {
            Some(TokenKind::Ident(name)) => {
                let name: Rc<str> = name.as_str().into();
                let span = self.advance().map(|t| t.span).unwrap_or_default();
                vec![Param { target: Pattern::Ident { name, span }, default: None, rest: false }]
            }
            _ => self.parse_params()?,
        };
        self.expect_punct(Punct::Arrow)?;

        let body = if self.at_punct(Punct::LBrace) {
            FunctionBody::Block(self.parse_block()?)
        } else {
            FunctionBody::Expr(Box::new(self.parse_assignment()?))
        };
        Ok(self.finish_function(None, params, body, true, start))
    }

    /// Object literal method shorthand: `name(params) { body }`. `start`
    /// is the offset of the key.
    pub(super) fn parse_method(
        &mut self,
        name: Option<Rc<str>>,
        start: usize,
    ) -> Result<Rc<FunctionNode>, ParseError> {
        let params = self.parse_params()?;
        let body = FunctionBody::Block(self.parse_block()?);
        Ok(self.finish_function(name, params, body, false, start))
    }

    /// Grammar: '(' (param (',' param)* ','?)? ')'
    ///   param = '...' pattern | pattern ('=' assignment)?
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        self.expect_punct(Punct::LParen)?;
        let mut params = Vec::new();

        while !self.eat_punct(Punct::RParen) {
            if self.eat_punct(Punct::Ellipsis) {
                let target = self.parse_binding_target()?;
                params.push(Param { target, default: None, rest: true });
                // Rest must be last, without a trailing comma.
                self.expect_punct(Punct::RParen)?;
                break;
            }

            let target = self.parse_binding_target()?;
            let default = if self.eat_punct(Punct::Assign) { Some(self.parse_assignment()?) } else { None };
            params.push(Param { target, default, rest: false });

            if !self.at_punct(Punct::RParen) {
                self.expect_punct(Punct::Comma)?;
            }
        }

        Ok(params)
    }

    fn finish_function(
        &self,
        name: Option<Rc<str>>,
        params: Vec<Param>,
        body: FunctionBody,
        is_arrow: bool,
        start: usize,
    ) -> Rc<FunctionNode> {
        let span = self.span_from(start);
        let source = self.source.get(span.start..span.end).unwrap_or_default();
        Rc::new(FunctionNode { name, params, body, is_arrow, source: source.into(), span })
    }
}
