// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statements and declarations.

use super::Parser;
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::token::{Keyword, Punct, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.nested(Self::statement)
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        let Some(kind) = self.peek_kind().cloned() else {
            return Err(self.unexpected_token("statement"));
        };

        match kind {
            TokenKind::Punct(Punct::LBrace) => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Punct(Punct::Semi) => {
                let span = self.expect_punct(Punct::Semi)?;
                Ok(Stmt::Empty(span))
            }
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const) => {
                let decl = self.parse_var_decl()?;
                self.consume_semicolon()?;
                Ok(Stmt::Var(decl))
            }
            TokenKind::Keyword(Keyword::Function) => {
                let func = self.parse_function(true)?;
                Ok(Stmt::Function(func))
            }
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::For) => self.parse_for(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            TokenKind::Keyword(Keyword::Do) => self.parse_do_while(),
            TokenKind::Keyword(Keyword::Switch) => self.parse_switch(),
            TokenKind::Keyword(Keyword::Return) => self.parse_return(),
            TokenKind::Keyword(Keyword::Break | Keyword::Continue) => self.parse_jump(),
            TokenKind::Keyword(Keyword::Throw) => self.parse_throw(),
            TokenKind::Keyword(Keyword::Try) => self.parse_try(),
            TokenKind::Keyword(Keyword::Class) => Err(self.unsupported("classes")),
            TokenKind::Ident(ref name)
                if name == "async"
                    && matches!(self.peek_nth_kind(1), Some(TokenKind::Keyword(Keyword::Function))) =>
            {
                Err(self.unsupported("async functions"))
            }
            TokenKind::Ident(_) if matches!(self.peek_nth_kind(1), Some(TokenKind::Punct(Punct::Colon))) => {
                Err(self.unsupported("labelled statements"))
            }
            _ => {
                let expr = self.parse_expression()?;
                self.consume_semicolon()?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    /// Grammar: '{' statement* '}'
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.expect_punct(Punct::LBrace)?.start;
        let mut body = Vec::new();
        while !self.at_punct(Punct::RBrace) {
            if self.at_end() {
                return Err(self.unexpected_token("'}'"));
            }
            body.push(self.parse_statement()?);
        }
        self.expect_punct(Punct::RBrace)?;
        Ok(Block { body, span: self.span_from(start) })
    }

    /// Grammar: ('var' | 'let' | 'const') declarator (',' declarator)*
    pub(super) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let start = self.current_start();
        let kind = match self.advance().map(|t| t.kind) {
            Some(TokenKind::Keyword(Keyword::Var)) => DeclKind::Var,
            Some(TokenKind::Keyword(Keyword::Let)) => DeclKind::Let,
            _ => DeclKind::Const,
        };

        let mut declarators = Vec::new();
        loop {
            let decl_start = self.current_start();
            let target = self.parse_binding_target()?;
            let init = if self.eat_punct(Punct::Assign) {
                Some(self.parse_assignment()?)
            } else {
                None
            };

            // `for (const x of ...)` has no initializer; the caller checks.
            let in_for_each_head = self.at_ident("of") || self.at_keyword(Keyword::In);
            if init.is_none() && !in_for_each_head {
                if kind == DeclKind::Const {
                    return Err(ParseError::MissingInitializer { span: self.span_from(decl_start) });
                }
                if !matches!(target, Pattern::Ident { .. }) {
                    return Err(ParseError::MissingInitializer { span: self.span_from(decl_start) });
                }
            }

            declarators.push(Declarator { target, init, span: self.span_from(decl_start) });
            if !self.eat_punct(Punct::Comma) {
                break;
            }
        }

        Ok(VarDecl { kind, declarators, span: self.span_from(start) })
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::If)?.start;
        let test = self.parse_paren_expression()?;
        let consequent = Box::new(self.parse_statement()?);
        let alternate = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If { test, consequent, alternate, span: self.span_from(start) })
    }

    /// Grammar:
    ///   'for' '(' init? ';' test? ';' update? ')' stmt
    ///   'for' '(' binding ('of' | 'in') expr ')' stmt
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::For)?.start;
        if self.at_ident("await") {
            return Err(self.unsupported("for await loops"));
        }
        self.expect_punct(Punct::LParen)?;

        let mut init = None;
        if self.at_keyword(Keyword::Var) || self.at_keyword(Keyword::Let) || self.at_keyword(Keyword::Const) {
            let decl = self.parse_var_decl()?;
            if let Some(kind) = self.for_each_kind() {
                let binding = self.single_for_binding(decl)?;
                return self.finish_for_each(start, kind, binding);
            }
            init = Some(ForInit::Var(decl));
        } else if !self.at_punct(Punct::Semi) {
            // `for (x of items)` reuses an existing binding
            if let Some(TokenKind::Ident(name)) = self.peek_kind().cloned() {
                let is_for_each = matches!(self.peek_nth_kind(1), Some(TokenKind::Ident(n)) if n == "of")
                    || matches!(self.peek_nth_kind(1), Some(TokenKind::Keyword(Keyword::In)));
                if is_for_each {
                    let span = self.advance().map(|t| t.span).unwrap_or_default();
                    let kind = self.for_each_kind().unwrap_or(ForEachKind::Of);
                    let binding = ForBinding::Assign(Pattern::Ident { name: name.as_str().into(), span });
                    return self.finish_for_each(start, kind, binding);
                }
            }
            init = Some(ForInit::Expr(self.parse_expression()?));
        }

        self.expect_punct(Punct::Semi)?;
        let test = if self.at_punct(Punct::Semi) { None } else { Some(self.parse_expression()?) };
        self.expect_punct(Punct::Semi)?;
        let update = if self.at_punct(Punct::RParen) { None } else { Some(self.parse_expression()?) };
        self.expect_punct(Punct::RParen)?;

        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::For { init, test, update, body, span: self.span_from(start) })
    }

    /// Consume `of`/`in` if present.
    fn for_each_kind(&mut self) -> Option<ForEachKind> {
        if self.at_ident("of") {
            self.advance();
            Some(ForEachKind::Of)
        } else if self.eat_keyword(Keyword::In) {
            Some(ForEachKind::In)
        } else {
            None
        }
    }

    fn single_for_binding(&self, decl: VarDecl) -> Result<ForBinding, ParseError> {
        let kind = decl.kind;
        let span = decl.span;
        let mut declarators = decl.declarators.into_iter();
        match (declarators.next(), declarators.next()) {
            (Some(d), None) if d.init.is_none() => Ok(ForBinding::Decl { kind, target: d.target }),
            _ => Err(ParseError::Unsupported {
                feature: "initializers in for-of/for-in heads".to_string(),
                span,
            }),
        }
    }

    fn finish_for_each(
        &mut self,
        start: usize,
        kind: ForEachKind,
        binding: ForBinding,
    ) -> Result<Stmt, ParseError> {
        let iterable = self.parse_assignment()?;
        self.expect_punct(Punct::RParen)?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::ForEach { kind, binding, iterable, body, span: self.span_from(start) })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::While)?.start;
        let test = self.parse_paren_expression()?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While { test, body, span: self.span_from(start) })
    }

    fn parse_do_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::Do)?.start;
        let body = Box::new(self.parse_statement()?);
        self.expect_keyword(Keyword::While)?;
        let test = self.parse_paren_expression()?;
        // A semicolon after `do ... while (x)` is always optional.
        self.eat_punct(Punct::Semi);
        Ok(Stmt::DoWhile { body, test, span: self.span_from(start) })
    }

    /// Grammar: 'switch' '(' expr ')' '{' (('case' expr | 'default') ':' stmt*)* '}'
    fn parse_switch(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::Switch)?.start;
        let discriminant = self.parse_paren_expression()?;
        self.expect_punct(Punct::LBrace)?;

        let mut cases = Vec::new();
        let mut seen_default = false;
        while !self.eat_punct(Punct::RBrace) {
            let case_start = self.current_start();
            let test = if self.eat_keyword(Keyword::Case) {
                Some(self.parse_expression()?)
            } else if self.at_keyword(Keyword::Default) && !seen_default {
                self.advance();
                seen_default = true;
                None
            } else {
                return Err(self.unexpected_token("'case', 'default', or '}'"));
            };
            self.expect_punct(Punct::Colon)?;

            let mut body = Vec::new();
            while !(self.at_keyword(Keyword::Case)
                || self.at_keyword(Keyword::Default)
                || self.at_punct(Punct::RBrace))
            {
                if self.at_end() {
                    return Err(self.unexpected_token("'}'"));
                }
                body.push(self.parse_statement()?);
            }
            cases.push(SwitchCase { test, body, span: self.span_from(case_start) });
        }

        Ok(Stmt::Switch { discriminant, cases, span: self.span_from(start) })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::Return)?.start;
        let value = if self.ends_statement() { None } else { Some(self.parse_expression()?) };
        self.consume_semicolon()?;
        Ok(Stmt::Return { value, span: self.span_from(start) })
    }

    fn parse_jump(&mut self) -> Result<Stmt, ParseError> {
        let token = self.advance();
        let span = token.as_ref().map(|t| t.span).unwrap_or_default();
        if matches!(self.peek_kind(), Some(TokenKind::Ident(_))) && !self.newline_before() {
            return Err(self.unsupported("labelled statements"));
        }
        self.consume_semicolon()?;
        Ok(match token.map(|t| t.kind) {
            Some(TokenKind::Keyword(Keyword::Break)) => Stmt::Break(span),
            _ => Stmt::Continue(span),
        })
    }

    fn parse_throw(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::Throw)?.start;
        if self.ends_statement() {
            return Err(self.unexpected_token("expression after 'throw'"));
        }
        let value = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Stmt::Throw { value, span: self.span_from(start) })
    }

    /// Grammar: 'try' block ('catch' ('(' pattern ')')? block)? ('finally' block)?
    fn parse_try(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect_keyword(Keyword::Try)?.start;
        let block = self.parse_block()?;

        let handler = if self.at_keyword(Keyword::Catch) {
            let catch_start = self.current_start();
            self.advance();
            let param = if self.eat_punct(Punct::LParen) {
                let pattern = self.parse_binding_target()?;
                self.expect_punct(Punct::RParen)?;
                Some(pattern)
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause { param, body, span: self.span_from(catch_start) })
        } else {
            None
        };

        let finalizer = if self.eat_keyword(Keyword::Finally) { Some(self.parse_block()?) } else { None };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.unexpected_token("'catch' or 'finally'"));
        }

        Ok(Stmt::Try { block, handler, finalizer, span: self.span_from(start) })
    }

    fn parse_paren_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect_punct(Punct::LParen)?;
        let expr = self.parse_expression()?;
        self.expect_punct(Punct::RParen)?;
        Ok(expr)
    }

    /// Restricted productions (`return`, `throw`) end at a line break.
    fn ends_statement(&self) -> bool {
        self.at_end() || self.at_punct(Punct::Semi) || self.at_punct(Punct::RBrace) || self.newline_before()
    }
}
