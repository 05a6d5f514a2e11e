// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract Syntax Tree types for parsed scripts.

use std::rc::Rc;

use super::token::Span;

/// A whole script.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Var,
    Let,
    Const,
}

impl DeclKind {
    pub fn is_lexical(self) -> bool {
        !matches!(self, DeclKind::Var)
    }
}

/// `let a = 1, [b, c] = pair;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub kind: DeclKind,
    pub declarators: Vec<Declarator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub target: Pattern,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Var(VarDecl),
    /// `function name(...) { ... }`; hoisted to the top of its scope.
    Function(Rc<FunctionNode>),
    Expr(Expr),
    Block(Block),
    If {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
        span: Span,
    },
    /// C-style `for (init; test; update)`.
    For {
        init: Option<ForInit>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
        span: Span,
    },
    /// `for (... of ...)` and `for (... in ...)`.
    ForEach {
        kind: ForEachKind,
        binding: ForBinding,
        iterable: Expr,
        body: Box<Stmt>,
        span: Span,
    },
    While {
        test: Expr,
        body: Box<Stmt>,
        span: Span,
    },
    DoWhile {
        body: Box<Stmt>,
        test: Expr,
        span: Span,
    },
    Switch {
        discriminant: Expr,
        cases: Vec<SwitchCase>,
        span: Span,
    },
    Return {
        value: Option<Expr>,
        span: Span,
    },
    Break(Span),
    Continue(Span),
    Throw {
        value: Expr,
        span: Span,
    },
    Try {
        block: Block,
        handler: Option<CatchClause>,
        finalizer: Option<Block>,
        span: Span,
    },
    Empty(Span),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Var(decl) => decl.span,
            Stmt::Function(func) => func.span,
            Stmt::Expr(expr) => expr.span(),
            Stmt::Block(block) => block.span,
            Stmt::If { span, .. }
            | Stmt::For { span, .. }
            | Stmt::ForEach { span, .. }
            | Stmt::While { span, .. }
            | Stmt::DoWhile { span, .. }
            | Stmt::Switch { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::Throw { span, .. }
            | Stmt::Try { span, .. } => *span,
            Stmt::Break(span) | Stmt::Continue(span) | Stmt::Empty(span) => *span,
        }
    }
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForEachKind {
    /// `for (x of items)`: iterate values.
    Of,
    /// `for (k in obj)`: iterate keys.
    In,
}

/// Left-hand side of a `for...of`/`for...in` head.
#[derive(Debug, Clone, PartialEq)]
pub enum ForBinding {
    /// `for (const x of ...)`
    Decl { kind: DeclKind, target: Pattern },
    /// `for (x of ...)` assigning to an existing binding.
    Assign(Pattern),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// `None` for `default:`.
    pub test: Option<Expr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// `None` for `catch { ... }`.
    pub param: Option<Pattern>,
    pub body: Block,
    pub span: Span,
}

/// Function declarations, expressions, arrows, and object methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: Option<Rc<str>>,
    pub params: Vec<Param>,
    pub body: FunctionBody,
    pub is_arrow: bool,
    /// Source text of the whole function, used when it is stringified.
    pub source: Rc<str>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub target: Pattern,
    pub default: Option<Expr>,
    /// `...rest`
    pub rest: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    Block(Block),
    /// Arrow shorthand `x => x * 2`.
    Expr(Box<Expr>),
}

/// Binding and assignment targets.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Ident {
        name: Rc<str>,
        span: Span,
    },
    Array {
        elements: Vec<Option<PatternElem>>,
        rest: Option<Box<Pattern>>,
        span: Span,
    },
    Object {
        props: Vec<PatternProp>,
        rest: Option<Box<Pattern>>,
        span: Span,
    },
    /// `obj.x` or `arr[i]`; only valid in assignment, never in declarations.
    Member(Box<Expr>),
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Pattern::Ident { span, .. } | Pattern::Array { span, .. } | Pattern::Object { span, .. } => {
                *span
            }
            Pattern::Member(expr) => expr.span(),
        }
    }

    /// Every identifier this pattern binds, in source order.
    pub fn bound_names(&self) -> Vec<Rc<str>> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, names: &mut Vec<Rc<str>>) {
        match self {
            Pattern::Ident { name, .. } => names.push(name.clone()),
            Pattern::Array { elements, rest, .. } => {
                for elem in elements.iter().flatten() {
                    elem.target.collect_names(names);
                }
                if let Some(rest) = rest {
                    rest.collect_names(names);
                }
            }
            Pattern::Object { props, rest, .. } => {
                for prop in props {
                    prop.value.collect_names(names);
                }
                if let Some(rest) = rest {
                    rest.collect_names(names);
                }
            }
            Pattern::Member(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternElem {
    pub target: Pattern,
    pub default: Option<Expr>,
}

/// `{ key: value = default }` inside an object pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternProp {
    pub key: PropKey,
    pub value: Pattern,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropKey {
    Named(Rc<str>),
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`
    Plus,
    /// `!x`
    Not,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    In,
    Instanceof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `??`
    Nullish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`, `-=`, ... apply the binary operator first.
    Compound(BinaryOp),
    /// `&&=`, `||=`, `??=` only assign when the logical operator would
    /// evaluate its right side.
    Logical(LogicalOp),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
    Item(Expr),
    Spread(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectProp {
    /// `key: value`, `key` (shorthand), or `key() {}` (method).
    KeyValue { key: PropKey, value: Expr },
    /// `...source`
    Spread(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Item(Expr),
    Spread(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProp {
    /// `obj.name`
    Named(Rc<str>),
    /// `obj[expr]`
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    Text(String),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number {
        value: f64,
        span: Span,
    },
    Str {
        value: Rc<str>,
        span: Span,
    },
    Template {
        segments: Vec<TemplateSegment>,
        span: Span,
    },
    Bool {
        value: bool,
        span: Span,
    },
    Null(Span),
    Ident {
        name: Rc<str>,
        span: Span,
    },
    This(Span),
    Array {
        elements: Vec<ArrayElement>,
        span: Span,
    },
    Object {
        props: Vec<ObjectProp>,
        span: Span,
    },
    Function(Rc<FunctionNode>),
    Unary {
        op: UnaryOp,
        arg: Box<Expr>,
        span: Span,
    },
    Update {
        op: UpdateOp,
        prefix: bool,
        target: Box<Pattern>,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    Assign {
        op: AssignOp,
        target: Box<Pattern>,
        value: Box<Expr>,
        span: Span,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
        span: Span,
    },
    Member {
        object: Box<Expr>,
        property: MemberProp,
        /// `obj?.prop`
        optional: bool,
        span: Span,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Argument>,
        /// `fn?.()`
        optional: bool,
        span: Span,
    },
    New {
        callee: Box<Expr>,
        args: Vec<Argument>,
        span: Span,
    },
    /// Boundary of an optional chain: a short-circuit anywhere inside
    /// yields `undefined` for the whole chain.
    Chain {
        expr: Box<Expr>,
        span: Span,
    },
    /// `a, b`
    Sequence {
        exprs: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Number { span, .. }
            | Expr::Str { span, .. }
            | Expr::Template { span, .. }
            | Expr::Bool { span, .. }
            | Expr::Ident { span, .. }
            | Expr::Array { span, .. }
            | Expr::Object { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Update { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Logical { span, .. }
            | Expr::Assign { span, .. }
            | Expr::Conditional { span, .. }
            | Expr::Member { span, .. }
            | Expr::Call { span, .. }
            | Expr::New { span, .. }
            | Expr::Chain { span, .. }
            | Expr::Sequence { span, .. } => *span,
            Expr::Null(span) | Expr::This(span) => *span,
            Expr::Function(func) => func.span,
        }
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
