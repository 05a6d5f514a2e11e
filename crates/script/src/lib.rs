// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kata-script: an embedded interpreter for the JavaScript subset learners
//! write exercises in.
//!
//! Source text goes through [`Lexer`] and [`Parser`] into an AST, then
//! [`ScriptExecutor`] evaluates it with console output captured line by
//! line in a [`Capture`] buffer. Values are rendered to text by the
//! [`normalize`] module.

pub mod ast;
mod builtins;
pub mod capture;
mod error;
pub mod exec;
pub mod lexer;
pub mod normalize;
mod parse_error;
pub mod parser;
mod span;
pub mod token;
pub mod value;

#[cfg(test)]
mod test_support;

pub use capture::{Capture, CaptureFull, CapturedLine, Channel};
pub use error::LexerError;
pub use exec::{ExecError, ScriptExecutor, ThrowOrigin};
pub use lexer::Lexer;
pub use normalize::{format_line, format_number, to_text};
pub use parse_error::ParseError;
pub use parser::Parser;
pub use span::{diagnostic_context, locate_span, Span};
pub use value::Value;
