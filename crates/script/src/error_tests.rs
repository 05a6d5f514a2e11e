// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn span_reports_variant_span() {
    let err = LexerError::InvalidNumber { text: "0x".into(), span: Span::new(3, 5) };
    assert_eq!(err.span(), Span::new(3, 5));
}

#[test]
fn message_includes_position() {
    let err = LexerError::UnexpectedChar { ch: '@', span: Span::new(6, 7) };
    assert_eq!(err.to_string(), "unexpected character '@' at position 6");
}

#[test]
fn diagnostic_points_at_character() {
    let err = LexerError::UnexpectedChar { ch: '#', span: Span::new(4, 5) };
    let rendered = err.diagnostic("let #x = 1");
    assert!(rendered.starts_with("error: unexpected character '#'"), "{rendered}");
    assert!(rendered.ends_with("|     ^"), "{rendered}");
}
