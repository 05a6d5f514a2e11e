// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn merge_covers_both() {
    let merged = Span::new(4, 6).merge(Span::new(1, 3));
    assert_eq!(merged, Span::new(1, 6));
}

#[test]
fn empty_span_has_no_length() {
    let span = Span::empty(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(2, 5).slice("abcdef"), "cde");
    assert_eq!(Span::new(4, 40).slice("abc"), "");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    assert_eq!(Span::new(1, 2).slice("é"), "");
}

#[test]
fn locate_span_counts_lines_and_chars() {
    let source = "let a = 1;\nlet é = b;";
    let (line, col, content) = locate_span(source, Span::new(source.len() - 2, source.len() - 1));
    assert_eq!(line, 2);
    assert_eq!(col, 8);
    assert_eq!(content, "let é = b;");
}

#[test]
fn diagnostic_context_renders_caret_under_span() {
    let source = "console.log(x))";
    let rendered = diagnostic_context(source, Span::new(14, 15), "unexpected token ')'");
    let expected = format!(
        "error: unexpected token ')'\n  --> line 1, column 15\n   |\n  1 | console.log(x))\n   | {}^",
        " ".repeat(14)
    );
    assert_eq!(rendered, expected);
}

#[test]
fn diagnostic_caret_is_clamped_to_line() {
    let source = "ab\ncd";
    let rendered = diagnostic_context(source, Span::new(1, 5), "oops");
    assert!(rendered.ends_with("   |  ^"), "{rendered}");
}
