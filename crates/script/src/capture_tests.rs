// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn lines_join_with_newline_in_call_order() {
    let capture = Capture::new();
    capture.push(Channel::Info, "first".into()).unwrap();
    capture.push(Channel::Error, "Error: second".into()).unwrap();
    capture.push(Channel::Info, "".into()).unwrap();
    assert_eq!(capture.text(), "first\nError: second\n");
    assert_eq!(capture.len(), 3);
}

#[test]
fn empty_capture_has_empty_text() {
    let capture = Capture::default();
    assert!(capture.is_empty());
    assert_eq!(capture.text(), "");
}

#[test]
fn clones_share_the_buffer() {
    let capture = Capture::new();
    let writer = capture.clone();
    writer.push(Channel::Warning, "Warning: w".into()).unwrap();
    assert_eq!(capture.lines(), vec![CapturedLine { channel: Channel::Warning, text: "Warning: w".into() }]);
}

#[test]
fn limit_rejects_extra_lines_and_keeps_earlier_ones() {
    let capture = Capture::with_limit(2);
    capture.push(Channel::Info, "a".into()).unwrap();
    capture.push(Channel::Info, "b".into()).unwrap();
    let err = capture.push(Channel::Info, "c".into()).unwrap_err();
    assert_eq!(err, CaptureFull { limit: 2 });
    assert_eq!(err.to_string(), "output limit of 2 lines exceeded");
    assert_eq!(capture.text(), "a\nb");
}

#[test]
fn channel_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Channel::Warning).unwrap(), "\"warning\"");
    let channel: Channel = serde_json::from_str("\"error\"").unwrap();
    assert_eq!(channel, Channel::Error);
}
