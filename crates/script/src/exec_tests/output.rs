// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for console capture and value rendering.

use super::{executor, output};
use crate::capture::{CapturedLine, Channel};

#[test]
fn console_channels_prefix_lines() {
    let executor = executor();
    executor
        .execute_str("console.log('a'); console.error('b'); console.warn('c'); console.info('d'); console.debug('e')")
        .unwrap();
    assert_eq!(
        executor.capture().lines(),
        vec![
            CapturedLine { channel: Channel::Info, text: "a".into() },
            CapturedLine { channel: Channel::Error, text: "Error: b".into() },
            CapturedLine { channel: Channel::Warning, text: "Warning: c".into() },
            CapturedLine { channel: Channel::Info, text: "d".into() },
            CapturedLine { channel: Channel::Info, text: "e".into() },
        ]
    );
}

#[test]
fn empty_log_is_empty_line() {
    assert_eq!(output("console.log(); console.log('x')"), "\nx");
}

#[test]
fn arguments_join_with_spaces() {
    assert_eq!(output("console.log('a', 1, true, null, undefined)"), "a 1 true null undefined");
}

#[test]
fn objects_are_not_deep_serialized() {
    assert_eq!(output("console.log({ a: 1 }, [{ a: 1 }])"), "[object Object] [object Object]");
}

#[test]
fn nested_arrays_flatten() {
    assert_eq!(output("console.log([1, [2, [3, null]], undefined])"), "1,2,3,,");
}

#[test]
fn errors_render_name_and_message() {
    let out = output("console.log(new Error('boom'), new TypeError('bad'), new RangeError(), String(new Error()))");
    assert_eq!(out, "Error: boom TypeError: bad RangeError Error");
}

#[test]
fn numbers_render_like_javascript() {
    let out = output("console.log(1e21, 1e-7, 123456789012345680000, -1.5, 100, 0.000001)");
    assert_eq!(out, "1e+21 1e-7 123456789012345680000 -1.5 100 0.000001");
}

#[test]
fn output_before_failure_is_kept() {
    let executor = executor();
    let result = executor.execute_str("console.log('before'); throw new Error('stop'); console.log('after')");
    assert!(result.is_err());
    assert_eq!(executor.capture().text(), "before");
}

#[test]
fn native_functions_can_be_passed_around() {
    assert_eq!(output("const log = console.log; log('detached'); ['x', 'y'].forEach(s => log(s))"), "detached\nx\ny");
}
