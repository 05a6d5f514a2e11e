// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output normalization: turns runtime values into the text that learners
//! see and that expectations are matched against.
//!
//! The rules follow JavaScript's `String(value)`:
//! - `undefined` and `null` render literally
//! - plain objects render as `[object Object]`, never deep-serialized
//! - arrays join their elements with `,`, rendering `null`/`undefined`
//!   elements as empty text and flattening nested arrays the same way
//! - error objects render as `Name: message`
//! - functions render as their source text

use std::collections::HashSet;
use std::rc::Rc;

use crate::capture::Channel;
use crate::exec::MAX_STRING_BYTES;
use crate::value::{Function, ObjectClass, Value};

/// Render a number the way `Number.prototype.toString()` does.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0
        return "0".to_string();
    }

    // Shortest round-trip digits, e.g. "1.2345e-7"
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if point - 1 >= 0 { '+' } else { '-' });
        out.push_str(&(point - 1).abs().to_string());
    }
    out
}

/// Array nesting beyond which rendering gives up.
pub(crate) const MAX_RENDER_DEPTH: usize = 10_000;

/// Hooks consulted while rendering arrays, so long renders stay within the
/// host's budget and limits.
pub(crate) trait Meter {
    type Error;

    /// Called once per array element.
    fn step(&mut self) -> Result<(), Self::Error>;
    fn too_deep(&mut self) -> Self::Error;
    fn too_long(&mut self) -> Self::Error;
}

/// Meter for rendering outside a run: stops after a fixed number of
/// elements and keeps the text written so far.
struct Unmetered {
    steps: usize,
}

impl Meter for Unmetered {
    type Error = ();

    fn step(&mut self) -> Result<(), ()> {
        self.steps += 1;
        if self.steps > MAX_STRING_BYTES {
            return Err(());
        }
        Ok(())
    }

    fn too_deep(&mut self) {}

    fn too_long(&mut self) {}
}

/// Writes values as text, tracking the arrays currently being rendered.
pub(crate) struct Renderer<'m, M> {
    meter: &'m mut M,
    open: HashSet<usize>,
}

impl<'m, M: Meter> Renderer<'m, M> {
    pub(crate) fn new(meter: &'m mut M) -> Self {
        Self { meter, open: HashSet::new() }
    }

    pub(crate) fn write(&mut self, value: &Value, out: &mut String) -> Result<(), M::Error> {
        match value {
            Value::Array(_) => self.write_array(value, ",", out),
            other => {
                write_leaf(other, out);
                self.check_len(out)
            }
        }
    }

    /// Write an array's elements joined by `separator`. Nullish elements
    /// and back-references to an array still being written render empty.
    pub(crate) fn write_array(&mut self, value: &Value, separator: &str, out: &mut String) -> Result<(), M::Error> {
        let Value::Array(items) = value else {
            return self.write(value, out);
        };
        let id = Rc::as_ptr(items) as usize;
        if self.open.contains(&id) {
            return Ok(());
        }
        if self.open.len() >= MAX_RENDER_DEPTH {
            return Err(self.meter.too_deep());
        }
        self.open.insert(id);
        let items = items.borrow().clone();
        for (i, item) in items.iter().enumerate() {
            self.meter.step()?;
            if i > 0 {
                out.push_str(separator);
            }
            if !item.is_nullish() {
                self.write(item, out)?;
            }
            self.check_len(out)?;
        }
        self.open.remove(&id);
        Ok(())
    }

    fn check_len(&mut self, out: &str) -> Result<(), M::Error> {
        if out.len() > MAX_STRING_BYTES {
            return Err(self.meter.too_long());
        }
        Ok(())
    }
}

/// Render any value as text. Past the nesting, length or element limits
/// the text rendered so far is returned.
pub fn to_text(value: &Value) -> String {
    let mut out = String::new();
    let mut meter = Unmetered { steps: 0 };
    let _ = Renderer::new(&mut meter).write(value, &mut out);
    out
}

fn write_leaf(value: &Value, out: &mut String) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Str(s) => out.push_str(s),
        // Written by `Renderer::write_array`.
        Value::Array(_) => {}
        Value::Object(obj) => {
            let obj = obj.borrow();
            match obj.class {
                ObjectClass::Error { .. } => {
                    let name = obj.get("name").map(|v| shallow_text(&v)).unwrap_or_default();
                    let message = obj.get("message").map(|v| shallow_text(&v)).unwrap_or_default();
                    out.push_str(&error_string(&name, &message));
                }
                _ => out.push_str("[object Object]"),
            }
        }
        Value::Function(func) => match func.as_ref() {
            Function::Closure(c) => out.push_str(&c.node.source),
            Function::Native(n) => {
                out.push_str("function ");
                out.push_str(n.name);
                out.push_str("() { [native code] }");
            }
        },
    }
}

/// Error name and message fields rendered without recursing into objects.
fn shallow_text(value: &Value) -> String {
    match value {
        Value::Object(_) => "[object Object]".to_string(),
        other => to_text(other),
    }
}

/// `Error.prototype.toString`: omits empty parts and the separator.
pub fn error_string(name: &str, message: &str) -> String {
    match (name.is_empty(), message.is_empty()) {
        (_, true) => name.to_string(),
        (true, false) => message.to_string(),
        (false, false) => format!("{}: {}", name, message),
    }
}

/// Join the arguments of one output call with single spaces.
pub fn join_args(args: &[Value]) -> String {
    let mut out = String::new();
    let _ = write_args(&mut Unmetered { steps: 0 }, args, &mut out);
    out
}

/// Full captured line for one output call, including the channel prefix.
pub fn format_line(channel: Channel, args: &[Value]) -> String {
    let mut out = channel.prefix().to_string();
    let _ = write_args(&mut Unmetered { steps: 0 }, args, &mut out);
    out
}

pub(crate) fn write_args<M: Meter>(meter: &mut M, args: &[Value], out: &mut String) -> Result<(), M::Error> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        Renderer::new(meter).write(arg, out)?;
    }
    Ok(())
}

/// Message reported for an uncaught thrown value: an error's `message`, or
/// the normalized text of anything else.
pub fn thrown_message(value: &Value) -> String {
    if let Value::Object(obj) = value {
        let obj = obj.borrow();
        if matches!(obj.class, ObjectClass::Error { .. }) {
            return obj.get("message").map(|m| shallow_text(&m)).unwrap_or_default();
        }
    }
    to_text(value)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
