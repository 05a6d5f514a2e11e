// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `String` and string methods.
//!
//! Strings are indexed by Unicode scalar value, so `length`, `charAt` and
//! `slice` agree with JavaScript for text without astral characters.

use std::rc::Rc;

use crate::exec::ops::{relative_index, to_integer, to_number};
use crate::exec::{ExecError, Interpreter};
use crate::normalize::{format_number, to_text};
use crate::value::Value;

use super::{arg, Method};

pub(crate) fn method(name: &str) -> Option<Method> {
    let method: Method = match name {
        "charAt" => ("charAt", char_at),
        "charCodeAt" => ("charCodeAt", char_code_at),
        "codePointAt" => ("codePointAt", char_code_at),
        "at" => ("at", at),
        "indexOf" => ("indexOf", index_of),
        "lastIndexOf" => ("lastIndexOf", last_index_of),
        "includes" => ("includes", includes),
        "startsWith" => ("startsWith", starts_with),
        "endsWith" => ("endsWith", ends_with),
        "slice" => ("slice", slice),
        "substring" => ("substring", substring),
        "toUpperCase" => ("toUpperCase", to_upper_case),
        "toLowerCase" => ("toLowerCase", to_lower_case),
        "trim" => ("trim", trim),
        "trimStart" => ("trimStart", trim_start),
        "trimEnd" => ("trimEnd", trim_end),
        "split" => ("split", split),
        "repeat" => ("repeat", repeat),
        "replace" => ("replace", replace),
        "replaceAll" => ("replaceAll", replace_all),
        "padStart" => ("padStart", pad_start),
        "padEnd" => ("padEnd", pad_end),
        "concat" => ("concat", concat),
        "localeCompare" => ("localeCompare", locale_compare),
        "toString" => ("toString", to_string),
        "valueOf" => ("valueOf", to_string),
        _ => return None,
    };
    Some(method)
}

pub(super) fn static_member(name: &str) -> Option<Method> {
    match name {
        "fromCharCode" => Some(("fromCharCode", from_char_code)),
        _ => None,
    }
}

/// `String(value)`
pub(super) fn construct(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    match args.first() {
        None => Ok(Value::str("")),
        Some(value) => {
            let text = interp.render(value)?;
            interp.new_string(text)
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn this_str(interp: &mut Interpreter, this: &Value, method: &str) -> Result<Rc<str>, ExecError> {
    match this {
        Value::Str(s) => Ok(s.clone()),
        Value::Undefined | Value::Null => {
            Err(interp.type_error(format!("String.prototype.{} called on null or undefined", method)))
        }
        other => Ok(interp.render(other)?.into()),
    }
}

fn chars_of(interp: &mut Interpreter, this: &Value, method: &str) -> Result<Vec<char>, ExecError> {
    Ok(this_str(interp, this, method)?.chars().collect())
}

fn text_arg(args: &[Value], i: usize) -> Vec<char> {
    to_text(&arg(args, i)).chars().collect()
}

/// Clamp a position argument into `0..=len`; `undefined` gives `default`.
fn position(value: &Value, len: usize, default: usize) -> usize {
    match value {
        Value::Undefined => default,
        other => to_integer(other).clamp(0.0, len as f64) as usize,
    }
}

fn starts_at(hay: &[char], needle: &[char], at: usize) -> bool {
    hay.get(at..at + needle.len()).is_some_and(|window| window == needle)
}

fn find_from(hay: &[char], needle: &[char], from: usize) -> Option<usize> {
    (from..=hay.len().saturating_sub(needle.len())).find(|&i| starts_at(hay, needle, i))
}

fn collect(chars: &[char]) -> Value {
    Value::str(chars.iter().collect::<String>())
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

// ---------------------------------------------------------------------------
// Character access
// ---------------------------------------------------------------------------

fn char_at(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let chars = chars_of(interp, this, "charAt")?;
    let i = to_integer(&arg(args, 0));
    Ok(match chars.get(i as usize).filter(|_| i >= 0.0) {
        Some(c) => Value::str(c.to_string()),
        None => Value::str(""),
    })
}

fn char_code_at(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let chars = chars_of(interp, this, "charCodeAt")?;
    let i = to_integer(&arg(args, 0));
    Ok(match chars.get(i as usize).filter(|_| i >= 0.0) {
        Some(c) => Value::Number(f64::from(u32::from(*c))),
        None => Value::Number(f64::NAN),
    })
}

fn at(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let chars = chars_of(interp, this, "at")?;
    let len = chars.len() as f64;
    let n = to_integer(&arg(args, 0));
    let index = if n < 0.0 { len + n } else { n };
    if index < 0.0 || index >= len {
        return Ok(Value::Undefined);
    }
    Ok(Value::str(chars[index as usize].to_string()))
}

fn from_char_code(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let text: String = args
        .iter()
        .map(|a| {
            let code = to_number(a);
            let code = if code.is_finite() { code.trunc().rem_euclid(65536.0) as u32 } else { 0 };
            char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    interp.new_string(text)
}

// ---------------------------------------------------------------------------
// Searching
// ---------------------------------------------------------------------------

fn index_of(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let hay = chars_of(interp, this, "indexOf")?;
    let needle = text_arg(args, 0);
    let from = position(&arg(args, 1), hay.len(), 0);
    Ok(Value::Number(find_from(&hay, &needle, from).map_or(-1.0, |i| i as f64)))
}

fn last_index_of(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let hay = chars_of(interp, this, "lastIndexOf")?;
    let needle = text_arg(args, 0);
    let from = match arg(args, 1) {
        v if to_number(&v).is_nan() => hay.len(),
        v => position(&v, hay.len(), hay.len()),
    };
    if needle.len() > hay.len() {
        return Ok(Value::Number(-1.0));
    }
    let last = from.min(hay.len() - needle.len());
    let found = (0..=last).rev().find(|&i| starts_at(&hay, &needle, i));
    Ok(Value::Number(found.map_or(-1.0, |i| i as f64)))
}

fn includes(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let hay = chars_of(interp, this, "includes")?;
    let needle = text_arg(args, 0);
    let from = position(&arg(args, 1), hay.len(), 0);
    Ok(Value::Bool(find_from(&hay, &needle, from).is_some()))
}

fn starts_with(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let hay = chars_of(interp, this, "startsWith")?;
    let needle = text_arg(args, 0);
    let at = position(&arg(args, 1), hay.len(), 0);
    Ok(Value::Bool(starts_at(&hay, &needle, at)))
}

fn ends_with(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let hay = chars_of(interp, this, "endsWith")?;
    let needle = text_arg(args, 0);
    let end = position(&arg(args, 1), hay.len(), hay.len());
    Ok(Value::Bool(end >= needle.len() && starts_at(&hay, &needle, end - needle.len())))
}

// ---------------------------------------------------------------------------
// Slicing and case
// ---------------------------------------------------------------------------

fn slice(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let chars = chars_of(interp, this, "slice")?;
    let start = relative_index(&arg(args, 0), chars.len(), 0);
    let end = relative_index(&arg(args, 1), chars.len(), chars.len());
    Ok(if start < end { collect(&chars[start..end]) } else { Value::str("") })
}

fn substring(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let chars = chars_of(interp, this, "substring")?;
    let start = position(&arg(args, 0), chars.len(), 0);
    let end = position(&arg(args, 1), chars.len(), chars.len());
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    Ok(collect(&chars[start..end]))
}

fn to_upper_case(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::str(this_str(interp, this, "toUpperCase")?.to_uppercase()))
}

fn to_lower_case(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::str(this_str(interp, this, "toLowerCase")?.to_lowercase()))
}

fn trim(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::str(this_str(interp, this, "trim")?.trim_matches(is_js_whitespace)))
}

fn trim_start(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::str(this_str(interp, this, "trimStart")?.trim_start_matches(is_js_whitespace)))
}

fn trim_end(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::str(this_str(interp, this, "trimEnd")?.trim_end_matches(is_js_whitespace)))
}

fn to_string(interp: &mut Interpreter, this: &Value, _args: &[Value]) -> Result<Value, ExecError> {
    Ok(Value::Str(this_str(interp, this, "toString")?))
}

fn locale_compare(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let s = this_str(interp, this, "localeCompare")?;
    let other = to_text(&arg(args, 0));
    Ok(Value::Number(match s.as_ref().cmp(other.as_str()) {
        std::cmp::Ordering::Less => -1.0,
        std::cmp::Ordering::Equal => 0.0,
        std::cmp::Ordering::Greater => 1.0,
    }))
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

fn split(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let s = this_str(interp, this, "split")?;
    let limit = match arg(args, 1) {
        Value::Undefined => usize::MAX,
        other => to_integer(&other).clamp(0.0, f64::from(u32::MAX)) as usize,
    };
    let parts: Vec<Value> = match arg(args, 0) {
        Value::Undefined => vec![Value::Str(s.clone())],
        separator => {
            let separator = to_text(&separator);
            if separator.is_empty() {
                s.chars().take(limit).map(|c| Value::str(c.to_string())).collect()
            } else {
                s.split(separator.as_str()).take(limit).map(Value::from).collect()
            }
        }
    };
    interp.check_array_len(parts.len())?;
    Ok(interp.new_array(parts.into_iter().take(limit).collect()))
}

fn repeat(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let s = this_str(interp, this, "repeat")?;
    let count = to_integer(&arg(args, 0));
    if count < 0.0 || count.is_infinite() {
        return Err(interp.throw("RangeError", format!("Invalid count value: {}", format_number(count))));
    }
    let count = count as usize;
    match s.len().checked_mul(count) {
        Some(len) => interp.check_string_len(len)?,
        None => return Err(interp.throw("RangeError", "Invalid string length")),
    }
    Ok(Value::str(s.repeat(count)))
}

fn concat(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let mut out = this_str(interp, this, "concat")?.to_string();
    for value in args {
        out.push_str(&interp.render(value)?);
        interp.check_string_len(out.len())?;
    }
    interp.new_string(out)
}

fn pad_start(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    pad(interp, this, args, "padStart", true)
}

fn pad_end(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    pad(interp, this, args, "padEnd", false)
}

fn pad(interp: &mut Interpreter, this: &Value, args: &[Value], method: &str, at_start: bool) -> Result<Value, ExecError> {
    let s = this_str(interp, this, method)?;
    let target = to_integer(&arg(args, 0)).max(0.0) as usize;
    let filler = match arg(args, 1) {
        Value::Undefined => " ".to_string(),
        other => to_text(&other),
    };
    let len = s.chars().count();
    if target <= len || filler.is_empty() {
        return Ok(Value::Str(s));
    }
    interp.check_string_len(target)?;
    let padding: String = filler.chars().cycle().take(target - len).collect();
    Ok(Value::str(if at_start { padding + s.as_ref() } else { format!("{}{}", s, padding) }))
}

fn replace(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let s = this_str(interp, this, "replace")?;
    let pattern = to_text(&arg(args, 0));
    let matches: Vec<usize> = s.find(pattern.as_str()).into_iter().collect();
    substitute(interp, &s, &pattern, &matches, &arg(args, 1))
}

fn replace_all(interp: &mut Interpreter, this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    let s = this_str(interp, this, "replaceAll")?;
    let pattern = to_text(&arg(args, 0));
    let matches: Vec<usize> = s.match_indices(pattern.as_str()).map(|(i, _)| i).collect();
    substitute(interp, &s, &pattern, &matches, &arg(args, 1))
}

/// Replace `pattern` at each byte offset in `matches`. The replacement is a
/// function called with `(match, offset, string)` or a template supporting
/// `$$`, `$&`, `` $` `` and `$'`.
fn substitute(
    interp: &mut Interpreter,
    s: &Rc<str>,
    pattern: &str,
    matches: &[usize],
    replacement: &Value,
) -> Result<Value, ExecError> {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for &at in matches {
        out.push_str(&s[last..at]);
        let end = at + pattern.len();
        let text = match replacement {
            Value::Function(_) => {
                let offset = s[..at].chars().count() as f64;
                let args = vec![Value::str(pattern), Value::Number(offset), Value::Str(s.clone())];
                to_text(&interp.call_value(replacement, Value::Undefined, args)?)
            }
            template => expand_template(&to_text(template), pattern, &s[..at], &s[end..]),
        };
        out.push_str(&text);
        interp.check_string_len(out.len())?;
        last = end;
    }
    out.push_str(&s[last..]);
    interp.new_string(out)
}

fn expand_template(template: &str, matched: &str, before: &str, after: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => out.push('$'),
            Some('&') => out.push_str(matched),
            Some('`') => out.push_str(before),
            Some('\'') => out.push_str(after),
            _ => {
                out.push('$');
                continue;
            }
        }
        chars.next();
    }
    out
}

#[cfg(test)]
#[path = "string_tests.rs"]
mod tests;
