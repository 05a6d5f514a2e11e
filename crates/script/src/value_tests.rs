// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    undefined = { Value::Undefined, false },
    null = { Value::Null, false },
    zero = { Value::Number(0.0), false },
    negative_zero = { Value::Number(-0.0), false },
    nan = { Value::Number(f64::NAN), false },
    empty_string = { Value::str(""), false },
    false_bool = { Value::Bool(false), false },
    one = { Value::Number(1.0), true },
    space = { Value::str(" "), true },
    empty_array = { Value::array(Vec::new()), true },
    empty_object = { Value::object(Object::default()), true },
)]
fn truthiness(value: Value, expected: bool) {
    assert_eq!(value.truthy(), expected);
}

#[parameterized(
    undefined = { Value::Undefined, "undefined" },
    null = { Value::Null, "object" },
    array = { Value::array(Vec::new()), "object" },
    number = { Value::Number(1.5), "number" },
    string = { Value::str("a"), "string" },
    boolean = { Value::Bool(true), "boolean" },
)]
fn type_of(value: Value, expected: &str) {
    assert_eq!(value.type_of(), expected);
}

#[parameterized(
    zero = { "0", Some(0) },
    plain = { "42", Some(42) },
    leading_zero = { "042", None },
    negative = { "-1", None },
    fraction = { "1.5", None },
    empty = { "", None },
    word = { "length", None },
    max_is_not_an_index = { "4294967295", None },
)]
fn canonical_array_index(key: &str, expected: Option<u32>) {
    assert_eq!(array_index(key), expected);
}

#[test]
fn object_keys_put_integers_first() {
    let mut props = IndexMap::new();
    for key in ["b", "10", "a", "2"] {
        props.insert(Rc::from(key), Value::Null);
    }
    let keys: Vec<String> = Object::plain(props).keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2", "10", "b", "a"]);
}

#[test]
fn error_object_exposes_name_and_message() {
    let err = Object::error("TypeError", "bad");
    assert!(matches!(err.get("name"), Some(Value::Str(s)) if &*s == "TypeError"));
    assert!(matches!(err.get("message"), Some(Value::Str(s)) if &*s == "bad"));
    assert!(err.keys().is_empty());
    assert!(Value::object(err).is_error());
}

#[test]
fn own_message_overrides_class_message() {
    let mut err = Object::error("Error", "original");
    err.props.insert("message".into(), Value::str("changed"));
    assert!(matches!(err.get("message"), Some(Value::Str(s)) if &*s == "changed"));
}

#[test]
fn ref_id_is_identity() {
    let a = Value::array(vec![]);
    let b = a.clone();
    let c = Value::array(vec![]);
    assert_eq!(a.ref_id(), b.ref_id());
    assert_ne!(a.ref_id(), c.ref_id());
    assert_eq!(Value::Number(1.0).ref_id(), None);
}

#[test]
fn debug_is_shallow_for_cycles() {
    let a = Value::array(vec![]);
    if let Value::Array(items) = &a {
        items.borrow_mut().push(a.clone());
    }
    assert_eq!(format!("{:?}", a), "Array(len=1)");
    if let Value::Array(items) = &a {
        items.borrow_mut().clear();
    }
}
