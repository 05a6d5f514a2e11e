// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for object and array literals, property access, and spread.

use super::{error, output};

#[test]
fn property_access_forms() {
    let out = output("const o = { a: 1, 'b c': 2, [`k${1}`]: 3 }; const key = 'a'; console.log(o.a, o['b c'], o.k1, o[key], o.nope)");
    assert_eq!(out, "1 2 3 1 undefined");
}

#[test]
fn shorthand_and_methods() {
    let out = output("const x = 1; const o = { x, double() { return this.x * 2 } }; console.log(o.x, o.double())");
    assert_eq!(out, "1 2");
}

#[test]
fn object_spread_overrides_in_order() {
    let out = output("const base = { a: 1, b: 2 }; const o = { ...base, b: 3, c: 4 }; console.log(JSON.stringify(o))");
    assert_eq!(out, r#"{"a":1,"b":3,"c":4}"#);
}

#[test]
fn array_spread_copies() {
    let out = output("const a = [1, 2]; const b = [0, ...a, 3]; b.push(4); console.log(a, '|', b)");
    assert_eq!(out, "1,2 | 0,1,2,3,4");
}

#[test]
fn array_length_and_holes() {
    let out = output("const a = [1, , 3]; console.log(a.length, a[1], a)");
    assert_eq!(out, "3 undefined 1,,3");
}

#[test]
fn writing_past_end_grows_array() {
    assert_eq!(output("const a = []; a[2] = 'x'; console.log(a.length, a)"), "3 ,,x");
}

#[test]
fn setting_length_truncates() {
    assert_eq!(output("const a = [1, 2, 3]; a.length = 1; console.log(a)"), "1");
}

#[test]
fn arrays_are_shared_by_reference() {
    assert_eq!(output("const a = [1]; const b = a; b.push(2); console.log(a.length)"), "2");
}

#[test]
fn in_and_delete() {
    let out = output("const o = { a: 1 }; console.log('a' in o); delete o.a; console.log('a' in o, 0 in [5], 'length' in [])");
    assert_eq!(out, "true\nfalse true true");
}

#[test]
fn optional_chaining() {
    let out = output(
        r#"
        const user = { profile: null, greet() { return "hi" } };
        console.log(user.profile?.name, user.profile?.name.first, user.greet?.(), user.nope?.(), user?.["greet"]());
        "#,
    );
    assert_eq!(out, "undefined undefined hi undefined hi");
}

#[test]
fn object_keys_values_entries() {
    let out = output(
        r#"
        const o = { b: 2, a: 1 };
        console.log(Object.keys(o), Object.values(o), Object.entries(o).map(([k, v]) => k + "=" + v).join("&"));
        "#,
    );
    assert_eq!(out, "b,a 2,1 b=2&a=1");
}

#[test]
fn object_assign_and_from_entries() {
    let out = output(
        r#"
        const target = { a: 1 };
        Object.assign(target, { b: 2 }, null, { a: 3 });
        const copy = Object.fromEntries([["x", 1], ["y", 2]]);
        console.log(JSON.stringify(target), JSON.stringify(copy));
        "#,
    );
    assert_eq!(out, r#"{"a":3,"b":2} {"x":1,"y":2}"#);
}

#[test]
fn has_own_property() {
    assert_eq!(output("const o = { a: undefined }; console.log(o.hasOwnProperty('a'), o.hasOwnProperty('b'))"), "true false");
}

#[test]
fn reading_property_of_undefined() {
    assert_eq!(error("const o = {}; o.a.b"), "Cannot read properties of undefined (reading 'b')");
    assert_eq!(error("null[0]"), "Cannot read properties of null (reading '0')");
}

#[test]
fn writing_property_of_null() {
    assert_eq!(error("let n = null; n.x = 1"), "Cannot set properties of null (setting 'x')");
}

#[test]
fn cyclic_structures_are_allowed() {
    let out = output("const a = { }; a.self = a; const arr = [1]; arr.push(arr); console.log(a.self === a, arr.length, String(arr))");
    assert_eq!(out, "true 2 1,");
}
