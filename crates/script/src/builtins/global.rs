// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global functions and the conversion constructors.

use crate::value::NativeFn;

use super::{array, number, object, string};

pub(super) const FUNCTIONS: &[(&str, usize, NativeFn)] = &[
    ("Number", 1, number::construct),
    ("String", 1, string::construct),
    ("Boolean", 1, object::boolean),
    ("Array", 1, array::construct),
    ("Object", 1, object::construct),
    ("parseInt", 2, number::parse_int),
    ("parseFloat", 1, number::parse_float),
    ("isNaN", 1, number::is_nan),
    ("isFinite", 1, number::is_finite),
];
