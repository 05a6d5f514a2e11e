// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `console`

use crate::capture::Channel;
use crate::exec::{ExecError, Interpreter};
use crate::value::Value;

pub(super) fn install(interp: &mut Interpreter) -> Value {
    super::namespace(
        interp,
        &[("log", 0, info), ("info", 0, info), ("debug", 0, info), ("error", 0, error), ("warn", 0, warn)],
    )
}

fn info(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    interp.print(Channel::Info, args)?;
    Ok(Value::Undefined)
}

fn error(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    interp.print(Channel::Error, args)?;
    Ok(Value::Undefined)
}

fn warn(interp: &mut Interpreter, _this: &Value, args: &[Value]) -> Result<Value, ExecError> {
    interp.print(Channel::Warning, args)?;
    Ok(Value::Undefined)
}
