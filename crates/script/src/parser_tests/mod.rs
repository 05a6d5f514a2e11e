// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod helpers;
mod macros;

mod errors;
mod expressions;
mod functions;
mod nesting;
mod patterns;
mod properties;
mod statements;
