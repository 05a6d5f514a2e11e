// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`]: `Display` impl mapping enum variants to string literals
//! - [`setters!`]: setter methods for builder-style config structs

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` to ignore fields.
///
/// ```ignore
/// crate::simple_display! {
///     ErrorKind {
///         Syntax => "syntax",
///         Runtime => "runtime",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate consuming setter methods inside an existing `impl` block.
/// Each setter takes the field's type and replaces the field.
///
/// ```ignore
/// impl EngineConfig {
///     kata_core::setters! {
///         set { max_call_depth: usize, timeout: Option<Duration> }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (set { $( $field:ident : $ty:ty ),* $(,)? }) => {
        $(
            pub fn $field(mut self, v: $ty) -> Self {
                self.$field = v;
                self
            }
        )*
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
