// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for script parser tests, matching the pattern in
//! lexer_tests/macros.rs.

/// Generate parse success tests that verify the top-level statement count.
///
/// ```ignore
/// parse_tests! {
///     two_statements: "a; b" => statements: 2,
/// }
/// ```
macro_rules! parse_tests {
    ($($name:ident: $input:expr => statements: $count:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Parser::parse($input)
                    .expect(concat!("failed to parse: ", $input));
                assert_eq!(
                    result.body.len(), $count,
                    "input: {:?}, expected {} statements, got {}",
                    $input, $count, result.body.len()
                );
            }
        )*
    };
}

/// Generate parse error tests.
///
/// ```ignore
/// parse_error_tests! {
///     dangling_plus: "1 +" => ParseError::UnexpectedEof { .. },
/// }
/// ```
macro_rules! parse_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Parser::parse($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Generate unsupported-feature tests that check the reported feature.
///
/// ```ignore
/// unsupported_tests! {
///     class_decl: "class A {}" => "classes",
/// }
/// ```
macro_rules! unsupported_tests {
    ($($name:ident: $input:expr => $feature:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                match Parser::parse($input) {
                    Err(ParseError::Unsupported { feature, .. }) => assert_eq!(feature, $feature),
                    other => panic!("expected unsupported {:?} for {:?}, got {:?}", $feature, $input, other),
                }
            }
        )*
    };
}

pub(crate) use {parse_error_tests, parse_tests, unsupported_tests};
