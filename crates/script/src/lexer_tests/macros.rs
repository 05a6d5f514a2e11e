// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for script lexer tests.

/// Generate tokenization success tests.
///
/// ```ignore
/// lex_tests! {
///     single_ident: "foo" => [TokenKind::Ident("foo".into())],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<TokenKind> = vec![$($token),*];
                let actual: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate tokenization error tests.
///
/// ```ignore
/// lex_error_tests! {
///     unterminated: "'abc" => LexerError::UnterminatedString { .. },
/// }
/// ```
macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Generate span accuracy tests.
///
/// ```ignore
/// span_tests! {
///     two_idents: "a b" => [(0, 1), (2, 3)],
/// }
/// ```
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                let actual: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
