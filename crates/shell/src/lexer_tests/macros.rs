// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for word lexer tests.

/// Generate splitting success tests.
///
/// # Usage
///
/// ```ignore
/// lex_tests! {
///     name: "input" => ["word1", "word2", ...],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($word:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<&str> = vec![$($word),*];
                let actual: Vec<_> = words.iter().map(|w| w.value.as_str()).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate splitting error tests.
///
/// # Usage
///
/// ```ignore
/// lex_error_tests! {
///     name: "input" => ErrorVariant { field: value },
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
/// # Usage
///
/// ```ignore
/// span_tests! {
///     name: "input" => [(start, end), ...],
/// }
/// ```
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                let actual: Vec<_> = words.iter().map(|w| (w.span.start, w.span.end)).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
