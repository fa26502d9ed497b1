// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: words, whitespace, escapes, line continuations.

use crate::lexer::{split, Lexer};

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
    newlines_only: "\n\r\n" => [],
}

lex_tests! {
    single_word: "gcc" => ["gcc"],
    simple_words: "gcc -c a.c" => ["gcc", "-c", "a.c"],
    multiple_spaces: "gcc   -c" => ["gcc", "-c"],
    tabs_and_newlines: "gcc\t-c\na.c" => ["gcc", "-c", "a.c"],
    leading_trailing_space: "  gcc -c  " => ["gcc", "-c"],
    paths: "cc -I/usr/include ../src/a.c" => ["cc", "-I/usr/include", "../src/a.c"],
}

lex_tests! {
    shell_operators_are_plain: "a;b c|d e&&f" => ["a;b", "c|d", "e&&f"],
    dollar_is_plain: "-DHOME=$HOME" => ["-DHOME=$HOME"],
    glob_is_plain: "*.c" => ["*.c"],
    unicode_word: "größe.c" => ["größe.c"],
}

lex_tests! {
    escaped_space: r"a\ b" => ["a b"],
    escaped_quote: r#"\"x\""# => [r#""x""#],
    escaped_backslash: r"a\\b" => [r"a\b"],
    escaped_letter: r"\n" => ["n"],
    trailing_backslash_literal: "a\\" => ["a\\"],
}

lex_tests! {
    line_continuation_between_words: "gcc \\\n-c" => ["gcc", "-c"],
    line_continuation_in_word: "gc\\\nc" => ["gcc"],
    crlf_continuation: "gcc \\\r\n-c" => ["gcc", "-c"],
}

span_tests! {
    single_word_span: "gcc" => [(0, 3)],
    simple_words_span: "gcc -c a.c" => [(0, 3), (4, 6), (7, 10)],
    quoted_word_span: "cc 'a b'" => [(0, 2), (3, 8)],
}

#[test]
fn split_returns_values() {
    assert_eq!(split("gcc -c 'a b.c'").unwrap(), vec!["gcc", "-c", "a b.c"]);
}
