// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting tests: single quotes, double quotes, concatenation.

use crate::lexer::Lexer;

lex_tests! {
    single_quoted: "'hello world'" => ["hello world"],
    single_quote_preserves_backslash: r"'a\b'" => [r"a\b"],
    single_quote_preserves_double_quote: r#"'say "hi"'"# => [r#"say "hi""#],
    single_quote_preserves_dollar: "'$X'" => ["$X"],
    empty_single_quotes: "a '' b" => ["a", "", "b"],
    single_quote_with_newline: "'line1\nline2'" => ["line1\nline2"],
}

lex_tests! {
    double_quoted: r#""hello world""# => ["hello world"],
    double_quote_escaped_quote: r#""a\"b""# => [r#"a"b"#],
    double_quote_escaped_backslash: r#""a\\b""# => [r"a\b"],
    double_quote_escaped_dollar: r#""\$X""# => ["$X"],
    double_quote_escaped_backtick: r#""\`x\`""# => ["`x`"],
    double_quote_keeps_other_backslash: r#""a\nb""# => [r"a\nb"],
    double_quote_keeps_single_quote: r#""it's""# => ["it's"],
    double_quote_backslash_single_quote: r#""\'""# => [r"\'"],
    double_quote_line_continuation: "\"a\\\nb\"" => ["ab"],
    empty_double_quotes: r#""""# => [""],
}

lex_tests! {
    joined_macro_value: r#"-DNAME="Hello World""# => ["-DNAME=Hello World"],
    whole_token_quoted: r#""-DNAME=Hello World""# => ["-DNAME=Hello World"],
    mixed_parts: r#"-D'A B'"C"d"# => ["-DA BCd"],
    adjacent_quotes: r#"'a'"b"'c'"# => ["abc"],
}
