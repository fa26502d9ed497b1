// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error tests.

use crate::lexer::Lexer;
use crate::{LexerError, Span};

lex_error_tests! {
    unterminated_single: "'abc" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double: r#""abc"# => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_after_word: "gcc -D'X" => LexerError::UnterminatedSingleQuote { .. },
    escaped_closing_quote: r#""abc\""# => LexerError::UnterminatedDoubleQuote { .. },
}

#[test]
fn error_span_starts_at_opening_quote() {
    let err = Lexer::tokenize("gcc 'abc").unwrap_err();
    assert_eq!(err, LexerError::UnterminatedSingleQuote { span: Span::new(4, 8) });
}
