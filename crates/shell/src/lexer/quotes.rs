// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted strings).

use super::Lexer;
use crate::{LexerError, Span};

impl Lexer<'_> {
    /// Append the content of a single-quoted part to `value`.
    ///
    /// Returns the byte offset just past the closing quote.
    pub(super) fn lex_single_quote(
        &mut self,
        start: usize,
        value: &mut String,
    ) -> Result<usize, LexerError> {
        self.chars.next();
        for (pos, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(pos + 1);
            }
            value.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote {
            span: Span::new(start, self.input.len()),
        })
    }

    /// Append the content of a double-quoted part to `value`.
    ///
    /// Backslash only escapes `\`, `"`, `$`, `` ` `` and newline; before any
    /// other character it stays literal.
    pub(super) fn lex_double_quote(
        &mut self,
        start: usize,
        value: &mut String,
    ) -> Result<usize, LexerError> {
        self.chars.next();
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(pos + 1),
                '\\' => match self.peek_char() {
                    Some(esc @ ('\\' | '"' | '$' | '`')) => {
                        self.chars.next();
                        value.push(esc);
                    }
                    Some('\n') => {
                        self.chars.next();
                    }
                    _ => value.push('\\'),
                },
                _ => value.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote {
            span: Span::new(start, self.input.len()),
        })
    }
}
