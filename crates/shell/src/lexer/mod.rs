// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word lexer for recorded command lines.
//!
//! Implements POSIX quote removal and field splitting only: no variables,
//! substitutions, globs or operators. `$`, `;`, `|` and friends are
//! ordinary word characters here.

mod quotes;

use crate::{LexerError, Span};

/// One word after quote removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub value: String,
    pub span: Span,
}

/// Lexer that splits a command line into words.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Try to consume a line continuation (backslash followed by newline).
    ///
    /// Returns true if a line continuation was consumed.
    fn consume_line_continuation(&mut self) -> bool {
        let Some('\\') = self.peek_char() else {
            return false;
        };

        let mut lookahead = self.chars.clone();
        lookahead.next(); // skip backslash

        match lookahead.peek().map(|(_, c)| *c) {
            Some('\n') => {
                self.chars.next(); // consume backslash
                self.chars.next(); // consume \n
                true
            }
            Some('\r') => {
                lookahead.next();
                if lookahead.peek().map(|(_, c)| *c) == Some('\n') {
                    self.chars.next(); // consume backslash
                    self.chars.next(); // consume \r
                    self.chars.next(); // consume \n
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Split the entire input into words.
    pub fn tokenize(input: &str) -> Result<Vec<Word>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut words = Vec::new();
        while let Some(word) = lexer.next_word()? {
            words.push(word);
        }
        Ok(words)
    }

    /// Skip blanks, newlines and line continuations between words.
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.chars.next();
                }
                Some('\\') if self.consume_line_continuation() => {}
                _ => break,
            }
        }
    }

    /// Lex the next word, or None at end of input.
    ///
    /// Adjacent unquoted, single-quoted and double-quoted parts join into
    /// one word, so `-D'A B'"C"` is the single word `-DA BC`.
    fn next_word(&mut self) -> Result<Option<Word>, LexerError> {
        self.skip_whitespace();

        let Some(&(start, _)) = self.chars.peek() else {
            return Ok(None);
        };

        let mut value = String::new();
        let mut end = start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => break,
                '\'' => end = self.lex_single_quote(pos, &mut value)?,
                '"' => end = self.lex_double_quote(pos, &mut value)?,
                '\\' => {
                    if self.consume_line_continuation() {
                        continue;
                    }
                    self.chars.next();
                    match self.chars.next() {
                        Some((next_pos, next_ch)) => {
                            value.push(next_ch);
                            end = next_pos + next_ch.len_utf8();
                        }
                        // Trailing backslash at EOF is literal
                        None => {
                            value.push('\\');
                            end = pos + 1;
                        }
                    }
                }
                _ => {
                    value.push(ch);
                    end = pos + ch.len_utf8();
                    self.chars.next();
                }
            }
        }

        Ok(Some(Word {
            value,
            span: Span::new(start, end),
        }))
    }
}

/// Split a command line into argv.
pub fn split(input: &str) -> Result<Vec<String>, LexerError> {
    Ok(Lexer::tokenize(input)?
        .into_iter()
        .map(|word| word.value)
        .collect())
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
