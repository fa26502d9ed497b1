// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the word lexer.

use crate::Span;
use thiserror::Error;

/// Errors that can occur while splitting a command line into words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Unterminated single quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote {
        /// Source location span for the error.
        span: Span,
    },

    /// Unterminated double quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote {
        /// Source location span for the error.
        span: Span,
    },
}

impl LexerError {
    /// Returns the source span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedSingleQuote { span }
            | LexerError::UnterminatedDoubleQuote { span } => *span,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
