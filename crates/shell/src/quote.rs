// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting argv tokens into a single replayable command string.

use std::borrow::Cow;

use crate::split;

/// Quote one token so [`split`] reads it back as exactly one word.
///
/// Tokens that already lex to themselves are returned unchanged. Anything
/// else (whitespace, quotes, backslashes, the empty string) is wrapped in
/// double quotes with `\`, `"`, `$` and `` ` `` backslash-escaped.
pub fn quote(token: &str) -> Cow<'_, str> {
    if is_plain_word(token) {
        return Cow::Borrowed(token);
    }

    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    for ch in token.chars() {
        if matches!(ch, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Join argv into one command string, quoting tokens as needed.
pub fn join<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = tokens
        .into_iter()
        .map(|token| quote(token.as_ref()).into_owned())
        .collect();
    quoted.join(" ")
}

/// A trailing backslash lexes to itself only at end of input; followed by
/// the joining space it would escape it.
fn is_plain_word(token: &str) -> bool {
    !token.ends_with('\\')
        && matches!(split(token).as_deref(), Ok([word]) if word.as_str() == token)
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
