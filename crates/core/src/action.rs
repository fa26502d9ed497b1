// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a compiler invocation ultimately does.

use std::fmt;

/// Action performed by one compiler driver invocation.
///
/// Variants are ordered by precedence: when several flags in one command
/// line imply different actions, the greatest one wins (`Info` beats
/// `Preprocess` beats `Compile` beats `Link`), regardless of flag order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    /// No classifying flag seen: the driver compiles (if needed) and links.
    #[default]
    Link,
    /// `-c`: compile to an object file, no linking.
    Compile,
    /// `-E`, `-M`, `-MM`: run the preprocessor only.
    Preprocess,
    /// Queries such as `-print-prog-name` or `-cc1` that build nothing.
    Info,
}

impl ActionKind {
    /// Raise `self` to `other` if `other` has higher precedence.
    pub fn escalate(&mut self, other: ActionKind) {
        *self = (*self).max(other);
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Link => "link",
            ActionKind::Compile => "compile",
            ActionKind::Preprocess => "preprocess",
            ActionKind::Info => "info",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
