// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered rule table for compiler arguments.
//!
//! Each argument position is matched against [`RULES`] top to bottom; the
//! first matching rule decides how many tokens are consumed and what they
//! do to the [`Classification`]. Order is significant: earlier rules shadow
//! later ones (`-c` is an action before it could be anything else, `-include`
//! is a two-token option before `-I*` would see it).

use std::path::Path;

use cdb_core::ActionKind;

use crate::classify::{Classification, ClassifyError};
use crate::cursor::{Cursor, EndOfArgs};

/// Which tokens a rule fires on.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Matcher {
    /// Token equals one of these.
    Exact(&'static [&'static str]),
    /// Token starts with one of these.
    Prefix(&'static [&'static str]),
    /// Token starts with `prefix` but with none of `except`.
    PrefixExcept {
        prefix: &'static str,
        except: &'static [&'static str],
    },
    /// Token does not start with `-`.
    Positional,
}

impl Matcher {
    fn matches(&self, token: &str) -> bool {
        match self {
            Matcher::Exact(flags) => flags.contains(&token),
            Matcher::Prefix(prefixes) => prefixes.iter().any(|p| token.starts_with(p)),
            Matcher::PrefixExcept { prefix, except } => {
                token.starts_with(prefix) && !except.iter().any(|e| token.starts_with(e))
            }
            Matcher::Positional => !token.starts_with('-'),
        }
    }

    /// True when the token is a bare flag whose value is the next token.
    fn is_bare(&self, token: &str) -> bool {
        match self {
            Matcher::Exact(flags) | Matcher::Prefix(flags) => flags.contains(&token),
            Matcher::PrefixExcept { prefix, .. } => token == *prefix,
            Matcher::Positional => false,
        }
    }
}

/// How many tokens a rule consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    One,
    Two,
    Four,
    /// One when the value is attached (`-DX`), two when separate (`-D X`).
    JoinedOrSeparate,
}

/// What a rule does with the tokens it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    Action(ActionKind),
    Arch,
    FileList,
    File,
    Language,
    Output,
    CompileOption,
    /// Record a canonical spelling instead of the token.
    Alias(&'static str),
    Ignore,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    matcher: Matcher,
    arity: Arity,
    effect: Effect,
}

/// Why a rule could not finish.
#[derive(Debug)]
pub(crate) enum Halt {
    /// The flag needs more tokens than remain.
    EndOfArgs,
    Failed(ClassifyError),
}

impl From<EndOfArgs> for Halt {
    fn from(_: EndOfArgs) -> Self {
        Halt::EndOfArgs
    }
}

impl From<ClassifyError> for Halt {
    fn from(e: ClassifyError) -> Self {
        Halt::Failed(e)
    }
}

const fn rule(name: &'static str, matcher: Matcher, arity: Arity, effect: Effect) -> Rule {
    Rule { name, matcher, arity, effect }
}

pub(crate) static RULES: &[Rule] = &[
    // Actions
    rule("preprocess", Matcher::Exact(&["-E", "-M", "-MM"]), Arity::One, Effect::Action(ActionKind::Preprocess)),
    rule("compile", Matcher::Exact(&["-c"]), Arity::One, Effect::Action(ActionKind::Compile)),
    rule(
        "info",
        Matcher::Exact(&["-cc1", "--version", "-dumpversion", "-dumpmachine", "-###"]),
        Arity::One,
        Effect::Action(ActionKind::Info),
    ),
    rule("info-print", Matcher::Prefix(&["-print-"]), Arity::One, Effect::Action(ActionKind::Info)),
    // Inputs and outputs
    rule("arch", Matcher::Exact(&["-arch"]), Arity::Two, Effect::Arch),
    rule("filelist", Matcher::Exact(&["-filelist"]), Arity::Two, Effect::FileList),
    rule("file", Matcher::Positional, Arity::One, Effect::File),
    rule("language", Matcher::Exact(&["-x"]), Arity::Two, Effect::Language),
    rule("output", Matcher::Exact(&["-o"]), Arity::Two, Effect::Output),
    // Options kept for the compile bucket
    rule(
        "option",
        Matcher::Exact(&[
            "-v", "-nostdinc", "-nostdinc++", "-pthread", "-pedantic", "-ansi", "-w", "-m32", "-m64",
            "-O0", "-O1", "-O2", "-O3", "-Ofast", "-Og", "-Oz",
        ]),
        Arity::One,
        Effect::CompileOption,
    ),
    rule("option-prefixed", Matcher::Prefix(&["-W", "-std=", "-g"]), Arity::One, Effect::CompileOption),
    rule(
        "machine",
        Matcher::PrefixExcept {
            prefix: "-m",
            except: &["-mios-simulator-version-min", "-mmacosx-version-min", "-miphoneos-version-min"],
        },
        Arity::One,
        Effect::CompileOption,
    ),
    rule(
        "feature",
        Matcher::PrefixExcept {
            prefix: "-f",
            except: &["-fsyntax-only", "-fobjc-link-runtime", "-framework"],
        },
        Arity::One,
        Effect::CompileOption,
    ),
    rule("optimize-default", Matcher::Exact(&["-O"]), Arity::One, Effect::Alias("-O1")),
    rule("optimize-size", Matcher::Exact(&["-Os"]), Arity::One, Effect::Alias("-O2")),
    rule(
        "option-with-value",
        Matcher::Exact(&[
            "--sysroot", "-target", "-isysroot", "-include", "-idirafter", "-imacros", "-iprefix",
            "-isystem", "-iwithprefix", "-iwithprefixbefore",
        ]),
        Arity::Two,
        Effect::CompileOption,
    ),
    rule(
        "option-joined-or-separate",
        Matcher::Prefix(&[
            "-D", "-I", "-U", "-stdlib", "-iquote", "-mios-simulator-version-min",
            "-mmacosx-version-min", "-miphoneos-version-min", "-fobjc-link-runtime",
        ]),
        Arity::JoinedOrSeparate,
        Effect::CompileOption,
    ),
    // Ignored
    rule(
        "ignored-with-value",
        Matcher::Exact(&[
            "-framework", "-MT", "-MF", "-MQ", "-e", "-u", "-install_name", "-compatibility_version",
            "-current_version", "-exported_symbols_list", "-unexported_symbols_list", "-bundle_loader",
            "-seg_addr_table", "-rpath", "-Xlinker", "-Xassembler", "-Xpreprocessor", "-Xclang", "--param",
            "--serialize-diagnostics",
        ]),
        Arity::Two,
        Effect::Ignore,
    ),
    rule("ignored-prefixed", Matcher::Prefix(&["-l", "-L", "-save-temps"]), Arity::One, Effect::Ignore),
    rule(
        "ignored",
        Matcher::Exact(&[
            "-fsyntax-only", "-MD", "-MMD", "-MP", "-static", "-shared", "-dynamiclib", "-bundle", "-pipe",
        ]),
        Arity::One,
        Effect::Ignore,
    ),
    rule("sectorder", Matcher::Exact(&["-sectorder"]), Arity::Four, Effect::Ignore),
];

/// First rule matching `token`, if any.
pub fn find_rule(token: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matcher.matches(token))
}

impl Rule {
    /// Consume this rule's tokens starting at the cursor and apply its effect.
    ///
    /// On success the cursor rests on the first unconsumed argument.
    pub(crate) fn apply(
        &self,
        cursor: &mut Cursor<'_>,
        state: &mut Classification,
        directory: &Path,
    ) -> Result<(), Halt> {
        let Some(flag) = cursor.current() else {
            return Ok(());
        };

        let mut tokens = vec![flag];
        let extra = match self.arity {
            Arity::One => 0,
            Arity::Two => 1,
            Arity::Four => 3,
            Arity::JoinedOrSeparate if self.matcher.is_bare(flag) => 1,
            Arity::JoinedOrSeparate => 0,
        };
        for _ in 0..extra {
            tokens.push(cursor.advance()?);
        }
        cursor.skip();

        match self.effect {
            Effect::Action(kind) => state.action.escalate(kind),
            Effect::Arch => state.archs_seen.push(tokens[1].to_string()),
            Effect::FileList => state.files = read_file_list(directory, tokens[1])?,
            Effect::File => state.files.push(flag.to_string()),
            Effect::Language => state.language = Some(tokens[1].to_string()),
            Effect::Output => state.output = Some(tokens[1].to_string()),
            // A separate value is recorded joined so `-D X` and `-DX` agree
            Effect::CompileOption if self.arity == Arity::JoinedOrSeparate => {
                state.compile_options.push(tokens.concat())
            }
            Effect::CompileOption => {
                state.compile_options.extend(tokens.iter().map(|t| t.to_string()))
            }
            Effect::Alias(canonical) => state.compile_options.push(canonical.to_string()),
            Effect::Ignore => {}
        }
        Ok(())
    }
}

/// Read a `-filelist` file: one path per line, blank lines skipped.
fn read_file_list(directory: &Path, path: &str) -> Result<Vec<String>, ClassifyError> {
    let path = directory.join(path);
    let content = std::fs::read_to_string(&path)
        .map_err(|source| ClassifyError::FileList { path: path.clone(), source })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
