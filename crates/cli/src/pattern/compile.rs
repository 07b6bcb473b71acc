// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String-set compiler entry points.

use std::fmt;

use super::synth::synthesize;
use super::trie::Trie;

/// Error during set compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// No strings were supplied.
    #[error("cannot compile an empty string set")]
    EmptySet,

    /// The set contains `""` and the options reject it.
    #[error("string set contains the empty string (allow it to make the whole pattern optional)")]
    EmptyMember,
}

/// How a `""` member is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyMember {
    /// Fail with [`CompileError::EmptyMember`].
    #[default]
    Reject,
    /// Mark the root terminal so the top-level group becomes optional.
    Optional,
}

impl EmptyMember {
    /// Policy for an `allow_empty` switch from flags or config.
    pub fn from_allow(allow_empty: bool) -> Self {
        if allow_empty {
            EmptyMember::Optional
        } else {
            EmptyMember::Reject
        }
    }
}

/// Options for [`compile_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Parenthesize a top-level single chain.
    pub force_wrap: bool,
    /// Treatment of the empty string.
    pub empty_member: EmptyMember,
}

impl CompileOptions {
    pub fn wrapped() -> Self {
        Self {
            force_wrap: true,
            ..Self::default()
        }
    }

    pub fn with_force_wrap(mut self, force_wrap: bool) -> Self {
        self.force_wrap = force_wrap;
        self
    }

    pub fn with_empty_member(mut self, empty_member: EmptyMember) -> Self {
        self.empty_member = empty_member;
        self
    }
}

/// A compiled pattern fragment.
///
/// The fragment is unanchored; callers embed it inside a larger expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    text: String,
    matches_empty: bool,
    members: usize,
}

impl CompiledPattern {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether the fragment also matches the empty string.
    pub fn matches_empty(&self) -> bool {
        self.matches_empty
    }

    /// Number of distinct members the fragment was compiled from.
    pub fn member_count(&self) -> usize {
        self.members
    }

    /// The fragment anchored for full-string matching: `^(?:...)$`.
    pub fn anchored(&self) -> String {
        anchor(&self.text)
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CompiledPattern {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Anchor a fragment for full-string matching.
pub fn anchor(fragment: &str) -> String {
    format!("^(?:{fragment})$")
}

/// Compile `strings` into a fragment, rejecting an empty set or `""` member.
pub fn compile<I, S>(strings: I, force_wrap: bool) -> Result<String, CompileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = CompileOptions::default().with_force_wrap(force_wrap);
    compile_with(strings, &options).map(CompiledPattern::into_string)
}

/// Compile `strings` with explicit options.
pub fn compile_with<I, S>(
    strings: I,
    options: &CompileOptions,
) -> Result<CompiledPattern, CompileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new();
    for s in strings {
        let s = s.as_ref();
        if s.is_empty() && options.empty_member == EmptyMember::Reject {
            return Err(CompileError::EmptyMember);
        }
        trie.insert(s);
    }

    if trie.is_empty() {
        return Err(CompileError::EmptySet);
    }

    let text = synthesize(trie.root(), options.force_wrap);
    tracing::debug!(
        members = trie.len(),
        nodes = trie.node_count(),
        len = text.len(),
        "compiled string set"
    );

    Ok(CompiledPattern {
        text,
        matches_empty: trie.root().is_terminal(),
        members: trie.len(),
    })
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
