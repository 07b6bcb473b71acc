// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Literal escaping for pattern fragments.
//!
//! Characters that can appear bare inside an alternation branch pass through;
//! every other ASCII character gets a backslash so it matches literally.

/// Whether `c` may appear unescaped in a fragment.
///
/// `<` and `>` stay bare because `\<` and `\>` are word-boundary assertions
/// in several dialects (including the `regex` crate). Non-ASCII characters
/// stay bare because no metacharacter is outside ASCII and escaping one is a
/// syntax error in the `regex` crate.
pub fn is_safe_char(c: char) -> bool {
    matches!(c, '_' | '-' | '/' | '<' | '>') || c.is_alphanumeric() || !c.is_ascii()
}

/// Escape a single character into `out`.
pub fn push_escaped(out: &mut String, c: char) {
    if !is_safe_char(c) {
        out.push('\\');
    }
    out.push(c);
}

/// Escape a single character.
pub fn escape_char(c: char) -> String {
    let mut out = String::with_capacity(2);
    push_escaped(&mut out, c);
    out
}

/// Escape every character of `s`.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
