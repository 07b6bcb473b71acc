// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key suggestions for config validation.

use std::path::Path;

/// Known keys inside a `[sets.<name>]` table.
const KNOWN_SET_KEYS: &[&str] = &["members", "wrap", "allow_empty"];

/// Suggest a set key for a typo.
pub fn suggest_set_key(unknown: &str) -> Option<&'static str> {
    if unknown.is_empty() {
        return None;
    }

    let suggestion = match unknown {
        "member" | "strings" | "values" | "items" => Some("members"),
        "force_wrap" | "wrapped" | "group" => Some("wrap"),
        "empty" | "optional" | "allow-empty" | "allow_empty_string" => Some("allow_empty"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Prefix matching (at least 3 chars to avoid false positives)
    if unknown.len() >= 3 {
        for &key in KNOWN_SET_KEYS {
            if key.starts_with(unknown) || unknown.starts_with(key) {
                return Some(key);
            }
        }
    }

    None
}

/// Warn about an unknown top-level key.
pub fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("unknown config key {}", key);
    eprintln!(
        "routeset: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Warn about an unknown key inside a set table, with a suggestion.
pub fn warn_unknown_set_key(path: &Path, set: &str, key: &str) {
    tracing::warn!("unknown key {} in set {}", key, set);
    match suggest_set_key(key) {
        Some(suggested) => eprintln!(
            "routeset: warning: {}: unknown key `{}` in set `{}`. Did you mean `{}`?",
            path.display(),
            key,
            set,
            suggested
        ),
        None => eprintln!(
            "routeset: warning: {}: unknown key `{}` in set `{}`\n  Valid keys: {}",
            path.display(),
            key,
            set,
            KNOWN_SET_KEYS.join(", ")
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
