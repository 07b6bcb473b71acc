// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for compiled sets.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::pattern::CompiledPattern;

/// A compiled set ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledSet {
    /// Set name (None for ad-hoc `compile` input).
    #[serde(skip)]
    pub name: Option<String>,
    /// Pattern fragment.
    pub pattern: String,
    /// Whether the fragment also matches the empty string.
    pub matches_empty: bool,
    /// Number of distinct members.
    pub members: usize,
}

impl CompiledSet {
    pub fn new(name: Option<String>, compiled: CompiledPattern) -> Self {
        Self {
            name,
            matches_empty: compiled.matches_empty(),
            members: compiled.member_count(),
            pattern: compiled.into_string(),
        }
    }
}
