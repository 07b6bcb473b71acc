// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use super::CompiledSet;

/// Output of the build command: sets keyed by name.
#[derive(Debug, Serialize)]
struct BuildOutput<'a> {
    sets: BTreeMap<&'a str, &'a CompiledSet>,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a single set as an object.
    pub fn write_pattern(&mut self, set: &CompiledSet) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(set).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write named sets as `{ "sets": { name: {...} } }`.
    pub fn write_sets(&mut self, sets: &[CompiledSet]) -> std::io::Result<()> {
        let output = BuildOutput {
            sets: sets
                .iter()
                .map(|set| (set.name.as_deref().unwrap_or_default(), set))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
