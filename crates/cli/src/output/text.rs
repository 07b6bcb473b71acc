// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! A single set prints its bare pattern so it can be captured by shell
//! scripts. Named sets print one `<name>\t<pattern>` line each.

use std::io::Write;

use super::CompiledSet;

/// Text output formatter.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the bare pattern of a single set.
    pub fn write_pattern(&mut self, set: &CompiledSet) -> std::io::Result<()> {
        writeln!(self.writer, "{}", set.pattern)
    }

    /// Write named sets, one per line.
    pub fn write_sets(&mut self, sets: &[CompiledSet]) -> std::io::Result<()> {
        for set in sets {
            let name = set.name.as_deref().unwrap_or("-");
            writeln!(self.writer, "{}\t{}", name, set.pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
