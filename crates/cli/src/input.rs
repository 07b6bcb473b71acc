// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading string sets from files and stdin.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Parse one member per line.
///
/// Empty lines are skipped and a trailing `\r` is stripped. Any other
/// whitespace, including a line of only spaces, is part of the literal.
pub fn parse_lines<R: Read>(reader: R, path: &Path) -> Result<Vec<String>> {
    let mut members = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            members.push(line.to_string());
        }
    }
    Ok(members)
}

/// Read members from `path`, or from stdin when `path` is `-`.
pub fn read_members(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return parse_lines(std::io::stdin().lock(), path);
    }

    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(file, path)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
