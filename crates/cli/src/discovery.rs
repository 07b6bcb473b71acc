// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for routeset.toml.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "routeset.toml";

/// Find routeset.toml starting from `start_dir` and walking up to the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("found config at {}", candidate.display());
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Resolve the config path from an explicit flag or discovery.
///
/// Priority:
/// 1. `-C`/`--config` (clap also reads ROUTESET_CONFIG)
/// 2. Discovery from `cwd` up to the git root
///
/// An explicit path that does not exist is an error; failed discovery is not.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };

    if path.exists() {
        Ok(Some(path.to_path_buf()))
    } else {
        Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
