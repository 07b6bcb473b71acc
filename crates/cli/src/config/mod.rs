// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles routeset.toml parsing with version validation and unknown key warnings.

mod suggest;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::{CompileOptions, EmptyMember};
use suggest::{warn_unknown_key, warn_unknown_set_key};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    sets: BTreeMap<String, FlexibleSet>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct FlexibleSet {
    #[serde(default)]
    members: Vec<String>,

    #[serde(default)]
    wrap: bool,

    #[serde(default)]
    allow_empty: bool,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Named string sets, ordered by name.
    pub sets: BTreeMap<String, SetConfig>,
}

/// A named string set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetConfig {
    /// Literal strings to compile.
    pub members: Vec<String>,

    /// Parenthesize a single top-level chain (default: false).
    pub wrap: bool,

    /// Allow `""` as a member, making the pattern optional (default: false).
    pub allow_empty: bool,
}

impl SetConfig {
    /// Compiler options for this set.
    pub fn options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_force_wrap(self.wrap)
            .with_empty_member(EmptyMember::from_allow(self.allow_empty))
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "sets"];

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade routeset to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let sets = flexible
        .sets
        .into_iter()
        .map(|(name, set)| {
            for key in set.unknown.keys() {
                warn_unknown_set_key(path, &name, key);
            }
            let set = SetConfig {
                members: set.members,
                wrap: set.wrap,
                allow_empty: set.allow_empty,
            };
            (name, set)
        })
        .collect();

    Ok(Config { version, sets })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
