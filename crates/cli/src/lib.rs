// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile finite sets of literal strings into prefix-factored pattern
//! fragments for route rules.
//!
//! ```
//! let fragment = routeset::compile(["1.0.0", "1.0.0-pre"], true).unwrap();
//! assert_eq!(fragment, r"(1\.0\.0(-pre)?)");
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod input;
pub mod output;
pub mod pattern;

pub use cli::{BuildArgs, Cli, Command, CompileArgs, OutputFormat};
pub use config::{Config, SetConfig};
pub use error::{Error, ExitCode, Result};
pub use pattern::{
    CompileError, CompileOptions, CompiledPattern, EmptyMember, Trie, TrieNode, compile,
    compile_with, verify,
};
