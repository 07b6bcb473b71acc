// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pattern::{CompileOptions, EmptyMember};

/// Compile sets of literal strings into prefix-factored route patterns
#[derive(Parser)]
#[command(name = "routeset")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "ROUTESET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile strings given on the command line or in a file
    Compile(CompileArgs),
    /// Compile named sets from routeset.toml
    Build(BuildArgs),
}

#[derive(clap::Args, Default)]
pub struct CompileArgs {
    /// Strings to include in the set
    #[arg(value_name = "STRING")]
    pub strings: Vec<String>,

    /// Read additional strings, one per line ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Parenthesize the pattern even when it is a single chain
    #[arg(long)]
    pub wrap: bool,

    /// Accept the empty string, making the whole pattern optional
    #[arg(long)]
    pub allow_empty: bool,

    /// Check the pattern against every input string
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

impl CompileArgs {
    /// Compiler options selected by flags.
    pub fn options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_force_wrap(self.wrap)
            .with_empty_member(EmptyMember::from_allow(self.allow_empty))
    }
}

#[derive(clap::Args, Default)]
pub struct BuildArgs {
    /// Sets to compile (default: all)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Check each pattern against its members
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
