// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build command implementation.

use std::io::Write;

use routeset::Error;
use routeset::cli::{BuildArgs, Cli, OutputFormat};
use routeset::config;
use routeset::discovery;
use routeset::error::ExitCode;
use routeset::output::CompiledSet;
use routeset::output::json::JsonFormatter;
use routeset::output::text::TextFormatter;
use routeset::pattern;

/// Run the build command.
pub fn run(cli: &Cli, args: &BuildArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?.ok_or_else(|| {
        Error::Config {
            message: format!("no {} found", discovery::CONFIG_FILE_NAME),
            path: None,
        }
    })?;
    tracing::debug!("loading config from {}", path.display());
    let config = config::load(&path)?;

    for name in &args.names {
        if !config.sets.contains_key(name) {
            return Err(Error::Argument(format!("unknown set `{}`", name)).into());
        }
    }

    let mut compiled_sets = Vec::new();
    for (name, set) in &config.sets {
        if !args.names.is_empty() && !args.names.contains(name) {
            continue;
        }
        tracing::trace!("compiling set {}", name);

        let compiled = pattern::compile_with(&set.members, &set.options())
            .map_err(|e| Error::Config {
                message: format!("set `{}`: {}", name, e),
                path: Some(path.clone()),
            })?;

        if args.verify {
            pattern::verify(compiled.as_str(), &set.members)?;
        }

        compiled_sets.push(CompiledSet::new(Some(name.clone()), compiled));
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => TextFormatter::new(&mut handle).write_sets(&compiled_sets)?,
        OutputFormat::Json => JsonFormatter::new(&mut handle).write_sets(&compiled_sets)?,
    }
    handle.flush()?;

    Ok(ExitCode::Success)
}
