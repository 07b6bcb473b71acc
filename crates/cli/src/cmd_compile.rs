// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command implementation.

use std::io::Write;

use routeset::Error;
use routeset::cli::{CompileArgs, OutputFormat};
use routeset::error::ExitCode;
use routeset::input;
use routeset::output::CompiledSet;
use routeset::output::json::JsonFormatter;
use routeset::output::text::TextFormatter;
use routeset::pattern;

/// Run the compile command.
pub fn run(args: &CompileArgs) -> anyhow::Result<ExitCode> {
    let mut strings = args.strings.clone();
    if let Some(ref path) = args.from {
        strings.extend(input::read_members(path)?);
    }

    if strings.is_empty() {
        return Err(Error::Argument(
            "no strings given (pass them as arguments or use --from)".into(),
        )
        .into());
    }

    let compiled = pattern::compile_with(&strings, &args.options()).map_err(Error::from)?;

    if args.verify {
        pattern::verify(compiled.as_str(), &strings)?;
    }

    let set = CompiledSet::new(None, compiled);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => TextFormatter::new(&mut handle).write_pattern(&set)?,
        OutputFormat::Json => JsonFormatter::new(&mut handle).write_pattern(&set)?,
    }
    handle.flush()?;

    Ok(ExitCode::Success)
}
