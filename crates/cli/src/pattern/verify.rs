// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-compile verification against the `regex` crate.

use regex::Regex;

use super::compile::anchor;
use crate::error::{Error, Result};

/// Check that the anchored form of `fragment` matches every member.
///
/// Returns [`Error::Verify`] listing the members that did not match.
pub fn verify<I, S>(fragment: &str, members: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let re = Regex::new(&anchor(fragment))
        .map_err(|e| Error::Internal(format!("generated pattern does not parse: {e}")))?;

    let unmatched: Vec<String> = members
        .into_iter()
        .filter(|m| !re.is_match(m.as_ref()))
        .map(|m| m.as_ref().to_string())
        .collect();

    if unmatched.is_empty() {
        tracing::trace!("verified pattern {}", fragment);
        Ok(())
    } else {
        Err(Error::Verify { unmatched })
    }
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
