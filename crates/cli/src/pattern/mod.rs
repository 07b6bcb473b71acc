// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String-set to pattern compilation.
//!
//! Pipeline: [`trie`] builds a prefix tree from the set, [`synth`] walks it
//! to emit a fragment using [`escape`] for literals, and [`compile`] ties the
//! two together. [`verify`] checks a fragment against its members.

pub mod compile;
pub mod escape;
pub mod synth;
pub mod trie;
pub mod verify;

pub use compile::{
    CompileError, CompileOptions, CompiledPattern, EmptyMember, anchor, compile, compile_with,
};
pub use escape::{escape_char, escape_str, is_safe_char};
pub use synth::synthesize;
pub use trie::{Trie, TrieNode};
pub use verify::verify;
