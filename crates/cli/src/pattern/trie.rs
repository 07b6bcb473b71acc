// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix tree over the characters of a string set.
//!
//! A node is terminal when the path from the root to it spells a member of
//! the set. The root spells the empty string and is terminal only when the
//! empty string was inserted explicitly.

use std::collections::HashMap;
use std::fmt;

/// A single trie node: owned children keyed by character plus a terminal marker.
///
/// Equality, `Debug` and drop never recurse, so a trie built from a very long
/// member is as safe to handle as a shallow one.
#[derive(Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Whether the root-to-node path is a complete member.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child nodes in unspecified order.
    ///
    /// Callers that need stable output must sort the keys themselves.
    pub fn children(&self) -> &HashMap<char, TrieNode> {
        &self.children
    }

    /// Child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.terminal != b.terminal || a.children.len() != b.children.len() {
                return false;
            }
            for (c, child) in &a.children {
                match b.children.get(c) {
                    Some(other_child) => pending.push((child, other_child)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&char> = self.children.keys().collect();
        keys.sort_unstable();
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("children", &keys)
            .finish()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut detached: Vec<TrieNode> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Trie built from a string set.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    members: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from any sequence of strings.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for s in strings {
            trie.insert(s.as_ref());
        }
        trie
    }

    /// Insert a string. Returns false if it was already a member.
    pub fn insert(&mut self, s: &str) -> bool {
        let mut node = &mut self.root;
        for c in s.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.members += 1;
        true
    }

    /// Whether `s` is a member of the set.
    pub fn contains(&self, s: &str) -> bool {
        let mut node = &self.root;
        for c in s.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal
    }

    /// Root node (the empty prefix).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Total node count, including the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
