// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern synthesis from a trie.
//!
//! Walks a [`TrieNode`] and emits a fragment matching exactly the suffixes
//! that lead from that node to a terminal node:
//!
//! - no children: the empty fragment
//! - one child `c`: `c` followed by the child's fragment, grouped as
//!   `(...)?` when this node is itself terminal, `(...)` when force-wrapped
//! - several children: `(a...|b...)`, with `?` appended when this node is
//!   terminal
//!
//! Children are visited in sorted character order so the same set always
//! produces byte-identical output.

use super::escape::push_escaped;
use super::trie::TrieNode;

/// Synthesize the fragment rooted at `node`.
///
/// `force_wrap` only affects this call: it parenthesizes a single unwrapped
/// chain so the caller can splice the fragment next to other pattern text.
pub fn synthesize(node: &TrieNode, force_wrap: bool) -> String {
    let mut out = String::new();
    write_node(&mut out, node, force_wrap);
    out
}

/// Children of `node` in ascending character order.
pub fn sorted_children(node: &TrieNode) -> Vec<(char, &TrieNode)> {
    let mut children: Vec<(char, &TrieNode)> =
        node.children().iter().map(|(c, child)| (*c, child)).collect();
    children.sort_unstable_by_key(|(c, _)| *c);
    children
}

/// Pending output while walking the trie.
enum Step<'a> {
    Node(&'a TrieNode, bool),
    Char(char),
    Text(&'static str),
}

/// Emit the fragment for `node` using an explicit work stack.
///
/// Closing text is pushed before a node's children so it pops after them.
/// A non-terminal single-child chain leaves nothing behind on the stack, so
/// long members cost heap, not call depth.
fn write_node(out: &mut String, node: &TrieNode, force_wrap: bool) {
    let mut stack = vec![Step::Node(node, force_wrap)];

    while let Some(step) = stack.pop() {
        let (node, force_wrap) = match step {
            Step::Node(node, force_wrap) => (node, force_wrap),
            Step::Char(c) => {
                push_escaped(out, c);
                continue;
            }
            Step::Text(text) => {
                out.push_str(text);
                continue;
            }
        };

        let children = sorted_children(node);
        match children.as_slice() {
            [] => {
                if force_wrap {
                    out.push_str("()");
                }
            }
            [(c, child)] => {
                if node.is_terminal() {
                    out.push('(');
                    stack.push(Step::Text(")?"));
                } else if force_wrap {
                    out.push('(');
                    stack.push(Step::Text(")"));
                }
                push_escaped(out, *c);
                stack.push(Step::Node(*child, false));
            }
            branches => {
                out.push('(');
                stack.push(Step::Text(if node.is_terminal() { ")?" } else { ")" }));
                for (i, (c, child)) in branches.iter().enumerate().rev() {
                    stack.push(Step::Node(*child, false));
                    stack.push(Step::Char(*c));
                    if i > 0 {
                        stack.push(Step::Text("|"));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
