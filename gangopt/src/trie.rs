//! Prefix trie over long option names.
//!
//! Names are restricted to `[a-z][a-z0-9]*`, so every node has a fixed
//! fan-out of 36. A node's `count` is the number of registered names that
//! continue past it; a lookup that stops on a non-terminal node resolves only
//! when exactly one name does.

use crate::error::{Error, Result};

const FANOUT: usize = 36;

fn edge(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        '0'..='9' => Some(c as usize - '0' as usize + 26),
        _ => None,
    }
}

/// Long names must start with a lowercase letter and contain only lowercase
/// letters and digits.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[derive(Debug)]
struct Node {
    children: [Option<Box<Node>>; FANOUT],
    count: usize,
    value: usize,
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Node {
            children: std::array::from_fn(|_| None),
            count: 0,
            value: 0,
            terminal: false,
        }
    }
}

#[derive(Debug)]
pub(crate) struct LongTrie {
    root: Node,
}

impl LongTrie {
    pub(crate) fn new() -> Self {
        LongTrie { root: Node::new() }
    }

    fn find(&self, name: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in name.chars() {
            node = node.children[edge(c)?].as_deref()?;
        }
        Some(node)
    }

    /// Insert `name` -> `idx`. Returns `Ok(false)` if `name` is already registered.
    pub(crate) fn set(&mut self, name: &str, idx: usize) -> Result<bool> {
        if !is_valid_name(name) {
            return Err(Error::InvalidOption(name.to_string()));
        }
        // a duplicate must not bump the counts along its path
        if self.find(name).is_some_and(|n| n.terminal) {
            return Ok(false);
        }

        let mut node = &mut self.root;
        for c in name.chars() {
            node.count += 1;
            if !node.terminal {
                node.value = idx;
            }
            let Some(e) = edge(c) else {
                return Err(Error::InvalidOption(name.to_string()));
            };
            node = &mut **node.children[e].get_or_insert_with(|| Box::new(Node::new()));
        }

        node.value = idx;
        node.terminal = true;
        Ok(true)
    }

    /// Exact name, or a prefix shared by exactly one registered name.
    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }

        let node = self.find(name)?;
        if node.terminal || node.count == 1 {
            Some(node.value)
        } else {
            None
        }
    }
}

impl Default for LongTrie {
    fn default() -> Self {
        Self::new()
    }
}
