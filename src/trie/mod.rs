//! A prefix tree keyed by unicode characters.
//!
//! Every node owns its children outright, one edge per character, so the
//! path from the root to a node spells the key stored there.

mod error;
pub mod iter;
mod keys;
mod node;
#[cfg(test)]
mod proptests;
mod refs;
mod stats;

use std::collections::HashMap;

pub use error::{Error, Result};
pub use iter::{Fuzzy, Leaves};
pub use keys::Key;
pub use refs::Leaf;
pub use stats::Stats;

/// Matches any single character in [`Trie::keys_with_fuzzy_match`] patterns.
pub const WILDCARD: char = '.';

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) children: HashMap<char, Node<V>>,
}

/// An associative container keyed by sequences of characters.
///
/// A key is stored when the node its characters lead to holds a value.
/// Absence is tracked by the `Option` around the value, so a stored `()` or
/// `None::<T>` is still a stored key.
///
/// Inserting a key that is already present replaces its value but still
/// counts towards [`Trie::len`], which is the number of successful `put`
/// calls minus the number of values removed by `delete`.
#[derive(Clone, PartialEq, Eq)]
pub struct Trie<V> {
    root: Option<Box<Node<V>>>,
    size: usize,
}
