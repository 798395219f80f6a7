//! Prefix trees keyed by unicode characters

#[cfg(feature = "cli")]
pub mod dataset;
pub mod trie;

pub use trie::{Error, Key, Leaf, Result, Stats, Trie, WILDCARD};
