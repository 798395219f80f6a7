use super::{Node, Trie};

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// Number of nodes holding a value
    pub keys: usize,
    /// Number of nodes, the root included
    pub nodes: usize,
    /// Height of the node tree
    pub depth: usize,
    /// Total number of characters over all stored keys
    pub chars: usize,
}

impl Stats {
    fn new<V>(trie: &Trie<V>) -> Self {
        let mut stats = Self::default();

        let mut stack: Vec<(usize, &Node<V>)> =
            trie.root().into_iter().map(|root| (0, root)).collect();
        while let Some((level, node)) = stack.pop() {
            stats.nodes += 1;
            stats.depth = stats.depth.max(level);
            if node.value.is_some() {
                stats.keys += 1;
                stats.chars += level;
            }
            stack.extend(node.children.values().map(|child| (level + 1, child)));
        }

        stats
    }
}

impl<'a, V> From<&'a Trie<V>> for Stats {
    fn from(trie: &'a Trie<V>) -> Self {
        Self::new(trie)
    }
}
