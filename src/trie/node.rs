use super::{
    iter::{Fuzzy, Leaves},
    Error, Key, Leaf, Node, Result, Stats, Trie,
};
use std::any::type_name;
use std::collections::HashMap;
use tracing::{debug, trace};

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            value: None,
            children: HashMap::new(),
        }
    }
}

impl<V> Node<V> {
    /// Follows `key` from this node, stopping at the first missing edge.
    fn walk(&self, key: impl IntoIterator<Item = char>) -> Option<&Self> {
        let mut current_node = self;
        for ch in key {
            current_node = current_node.children.get(&ch)?;
        }
        Some(current_node)
    }

    fn walk_mut(&mut self, key: impl IntoIterator<Item = char>) -> Option<&mut Self> {
        let mut current_node = self;
        for ch in key {
            current_node = current_node.children.get_mut(&ch)?;
        }
        Some(current_node)
    }

    /// A node without a value and without children must not stay in the tree.
    pub(super) fn is_dead(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    pub(super) fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Clears the value at the end of `key` and prunes every node on the way
    /// back up that was left dead.
    fn delete(&mut self, key: &[char]) -> Option<V> {
        match key.split_first() {
            None => self.value.take(),
            Some((ch, rest)) => {
                let child = self.children.get_mut(ch)?;
                let removed = child.delete(rest);
                if child.is_dead() {
                    trace!(edge = %ch, "pruning dead branch");
                    self.children.remove(ch);
                }
                removed
            }
        }
    }
}

impl<V> core::fmt::Debug for Node<V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("children", &self.children)
            .finish()
    }
}

impl<V> core::fmt::Debug for Trie<V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie<V>>())
            .field("size", &self.size)
            .field("root", &self.root)
            .finish()
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            root: None,
            size: 0,
        }
    }
}

impl<V> Trie<V> {
    #[must_use]
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of keys put into the trie, less those deleted.
    ///
    /// Overwriting a key counts it again.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Height of the node tree, the length of the longest path from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.as_deref().map_or(0, Node::depth)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    pub(super) fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn put<K: Key + ?Sized>(&mut self, key: &K, value: V) -> Option<V> {
        let mut current_node: &mut Node<V> = self.root.get_or_insert_with(Box::default);
        let mut created = 0usize;
        for ch in key.code_points() {
            current_node = current_node.children.entry(ch).or_insert_with(|| {
                created += 1;
                Node::default()
            });
        }
        trace!(created, "put key");
        self.size += 1;
        current_node.value.replace(value)
    }

    pub fn get<K: Key + ?Sized>(&self, key: &K) -> Result<&V> {
        self.root
            .as_deref()
            .and_then(|root| root.walk(key.code_points()))
            .and_then(|node| node.value.as_ref())
            .ok_or_else(|| Error::KeyNotFound(key.code_points().collect()))
    }

    pub fn get_mut<K: Key + ?Sized>(&mut self, key: &K) -> Result<&mut V> {
        self.root
            .as_deref_mut()
            .and_then(|root| root.walk_mut(key.code_points()))
            .and_then(|node| node.value.as_mut())
            .ok_or_else(|| Error::KeyNotFound(key.code_points().collect()))
    }

    #[must_use]
    pub fn contains<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Removes `key`, pruning any branch left without values.
    ///
    /// Deleting a key that is not stored changes nothing.
    pub fn delete<K: Key + ?Sized>(&mut self, key: &K) -> Option<V> {
        let key: Vec<char> = key.code_points().collect();
        let root = self.root.as_deref_mut()?;
        let removed = root.delete(&key);
        if root.is_dead() {
            debug!("trie emptied, dropping root");
            self.root = None;
        }
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// All stored keys, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// All stored keys starting with `prefix`, in no particular order.
    #[must_use]
    pub fn keys_with_prefix<K: Key + ?Sized>(&self, prefix: &K) -> Vec<String> {
        self.iter_prefix(prefix).map(Leaf::into_key).collect()
    }

    /// The longest leading part of `query` that follows existing edges.
    ///
    /// The walk is structural, so the result need not be a stored key itself
    /// when a longer key runs through it.
    #[must_use]
    pub fn longest_prefix<K: Key + ?Sized>(&self, query: &K) -> String {
        let mut prefix = String::new();
        let Some(mut current_node) = self.root.as_deref() else {
            return prefix;
        };
        for ch in query.code_points() {
            match current_node.children.get(&ch) {
                Some(next) => {
                    current_node = next;
                    prefix.push(ch);
                }
                None => break,
            }
        }
        prefix
    }

    /// Keys of exactly the pattern's length, where [`WILDCARD`](super::WILDCARD)
    /// stands for any one character.
    #[must_use]
    pub fn keys_with_fuzzy_match<K: Key + ?Sized>(&self, pattern: &K) -> Vec<String> {
        self.iter_fuzzy(pattern).map(Leaf::into_key).collect()
    }

    pub fn iter(&self) -> Leaves<'_, V> {
        self.iter_prefix("")
    }

    pub fn iter_prefix<K: Key + ?Sized>(&self, prefix: &K) -> Leaves<'_, V> {
        let prefix: Vec<char> = prefix.code_points().collect();
        match self.root.as_deref().and_then(|root| root.walk(prefix.iter().copied())) {
            Some(start) => Leaves::new(start, prefix),
            None => Leaves::empty(),
        }
    }

    pub fn iter_fuzzy<K: Key + ?Sized>(&self, pattern: &K) -> Fuzzy<'_, V> {
        Fuzzy::new(self.root.as_deref(), pattern.code_points().collect())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|leaf| leaf.value())
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::from(self)
    }
}
