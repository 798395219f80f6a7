use super::{Key, Leaf, Node, Trie, WILDCARD};
use smallvec::SmallVec;

type KeyBuf = SmallVec<[char; 32]>;

/// A node waiting on the stack, with the key length to rewind to before
/// appending the edge that leads to it.
type Pending<'a, V> = (usize, Option<char>, &'a Node<V>);

/// Depth first walk over every stored entry below a node.
#[must_use]
pub struct Leaves<'a, V> {
    stack: Vec<Pending<'a, V>>,
    key: KeyBuf,
}

impl<'a, V> Leaves<'a, V> {
    pub(super) fn new(start: &'a Node<V>, prefix: Vec<char>) -> Self {
        let key = KeyBuf::from_vec(prefix);
        Self {
            stack: vec![(key.len(), None, start)],
            key,
        }
    }

    pub(super) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            key: KeyBuf::new(),
        }
    }
}

impl<'a, V> Iterator for Leaves<'a, V> {
    type Item = Leaf<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((len, edge, node)) = self.stack.pop() {
            self.key.truncate(len);
            self.key.extend(edge);
            let len = self.key.len();
            self.stack.extend(
                node.children
                    .iter()
                    .map(|(&ch, child)| (len, Some(ch), child)),
            );
            if let Some(value) = node.value.as_ref() {
                return Some(Leaf::new(self.key.iter().collect(), value));
            }
        }
        None
    }
}

/// Depth first walk over the entries matching a wildcard pattern.
#[must_use]
pub struct Fuzzy<'a, V> {
    stack: Vec<Pending<'a, V>>,
    key: KeyBuf,
    pattern: Vec<char>,
}

impl<'a, V> Fuzzy<'a, V> {
    pub(super) fn new(root: Option<&'a Node<V>>, pattern: Vec<char>) -> Self {
        Self {
            stack: root.map(|root| (0, None, root)).into_iter().collect(),
            key: KeyBuf::new(),
            pattern,
        }
    }
}

impl<'a, V> Iterator for Fuzzy<'a, V> {
    type Item = Leaf<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((len, edge, node)) = self.stack.pop() {
            self.key.truncate(len);
            self.key.extend(edge);
            let consumed = self.key.len();
            match self.pattern.get(consumed) {
                None => {
                    if let Some(value) = node.value.as_ref() {
                        return Some(Leaf::new(self.key.iter().collect(), value));
                    }
                }
                Some(&WILDCARD) => self.stack.extend(
                    node.children
                        .iter()
                        .map(|(&ch, child)| (consumed, Some(ch), child)),
                ),
                Some(ch) => {
                    if let Some(child) = node.children.get(ch) {
                        self.stack.push((consumed, Some(*ch), child));
                    }
                }
            }
        }
        None
    }
}

impl<K: Key, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Key, V> Extend<(K, V)> for Trie<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(&key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = Leaf<'a, V>;
    type IntoIter = Leaves<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
