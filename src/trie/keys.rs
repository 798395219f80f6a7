/// A sequence of unicode code points usable as a [`Trie`](super::Trie) key.
///
/// Code points are compared by identity; no normalisation takes place.
pub trait Key {
    fn code_points(&self) -> impl Iterator<Item = char> + '_;
}

impl Key for str {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl Key for String {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl Key for [char] {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

impl Key for Vec<char> {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn code_points(&self) -> impl Iterator<Item = char> + '_ {
        (**self).code_points()
    }
}
