use std::{any::type_name_of_val, ops::Deref};

/// A stored entry found by a traversal: its full key and a borrow of its value.
#[derive(PartialEq, Eq)]
pub struct Leaf<'a, V> {
    key: String,
    value: &'a V,
}

impl<'a, V> Leaf<'a, V> {
    pub(super) fn new(key: String, value: &'a V) -> Self {
        Self { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &'a V {
        self.value
    }

    #[must_use]
    pub fn into_key(self) -> String {
        self.key
    }

    #[must_use]
    pub fn into_parts(self) -> (String, &'a V) {
        (self.key, self.value)
    }
}

impl<'a, V> Clone for Leaf<'a, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value,
        }
    }
}

impl<'a, V> Deref for Leaf<'a, V> {
    type Target = V;
    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<'a, V> core::fmt::Debug for Leaf<'a, V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name_of_val(self))
            .field("key", &self.key)
            .field("value", self.value)
            .finish()
    }
}
