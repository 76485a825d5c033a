use crate::model::RpcItem;
use indexmap::IndexMap;

/// An insertion-ordered mapping from unique string keys to RPC items,
/// immutable once built. Order is preserved for reproducible serialization
/// but irrelevant to lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RpcObject {
    items: IndexMap<String, RpcItem>,
}

impl RpcObject {
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    pub fn get(&self, key: &str) -> Option<&RpcItem> {
        self.items.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RpcItem)> {
        self.items.iter().map(|(key, item)| (key.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Default)]
pub struct ObjectBuilder {
    items: IndexMap<String, RpcItem>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self { items: IndexMap::new() }
    }

    /// Inserts an item under `key`. The first write to a key wins and empty
    /// items are dropped, matching the wire convention that objects never
    /// carry empty members.
    pub fn put(mut self, key: impl Into<String>, item: impl Into<RpcItem>) -> Self {
        let key = key.into();
        let item = item.into();
        if !self.items.contains_key(&key) && !item.is_empty() {
            self.items.insert(key, item);
        }
        self
    }

    pub fn build(self) -> RpcObject {
        RpcObject { items: self.items }
    }
}
