use crate::convert::{ObjectConverter, RpcConvertible};
use crate::model::RpcItem;
use crate::RpcResult;
use log::trace;
use parking_lot::RwLock;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Holds one built [`ObjectConverter`] per target type, keyed by type
/// identity. Converters are built on first use and never mutated afterwards;
/// concurrent readers share them through `Arc`s. Population racing on first
/// use is construct-once-or-discard-duplicate.
#[derive(Default)]
pub struct ConverterRegistry {
    cache: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self { cache: RwLock::new(HashMap::new()) }
    }

    /// Returns the converter for `T`, building and caching it on first use.
    /// Fails when `T` declares an invalid binding table.
    pub fn converter<T: RpcConvertible>(&self) -> RpcResult<Arc<ObjectConverter<T>>> {
        let id = TypeId::of::<T>();
        if let Some(entry) = self.cache.read().get(&id) {
            return Ok(downcast::<T>(entry.clone()));
        }

        // Built outside the lock; a concurrent builder may win the race, in
        // which case this instance is discarded.
        let converter: Arc<dyn Any + Send + Sync> = Arc::new(ObjectConverter::<T>::build()?);
        trace!("caching object converter for {}", type_name::<T>());
        let mut cache = self.cache.write();
        let entry = cache.entry(id).or_insert_with(|| converter);
        Ok(downcast::<T>(entry.clone()))
    }

    /// Converts a generic object into a fully populated `T`.
    pub fn convert_to<T: RpcConvertible>(&self, item: &RpcItem) -> RpcResult<T> {
        self.converter::<T>()?.convert_to(self, item)
    }
}

fn downcast<T: RpcConvertible>(entry: Arc<dyn Any + Send + Sync>) -> Arc<ObjectConverter<T>> {
    entry.downcast::<ObjectConverter<T>>().unwrap_or_else(|_| panic!("cache entries are keyed by type id"))
}
