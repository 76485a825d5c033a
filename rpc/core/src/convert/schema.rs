use crate::convert::{ConverterRegistry, FromRpcItem};
use crate::model::RpcItem;
use crate::{RpcError, RpcResult};
use std::any::type_name;

type Apply<T> = Box<dyn Fn(&mut T, &ConverterRegistry, &RpcItem) -> RpcResult<()> + Send + Sync>;

/// One field binding of a target type: the RPC key it reads, the declared
/// type it coerces to, and whether the key must be present.
pub struct FieldBinding<T> {
    key: String,
    kind: &'static str,
    required: bool,
    apply: Apply<T>,
}

impl<T> FieldBinding<T> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Declares the binding table of a target type. A type implementing this
/// trait can be produced by [`ConverterRegistry::convert_to`]; its converter
/// is built once per registry and cached.
pub trait RpcConvertible: Default + Send + Sync + 'static {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self>;
}

/// Collects field bindings in declaration order. Duplicate keys are detected
/// when the converter is built.
pub struct SchemaBuilder<T> {
    bindings: Vec<FieldBinding<T>>,
}

impl<T: RpcConvertible> SchemaBuilder<T> {
    pub(crate) fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    fn bind(mut self, key: &str, kind: &'static str, required: bool, apply: Apply<T>) -> Self {
        self.bindings.push(FieldBinding { key: key.to_string(), kind, required, apply });
        self
    }

    /// Binds a mandatory leaf field; a missing key fails the conversion.
    pub fn field<V: FromRpcItem>(self, key: &str, set: impl Fn(&mut T, V) + Send + Sync + 'static) -> Self {
        self.bind(key, V::KIND, true, Box::new(move |target, _, item| {
            set(target, V::from_rpc(item)?);
            Ok(())
        }))
    }

    /// Binds an optional leaf field; a missing key leaves the default value.
    pub fn optional<V: FromRpcItem>(self, key: &str, set: impl Fn(&mut T, V) + Send + Sync + 'static) -> Self {
        self.bind(key, V::KIND, false, Box::new(move |target, _, item| {
            set(target, V::from_rpc(item)?);
            Ok(())
        }))
    }

    /// Binds a mandatory array of leaf values.
    pub fn list<V: FromRpcItem>(self, key: &str, set: impl Fn(&mut T, Vec<V>) + Send + Sync + 'static) -> Self {
        self.bind(key, "array", true, Box::new(move |target, _, item| {
            set(target, decode_list::<V>(item)?);
            Ok(())
        }))
    }

    /// Binds an optional array of leaf values.
    pub fn optional_list<V: FromRpcItem>(self, key: &str, set: impl Fn(&mut T, Vec<V>) + Send + Sync + 'static) -> Self {
        self.bind(key, "array", false, Box::new(move |target, _, item| {
            set(target, decode_list::<V>(item)?);
            Ok(())
        }))
    }

    /// Binds a mandatory nested object, converted through the registry.
    pub fn nested<V: RpcConvertible>(self, key: &str, set: impl Fn(&mut T, V) + Send + Sync + 'static) -> Self {
        self.bind(key, "object", true, Box::new(move |target, registry, item| {
            set(target, registry.convert_to::<V>(item)?);
            Ok(())
        }))
    }

    /// Binds an optional nested object.
    pub fn optional_nested<V: RpcConvertible>(self, key: &str, set: impl Fn(&mut T, V) + Send + Sync + 'static) -> Self {
        self.bind(key, "object", false, Box::new(move |target, registry, item| {
            set(target, registry.convert_to::<V>(item)?);
            Ok(())
        }))
    }

    /// Binds a mandatory array of nested objects.
    pub fn nested_list<V: RpcConvertible>(self, key: &str, set: impl Fn(&mut T, Vec<V>) + Send + Sync + 'static) -> Self {
        self.bind(key, "array", true, Box::new(move |target, registry, item| {
            set(target, decode_nested_list::<V>(registry, item)?);
            Ok(())
        }))
    }

    /// Binds an optional array of nested objects.
    pub fn optional_nested_list<V: RpcConvertible>(
        self,
        key: &str,
        set: impl Fn(&mut T, Vec<V>) + Send + Sync + 'static,
    ) -> Self {
        self.bind(key, "array", false, Box::new(move |target, registry, item| {
            set(target, decode_nested_list::<V>(registry, item)?);
            Ok(())
        }))
    }
}

fn decode_list<V: FromRpcItem>(item: &RpcItem) -> RpcResult<Vec<V>> {
    let array = item.as_array()?;
    let mut entries = Vec::with_capacity(array.len());
    for entry in array.iter() {
        entries.push(V::from_rpc(entry)?);
    }
    Ok(entries)
}

fn decode_nested_list<V: RpcConvertible>(registry: &ConverterRegistry, item: &RpcItem) -> RpcResult<Vec<V>> {
    let array = item.as_array()?;
    let mut entries = Vec::with_capacity(array.len());
    for entry in array.iter() {
        entries.push(registry.convert_to::<V>(entry)?);
    }
    Ok(entries)
}

/// A built converter for one target type: the validated binding table,
/// applied to a generic object in a single declaration-order pass.
pub struct ObjectConverter<T> {
    bindings: Vec<FieldBinding<T>>,
}

impl<T: RpcConvertible> ObjectConverter<T> {
    /// Validates the binding table declared by `T`. Fails when two bindings
    /// name the same RPC key or when no binding was declared at all.
    pub(crate) fn build() -> RpcResult<Self> {
        let bindings = T::bindings(SchemaBuilder::new()).bindings;
        if bindings.is_empty() {
            return Err(RpcError::EmptyBindingTable(type_name::<T>()));
        }
        for (index, binding) in bindings.iter().enumerate() {
            if bindings[..index].iter().any(|previous| previous.key == binding.key) {
                return Err(RpcError::DuplicateKey { type_name: type_name::<T>(), key: binding.key.clone() });
            }
        }
        Ok(Self { bindings })
    }

    /// Converts a generic object into a fully populated `T`. All-or-nothing:
    /// the first failing field aborts the conversion and the partially
    /// populated instance is discarded. Missing keys fail with
    /// [`RpcError::MissingKey`] unless the binding is optional, in which case
    /// the default value stays.
    pub fn convert_to(&self, registry: &ConverterRegistry, item: &RpcItem) -> RpcResult<T> {
        let object = item.as_object()?;
        let mut target = T::default();
        for binding in &self.bindings {
            match object.get(&binding.key) {
                Some(value) => (binding.apply)(&mut target, registry, value)?,
                None if binding.required => return Err(RpcError::MissingKey(binding.key.clone())),
                None => {}
            }
        }
        Ok(target)
    }

    /// The binding table in declaration order.
    pub fn bindings(&self) -> &[FieldBinding<T>] {
        &self.bindings
    }
}
