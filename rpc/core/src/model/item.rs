use crate::model::{Bytes, RpcArray, RpcObject, RpcValue};
use crate::{RpcError, RpcResult};
use icon_addresses::Address;
use num_bigint::BigInt;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One node of the generic RPC item tree: a tagged leaf value, an
/// insertion-ordered object, or an array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RpcItem {
    Value(RpcValue),
    Object(RpcObject),
    Array(RpcArray),
}

impl RpcItem {
    /// Shape name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RpcItem::Value(value) => value.kind(),
            RpcItem::Object(_) => "object",
            RpcItem::Array(_) => "array",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RpcItem::Value(value) => value.is_empty(),
            RpcItem::Object(object) => object.is_empty(),
            RpcItem::Array(array) => array.is_empty(),
        }
    }

    pub fn as_value(&self) -> RpcResult<&RpcValue> {
        match self {
            RpcItem::Value(value) => Ok(value),
            _ => Err(RpcError::TypeMismatch { expected: "value", found: self.kind() }),
        }
    }

    pub fn as_object(&self) -> RpcResult<&RpcObject> {
        match self {
            RpcItem::Object(object) => Ok(object),
            _ => Err(RpcError::TypeMismatch { expected: "object", found: self.kind() }),
        }
    }

    pub fn as_array(&self) -> RpcResult<&RpcArray> {
        match self {
            RpcItem::Array(array) => Ok(array),
            _ => Err(RpcError::TypeMismatch { expected: "array", found: self.kind() }),
        }
    }

    pub fn as_bool(&self) -> RpcResult<bool> {
        self.as_value()?.as_bool()
    }

    pub fn as_string(&self) -> RpcResult<String> {
        self.as_value()?.as_string()
    }

    pub fn as_integer(&self) -> RpcResult<BigInt> {
        self.as_value()?.as_integer()
    }

    pub fn as_address(&self) -> RpcResult<Address> {
        self.as_value()?.as_address()
    }

    pub fn as_bytes(&self) -> RpcResult<Bytes> {
        self.as_value()?.as_bytes()
    }

    pub fn as_byte_array(&self) -> RpcResult<Vec<u8>> {
        self.as_value()?.as_byte_array()
    }
}

impl From<RpcValue> for RpcItem {
    fn from(value: RpcValue) -> Self {
        RpcItem::Value(value)
    }
}

impl From<RpcObject> for RpcItem {
    fn from(object: RpcObject) -> Self {
        RpcItem::Object(object)
    }
}

impl From<RpcArray> for RpcItem {
    fn from(array: RpcArray) -> Self {
        RpcItem::Array(array)
    }
}

macro_rules! item_from_value {
    ($($type:ty),*) => {
        $(impl From<$type> for RpcItem {
            fn from(value: $type) -> Self {
                RpcItem::Value(RpcValue::from(value))
            }
        })*
    };
}

item_from_value!(bool, i64, BigInt, &str, String, Address, Bytes, Vec<u8>, &[u8]);

//
// The JSON mapping follows the ICON wire conventions: every leaf serializes
// as its wire text (the all-string encoding), objects keep insertion order,
// and deserialized scalars stay string-tagged until an accessor parses them.
//

impl Serialize for RpcItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RpcItem::Value(value) => value.serialize(serializer),
            RpcItem::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, item) in object.iter() {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
            RpcItem::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for item in array.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RpcItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ItemVisitor)
    }
}

struct ItemVisitor;

impl<'de> serde::de::Visitor<'de> for ItemVisitor {
    type Value = RpcItem;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a json-rpc item (string, bool, integer, object or array)")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RpcItem::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RpcItem::from(BigInt::from(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RpcItem::from(BigInt::from(value)))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Err(E::custom(format!("unexpected float {value} in rpc item")))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RpcItem::from(value))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut builder = RpcObject::builder();
        while let Some(key) = map.next_key::<String>()? {
            // nulls are dropped the same way the object builder drops empty
            // members
            if let Some(item) = map.next_value::<Option<RpcItem>>()? {
                builder = builder.put(key, item);
            }
        }
        Ok(builder.build().into())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut builder = RpcArray::builder();
        while let Some(entry) = seq.next_element::<Option<RpcItem>>()? {
            if let Some(item) = entry {
                builder = builder.add(item);
            }
        }
        Ok(builder.build().into())
    }
}
