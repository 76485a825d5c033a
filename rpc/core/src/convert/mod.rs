//!
//! The typed object converter: coercion rules for leaf values, statically
//! declared binding tables for object-shaped response types, and the
//! registry caching one built converter per target type.
//!

pub mod registry;
pub mod schema;

pub use registry::*;
pub use schema::*;

use crate::model::{Bytes, RpcArray, RpcItem, RpcObject};
use crate::RpcResult;
use icon_addresses::Address;
use num_bigint::BigInt;

/// Decoding of a single RPC item into a leaf value, applying the coercion
/// rule of the declared type.
pub trait FromRpcItem: Sized {
    /// Declared-type name recorded in the field binding and used in
    /// diagnostics.
    const KIND: &'static str;

    fn from_rpc(item: &RpcItem) -> RpcResult<Self>;
}

impl FromRpcItem for bool {
    const KIND: &'static str = "boolean";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_bool()
    }
}

impl FromRpcItem for String {
    const KIND: &'static str = "string";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_string()
    }
}

impl FromRpcItem for BigInt {
    const KIND: &'static str = "int";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_integer()
    }
}

impl FromRpcItem for Address {
    const KIND: &'static str = "address";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_address()
    }
}

impl FromRpcItem for Bytes {
    const KIND: &'static str = "bytes";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_bytes()
    }
}

impl FromRpcItem for Vec<u8> {
    const KIND: &'static str = "byte array";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_byte_array()
    }
}

/// Pass-through binding for fields holding raw item subtrees (e.g. the
/// polymorphic `data` member of a transaction).
impl FromRpcItem for RpcItem {
    const KIND: &'static str = "item";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        Ok(item.clone())
    }
}

impl FromRpcItem for RpcObject {
    const KIND: &'static str = "object";

    fn from_rpc(item: &RpcItem) -> RpcResult<Self> {
        item.as_object().map(Clone::clone)
    }
}

/// Encoding of a value back into an RPC item, the reverse direction of the
/// converter (hand-written per type, no runtime introspection).
pub trait ToRpcItem {
    fn to_rpc(&self) -> RpcItem;
}

impl ToRpcItem for bool {
    fn to_rpc(&self) -> RpcItem {
        RpcItem::from(*self)
    }
}

impl ToRpcItem for String {
    fn to_rpc(&self) -> RpcItem {
        RpcItem::from(self.as_str())
    }
}

impl ToRpcItem for BigInt {
    fn to_rpc(&self) -> RpcItem {
        RpcItem::from(self.clone())
    }
}

impl ToRpcItem for Address {
    fn to_rpc(&self) -> RpcItem {
        RpcItem::from(*self)
    }
}

impl ToRpcItem for Bytes {
    fn to_rpc(&self) -> RpcItem {
        RpcItem::from(self.clone())
    }
}

impl ToRpcItem for RpcItem {
    fn to_rpc(&self) -> RpcItem {
        self.clone()
    }
}

impl<T: ToRpcItem> ToRpcItem for Vec<T> {
    fn to_rpc(&self) -> RpcItem {
        RpcItem::Array(self.iter().map(ToRpcItem::to_rpc).collect::<RpcArray>())
    }
}
