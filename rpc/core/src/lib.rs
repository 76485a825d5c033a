//! # ICON RPC Core
//!
//! This crate provides the foundational data primitives of the ICON JSON-RPC
//! client SDK: the generic RPC item tree ([`RpcItem`], [`RpcObject`],
//! [`RpcArray`], [`RpcValue`]) produced by the transport layer, and the typed
//! object converter ([`convert::ConverterRegistry`]) turning that tree into
//! domain response models such as [`Block`] or [`TransactionResult`].
//!

pub mod convert;
pub mod error;
pub mod model;

pub mod prelude {
    //! Re-exports of the most commonly used types and traits in this crate.
    pub use super::convert::*;
    pub use super::error::*;
    pub use super::model::*;
}

pub use convert::*;
pub use error::*;
pub use model::*;
