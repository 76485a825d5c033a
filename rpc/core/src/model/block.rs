use crate::convert::{RpcConvertible, SchemaBuilder, ToRpcItem};
use crate::model::{Bytes, ConfirmedTransaction, RpcItem, RpcObject};
use num_bigint::BigInt;

/// A block as returned by `icx_getBlock*`. The genesis block carries no
/// previous hash, so that binding (and the other late-protocol members) is
/// optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub version: BigInt,
    pub height: BigInt,
    pub timestamp: BigInt,
    pub block_hash: Bytes,
    pub prev_block_hash: Option<Bytes>,
    pub merkle_tree_root_hash: Option<Bytes>,
    pub peer_id: Option<String>,
    pub signature: Option<String>,
    pub confirmed_transactions: Vec<ConfirmedTransaction>,
}

impl RpcConvertible for Block {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .field("version", |block: &mut Self, value| block.version = value)
            .field("height", |block: &mut Self, value| block.height = value)
            .field("time_stamp", |block: &mut Self, value| block.timestamp = value)
            .field("block_hash", |block: &mut Self, value| block.block_hash = value)
            .optional("prev_block_hash", |block: &mut Self, value| block.prev_block_hash = Some(value))
            .optional("merkle_tree_root_hash", |block: &mut Self, value| block.merkle_tree_root_hash = Some(value))
            .optional("peer_id", |block: &mut Self, value| block.peer_id = Some(value))
            .optional("signature", |block: &mut Self, value| block.signature = Some(value))
            .optional_nested_list("confirmed_transaction_list", |block: &mut Self, value| {
                block.confirmed_transactions = value
            })
    }
}

impl ToRpcItem for Block {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder()
            .put("version", self.version.clone())
            .put("height", self.height.clone())
            .put("time_stamp", self.timestamp.clone())
            .put("block_hash", self.block_hash.clone());
        if let Some(hash) = &self.prev_block_hash {
            builder = builder.put("prev_block_hash", hash.clone());
        }
        if let Some(hash) = &self.merkle_tree_root_hash {
            builder = builder.put("merkle_tree_root_hash", hash.clone());
        }
        if let Some(peer_id) = &self.peer_id {
            builder = builder.put("peer_id", peer_id.as_str());
        }
        if let Some(signature) = &self.signature {
            builder = builder.put("signature", signature.as_str());
        }
        if !self.confirmed_transactions.is_empty() {
            builder = builder.put("confirmed_transaction_list", self.confirmed_transactions.to_rpc());
        }
        RpcItem::Object(builder.build())
    }
}
