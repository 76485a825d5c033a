use crate::convert::{RpcConvertible, SchemaBuilder, ToRpcItem};
use crate::model::{Bytes, RpcItem, RpcObject};
use icon_addresses::Address;
use num_bigint::BigInt;

/// A transaction already included in a block, as returned inside
/// `confirmed_transaction_list` or by `icx_getTransactionByHash`.
/// Bindings follow the protocol v3 key set.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmedTransaction {
    pub version: BigInt,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: Option<BigInt>,
    pub fee: Option<BigInt>,
    pub step_limit: Option<BigInt>,
    pub timestamp: Option<BigInt>,
    pub nid: Option<BigInt>,
    pub nonce: Option<BigInt>,
    pub data_type: Option<String>,
    pub data: Option<RpcItem>,
    pub tx_hash: Option<Bytes>,
    pub tx_index: Option<BigInt>,
    pub block_height: Option<BigInt>,
    pub block_hash: Option<Bytes>,
    pub signature: Option<String>,
}

impl Default for ConfirmedTransaction {
    fn default() -> Self {
        Self {
            // transactions predating the version member are protocol v2
            version: BigInt::from(2),
            from: None,
            to: None,
            value: None,
            fee: None,
            step_limit: None,
            timestamp: None,
            nid: None,
            nonce: None,
            data_type: None,
            data: None,
            tx_hash: None,
            tx_index: None,
            block_height: None,
            block_hash: None,
            signature: None,
        }
    }
}

impl RpcConvertible for ConfirmedTransaction {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .optional("version", |tx: &mut Self, value| tx.version = value)
            .optional("from", |tx: &mut Self, value| tx.from = Some(value))
            .optional("to", |tx: &mut Self, value| tx.to = Some(value))
            .optional("value", |tx: &mut Self, value| tx.value = Some(value))
            .optional("fee", |tx: &mut Self, value| tx.fee = Some(value))
            .optional("stepLimit", |tx: &mut Self, value| tx.step_limit = Some(value))
            .optional("timestamp", |tx: &mut Self, value| tx.timestamp = Some(value))
            .optional("nid", |tx: &mut Self, value| tx.nid = Some(value))
            .optional("nonce", |tx: &mut Self, value| tx.nonce = Some(value))
            .optional("dataType", |tx: &mut Self, value| tx.data_type = Some(value))
            .optional("data", |tx: &mut Self, value| tx.data = Some(value))
            .optional("txHash", |tx: &mut Self, value| tx.tx_hash = Some(value))
            .optional("txIndex", |tx: &mut Self, value| tx.tx_index = Some(value))
            .optional("blockHeight", |tx: &mut Self, value| tx.block_height = Some(value))
            .optional("blockHash", |tx: &mut Self, value| tx.block_hash = Some(value))
            .optional("signature", |tx: &mut Self, value| tx.signature = Some(value))
    }
}

impl ToRpcItem for ConfirmedTransaction {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder().put("version", self.version.clone());
        if let Some(from) = self.from {
            builder = builder.put("from", from);
        }
        if let Some(to) = self.to {
            builder = builder.put("to", to);
        }
        if let Some(value) = &self.value {
            builder = builder.put("value", value.clone());
        }
        if let Some(fee) = &self.fee {
            builder = builder.put("fee", fee.clone());
        }
        if let Some(step_limit) = &self.step_limit {
            builder = builder.put("stepLimit", step_limit.clone());
        }
        if let Some(timestamp) = &self.timestamp {
            builder = builder.put("timestamp", timestamp.clone());
        }
        if let Some(nid) = &self.nid {
            builder = builder.put("nid", nid.clone());
        }
        if let Some(nonce) = &self.nonce {
            builder = builder.put("nonce", nonce.clone());
        }
        if let Some(data_type) = &self.data_type {
            builder = builder.put("dataType", data_type.as_str());
        }
        if let Some(data) = &self.data {
            builder = builder.put("data", data.clone());
        }
        if let Some(tx_hash) = &self.tx_hash {
            builder = builder.put("txHash", tx_hash.clone());
        }
        if let Some(tx_index) = &self.tx_index {
            builder = builder.put("txIndex", tx_index.clone());
        }
        if let Some(block_height) = &self.block_height {
            builder = builder.put("blockHeight", block_height.clone());
        }
        if let Some(block_hash) = &self.block_hash {
            builder = builder.put("blockHash", block_hash.clone());
        }
        if let Some(signature) = &self.signature {
            builder = builder.put("signature", signature.as_str());
        }
        RpcItem::Object(builder.build())
    }
}

/// The receipt of an executed transaction (`icx_getTransactionResult`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionResult {
    /// 1 on success, 0 on failure.
    pub status: BigInt,
    pub to: Option<Address>,
    pub tx_hash: Option<Bytes>,
    pub tx_index: Option<BigInt>,
    pub block_height: Option<BigInt>,
    pub block_hash: Option<Bytes>,
    pub cumulative_step_used: Option<BigInt>,
    pub step_used: Option<BigInt>,
    pub step_price: Option<BigInt>,
    pub score_address: Option<Address>,
    pub logs_bloom: Option<Bytes>,
    pub event_logs: Vec<EventLog>,
    pub failure: Option<Failure>,
}

impl TransactionResult {
    pub fn is_success(&self) -> bool {
        self.status == BigInt::from(1)
    }
}

impl RpcConvertible for TransactionResult {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .field("status", |result: &mut Self, value| result.status = value)
            .optional("to", |result: &mut Self, value| result.to = Some(value))
            .optional("txHash", |result: &mut Self, value| result.tx_hash = Some(value))
            .optional("txIndex", |result: &mut Self, value| result.tx_index = Some(value))
            .optional("blockHeight", |result: &mut Self, value| result.block_height = Some(value))
            .optional("blockHash", |result: &mut Self, value| result.block_hash = Some(value))
            .optional("cumulativeStepUsed", |result: &mut Self, value| result.cumulative_step_used = Some(value))
            .optional("stepUsed", |result: &mut Self, value| result.step_used = Some(value))
            .optional("stepPrice", |result: &mut Self, value| result.step_price = Some(value))
            .optional("scoreAddress", |result: &mut Self, value| result.score_address = Some(value))
            .optional("logsBloom", |result: &mut Self, value| result.logs_bloom = Some(value))
            .optional_nested_list("eventLogs", |result: &mut Self, value| result.event_logs = value)
            .optional_nested("failure", |result: &mut Self, value| result.failure = Some(value))
    }
}

impl ToRpcItem for TransactionResult {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder().put("status", self.status.clone());
        if let Some(to) = self.to {
            builder = builder.put("to", to);
        }
        if let Some(tx_hash) = &self.tx_hash {
            builder = builder.put("txHash", tx_hash.clone());
        }
        if let Some(tx_index) = &self.tx_index {
            builder = builder.put("txIndex", tx_index.clone());
        }
        if let Some(block_height) = &self.block_height {
            builder = builder.put("blockHeight", block_height.clone());
        }
        if let Some(block_hash) = &self.block_hash {
            builder = builder.put("blockHash", block_hash.clone());
        }
        if let Some(cumulative_step_used) = &self.cumulative_step_used {
            builder = builder.put("cumulativeStepUsed", cumulative_step_used.clone());
        }
        if let Some(step_used) = &self.step_used {
            builder = builder.put("stepUsed", step_used.clone());
        }
        if let Some(step_price) = &self.step_price {
            builder = builder.put("stepPrice", step_price.clone());
        }
        if let Some(score_address) = self.score_address {
            builder = builder.put("scoreAddress", score_address);
        }
        if let Some(logs_bloom) = &self.logs_bloom {
            builder = builder.put("logsBloom", logs_bloom.clone());
        }
        if !self.event_logs.is_empty() {
            builder = builder.put("eventLogs", self.event_logs.to_rpc());
        }
        if let Some(failure) = &self.failure {
            builder = builder.put("failure", failure.to_rpc());
        }
        RpcItem::Object(builder.build())
    }
}

/// One event emitted by a SCORE during transaction execution. The `indexed`
/// and `data` members carry heterogeneous values, so they stay raw items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    pub score_address: Option<Address>,
    pub indexed: Vec<RpcItem>,
    pub data: Vec<RpcItem>,
}

impl RpcConvertible for EventLog {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .optional("scoreAddress", |log: &mut Self, value| log.score_address = Some(value))
            .optional_list("indexed", |log: &mut Self, value| log.indexed = value)
            .optional_list("data", |log: &mut Self, value| log.data = value)
    }
}

impl ToRpcItem for EventLog {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder();
        if let Some(score_address) = self.score_address {
            builder = builder.put("scoreAddress", score_address);
        }
        if !self.indexed.is_empty() {
            builder = builder.put("indexed", self.indexed.to_rpc());
        }
        if !self.data.is_empty() {
            builder = builder.put("data", self.data.to_rpc());
        }
        RpcItem::Object(builder.build())
    }
}

/// Failure detail of a reverted transaction; present when `status` is 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Failure {
    pub code: BigInt,
    pub message: Option<String>,
}

impl RpcConvertible for Failure {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .field("code", |failure: &mut Self, value| failure.code = value)
            .optional("message", |failure: &mut Self, value| failure.message = Some(value))
    }
}

impl ToRpcItem for Failure {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder().put("code", self.code.clone());
        if let Some(message) = &self.message {
            builder = builder.put("message", message.as_str());
        }
        RpcItem::Object(builder.build())
    }
}
