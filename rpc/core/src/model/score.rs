use crate::convert::{RpcConvertible, SchemaBuilder, ToRpcItem};
use crate::model::{RpcItem, RpcObject};
use num_bigint::BigInt;

/// One entry of a SCORE's API listing (`icx_getScoreApi`): a function,
/// fallback or eventlog signature.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreApi {
    /// Wire key `type`: `function`, `fallback` or `eventlog`.
    pub kind: String,
    pub name: String,
    pub inputs: Vec<ScoreApiParam>,
    pub outputs: Vec<ScoreApiParam>,
    pub readonly: Option<String>,
}

impl ScoreApi {
    pub fn is_readonly(&self) -> bool {
        self.readonly.as_deref() == Some("0x1")
    }
}

impl RpcConvertible for ScoreApi {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .field("type", |api: &mut Self, value| api.kind = value)
            .field("name", |api: &mut Self, value| api.name = value)
            .optional_nested_list("inputs", |api: &mut Self, value| api.inputs = value)
            .optional_nested_list("outputs", |api: &mut Self, value| api.outputs = value)
            .optional("readonly", |api: &mut Self, value| api.readonly = Some(value))
    }
}

impl ToRpcItem for ScoreApi {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder().put("type", self.kind.as_str()).put("name", self.name.as_str());
        if !self.inputs.is_empty() {
            builder = builder.put("inputs", self.inputs.to_rpc());
        }
        if !self.outputs.is_empty() {
            builder = builder.put("outputs", self.outputs.to_rpc());
        }
        if let Some(readonly) = &self.readonly {
            builder = builder.put("readonly", readonly.as_str());
        }
        RpcItem::Object(builder.build())
    }
}

/// One parameter of a SCORE API entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreApiParam {
    /// Wire key `type`: the SCORE parameter type (`int`, `str`, `Address`, ...).
    pub kind: String,
    pub name: String,
    /// Present on eventlog parameters: 1 when the parameter is indexed.
    pub indexed: Option<BigInt>,
}

impl RpcConvertible for ScoreApiParam {
    fn bindings(builder: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        builder
            .field("type", |param: &mut Self, value| param.kind = value)
            .field("name", |param: &mut Self, value| param.name = value)
            .optional("indexed", |param: &mut Self, value| param.indexed = Some(value))
    }
}

impl ToRpcItem for ScoreApiParam {
    fn to_rpc(&self) -> RpcItem {
        let mut builder = RpcObject::builder().put("type", self.kind.as_str()).put("name", self.name.as_str());
        if let Some(indexed) = &self.indexed {
            builder = builder.put("indexed", indexed.clone());
        }
        RpcItem::Object(builder.build())
    }
}
