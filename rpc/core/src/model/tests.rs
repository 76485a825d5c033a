#[cfg(test)]
mod json_mapping {

    use crate::convert::ConverterRegistry;
    use crate::model::*;
    use num_bigint::BigInt;

    // this function tests the JSON mapping of an item tree by serializing
    // it (A), deserializing it, serializing it again (B) and comparing the
    // A and B texts.
    fn roundtrip(item: &RpcItem) -> RpcItem {
        let text = serde_json::to_string(item).unwrap();
        let back: RpcItem = serde_json::from_str(&text).unwrap();
        assert_eq!(serde_json::to_string(&back).unwrap(), text, "json round trip must be stable");
        back
    }

    #[test]
    fn test_values_serialize_as_wire_text() {
        let object: RpcItem = RpcObject::builder()
            .put("boolean", true)
            .put("int", BigInt::from(1234))
            .put("bytes", Bytes::try_from("0xf123").unwrap())
            .put("text", "string value")
            .build()
            .into();

        let text = serde_json::to_string(&object).unwrap();
        // every leaf takes its all-string wire form
        assert_eq!(text, r#"{"boolean":"0x1","int":"0x4d2","bytes":"0xf123","text":"string value"}"#);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let object: RpcItem = RpcObject::builder()
            .put("zebra", 1i64)
            .put("alpha", 2i64)
            .put("mike", 3i64)
            .build()
            .into();
        let back = roundtrip(&object);
        let keys: Vec<_> = back.as_object().unwrap().keys().map(str::to_string).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mike"]);
    }

    #[test]
    fn test_wire_scalars_deserialize_string_tagged() {
        let item: RpcItem = serde_json::from_str(r#"{"height":"0x4","flag":true,"count":7}"#).unwrap();
        let object = item.as_object().unwrap();

        // json strings stay wire text until an accessor parses them
        assert_eq!(object.get("height").unwrap().kind(), "string");
        assert_eq!(object.get("height").unwrap().as_integer().unwrap(), BigInt::from(4));
        // json booleans and integers carry their own tag
        assert_eq!(object.get("flag").unwrap().kind(), "boolean");
        assert_eq!(object.get("count").unwrap().as_integer().unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_nulls_are_dropped() {
        let item: RpcItem = serde_json::from_str(r#"{"present":"0x1","absent":null,"list":["a",null,"b"]}"#).unwrap();
        let object = item.as_object().unwrap();
        assert!(object.get("absent").is_none());
        assert_eq!(object.get("list").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_floats_are_rejected() {
        assert!(serde_json::from_str::<RpcItem>(r#"{"value":1.5}"#).is_err());
    }

    #[test]
    fn test_response_fragment_to_typed_model() {
        // a realistic wire fragment flows: JSON -> item tree -> typed model
        let text = r#"{
            "status": "0x1",
            "to": "cxb0776ee37f5b45bfaea8cec1d33bccb7f3d37a19",
            "txHash": "0x2600770376fbf291d3d445054d45ed15280dd33c2038931aace3f7ea2ab59dbc",
            "blockHeight": "0x1234",
            "stepUsed": "0x1de8",
            "eventLogs": [
                {
                    "scoreAddress": "cxb0776ee37f5b45bfaea8cec1d33bccb7f3d37a19",
                    "indexed": ["Transfer(Address,Address,int)"],
                    "data": ["0xde0b6b3a7640000"]
                }
            ]
        }"#;

        let item: RpcItem = serde_json::from_str(text).unwrap();
        let registry = ConverterRegistry::new();
        let result: TransactionResult = registry.convert_to(&item).unwrap();

        assert!(result.is_success());
        assert_eq!(result.block_height, Some(BigInt::from(0x1234)));
        assert_eq!(result.event_logs[0].data[0].as_integer().unwrap(), BigInt::from(0xde0b6b3a7640000u64));
    }

    #[test]
    fn test_deep_nesting_roundtrip() {
        let inner = RpcObject::builder().put("key", "value").build();
        let array = RpcArray::builder().add(inner.clone()).add(RpcValue::from(BigInt::from(-5))).build();
        let object: RpcItem = RpcObject::builder().put("nested", array).put("plain", "text").build().into();

        let back = roundtrip(&object);
        let nested = back.as_object().unwrap().get("nested").unwrap().as_array().unwrap();
        assert_eq!(nested.get(0).unwrap().as_object().unwrap().get("key").unwrap().as_string().unwrap(), "value");
        // the negative integer comes back as its wire text
        assert_eq!(nested.get(1).unwrap().as_integer().unwrap(), BigInt::from(-5));
    }
}
