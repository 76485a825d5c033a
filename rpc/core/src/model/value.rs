use crate::model::hex::{has_hex_prefix, int_from_hex, int_to_hex, prefixed_hex_decode, prefixed_hex_encode};
use crate::model::Bytes;
use crate::{RpcError, RpcResult};
use icon_addresses::Address;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// A leaf of the RPC item tree: one tagged scalar datum.
///
/// Values built programmatically carry their real tag (`Bool`, `Int`, ...).
/// Values read from the JSON wire arrive as the untyped `String` tag, since
/// the ICON wire encodes every scalar as text; the accessors parse that text
/// on demand using the wire conventions (`0x1`/`0x0` booleans, `0x` hex or
/// decimal integers, `0x` hex byte sequences, prefixed hex addresses).
/// Accessors never coerce between two typed tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RpcValue {
    Bool(bool),
    String(String),
    Int(BigInt),
    Address(Address),
    Bytes(Bytes),
    ByteArray(Vec<u8>),
}

impl RpcValue {
    /// Tag name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RpcValue::Bool(_) => "boolean",
            RpcValue::String(_) => "string",
            RpcValue::Int(_) => "int",
            RpcValue::Address(_) => "address",
            RpcValue::Bytes(_) => "bytes",
            RpcValue::ByteArray(_) => "byte array",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RpcValue::String(text) if text.is_empty())
    }

    fn mismatch(&self, expected: &'static str) -> RpcError {
        RpcError::TypeMismatch { expected, found: self.kind() }
    }

    pub fn as_bool(&self) -> RpcResult<bool> {
        match self {
            RpcValue::Bool(value) => Ok(*value),
            RpcValue::String(text) => match text.as_str() {
                "0x1" => Ok(true),
                "0x0" => Ok(false),
                _ => Err(self.mismatch("boolean")),
            },
            _ => Err(self.mismatch("boolean")),
        }
    }

    pub fn as_string(&self) -> RpcResult<String> {
        match self {
            RpcValue::String(text) => Ok(text.clone()),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn as_integer(&self) -> RpcResult<BigInt> {
        match self {
            RpcValue::Int(value) => Ok(value.clone()),
            RpcValue::String(text) => int_from_hex(text).ok_or_else(|| self.mismatch("int")),
            _ => Err(self.mismatch("int")),
        }
    }

    pub fn as_address(&self) -> RpcResult<Address> {
        match self {
            RpcValue::Address(address) => Ok(*address),
            RpcValue::String(text) => Ok(Address::try_from(text.as_str())?),
            _ => Err(self.mismatch("address")),
        }
    }

    pub fn as_bytes(&self) -> RpcResult<Bytes> {
        Ok(Bytes::new(self.as_byte_array()?))
    }

    pub fn as_byte_array(&self) -> RpcResult<Vec<u8>> {
        match self {
            RpcValue::Bytes(bytes) => Ok(bytes.to_vec()),
            RpcValue::ByteArray(bytes) => Ok(bytes.clone()),
            RpcValue::String(text) => {
                // wire byte sequences are always prefixed
                if !has_hex_prefix(text) {
                    return Err(self.mismatch("bytes"));
                }
                prefixed_hex_decode(text)
            }
            _ => Err(self.mismatch("bytes")),
        }
    }
}

/// The lossless wire text of the value.
impl Display for RpcValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RpcValue::Bool(value) => f.write_str(if *value { "0x1" } else { "0x0" }),
            RpcValue::String(text) => f.write_str(text),
            RpcValue::Int(value) => f.write_str(&int_to_hex(value)),
            RpcValue::Address(address) => write!(f, "{address}"),
            RpcValue::Bytes(bytes) => write!(f, "{bytes}"),
            RpcValue::ByteArray(bytes) => f.write_str(&prefixed_hex_encode(bytes)),
        }
    }
}

impl Serialize for RpcValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<bool> for RpcValue {
    fn from(value: bool) -> Self {
        RpcValue::Bool(value)
    }
}

impl From<&str> for RpcValue {
    fn from(value: &str) -> Self {
        RpcValue::String(value.to_string())
    }
}

impl From<String> for RpcValue {
    fn from(value: String) -> Self {
        RpcValue::String(value)
    }
}

impl From<BigInt> for RpcValue {
    fn from(value: BigInt) -> Self {
        RpcValue::Int(value)
    }
}

impl From<i64> for RpcValue {
    fn from(value: i64) -> Self {
        RpcValue::Int(BigInt::from(value))
    }
}

impl From<Address> for RpcValue {
    fn from(value: Address) -> Self {
        RpcValue::Address(value)
    }
}

impl From<Bytes> for RpcValue {
    fn from(value: Bytes) -> Self {
        RpcValue::Bytes(value)
    }
}

impl From<Vec<u8>> for RpcValue {
    fn from(value: Vec<u8>) -> Self {
        RpcValue::ByteArray(value)
    }
}

impl From<&[u8]> for RpcValue {
    fn from(value: &[u8]) -> Self {
        RpcValue::ByteArray(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_text() {
        let address = Address::try_from("hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31").unwrap();
        let cases: Vec<(RpcValue, &str)> = vec![
            (RpcValue::from(true), "0x1"),
            (RpcValue::from(false), "0x0"),
            (RpcValue::from("string value"), "string value"),
            (RpcValue::from(BigInt::from(1234)), "0x4d2"),
            (RpcValue::from(BigInt::from(-1234)), "-0x4d2"),
            (RpcValue::from(BigInt::from(0)), "0x0"),
            (RpcValue::from(address), "hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31"),
            (RpcValue::from(Bytes::from_str("0xf123").unwrap()), "0xf123"),
            (RpcValue::from(vec![1u8, 2, 3, 4, 5]), "0x0102030405"),
            (RpcValue::from(Vec::<u8>::new()), "0x"),
        ];
        for (value, text) in cases {
            assert_eq!(value.to_string(), text);
        }
    }

    #[test]
    fn test_typed_accessors() {
        let address = Address::try_from("hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31").unwrap();

        assert!(RpcValue::from(true).as_bool().unwrap());
        assert_eq!(RpcValue::from("string value").as_string().unwrap(), "string value");
        assert_eq!(RpcValue::from(BigInt::from(1234)).as_integer().unwrap(), BigInt::from(1234));
        assert_eq!(RpcValue::from(address).as_address().unwrap(), address);
        assert_eq!(RpcValue::from(Bytes::from_str("0xf123").unwrap()).as_byte_array().unwrap(), vec![0xf1, 0x23]);
        assert_eq!(RpcValue::from(vec![1u8, 2, 3]).as_bytes().unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_wire_text_accessors() {
        // values deserialized from the JSON wire are string-tagged and parsed
        // on access
        assert!(RpcValue::from("0x1").as_bool().unwrap());
        assert!(!RpcValue::from("0x0").as_bool().unwrap());
        assert_eq!(RpcValue::from("0x4d2").as_integer().unwrap(), BigInt::from(1234));
        assert_eq!(RpcValue::from("-0x4d2").as_integer().unwrap(), BigInt::from(-1234));
        assert_eq!(RpcValue::from("1234").as_integer().unwrap(), BigInt::from(1234));
        assert_eq!(RpcValue::from("0xf123").as_byte_array().unwrap(), vec![0xf1, 0x23]);
        assert_eq!(RpcValue::from("0x").as_byte_array().unwrap(), Vec::<u8>::new());
        assert_eq!(
            RpcValue::from("hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31").as_address().unwrap().to_string(),
            "hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31"
        );
    }

    #[test]
    fn test_type_mismatch() {
        let address = Address::try_from("hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31").unwrap();

        // typed tags never coerce
        assert!(matches!(RpcValue::from(true).as_integer(), Err(RpcError::TypeMismatch { expected: "int", .. })));
        assert!(matches!(RpcValue::from(BigInt::from(1)).as_bool(), Err(RpcError::TypeMismatch { expected: "boolean", .. })));
        assert!(matches!(RpcValue::from(address).as_string(), Err(RpcError::TypeMismatch { expected: "string", .. })));
        assert!(matches!(RpcValue::from(true).as_byte_array(), Err(RpcError::TypeMismatch { expected: "bytes", .. })));
        assert!(matches!(RpcValue::from(vec![1u8]).as_address(), Err(RpcError::TypeMismatch { expected: "address", .. })));

        // unparseable wire text is a mismatch, not a coercion
        assert!(matches!(RpcValue::from("string value").as_integer(), Err(RpcError::TypeMismatch { expected: "int", .. })));
        assert!(matches!(RpcValue::from("0x2").as_bool(), Err(RpcError::TypeMismatch { expected: "boolean", .. })));
        assert!(matches!(RpcValue::from("f123").as_byte_array(), Err(RpcError::TypeMismatch { expected: "bytes", .. })));

        // malformed addresses surface the address error class
        assert!(matches!(RpcValue::from("hx123").as_address(), Err(RpcError::AddressError(_))));
        // malformed hex surfaces the byte encoding error class
        assert!(matches!(RpcValue::from("0xf1234").as_byte_array(), Err(RpcError::HexParsingError(_))));
    }

    #[test]
    fn test_wire_round_trip() {
        // encoding into wire text and re-reading through a string-tagged value
        // preserves domain equality
        let address = Address::try_from("hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31").unwrap();

        let value = RpcValue::from(BigInt::from(-98765));
        assert_eq!(RpcValue::from(value.to_string()).as_integer().unwrap(), BigInt::from(-98765));

        let value = RpcValue::from(address);
        assert_eq!(RpcValue::from(value.to_string()).as_address().unwrap(), address);

        let value = RpcValue::from(vec![0u8, 1, 254, 255]);
        assert_eq!(RpcValue::from(value.to_string()).as_byte_array().unwrap(), vec![0u8, 1, 254, 255]);

        let value = RpcValue::from(true);
        assert!(RpcValue::from(value.to_string()).as_bool().unwrap());
    }
}
