use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

mod hexform;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum AddressError {
    #[error("Invalid prefix {0}")]
    InvalidPrefix(String),

    #[error("Prefix is missing")]
    MissingPrefix,

    #[error("Invalid address body length {0}")]
    InvalidLength(usize),

    #[error("Invalid character {0}")]
    DecodingError(char),
}

/// ICON address prefix (`hx` for externally owned accounts, `cx` for SCORE
/// contracts).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum Prefix {
    #[serde(rename = "hx")]
    Eoa,
    #[serde(rename = "cx")]
    Contract,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Eoa => "hx",
            Prefix::Contract => "cx",
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Prefix {
    type Error = AddressError;

    fn try_from(prefix: &str) -> Result<Self, Self::Error> {
        // The protocol treats the prefix as case-insensitive while the body
        // is strictly lowercase.
        if prefix.eq_ignore_ascii_case("hx") {
            Ok(Prefix::Eoa)
        } else if prefix.eq_ignore_ascii_case("cx") {
            Ok(Prefix::Contract)
        } else {
            Err(AddressError::InvalidPrefix(prefix.to_string()))
        }
    }
}

/// Size of the payload of an address: a 20-byte account identifier
/// (the tail of the SHA3-256 hash of the account public key).
pub const PAYLOAD_SIZE: usize = 20;

/// Length of the hex-encoded payload in the textual address form.
pub const PAYLOAD_HEX_SIZE: usize = PAYLOAD_SIZE * 2;

/// ICON `Address` struct that serializes to and from an address format string:
/// `hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, BorshSerialize, BorshDeserialize)]
pub struct Address {
    pub prefix: Prefix,
    pub payload: [u8; PAYLOAD_SIZE],
}

impl Address {
    pub fn new(prefix: Prefix, payload: [u8; PAYLOAD_SIZE]) -> Self {
        Self { prefix, payload }
    }

    pub fn is_contract(&self) -> bool {
        self.prefix == Prefix::Contract
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix, self.encode_payload())
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        (&address).into()
    }
}

impl From<&Address> for String {
    fn from(address: &Address) -> Self {
        format!("{}{}", address.prefix, address.encode_payload())
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().try_into()
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let prefix = value.get(..2).ok_or(AddressError::MissingPrefix)?;
        let body = &value[2..];
        Self::decode_payload(prefix.try_into()?, body)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

struct AddressVisitor;

impl<'de> serde::de::Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "valid address as string")
    }

    fn visit_str<E>(self, str: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Address::try_from(str).map_err(|_| serde::de::Error::invalid_value(serde::de::Unexpected::Str(str), &self))
    }
}
