use crate::{RpcError, RpcResult};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Network identifiers of the public ICON networks, carried in the `nid`
/// member of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NetworkId {
    Mainnet = 1,
    Testnet = 2,
}

impl NetworkId {
    pub fn nid(&self) -> BigInt {
        BigInt::from(*self as u8)
    }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkId::Mainnet => f.write_str("mainnet"),
            NetworkId::Testnet => f.write_str("testnet"),
        }
    }
}

impl From<NetworkId> for BigInt {
    fn from(network: NetworkId) -> Self {
        network.nid()
    }
}

impl TryFrom<u8> for NetworkId {
    type Error = RpcError;

    fn try_from(value: u8) -> RpcResult<Self> {
        match value {
            1 => Ok(NetworkId::Mainnet),
            2 => Ok(NetworkId::Testnet),
            _ => Err(RpcError::PrimitiveToEnumConversionError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_id() {
        assert_eq!(NetworkId::try_from(1).unwrap(), NetworkId::Mainnet);
        assert_eq!(NetworkId::try_from(2).unwrap(), NetworkId::Testnet);
        assert!(NetworkId::try_from(3).is_err());
        assert_eq!(NetworkId::Mainnet.nid(), BigInt::from(1));
        assert_eq!(NetworkId::Testnet.to_string(), "testnet");
    }
}
