use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum RpcError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },

    #[error("missing key `{0}` in rpc object")]
    MissingKey(String),

    #[error("duplicate binding for key `{key}` in {type_name}")]
    DuplicateKey { type_name: &'static str, key: String },

    #[error("no bindings declared for {0}")]
    EmptyBindingTable(&'static str),

    #[error("hex parsing error: {0}")]
    HexParsingError(#[from] faster_hex::Error),

    #[error("invalid amount `{0}`")]
    InvalidAmount(String),

    #[error("primitive to enum conversion error")]
    PrimitiveToEnumConversionError,

    #[error(transparent)]
    AddressError(#[from] icon_addresses::AddressError),

    #[error("{0}")]
    General(String),
}

impl From<String> for RpcError {
    fn from(value: String) -> Self {
        RpcError::General(value)
    }
}

impl From<&str> for RpcError {
    fn from(value: &str) -> Self {
        RpcError::General(value.to_string())
    }
}

pub type RpcResult<T> = std::result::Result<T, crate::RpcError>;
