use crate::{Address, AddressError, Prefix, PAYLOAD_HEX_SIZE, PAYLOAD_SIZE};
use std::str;

impl Address {
    pub(crate) fn encode_payload(&self) -> String {
        let mut hex = [0u8; PAYLOAD_HEX_SIZE];
        faster_hex::hex_encode(&self.payload, &mut hex).expect("The output is exactly twice the size of the input");
        str::from_utf8(&hex).expect("hex is always valid UTF-8").to_string()
    }

    pub(crate) fn decode_payload(prefix: Prefix, body: &str) -> Result<Self, AddressError> {
        if body.len() != PAYLOAD_HEX_SIZE {
            return Err(AddressError::InvalidLength(body.len()));
        }
        // The address body is strictly lowercase hex, so reject characters
        // faster-hex would otherwise accept.
        if let Some(c) = body.chars().find(|c| !matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(AddressError::DecodingError(c));
        }
        let mut payload = [0u8; PAYLOAD_SIZE];
        faster_hex::hex_decode(body.as_bytes(), &mut payload).map_err(|_| AddressError::InvalidLength(body.len()))?;
        Ok(Self { prefix, payload })
    }
}
