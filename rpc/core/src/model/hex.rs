use crate::RpcResult;
use num_bigint::{BigInt, BigUint, Sign};
use std::str;

/// Prefix of every hex-encoded quantity on the ICON wire.
pub const HEX_PREFIX: &str = "0x";

pub fn has_hex_prefix(text: &str) -> bool {
    text.starts_with(HEX_PREFIX)
}

pub fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix(HEX_PREFIX).unwrap_or(text)
}

/// Full slice content, `0x`-prefixed, lowercase
/// (so digit counts are always even).
pub fn prefixed_hex_encode(data: &[u8]) -> String {
    // an empty slice is allowed and encodes to the bare prefix
    if data.is_empty() {
        return HEX_PREFIX.to_string();
    }

    let mut hex = vec![0u8; data.len() * 2];
    faster_hex::hex_encode(data, hex.as_mut_slice()).expect("The output is exactly twice the size of the input");
    format!("{}{}", HEX_PREFIX, str::from_utf8(&hex).expect("hex is always valid UTF-8"))
}

/// Decodes hex text into bytes. The `0x` prefix is optional on input and both
/// the empty string and the bare prefix decode to an empty sequence.
pub fn prefixed_hex_decode(text: &str) -> RpcResult<Vec<u8>> {
    let digits = strip_hex_prefix(text);
    if digits.is_empty() {
        return Ok(vec![]);
    }

    let mut bytes = vec![0u8; digits.len() / 2];
    faster_hex::hex_decode(digits.as_bytes(), bytes.as_mut_slice())?;
    Ok(bytes)
}

/// Canonical integer wire text: sign, `0x`, lowercase hex magnitude.
/// Odd digit counts are valid and leading zeros are absent.
pub fn int_to_hex(value: &BigInt) -> String {
    match value.sign() {
        Sign::Minus => format!("-{}{:x}", HEX_PREFIX, value.magnitude()),
        _ => format!("{}{:x}", HEX_PREFIX, value.magnitude()),
    }
}

/// Parses integer wire text: `0x`/`-0x` hex or plain decimal.
pub fn int_from_hex(text: &str) -> Option<BigInt> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if let Some(digits) = rest.strip_prefix(HEX_PREFIX) {
        if digits.is_empty() {
            return None;
        }
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16)?;
        let value = BigInt::from(magnitude);
        Some(if negative { -value } else { value })
    } else {
        text.parse::<BigInt>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_hex_convert() {
        let v: Vec<u8> = vec![0x0, 0xab, 0x55, 0x30, 0x1f, 0x63];
        let k = "0x00ab55301f63";
        assert_eq!(k.to_string(), prefixed_hex_encode(&v));
        assert_eq!(prefixed_hex_decode(k).unwrap(), v);

        // the prefix is optional on input
        assert_eq!(prefixed_hex_decode("00ab55301f63").unwrap(), v);

        assert!(prefixed_hex_decode("not a number").is_err());
        assert!(prefixed_hex_decode("0xab01").is_ok());

        // even digit count is required
        assert!(prefixed_hex_decode("0xab0").is_err());
        // the empty sequence is supported in both spellings
        assert_eq!(prefixed_hex_decode("0x").unwrap().len(), 0);
        assert_eq!(prefixed_hex_decode("").unwrap().len(), 0);
        assert_eq!(prefixed_hex_encode(&[]), "0x");
    }

    #[test]
    fn test_int_hex_convert() {
        let cases: Vec<(i64, &str)> = vec![(0, "0x0"), (1, "0x1"), (1234, "0x4d2"), (-1234, "-0x4d2"), (255, "0xff")];
        for (value, text) in cases {
            let value = BigInt::from(value);
            assert_eq!(int_to_hex(&value), text);
            assert_eq!(int_from_hex(text).unwrap(), value);
        }

        // decimal wire text is accepted too
        assert_eq!(int_from_hex("1234").unwrap(), BigInt::from(1234));
        assert_eq!(int_from_hex("-1234").unwrap(), BigInt::from(-1234));

        // odd digit counts and leading zeros are valid on input
        assert_eq!(int_from_hex("0x04d2").unwrap(), BigInt::from(1234));

        assert!(int_from_hex("0x").is_none());
        assert!(int_from_hex("").is_none());
        assert!(int_from_hex("string value").is_none());

        // beyond 64 bits
        let big = int_from_hex("0x10000000000000000").unwrap();
        assert_eq!(int_to_hex(&big), "0x10000000000000000");
    }
}
