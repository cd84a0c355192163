//! Hex encoding/decoding and multi-operand XOR.
//!
//! This is the leaf module every other module in the crate builds on: all
//! public APIs speak uppercase hex strings, and internally everything is
//! XORed and sliced as plain byte buffers.

use crate::error::{PaysecError, Result};

/// Decode a hex string into bytes.
///
/// Accepts case-insensitive hex; fails with `MalformedInput` if the length is
/// odd or a non-hex character is present.
pub fn decode(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str).map_err(|e| PaysecError::MalformedInput(format!("{hex_str}: {e}")))
}

/// Encode bytes as an uppercase hex string.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// XOR an arbitrary number of equal-length byte arrays.
///
/// A single operand is returned unchanged; an empty list of operands yields
/// an empty vector. All operands must have the same length, or
/// `InvalidLength` is returned — the source library's defensive zero-padding
/// of mismatched operands is deliberately not reproduced here (see spec §9).
pub fn xor_bytes(operands: &[&[u8]]) -> Result<Vec<u8>> {
    let Some(first) = operands.first() else {
        return Ok(Vec::new());
    };
    let len = first.len();
    for operand in operands.iter() {
        if operand.len() != len {
            return Err(PaysecError::InvalidLength(format!(
                "xor operands must have equal length: expected {len}, found {}",
                operand.len()
            )));
        }
    }
    let mut result = vec![0u8; len];
    for operand in operands.iter() {
        for (r, b) in result.iter_mut().zip(operand.iter()) {
            *r ^= b;
        }
    }
    Ok(result)
}

/// XOR an arbitrary number of equal-length hex strings, returning uppercase hex.
pub fn xor_hex(operands: &[&str]) -> Result<String> {
    let decoded: Result<Vec<Vec<u8>>> = operands.iter().map(|h| decode(h)).collect();
    let decoded = decoded?;
    let slices: Vec<&[u8]> = decoded.iter().map(|v| v.as_slice()).collect();
    Ok(encode(&xor_bytes(&slices)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_encode_roundtrip() {
        let h = "0123456789abcdef";
        let bytes = decode(h).unwrap();
        assert_eq!(encode(&bytes), "0123456789ABCDEF");
    }

    #[test]
    fn decode_rejects_odd_length() {
        assert!(decode("ABC").is_err());
    }

    #[test]
    fn decode_rejects_non_hex() {
        assert!(decode("ZZ").is_err());
    }

    #[test]
    fn xor_single_operand_is_identity() {
        let a = [0xAAu8, 0xBB];
        assert_eq!(xor_bytes(&[&a]).unwrap(), vec![0xAA, 0xBB]);
    }

    #[test]
    fn xor_empty_is_empty() {
        assert_eq!(xor_bytes(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn xor_self_is_zero() {
        let a = [0x12u8, 0x34, 0x56];
        assert_eq!(xor_bytes(&[&a, &a]).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn xor_is_associative() {
        let a = [0x11u8, 0x22];
        let b = [0x33u8, 0x44];
        let c = [0x55u8, 0x66];
        let left = xor_bytes(&[&a, &b, &c]).unwrap();
        let ab = xor_bytes(&[&a, &b]).unwrap();
        let right = xor_bytes(&[&ab, &c]).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn xor_rejects_mismatched_lengths() {
        let a = [0x11u8, 0x22];
        let b = [0x33u8];
        assert!(xor_bytes(&[&a, &b]).is_err());
    }

    #[test]
    fn xor_hex_uppercases_output() {
        assert_eq!(xor_hex(&["ff00", "00ff"]).unwrap(), "FFFF");
    }
}
