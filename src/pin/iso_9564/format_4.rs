//! ISO 9564-1 format 4 PIN block construction: the AES Encrypt-XOR-Encrypt
//! scheme.
//!
//! Unlike formats 0 and 3, format 4 is defined only as an encrypted block —
//! there is no meaningful clear representation to XOR and hand back, since
//! the PIN field itself is encrypted before the PAN field is ever combined
//! with it. The construction requires an AES PIN encryption key (PEK) of
//! 16, 24, or 32 bytes.

use crate::cipher::{aes_ecb_decrypt, aes_ecb_encrypt};
use crate::error::{PaysecError, Result};
use crate::hex_xor;
use crate::misc::random_hex;

const ISO4_BLOCK_LENGTH: usize = 16;

fn validate_pek(pek: &[u8]) -> Result<()> {
    if ![16, 24, 32].contains(&pek.len()) {
        return Err(PaysecError::InvalidLength(format!(
            "ISO 4 PEK must be 16, 24, or 32 bytes, found {}",
            pek.len()
        )));
    }
    Ok(())
}

/// Encode the plaintext PIN field of a format 4 PIN block.
///
/// `pin` must be 4 to 12 numeric digits. Byte 0 holds the `4` control
/// nibble and the PIN length; the PIN digits follow as BCD nibbles; the
/// nibbles up to position 14 are padded with `A`; the final 16 nibbles are
/// random, drawn from the CSPRNG.
pub fn encode_pin_field_iso_4(pin: &str) -> Result<[u8; ISO4_BLOCK_LENGTH]> {
    encode_pin_field_iso_4_with_random(pin, &random_nibbles())
}

/// As [`encode_pin_field_iso_4`], but with caller-supplied random nibbles
/// (16 nibbles, each 0x0-0xF) rather than a fresh CSPRNG draw. Exists for
/// deterministic testing against published seed vectors.
pub fn encode_pin_field_iso_4_with_random(
    pin: &str,
    random_nibbles: &[u8; 16],
) -> Result<[u8; ISO4_BLOCK_LENGTH]> {
    if pin.len() < 4 || pin.len() > 12 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(PaysecError::InvalidLength(
            "ISO 4 PIN must be between 4 and 12 digits long".to_string(),
        ));
    }
    if random_nibbles.iter().any(|&n| n > 0xF) {
        return Err(PaysecError::MalformedInput(
            "ISO 4 random nibbles must be valid hex digits".to_string(),
        ));
    }

    let mut field = [0u8; ISO4_BLOCK_LENGTH];
    field[0] = 0x40 | pin.len() as u8;

    for i in 0..14 {
        let nibble = if i < pin.len() {
            pin.as_bytes()[i] - b'0'
        } else {
            0xA
        };
        if i % 2 == 0 {
            field[1 + i / 2] = (field[1 + i / 2] & 0x0F) | (nibble << 4);
        } else {
            field[1 + i / 2] = (field[1 + i / 2] & 0xF0) | nibble;
        }
    }

    for i in 0..16 {
        let nibble = random_nibbles[i];
        if i % 2 == 0 {
            field[8 + i / 2] = (field[8 + i / 2] & 0x0F) | (nibble << 4);
        } else {
            field[8 + i / 2] = (field[8 + i / 2] & 0xF0) | nibble;
        }
    }

    Ok(field)
}

fn random_nibbles() -> [u8; 16] {
    let bytes = hex_xor::decode(&random_hex(8)).unwrap();
    let mut nibbles = [0u8; 16];
    for (i, n) in nibbles.iter_mut().enumerate() {
        let byte = bytes[i / 2];
        *n = if i % 2 == 0 { byte >> 4 } else { byte & 0x0F };
    }
    nibbles
}

/// Decode the plaintext PIN field of a format 4 PIN block, recovering the
/// PIN. The trailing 16 random nibbles are not checked, since they carry no
/// structural invariant.
pub fn decode_pin_field_iso_4(pin_field: &[u8]) -> Result<String> {
    if pin_field.len() != ISO4_BLOCK_LENGTH {
        return Err(PaysecError::InvalidLength(format!(
            "ISO 4 PIN field must be 16 bytes, found {}",
            pin_field.len()
        )));
    }

    if pin_field[0] >> 4 != 0x4 {
        return Err(PaysecError::StructuralMismatch(format!(
            "PIN block is not ISO format 4: control nibble {}",
            pin_field[0] >> 4
        )));
    }

    let pin_len = (pin_field[0] & 0x0F) as usize;
    if !(4..=12).contains(&pin_len) {
        return Err(PaysecError::StructuralMismatch(format!(
            "ISO 4 PIN length must be between 4 and 12, found {pin_len}"
        )));
    }

    let mut pin = String::new();
    for i in 0..pin_len {
        let digit = if i % 2 == 0 {
            pin_field[1 + i / 2] >> 4
        } else {
            pin_field[1 + i / 2] & 0x0F
        };
        if digit > 9 {
            return Err(PaysecError::StructuralMismatch(
                "ISO 4 PIN field contains a non-BCD digit".to_string(),
            ));
        }
        pin.push_str(&digit.to_string());
    }

    for i in pin_len..14 {
        let filler = if i % 2 == 0 {
            pin_field[1 + i / 2] >> 4
        } else {
            pin_field[1 + i / 2] & 0x0F
        };
        if filler != 0xA {
            return Err(PaysecError::StructuralMismatch(
                "ISO 4 PIN field filler must be A".to_string(),
            ));
        }
    }

    Ok(pin)
}

/// Encode the PAN field of a format 4 PIN block.
///
/// `pan` must be 1 to 19 numeric digits. Left-padded to 12 digits with `0`;
/// prefixed with a single hex digit holding `max(len(PAN) - 12, 0)`; the
/// remaining nibbles are padded with `0`.
pub fn encode_pan_field_iso_4(pan: &str) -> Result<[u8; ISO4_BLOCK_LENGTH]> {
    if pan.is_empty() || pan.len() > 19 || !pan.chars().all(|c| c.is_ascii_digit()) {
        return Err(PaysecError::InvalidLength(
            "ISO 4 PAN must be between 1 and 19 digits long".to_string(),
        ));
    }

    let m = pan.len().saturating_sub(12) as u8;
    let padded_pan = format!("{pan:0>12}");

    let mut field_hex = format!("{m:X}");
    field_hex.push_str(&padded_pan);
    while field_hex.len() < ISO4_BLOCK_LENGTH * 2 {
        field_hex.push('0');
    }

    let bytes = hex_xor::decode(&field_hex)?;
    bytes.try_into().map_err(|_| {
        PaysecError::Internal("ISO 4 PAN field did not produce 16 bytes".to_string())
    })
}

/// Encipher a PIN into a format 4 PIN block.
///
/// Computes `AES-ECB(pek, panField XOR AES-ECB(pek, pinField))`, consuming
/// the CSPRNG for the plaintext PIN field's trailing random nibbles.
pub fn encipher_pinblock_iso_4(pek: &[u8], pin: &str, pan: &str) -> Result<Vec<u8>> {
    validate_pek(pek)?;
    let pin_field = encode_pin_field_iso_4(pin)?;
    let pan_field = encode_pan_field_iso_4(pan)?;

    let block_a = aes_ecb_encrypt(&pin_field, pek)?;
    let block_b = hex_xor::xor_bytes(&[&block_a, &pan_field])?;
    aes_ecb_encrypt(&block_b, pek)
}

/// Decipher a format 4 PIN block, recovering the PIN.
pub fn decipher_pinblock_iso_4(pek: &[u8], pin_block: &[u8], pan: &str) -> Result<String> {
    validate_pek(pek)?;
    if pin_block.len() != ISO4_BLOCK_LENGTH {
        return Err(PaysecError::InvalidLength(format!(
            "ISO 4 PIN block must be 16 bytes, found {}",
            pin_block.len()
        )));
    }

    let block_b = aes_ecb_decrypt(pin_block, pek)?;
    let pan_field = encode_pan_field_iso_4(pan)?;
    let block_a = hex_xor::xor_bytes(&[&block_b, &pan_field])?;
    let pin_field = aes_ecb_decrypt(&block_a, pek)?;
    decode_pin_field_iso_4(&pin_field)
}
