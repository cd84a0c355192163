//! ISO 9564-1 format 0 (ANSI X9.8) PIN block construction.
//!
//! Format 0 binds a PIN to a PAN by XORing a BCD-encoded PIN field with a
//! PAN field derived from the 12 digits immediately preceding the PAN's
//! check digit. The result is not encrypted by this module; callers apply
//! whatever block cipher the surrounding transaction scheme requires.

use crate::error::{PaysecError, Result};
use crate::hex_xor;

const ISO0_BLOCK_LENGTH: usize = 8;

/// Encode the PIN field of a format 0 PIN block.
///
/// `pin` must be 4 to 12 numeric digits. Byte 0 holds a `0` control nibble
/// and the PIN length; the PIN digits follow as BCD nibbles; the remaining
/// nibbles are padded with `F`.
pub fn encode_pin_field_iso_0(pin: &str) -> Result<[u8; ISO0_BLOCK_LENGTH]> {
    if pin.len() < 4 || pin.len() > 12 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(PaysecError::InvalidLength(
            "ISO 0 PIN must be between 4 and 12 digits long".to_string(),
        ));
    }

    let mut field = [0xFFu8; ISO0_BLOCK_LENGTH];
    field[0] = 0x00 | pin.len() as u8;

    for (i, c) in pin.chars().enumerate() {
        let digit = c.to_digit(10).unwrap() as u8;
        if i % 2 == 0 {
            field[1 + i / 2] = (field[1 + i / 2] & 0x0F) | (digit << 4);
        } else {
            field[1 + i / 2] = (field[1 + i / 2] & 0xF0) | digit;
        }
    }

    Ok(field)
}

/// Decode the PIN field of a format 0 PIN block, recovering the PIN.
pub fn decode_pin_field_iso_0(pin_field: &[u8]) -> Result<String> {
    if pin_field.len() != ISO0_BLOCK_LENGTH {
        return Err(PaysecError::InvalidLength(format!(
            "ISO 0 PIN field must be 8 bytes, found {}",
            pin_field.len()
        )));
    }

    if pin_field[0] >> 4 != 0x0 {
        return Err(PaysecError::StructuralMismatch(format!(
            "PIN block is not ISO format 0: control nibble {}",
            pin_field[0] >> 4
        )));
    }

    let pin_len = (pin_field[0] & 0x0F) as usize;
    if !(4..=12).contains(&pin_len) {
        return Err(PaysecError::StructuralMismatch(format!(
            "ISO 0 PIN length must be between 4 and 12, found {pin_len}"
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
                "ISO 0 PIN field contains a non-BCD digit".to_string(),
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
        if filler != 0xF {
            return Err(PaysecError::StructuralMismatch(
                "ISO 0 PIN field filler must be F".to_string(),
            ));
        }
    }

    Ok(pin)
}

/// Encode the PAN field of a format 0 PIN block.
///
/// Takes the 12 digits of `pan` immediately preceding its check digit,
/// BCD-encodes them, and prefixes the result with two zero nibbles. `pan`
/// must be at least 13 digits long — at 12 digits the field-slicing rule
/// leaves no check digit to exclude, which ISO 9564-1 leaves undefined.
pub fn encode_pan_field_iso_0(pan: &str) -> Result<[u8; ISO0_BLOCK_LENGTH]> {
    if pan.len() < 13 || !pan.chars().all(|c| c.is_ascii_digit()) {
        return Err(PaysecError::InvalidLength(
            "ISO 0 PAN must be at least 13 numeric digits long".to_string(),
        ));
    }

    let pan_12 = &pan[pan.len() - 13..pan.len() - 1];

    let mut field = [0u8; ISO0_BLOCK_LENGTH];
    for (i, c) in pan_12.chars().enumerate() {
        let digit = c.to_digit(10).unwrap() as u8;
        if i % 2 == 0 {
            field[2 + i / 2] = digit << 4;
        } else {
            field[2 + i / 2] |= digit;
        }
    }

    Ok(field)
}

/// Build a clear format 0 PIN block by XORing the PIN and PAN fields.
pub fn pinblock_iso_0(pin: &str, pan: &str) -> Result<[u8; ISO0_BLOCK_LENGTH]> {
    let pin_field = encode_pin_field_iso_0(pin)?;
    let pan_field = encode_pan_field_iso_0(pan)?;
    let block = hex_xor::xor_bytes(&[&pin_field, &pan_field])?;
    Ok(block.try_into().map_err(|_| {
        PaysecError::Internal("ISO 0 PIN block XOR did not produce 8 bytes".to_string())
    })?)
}

/// Recover the PIN from a clear format 0 PIN block.
pub fn decode_pinblock_iso_0(pin_block: &[u8], pan: &str) -> Result<String> {
    if pin_block.len() != ISO0_BLOCK_LENGTH {
        return Err(PaysecError::InvalidLength(format!(
            "ISO 0 PIN block must be 8 bytes, found {}",
            pin_block.len()
        )));
    }
    let pan_field = encode_pan_field_iso_0(pan)?;
    let pin_field = hex_xor::xor_bytes(&[pin_block, &pan_field])?;
    decode_pin_field_iso_0(&pin_field)
}
