//! ANSI X9.24-1 DUKPT (Derived Unique Key Per Transaction) key derivation.
//!
//! Given a Base Derivation Key (BDK) and a Key Serial Number (KSN), derives
//! the Initial PIN Encryption Key (IPEK), walks the 21-bit counter
//! shift-register to the transaction key for a given KSN, and derives the
//! five ANSI session-key variants from it.

use crate::cipher::{des_ecb_encrypt, tdes_ecb_encrypt};
use crate::error::{PaysecError, Result};
use crate::hex_xor;
use crate::observer::{notify, DebugObserver};
use zeroize::Zeroizing;

const KSN_LENGTH: usize = 10;
const COUNTER_BITS: u32 = 21;

/// The 16-byte ANSI key-variant mask, as two repetitions of the 8-byte
/// pattern `C0 C0 C0 C0 00 00 00 00`. Repeating the 8-byte unit generalizes
/// cleanly to 24-byte (3-key) BDKs.
const VARIANT_UNIT: [u8; 8] = [0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00];

const PIN_ENCRYPTION_VARIANT: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0,
];
const MAC_REQUEST_VARIANT: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
];
const MAC_RESPONSE_VARIANT: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
];
const DATA_REQUEST_VARIANT: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
const DATA_RESPONSE_VARIANT: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// The five ANSI X9.24-1 session-key variants derived from a transaction key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    pub pin_encryption: String,
    pub mac_request: String,
    pub mac_response: String,
    pub data_request: String,
    pub data_response: String,
}

fn variant_mask(len: usize) -> Vec<u8> {
    VARIANT_UNIT.iter().cycle().take(len).copied().collect()
}

fn validate_bdk(bdk: &[u8]) -> Result<()> {
    if bdk.len() != 16 && bdk.len() != 24 {
        return Err(PaysecError::InvalidLength(format!(
            "DUKPT BDK must be 16 or 24 bytes, found {}",
            bdk.len()
        )));
    }
    Ok(())
}

fn validate_ksn(ksn: &[u8]) -> Result<()> {
    if ksn.len() != KSN_LENGTH {
        return Err(PaysecError::InvalidLength(format!(
            "DUKPT KSN must be exactly {KSN_LENGTH} bytes, found {}",
            ksn.len()
        )));
    }
    Ok(())
}

/// Extract the 21-bit transaction counter from a 10-byte KSN.
fn counter_of(ksn: &[u8; KSN_LENGTH]) -> u32 {
    let low3 = u32::from(ksn[7]) << 16 | u32::from(ksn[8]) << 8 | u32::from(ksn[9]);
    low3 & 0x1F_FFFF
}

/// Clear the low 21 bits of a 10-byte KSN, returning the masked copy.
fn clear_counter(ksn: &[u8; KSN_LENGTH]) -> [u8; KSN_LENGTH] {
    let mut cleared = *ksn;
    cleared[7] &= 0xE0;
    cleared[8] = 0x00;
    cleared[9] = 0x00;
    cleared
}

fn set_bit(shift_reg: &mut [u8; KSN_LENGTH], bit: u32) {
    let byte_index = KSN_LENGTH - 1 - (bit / 8) as usize;
    let bit_index = bit % 8;
    shift_reg[byte_index] |= 1 << bit_index;
}

fn bit_is_set(counter: u32, bit: u32) -> bool {
    (counter >> bit) & 1 == 1
}

/// Derive the Initial PIN Encryption Key (IPEK) from a BDK and KSN.
///
/// `bdk_hex` must decode to 16 or 24 bytes; `ksn_hex` must decode to exactly
/// 10 bytes. The transaction counter in the KSN is ignored; only the
/// counter-cleared KSN bytes feed the derivation.
pub fn derive_ipek(
    bdk_hex: &str,
    ksn_hex: &str,
    observer: Option<&dyn DebugObserver>,
) -> Result<String> {
    let bdk = Zeroizing::new(hex_xor::decode(bdk_hex)?);
    validate_bdk(&bdk)?;
    let ksn = hex_xor::decode(ksn_hex)?;
    validate_ksn(&ksn)?;
    let ksn: [u8; KSN_LENGTH] = ksn.try_into().unwrap();

    let cleared = clear_counter(&ksn);
    let ksn8 = &cleared[2..10];

    let ipek_left = tdes_ecb_encrypt(ksn8, &bdk)?;

    let mask = variant_mask(bdk.len());
    let bdk_mod: Zeroizing<Vec<u8>> =
        Zeroizing::new(bdk.iter().zip(mask.iter()).map(|(b, m)| b ^ m).collect());
    let ipek_right = tdes_ecb_encrypt(ksn8, &bdk_mod)?;

    let mut ipek = Zeroizing::new(ipek_left);
    ipek.extend_from_slice(&ipek_right);

    notify(observer, "dukpt", "derived IPEK");
    Ok(hex_xor::encode(&ipek))
}

/// Non-reversible key-generation step: derives a new 16-byte key from
/// `current_key` and an 8-byte `ksn_portion`.
///
/// Each 8-byte key half is used as a single DES key here, not a 3DES key —
/// the ANSI X9.24-1 key-generation step runs DES, not 3DES, on the 8-byte
/// halves of the 16-byte working key.
fn generate_key(current_key: &[u8; 16], ksn_portion: &[u8; 8]) -> Result<[u8; 16]> {
    let left = &current_key[..8];
    let right = &current_key[8..];

    let m: Vec<u8> = ksn_portion.iter().zip(right).map(|(a, b)| a ^ b).collect();
    let new_left_raw = des_ecb_encrypt(&m, left)?;
    let new_left: Vec<u8> = new_left_raw.iter().zip(right).map(|(a, b)| a ^ b).collect();

    let mask = variant_mask(16);
    let current_key_mod: Vec<u8> = current_key
        .iter()
        .zip(mask.iter())
        .map(|(b, m)| b ^ m)
        .collect();
    let left_prime = &current_key_mod[..8];
    let right_prime = &current_key_mod[8..];

    let m2: Vec<u8> = ksn_portion
        .iter()
        .zip(right_prime)
        .map(|(a, b)| a ^ b)
        .collect();
    let new_right_raw = des_ecb_encrypt(&m2, left_prime)?;
    let new_right: Vec<u8> = new_right_raw
        .iter()
        .zip(right_prime)
        .map(|(a, b)| a ^ b)
        .collect();

    let mut new_key = [0u8; 16];
    new_key[..8].copy_from_slice(&new_left);
    new_key[8..].copy_from_slice(&new_right);
    Ok(new_key)
}

/// Derive the transaction key for a given KSN by walking the 21-bit counter
/// shift register forward from the IPEK.
///
/// If the KSN's counter is zero, the transaction key equals the IPEK.
pub fn derive_transaction_key(
    bdk_hex: &str,
    ksn_hex: &str,
    observer: Option<&dyn DebugObserver>,
) -> Result<String> {
    let ipek_hex = derive_ipek(bdk_hex, ksn_hex, observer)?;
    let ipek_bytes = hex_xor::decode(&ipek_hex)?;
    let mut current_key: Zeroizing<[u8; 16]> = Zeroizing::new(ipek_bytes.try_into().unwrap());

    let ksn = hex_xor::decode(ksn_hex)?;
    let ksn: [u8; KSN_LENGTH] = ksn.try_into().unwrap();
    let counter = counter_of(&ksn);
    let mut shift_reg = clear_counter(&ksn);

    for bit in 0..COUNTER_BITS {
        if bit_is_set(counter, bit) {
            set_bit(&mut shift_reg, bit);
            let ksn_portion: [u8; 8] = shift_reg[2..10].try_into().unwrap();
            current_key = Zeroizing::new(generate_key(&current_key, &ksn_portion)?);
        }
    }

    notify(observer, "dukpt", "derived transaction key");
    Ok(hex_xor::encode(&current_key))
}

/// Derive the five ANSI X9.24-1 session-key variants from a transaction key.
pub fn session_keys(transaction_key_hex: &str) -> Result<SessionKeys> {
    let key = Zeroizing::new(hex_xor::decode(transaction_key_hex)?);
    if key.len() != 16 {
        return Err(PaysecError::InvalidLength(format!(
            "DUKPT transaction key must be 16 bytes, found {}",
            key.len()
        )));
    }

    let xor_variant = |variant: &[u8; 16]| -> String {
        let out: Vec<u8> = key.iter().zip(variant.iter()).map(|(a, b)| a ^ b).collect();
        hex_xor::encode(&out)
    };

    Ok(SessionKeys {
        pin_encryption: xor_variant(&PIN_ENCRYPTION_VARIANT),
        mac_request: xor_variant(&MAC_REQUEST_VARIANT),
        mac_response: xor_variant(&MAC_RESPONSE_VARIANT),
        data_request: xor_variant(&DATA_REQUEST_VARIANT),
        data_response: xor_variant(&DATA_RESPONSE_VARIANT),
    })
}

/// Derive the transaction key and its five session-key variants in one call.
pub fn derive_session_keys(
    bdk_hex: &str,
    ksn_hex: &str,
    observer: Option<&dyn DebugObserver>,
) -> Result<SessionKeys> {
    let transaction_key = derive_transaction_key(bdk_hex, ksn_hex, observer)?;
    session_keys(&transaction_key)
}

#[cfg(test)]
mod tests;
