//! Minimal ECB/NoPadding glue over AES and 3DES.
//!
//! This is not the generic, padding-aware block-cipher provider described in
//! spec §6 (that interface — CBC plus the five padding variants — is an
//! external collaborator and stays out of this crate). It is just enough to
//! let `kcv`, `dukpt`, and `pin::iso_9564::format_4` call a real cipher: a
//! single-block (or exact-multiple-of-block-size) ECB encrypt/decrypt with
//! no padding, for AES via `soft-aes` and for 3DES via RustCrypto's `des`
//! crate.

use crate::error::{PaysecError, Result};
use cipher::block_padding::NoPadding;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use des::{Des, TdesEde2, TdesEde3};

pub const DES_BLOCK_SIZE: usize = 8;
pub const AES_BLOCK_SIZE: usize = 16;

/// Encrypt `data` (a multiple of 8 bytes) under a single 8-byte DES key
/// using ECB/NoPadding.
///
/// Single DES only appears inside the DUKPT non-reversible key-generation
/// step (ANSI X9.24-1), where each 16-byte key half is used as its own
/// 8-byte DES key; it is never exposed as a general-purpose cipher choice.
pub fn des_ecb_encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.len() != DES_BLOCK_SIZE {
        return Err(PaysecError::InvalidLength(format!(
            "DES key must be 8 bytes, found {}",
            key.len()
        )));
    }
    let cipher = ecb::Encryptor::<Des>::new_from_slice(key)
        .map_err(|e| PaysecError::CryptoFailure(format!("invalid DES key: {e}")))?;
    cipher
        .encrypt_padded_vec_mut::<NoPadding>(data)
        .map_err(|e| PaysecError::CryptoFailure(format!("DES ECB encrypt failed: {e}")))
}

/// Encrypt `data` (a multiple of 16 bytes) under an AES key (16/24/32 bytes)
/// using ECB/NoPadding.
pub fn aes_ecb_encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    soft_aes::aes::aes_enc_ecb(data, key, None)
        .map_err(|e| PaysecError::CryptoFailure(format!("AES ECB encrypt failed: {e}")))
}

/// Decrypt `data` (a multiple of 16 bytes) under an AES key (16/24/32 bytes)
/// using ECB/NoPadding.
pub fn aes_ecb_decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    soft_aes::aes::aes_dec_ecb(data, key, None)
        .map_err(|e| PaysecError::CryptoFailure(format!("AES ECB decrypt failed: {e}")))
}

/// Encrypt `data` (a multiple of 8 bytes) under a 3DES key (16 bytes for
/// 2-key / 24 bytes for 3-key 3DES) using ECB/NoPadding.
pub fn tdes_ecb_encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => {
            let cipher = ecb::Encryptor::<TdesEde2>::new_from_slice(key)
                .map_err(|e| PaysecError::CryptoFailure(format!("invalid 3DES key: {e}")))?;
            cipher
                .encrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(|e| PaysecError::CryptoFailure(format!("3DES ECB encrypt failed: {e}")))
        }
        24 => {
            let cipher = ecb::Encryptor::<TdesEde3>::new_from_slice(key)
                .map_err(|e| PaysecError::CryptoFailure(format!("invalid 3DES key: {e}")))?;
            cipher
                .encrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(|e| PaysecError::CryptoFailure(format!("3DES ECB encrypt failed: {e}")))
        }
        other => Err(PaysecError::InvalidLength(format!(
            "3DES key must be 16 or 24 bytes, found {other}"
        ))),
    }
}

/// Decrypt `data` (a multiple of 8 bytes) under a 3DES key (16 or 24 bytes)
/// using ECB/NoPadding.
pub fn tdes_ecb_decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => {
            let cipher = ecb::Decryptor::<TdesEde2>::new_from_slice(key)
                .map_err(|e| PaysecError::CryptoFailure(format!("invalid 3DES key: {e}")))?;
            cipher
                .decrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(|e| PaysecError::CryptoFailure(format!("3DES ECB decrypt failed: {e}")))
        }
        24 => {
            let cipher = ecb::Decryptor::<TdesEde3>::new_from_slice(key)
                .map_err(|e| PaysecError::CryptoFailure(format!("invalid 3DES key: {e}")))?;
            cipher
                .decrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(|e| PaysecError::CryptoFailure(format!("3DES ECB decrypt failed: {e}")))
        }
        other => Err(PaysecError::InvalidLength(format!(
            "3DES key must be 16 or 24 bytes, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aes_ecb_roundtrip() {
        let key = [0x11u8; 16];
        let data = [0x22u8; 16];
        let ct = aes_ecb_encrypt(&data, &key).unwrap();
        let pt = aes_ecb_decrypt(&ct, &key).unwrap();
        assert_eq!(pt, data);
    }

    #[test]
    fn tdes_ecb_roundtrip_double_length() {
        let key = [0x11u8; 16];
        let data = [0x22u8; 8];
        let ct = tdes_ecb_encrypt(&data, &key).unwrap();
        let pt = tdes_ecb_decrypt(&ct, &key).unwrap();
        assert_eq!(pt, data);
    }

    #[test]
    fn tdes_ecb_roundtrip_triple_length() {
        let key = [0x11u8; 24];
        let data = [0x22u8; 8];
        let ct = tdes_ecb_encrypt(&data, &key).unwrap();
        let pt = tdes_ecb_decrypt(&ct, &key).unwrap();
        assert_eq!(pt, data);
    }

    #[test]
    fn tdes_rejects_bad_key_length() {
        let key = [0x11u8; 8];
        let data = [0x22u8; 8];
        assert!(tdes_ecb_encrypt(&data, &key).is_err());
    }

    #[test]
    fn des_ecb_encrypt_produces_a_full_block() {
        let key = [0x11u8; 8];
        let data = [0x22u8; 8];
        let ct = des_ecb_encrypt(&data, &key).unwrap();
        assert_eq!(ct.len(), DES_BLOCK_SIZE);
        assert_ne!(ct, data);
    }

    #[test]
    fn des_rejects_bad_key_length() {
        let key = [0x11u8; 16];
        let data = [0x22u8; 8];
        assert!(des_ecb_encrypt(&data, &key).is_err());
    }
}
