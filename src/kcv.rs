//! Key Check Value computation.
//!
//! A KCV lets two parties confirm they hold the same key without revealing
//! it: it is the first 3 bytes of the ECB/NoPadding encryption of an
//! all-zero block under the key.

use crate::cipher::{aes_ecb_encrypt, tdes_ecb_encrypt};
use crate::error::{PaysecError, Result};
use crate::hex_xor;
use zeroize::Zeroizing;

/// Key family a KCV (or a key component) is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    Tdes,
    Aes,
}

const KCV_LENGTH: usize = 3;

/// Compute the Key Check Value of `key_hex` for the given family.
///
/// Returns 6 uppercase hex characters (3 bytes).
///
/// For `KeyFamily::Tdes`, a key of exactly 16 hex chars (a single, 8-byte DES
/// component) is doubled into a 2-key 3DES key before encryption — this rule
/// applies only to KCV computation, never to actual encryption operations.
pub fn kcv(key_hex: &str, family: KeyFamily) -> Result<String> {
    let key = Zeroizing::new(hex_xor::decode(key_hex)?);

    let cipher_key: Zeroizing<Vec<u8>> = match family {
        KeyFamily::Tdes => match key.len() {
            8 => {
                let mut doubled = key.to_vec();
                doubled.extend_from_slice(&key);
                Zeroizing::new(doubled)
            }
            16 | 24 => Zeroizing::new(key.to_vec()),
            other => {
                return Err(PaysecError::InvalidLength(format!(
                    "KCV: 3DES key must be 8, 16, or 24 bytes, found {other}"
                )))
            }
        },
        KeyFamily::Aes => match key.len() {
            16 | 24 | 32 => Zeroizing::new(key.to_vec()),
            other => {
                return Err(PaysecError::InvalidLength(format!(
                    "KCV: AES key must be 16, 24, or 32 bytes, found {other}"
                )))
            }
        },
    };

    let ciphertext = match family {
        KeyFamily::Tdes => tdes_ecb_encrypt(&[0u8; 8], &cipher_key)?,
        KeyFamily::Aes => aes_ecb_encrypt(&[0u8; 16], &cipher_key)?,
    };

    Ok(hex_xor::encode(&ciphertext[..KCV_LENGTH]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kcv_3des_seed_vector() {
        let key = "0123456789ABCDEFFEDCBA9876543210";
        assert_eq!(kcv(key, KeyFamily::Tdes).unwrap(), "08D7B4");
    }

    #[test]
    fn kcv_aes_128_is_6_hex_chars() {
        let key = "00112233445566778899AABBCCDDEEFF";
        let result = kcv(key, KeyFamily::Aes).unwrap();
        assert_eq!(result.len(), 6);
        assert!(result.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn kcv_single_des_component_is_doubled() {
        // An 8-byte DES component used as a 3DES KCV input must match the
        // KCV obtained from the component concatenated with itself.
        let component = "0123456789ABCDEF";
        let doubled = "0123456789ABCDEF0123456789ABCDEF";
        assert_eq!(
            kcv(component, KeyFamily::Tdes).unwrap(),
            kcv(doubled, KeyFamily::Tdes).unwrap()
        );
    }

    #[test]
    fn kcv_rejects_invalid_length() {
        assert!(kcv("AABB", KeyFamily::Aes).is_err());
        assert!(kcv("AABBCCDDEEFF", KeyFamily::Tdes).is_err());
    }
}
