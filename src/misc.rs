//! Luhn check-digit arithmetic, DES odd-parity adjustment, and CSPRNG hex
//! generation.

use crate::error::{PaysecError, Result};
use crate::hex_xor;
use rand::RngCore;

fn digits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| PaysecError::MalformedInput(format!("non-digit character: {c}")))
        })
        .collect()
}

/// Compute the Luhn check digit for `base` (a string of decimal digits).
///
/// Doubles every other digit starting from the position the check digit
/// will occupy (i.e. the rightmost digit of `base` is doubled), subtracting
/// 9 from any doubled value that exceeds 9.
pub fn luhn_check_digit(base: &str) -> Result<u8> {
    let ds = digits(base)?;
    let mut sum: u32 = 0;
    for (i, &d) in ds.iter().rev().enumerate() {
        let d = d as u32;
        if i % 2 == 0 {
            let doubled = d * 2;
            sum += if doubled > 9 { doubled - 9 } else { doubled };
        } else {
            sum += d;
        }
    }
    Ok(((10 - (sum % 10)) % 10) as u8)
}

/// Validate a full Luhn digit string (base digits plus check digit).
pub fn luhn_validate(full: &str) -> Result<bool> {
    let ds = digits(full)?;
    let mut sum: u32 = 0;
    for (i, &d) in ds.iter().rev().enumerate() {
        let d = d as u32;
        if i % 2 == 1 {
            let doubled = d * 2;
            sum += if doubled > 9 { doubled - 9 } else { doubled };
        } else {
            sum += d;
        }
    }
    Ok(sum % 10 == 0)
}

/// Adjust a 16- or 24-byte DES/3DES key to odd parity, byte-wise. Any other
/// length is returned unchanged.
pub fn adjust_des_parity(key: &[u8]) -> Vec<u8> {
    if key.len() != 16 && key.len() != 24 {
        return key.to_vec();
    }
    key.iter()
        .map(|&b| {
            if b.count_ones() % 2 == 0 {
                b ^ 1
            } else {
                b
            }
        })
        .collect()
}

/// Obtain `n` bytes from a CSPRNG and hex-encode them (uppercase).
pub fn random_hex(n: usize) -> String {
    let mut bytes = vec![0u8; n];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex_xor::encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_check_digit_seed_vectors() {
        assert_eq!(luhn_check_digit("411111111111111").unwrap(), 1);
        assert_eq!(luhn_check_digit("7992739871").unwrap(), 3);
    }

    #[test]
    fn luhn_validate_roundtrip() {
        let base = "411111111111111";
        let check = luhn_check_digit(base).unwrap();
        let full = format!("{base}{check}");
        assert!(luhn_validate(&full).unwrap());
        assert!(luhn_validate("4111111111111111").unwrap());
    }

    #[test]
    fn luhn_rejects_non_digit() {
        assert!(luhn_check_digit("12a4").is_err());
        assert!(luhn_validate("12a4").is_err());
    }

    #[test]
    fn des_parity_flips_even_parity_bytes() {
        let key = vec![0x00u8; 16];
        let adjusted = adjust_des_parity(&key);
        for b in adjusted {
            assert_eq!(b.count_ones() % 2, 1);
        }
    }

    #[test]
    fn des_parity_leaves_odd_bytes_alone() {
        let key = vec![0x01u8; 24];
        let adjusted = adjust_des_parity(&key);
        assert_eq!(adjusted, key);
    }

    #[test]
    fn des_parity_passes_through_other_lengths() {
        let key = vec![0x00u8; 8];
        assert_eq!(adjust_des_parity(&key), key);
    }

    #[test]
    fn random_hex_has_expected_length_and_alphabet() {
        let h = random_hex(8);
        assert_eq!(h.len(), 16);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
