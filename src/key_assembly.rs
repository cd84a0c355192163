//! Multi-part key component assembly.
//!
//! Components of equal length are combined by XOR into a final key, along
//! with the final key's Key Check Value.

use crate::error::{PaysecError, Result};
use crate::hex_xor;
use crate::kcv::{kcv, KeyFamily};
use zeroize::Zeroizing;

/// Symmetric-key family and shape a set of components must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Aes,
    Tdes,
}

/// Describes the component count and length a set of key components must
/// satisfy, and the KCV family used to report the assembled key's check
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub family: AlgorithmFamily,
    pub key_length_bytes: usize,
    pub component_count: usize,
    pub kcv_type: KeyFamily,
}

impl AlgorithmProfile {
    /// Build a profile, validating the invariants from spec §3:
    /// `component_length_bytes == key_length_bytes`; AES key lengths are one
    /// of {16, 24, 32}; 3DES key lengths are one of {16, 24}; component
    /// count is 1, 2, or 3.
    pub fn new(
        family: AlgorithmFamily,
        key_length_bytes: usize,
        component_count: usize,
        kcv_type: KeyFamily,
    ) -> Result<Self> {
        match family {
            AlgorithmFamily::Aes => {
                if ![16, 24, 32].contains(&key_length_bytes) {
                    return Err(PaysecError::InvalidLength(format!(
                        "AES key length must be 16, 24, or 32 bytes, found {key_length_bytes}"
                    )));
                }
            }
            AlgorithmFamily::Tdes => {
                if ![16, 24].contains(&key_length_bytes) {
                    return Err(PaysecError::InvalidLength(format!(
                        "3DES key length must be 16 or 24 bytes, found {key_length_bytes}"
                    )));
                }
            }
        }
        if !(1..=3).contains(&component_count) {
            return Err(PaysecError::InvalidLength(format!(
                "component count must be 1, 2, or 3, found {component_count}"
            )));
        }
        Ok(Self {
            family,
            key_length_bytes,
            component_count,
            kcv_type,
        })
    }

    fn component_length_bytes(&self) -> usize {
        self.key_length_bytes
    }
}

/// The final key and its check value, both uppercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledKey {
    pub key_hex: String,
    pub kcv_hex: String,
}

/// Assemble `components` (hex strings) into a final key per `profile`.
///
/// Validates the component count and each component's length, then XORs the
/// components together (a single component is returned unchanged) and
/// reports the resulting key's KCV.
pub fn assemble(components: &[&str], profile: &AlgorithmProfile) -> Result<AssembledKey> {
    if components.len() != profile.component_count {
        return Err(PaysecError::InvalidLength(format!(
            "expected {} component(s), found {}",
            profile.component_count,
            components.len()
        )));
    }

    let expected_hex_len = profile.component_length_bytes() * 2;
    for (i, component) in components.iter().enumerate() {
        if component.len() != expected_hex_len {
            return Err(PaysecError::InvalidLength(format!(
                "component {} must be {} hex chars, found {}",
                i,
                expected_hex_len,
                component.len()
            )));
        }
    }

    let key_hex = xor_all(components)?;
    let kcv_hex = kcv(&key_hex, profile.kcv_type)?;

    Ok(AssembledKey { key_hex, kcv_hex })
}

fn xor_all(components: &[&str]) -> Result<String> {
    if components.len() == 1 {
        let decoded = Zeroizing::new(hex_xor::decode(components[0])?);
        return Ok(hex_xor::encode(&decoded));
    }
    hex_xor::xor_hex(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_two_aes_128_components() {
        let profile =
            AlgorithmProfile::new(AlgorithmFamily::Aes, 16, 2, KeyFamily::Aes).unwrap();
        let components = [
            "11111111111111111111111111111111",
            "22222222222222222222222222222222",
        ];
        let assembled = assemble(&components, &profile).unwrap();
        assert_eq!(assembled.key_hex, "33333333333333333333333333333333");
        assert_eq!(assembled.kcv_hex, kcv("33333333333333333333333333333333", KeyFamily::Aes).unwrap());
    }

    #[test]
    fn single_component_passes_through_unchanged() {
        let profile =
            AlgorithmProfile::new(AlgorithmFamily::Aes, 16, 1, KeyFamily::Aes).unwrap();
        let component = "00112233445566778899aabbccddeeff";
        let component = &component[0..32];
        let assembled = assemble(&[component], &profile).unwrap();
        assert_eq!(assembled.key_hex, component.to_uppercase());
    }

    #[test]
    fn rejects_wrong_component_count() {
        let profile =
            AlgorithmProfile::new(AlgorithmFamily::Aes, 16, 2, KeyFamily::Aes).unwrap();
        let component = "00112233445566778899aabbccddeeff";
        assert!(assemble(&[component], &profile).is_err());
    }

    #[test]
    fn rejects_wrong_component_length() {
        let profile =
            AlgorithmProfile::new(AlgorithmFamily::Aes, 16, 1, KeyFamily::Aes).unwrap();
        assert!(assemble(&["AABB"], &profile).is_err());
    }

    #[test]
    fn rejects_invalid_profile_shape() {
        assert!(AlgorithmProfile::new(AlgorithmFamily::Tdes, 32, 1, KeyFamily::Tdes).is_err());
        assert!(AlgorithmProfile::new(AlgorithmFamily::Aes, 16, 4, KeyFamily::Aes).is_err());
    }
}
