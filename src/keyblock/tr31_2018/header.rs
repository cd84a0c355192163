//! TR-31 key block header parsing.
//!
//! A TR-31 key block opens with a fixed 16 ASCII-character header (ASC X9
//! TR-31: 2018, p. 15ff) carrying the key block's version, declared total
//! length, usage, algorithm, mode of use, version number, exportability,
//! and the count of optional blocks that follow it. This module only reads
//! a header out of an already-assembled key block string; it does not
//! construct or serialize one — wrapping/unwrapping a key block is out of
//! this crate's scope (see the crate-level TR-31 module docs).
//!
//! # Header layout
//! - **Byte 0**: Key Block Version ID (1AN)
//! - **Bytes 1-4**: Key Block Length, 4-digit decimal (4N)
//! - **Bytes 5-6**: Key Usage (2AN)
//! - **Byte 7**: Algorithm (1AN)
//! - **Byte 8**: Mode of Use (1AN)
//! - **Bytes 9-10**: Key Version Number (2AN)
//! - **Byte 11**: Exportability (1AN)
//! - **Bytes 12-13**: Number of Optional Blocks, 2-digit decimal (2N)
//! - **Bytes 14-15**: Reserved for Future Use (2N)
//!
//! # References
//! - TR-31: 2018, p. 15ff.

use crate::error::{PaysecError, Result};
use crate::keyblock::tr31_2018::header_constants::{
    ALLOWED_ALGORITHMS, ALLOWED_EXPORTABILITIES, ALLOWED_KEY_USAGES, ALLOWED_MODES_OF_USE,
    ALLOWED_VERSION_IDS,
};

pub const HEADER_LENGTH: usize = 16;

/// A parsed TR-31 key block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tr31Header {
    version_id: char,
    block_length: u16,
    key_usage: String,
    algorithm: char,
    mode_of_use: char,
    key_version_number: String,
    exportability: char,
    num_optional_blocks: u8,
    reserved: String,
}

impl Tr31Header {
    /// Parse the fixed 16-character header from the start of `header_str`.
    ///
    /// Only the header's own field widths and decimal-ness are checked here;
    /// the header-declared total length is cross-checked against the whole
    /// key block by [`super::parse`], not by this function in isolation.
    pub fn parse(header_str: &str) -> Result<Self> {
        if header_str.len() < HEADER_LENGTH {
            return Err(PaysecError::StructuralMismatch(format!(
                "TR-31 header must be at least {HEADER_LENGTH} ASCII characters, found {}",
                header_str.len()
            )));
        }
        if !header_str.is_char_boundary(HEADER_LENGTH) || !header_str.is_ascii() {
            return Err(PaysecError::MalformedInput(
                "TR-31 header must be ASCII".to_string(),
            ));
        }

        let version_id = first_char(header_str, 0)?;
        let block_length = header_str[1..5].parse::<u16>().map_err(|_| {
            PaysecError::InvalidLength(format!(
                "TR-31 header block length must be 4 decimal digits, found {:?}",
                &header_str[1..5]
            ))
        })?;
        let key_usage = header_str[5..7].to_string();
        let algorithm = first_char(header_str, 7)?;
        let mode_of_use = first_char(header_str, 8)?;
        let key_version_number = header_str[9..11].to_string();
        let exportability = first_char(header_str, 11)?;
        let num_optional_blocks = header_str[12..14].parse::<u8>().map_err(|_| {
            PaysecError::InvalidLength(format!(
                "TR-31 header optional block count must be 2 decimal digits, found {:?}",
                &header_str[12..14]
            ))
        })?;
        let reserved = header_str[14..16].to_string();

        Ok(Self {
            version_id,
            block_length,
            key_usage,
            algorithm,
            mode_of_use,
            key_version_number,
            exportability,
            num_optional_blocks,
            reserved,
        })
    }

    pub fn version_id(&self) -> char {
        self.version_id
    }

    pub fn block_length(&self) -> u16 {
        self.block_length
    }

    pub fn key_usage(&self) -> &str {
        &self.key_usage
    }

    pub fn algorithm(&self) -> char {
        self.algorithm
    }

    pub fn mode_of_use(&self) -> char {
        self.mode_of_use
    }

    pub fn key_version_number(&self) -> &str {
        &self.key_version_number
    }

    pub fn exportability(&self) -> char {
        self.exportability
    }

    pub fn num_optional_blocks(&self) -> u8 {
        self.num_optional_blocks
    }

    pub fn reserved(&self) -> &str {
        &self.reserved
    }

    /// Whether `key_usage` is one of the values TR-31: 2018 defines, rather
    /// than a proprietary/numeric one. Informational only — parsing never
    /// rejects an unrecognized but well-formed value.
    pub fn has_known_key_usage(&self) -> bool {
        ALLOWED_KEY_USAGES.contains(&self.key_usage.as_str())
    }

    /// Whether `version_id` is one of `{A, B, C, D}`. Informational only.
    pub fn has_known_version_id(&self) -> bool {
        ALLOWED_VERSION_IDS.contains(&self.version_id.to_string().as_str())
    }

    /// Whether `algorithm` is one of the values TR-31: 2018 defines.
    pub fn has_known_algorithm(&self) -> bool {
        ALLOWED_ALGORITHMS.contains(&self.algorithm.to_string().as_str())
    }

    /// Whether `mode_of_use` is one of the values TR-31: 2018 defines.
    pub fn has_known_mode_of_use(&self) -> bool {
        ALLOWED_MODES_OF_USE.contains(&self.mode_of_use.to_string().as_str())
    }

    /// Whether `exportability` is one of the values TR-31: 2018 defines.
    pub fn has_known_exportability(&self) -> bool {
        ALLOWED_EXPORTABILITIES.contains(&self.exportability.to_string().as_str())
    }
}

fn first_char(s: &str, byte_offset: usize) -> Result<char> {
    s[byte_offset..].chars().next().ok_or_else(|| {
        PaysecError::StructuralMismatch(format!("TR-31 header truncated at byte {byte_offset}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_vector_header() {
        let s = "B0128B1TX00N0300KS1800604B120F929200002BD8";
        let header = Tr31Header::parse(s).unwrap();
        assert_eq!(header.version_id(), 'B');
        assert_eq!(header.block_length(), 128);
        assert_eq!(header.key_usage(), "B1");
        assert_eq!(header.algorithm(), 'T');
        assert_eq!(header.mode_of_use(), 'X');
        assert_eq!(header.key_version_number(), "00");
        assert_eq!(header.exportability(), 'N');
        assert_eq!(header.num_optional_blocks(), 3);
        assert_eq!(header.reserved(), "00");
    }

    #[test]
    fn rejects_truncated_header() {
        assert!(Tr31Header::parse("B0128B1TX00N03").is_err());
    }

    #[test]
    fn rejects_non_decimal_length() {
        let s = "B0XXXB1TX00N0300";
        assert!(Tr31Header::parse(s).is_err());
    }

    #[test]
    fn known_value_helpers_reflect_published_tables() {
        let header = Tr31Header::parse("D0048P0AE00N0000").unwrap();
        assert!(header.has_known_version_id());
        assert!(header.has_known_key_usage());
        assert!(header.has_known_algorithm());
        assert!(header.has_known_mode_of_use());
        assert!(header.has_known_exportability());

        let proprietary = Tr31Header::parse("90048ZZAE00N0000").unwrap();
        assert!(!proprietary.has_known_version_id());
        assert!(!proprietary.has_known_key_usage());
    }
}
