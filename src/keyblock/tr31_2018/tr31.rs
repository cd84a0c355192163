//! Top-level TR-31 key block structural parser.
//!
//! Assembles [`Tr31Header`] and [`Tr31OptionalBlock`] parsing into a single
//! pass over a full key block string: strip an optional transport marker,
//! read the header, walk its optional blocks, and split whatever remains
//! into the encrypted key and the authenticator (the key block's MAC) by
//! the length the version/algorithm pair implies.
//!
//! This module only parses; it does not verify the authenticator or decrypt
//! the key — MAC computation over TR-31 blocks is out of this crate's scope
//! (see spec Non-goals). A caller that holds the KBPK and wants to verify or
//! unwrap a block needs a separate, external TR-31 implementation.

use crate::error::{PaysecError, Result};
use crate::keyblock::tr31_2018::header::{Tr31Header, HEADER_LENGTH};
use crate::keyblock::tr31_2018::opt_block::{parse_optional_blocks, Tr31OptionalBlock};
use crate::observer::{notify, DebugObserver};

/// A fully parsed TR-31 key block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tr31ParsedBlock {
    pub header: Tr31Header,
    pub optional_blocks: Vec<Tr31OptionalBlock>,
    pub encrypted_key: String,
    pub authenticator: String,
}

/// Length, in hex characters, of the authenticator for a given TR-31
/// version and (for version `'C'`) algorithm byte.
///
/// - `'D'`: 64 hex chars (HMAC-SHA-256, 32 bytes).
/// - `'C'`: 32 hex chars if `algorithm == 'A'` (AES-CMAC), else 16 (TDEA-CMAC).
/// - any other version (including `'A'`, `'B'`): 16 hex chars (TDEA-MAC).
fn authenticator_hex_len(version_id: char, algorithm: char) -> usize {
    match version_id {
        'D' => 64,
        'C' if algorithm == 'A' => 32,
        'C' => 16,
        _ => 16,
    }
}

/// Parse a complete TR-31 key block string.
///
/// If the first character is `'R'`/`'r'` (a transport marker), it is
/// stripped before parsing and is otherwise informational. The header's
/// declared block length is checked against the actual (post-strip) ASCII
/// length of the input, and the optional-block walk applies the robustness
/// rule from spec §4.6: a header that over-declares its optional-block
/// count does not make the whole block unparseable.
pub fn parse(input: &str, observer: Option<&dyn DebugObserver>) -> Result<Tr31ParsedBlock> {
    let body = input.strip_prefix(['R', 'r']).unwrap_or(input);

    if !body.is_ascii() {
        return Err(PaysecError::MalformedInput(
            "TR-31 key block must be ASCII".to_string(),
        ));
    }
    if body.len() < HEADER_LENGTH {
        return Err(PaysecError::StructuralMismatch(format!(
            "TR-31 key block must be at least {HEADER_LENGTH} ASCII characters, found {}",
            body.len()
        )));
    }

    let header = Tr31Header::parse(body)?;
    if header.block_length() as usize != body.len() {
        return Err(PaysecError::StructuralMismatch(format!(
            "TR-31 header declares length {} but the key block is {} ASCII characters",
            header.block_length(),
            body.len()
        )));
    }
    notify(observer, "tr31", "parsed header");

    let after_header = &body[HEADER_LENGTH..];
    let (optional_blocks, opt_blocks_consumed) =
        parse_optional_blocks(after_header, header.num_optional_blocks())?;
    notify(
        observer,
        "tr31",
        &format!("parsed {} optional block(s)", optional_blocks.len()),
    );

    let remainder = &after_header[opt_blocks_consumed..];
    let authenticator_len = authenticator_hex_len(header.version_id(), header.algorithm());
    if remainder.len() < authenticator_len {
        return Err(PaysecError::StructuralMismatch(format!(
            "TR-31 key block has {} remaining ASCII characters, too short for a {}-character authenticator",
            remainder.len(),
            authenticator_len
        )));
    }

    let split_at = remainder.len() - authenticator_len;
    let encrypted_key = &remainder[..split_at];
    let authenticator = &remainder[split_at..];

    if encrypted_key.len() % 2 != 0 {
        return Err(PaysecError::StructuralMismatch(format!(
            "TR-31 encrypted key must have an even number of hex characters, found {}",
            encrypted_key.len()
        )));
    }

    Ok(Tr31ParsedBlock {
        header,
        optional_blocks,
        encrypted_key: encrypted_key.to_string(),
        authenticator: authenticator.to_string(),
    })
}
