//! TR-31 optional block parsing.
//!
//! An optional block is a two-character ID, a two-digit decimal length (in
//! bytes of the hex-encoded value that follows), and that many hex digits of
//! value. TR-31: 2018, p. 17-18, 27-33 defines a handful of standard IDs
//! (`CT`, `HM`, `IK`, `KC`, `KP`, `KS`, `KV`, `PB`, `TS`); this parser does
//! not require an ID to be one of them, since proprietary/numeric IDs are
//! explicitly permitted by the standard and a strict parser would reject
//! otherwise-valid key blocks it simply doesn't recognize.
//!
//! # References
//! - TR-31: 2018, p. 17-18, 27-33.

use crate::error::{PaysecError, Result};

/// A single parsed TR-31 optional block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tr31OptionalBlock {
    pub id: String,
    pub length_bytes: usize,
    pub value: String,
}

fn looks_like_block_id(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

fn looks_like_length_field(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_digit())
}

/// Walk up to `declared_count` optional blocks out of the start of `rest`.
///
/// Implements the robustness rule from spec §4.6: as soon as the next
/// candidate block-ID or length field doesn't look like one (an ID outside
/// `[A-Z0-9]{2}`, or a length field outside `[0-9]{2}`), parsing stops early
/// and whatever has been consumed so far is returned — this tolerates a
/// header that over-declares its optional-block count. Returns the parsed
/// blocks and the byte offset into `rest` where the remainder (encrypted key
/// + authenticator) begins.
pub fn parse_optional_blocks(rest: &str, declared_count: u8) -> Result<(Vec<Tr31OptionalBlock>, usize)> {
    let mut blocks = Vec::new();
    let mut offset = 0usize;

    for _ in 0..declared_count {
        let remaining = &rest[offset..];
        if remaining.len() < 4 {
            break;
        }
        let id_candidate = &remaining[0..2];
        let len_candidate = &remaining[2..4];
        if !looks_like_block_id(id_candidate) || !looks_like_length_field(len_candidate) {
            break;
        }

        let length_bytes: usize = len_candidate.parse().map_err(|_| {
            PaysecError::InvalidLength(format!(
                "TR-31 optional block length must be 2 decimal digits, found {len_candidate:?}"
            ))
        })?;
        let value_chars = length_bytes * 2;
        if remaining.len() < 4 + value_chars {
            return Err(PaysecError::InvalidLength(format!(
                "TR-31 optional block {id_candidate} declares {length_bytes} bytes but only {} hex chars remain",
                remaining.len().saturating_sub(4)
            )));
        }

        let value = remaining[4..4 + value_chars].to_string();
        blocks.push(Tr31OptionalBlock {
            id: id_candidate.to_string(),
            length_bytes,
            value,
        });
        offset += 4 + value_chars;
    }

    Ok((blocks, offset))
}
