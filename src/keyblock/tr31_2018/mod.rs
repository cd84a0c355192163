//! ASC X9 TR-31: 2018 key block parsing.
//!
//! This crate reads the structure of a TR-31 key block — header, optional
//! blocks, encrypted key, authenticator — without performing the
//! cryptographic operations (MAC verification, key unwrap) that require
//! holding the key block protection key. See [`parse`] for the entry point.

mod header;
mod header_constants;
mod opt_block;
mod tr31;

pub use header::{Tr31Header, HEADER_LENGTH};
pub use opt_block::Tr31OptionalBlock;
pub use tr31::{parse, Tr31ParsedBlock};

#[cfg(test)]
mod tests;
