//! Payment-industry cryptographic primitives.
//!
//! Building blocks used across PIN, key-management, and card-security
//! systems: hex/XOR helpers, a thin ECB/CBC cipher layer over AES and
//! triple-DES, key check values, multi-component key assembly, ISO 9564-1
//! PIN block formats 0/3/4, ANSI X9.24-1 DUKPT key derivation, TR-31 key
//! block parsing, and a handful of miscellaneous payment-card utilities
//! (Luhn, DES parity, CSPRNG hex).
//!
//! Every fallible function returns [`error::Result`]; there is no panicking
//! API surface.

pub mod cipher;
pub mod dukpt;
pub mod error;
pub mod hex_xor;
pub mod kcv;
pub mod key_assembly;
pub mod keyblock;
pub mod misc;
pub mod observer;
pub mod pin;

pub use error::{PaysecError, Result};
