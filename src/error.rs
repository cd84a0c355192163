//! Shared error type for the payment cryptography primitives.
//!
//! Every public function in this crate returns `Result<T, PaysecError>`. The
//! variants correspond to the error taxonomy of the underlying standards
//! documents (ISO 9564-1, ANSI X9.24-1, ASC X9 TR-31): malformed textual
//! input, a length that violates a declared profile, a required value that
//! is missing, a structural mismatch between declared and actual data, and
//! failures propagated from the underlying block cipher.

use std::error::Error;
use std::fmt;

/// Error conditions raised by the payment cryptography primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaysecError {
    /// Hex parse failure, or a non-digit character where a digit was required.
    MalformedInput(String),
    /// A key, PIN, PAN, KSN, BDK, PEK, component, or TR-31 field length that
    /// violates a declared profile.
    InvalidLength(String),
    /// A required value was not supplied (e.g. ISO-4 without a PEK).
    MissingRequired(String),
    /// A declared length or count did not match the actual data (TR-31
    /// header length, optional-block over-declaration, odd-length key).
    StructuralMismatch(String),
    /// An error was propagated from the underlying block-cipher provider.
    CryptoFailure(String),
    /// An error condition that should not normally occur.
    Internal(String),
}

impl fmt::Display for PaysecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaysecError::MalformedInput(msg) => write!(f, "ERROR PAYSEC: malformed input: {msg}"),
            PaysecError::InvalidLength(msg) => write!(f, "ERROR PAYSEC: invalid length: {msg}"),
            PaysecError::MissingRequired(msg) => {
                write!(f, "ERROR PAYSEC: missing required value: {msg}")
            }
            PaysecError::StructuralMismatch(msg) => {
                write!(f, "ERROR PAYSEC: structural mismatch: {msg}")
            }
            PaysecError::CryptoFailure(msg) => write!(f, "ERROR PAYSEC: crypto failure: {msg}"),
            PaysecError::Internal(msg) => write!(f, "ERROR PAYSEC: internal error: {msg}"),
        }
    }
}

impl Error for PaysecError {}

pub type Result<T> = std::result::Result<T, PaysecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_module_context() {
        let err = PaysecError::InvalidLength("BDK must be 16 or 24 bytes".to_string());
        assert_eq!(
            err.to_string(),
            "ERROR PAYSEC: invalid length: BDK must be 16 or 24 bytes"
        );
    }
}
