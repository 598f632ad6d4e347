//! Error types for timelock-rs

use thiserror::Error;

/// Result type alias for timelock-rs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the encoders, parsers and status client
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be parsed as a 20-byte address
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Input is not a valid hex string
    #[error("Invalid hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Hex decoded to the wrong number of bytes
    #[error("Invalid length for {what}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input is not an unsigned 256-bit integer
    #[error("Invalid integer '{input}': {reason}")]
    InvalidInteger { input: String, reason: String },

    /// Batch arrays of differing lengths
    #[error("Batch length mismatch: {targets} targets, {values} values, {payloads} payloads")]
    LengthMismatch {
        targets: usize,
        values: usize,
        payloads: usize,
    },

    /// ABI encoding/decoding error
    #[error("ABI error: {0}")]
    Abi(String),

    /// Packed stream decoding error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Failed to fetch data from the blockchain
    #[error("Failed to fetch {what}: {reason}")]
    Fetch { what: &'static str, reason: String },
}

/// Errors raised while walking raw byte buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read would run past the end of the buffer
    #[error("truncated input: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// MultiSend operation byte is neither Call nor DelegateCall
    #[error("invalid operation byte {0}")]
    InvalidOperation(u8),

    /// A length word does not fit in memory
    #[error("length word overflows usize")]
    LengthOverflow,
}

impl From<alloy::sol_types::Error> for Error {
    fn from(err: alloy::sol_types::Error) -> Self {
        Error::Abi(err.to_string())
    }
}
