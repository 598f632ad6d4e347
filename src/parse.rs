//! Strict parsing of user-supplied hex and integer strings
//!
//! Nothing here coerces: wrong lengths, odd hex and signed or fractional
//! numbers are all reported as errors.

use alloy::primitives::{hex, Address, Bytes, B256, U256};

use crate::error::{Error, Result};

/// Parses a 20-byte address, accepting any letter case
pub fn parse_address(input: &str) -> Result<Address> {
    let bytes = decode_hex(input)?;
    if bytes.len() != 20 {
        return Err(Error::InvalidAddress {
            input: input.to_string(),
            reason: format!("expected 20 bytes, got {}", bytes.len()),
        });
    }
    Ok(Address::from_slice(&bytes))
}

/// Parses a `0x`-prefixed (or bare) hex byte string; empty input is empty bytes
pub fn parse_bytes(input: &str) -> Result<Bytes> {
    decode_hex(input).map(Bytes::from)
}

/// Parses a 32-byte value such as a salt, predecessor or operation id
pub fn parse_b256(input: &str) -> Result<B256> {
    let bytes = decode_hex(input)?;
    if bytes.len() != 32 {
        return Err(Error::InvalidLength {
            what: "bytes32",
            expected: 32,
            actual: bytes.len(),
        });
    }
    Ok(B256::from_slice(&bytes))
}

/// Parses an unsigned 256-bit integer in decimal or `0x` hex
pub fn parse_u256(input: &str) -> Result<U256> {
    let s = input.trim();
    let invalid = |reason: String| Error::InvalidInteger {
        input: input.to_string(),
        reason,
    };

    if s.is_empty() {
        return Err(invalid("empty string".to_string()));
    }
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("expected hex digits".to_string()));
        }
        return U256::from_str_radix(digits, 16).map_err(|e| invalid(e.to_string()));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected decimal digits".to_string()));
    }
    U256::from_str_radix(s, 10).map_err(|e| invalid(e.to_string()))
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let s = input.trim();
    hex::decode(s).map_err(|e| Error::InvalidHex {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
