//! Big-endian byte cursor and 32-byte word helpers
//!
//! Every read is bounds-checked up front and reports [`DecodeError::Truncated`]
//! instead of panicking, so callers can walk attacker-supplied buffers.

use alloy::primitives::{Address, B256, U256};

use crate::error::DecodeError;

/// Size of an ABI word
pub const WORD: usize = 32;

/// Forward-only reader over a byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current read position
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// True once every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads `len` bytes and advances past them
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                needed: len,
                available: self.remaining(),
            });
        }
        let out = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Reads a bare 20-byte address (packed, not word-padded)
    pub fn read_address(&mut self) -> Result<Address, DecodeError> {
        Ok(Address::from_slice(self.read_bytes(20)?))
    }

    pub fn read_word(&mut self) -> Result<B256, DecodeError> {
        Ok(B256::from_slice(self.read_bytes(WORD)?))
    }

    pub fn read_u256(&mut self) -> Result<U256, DecodeError> {
        Ok(U256::from_be_slice(self.read_bytes(WORD)?))
    }

    /// Reads a 32-byte big-endian length and narrows it to `usize`
    pub fn read_len(&mut self) -> Result<usize, DecodeError> {
        let len = self.read_u256()?;
        u64::try_from(len)
            .ok()
            .and_then(|len| usize::try_from(len).ok())
            .ok_or(DecodeError::LengthOverflow)
    }
}

/// Left-pads an address into a word (12 zero bytes, then the address)
pub fn address_word(address: Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(address.as_slice());
    word
}

pub fn u256_word(value: U256) -> [u8; WORD] {
    value.to_be_bytes::<WORD>()
}

/// Encodes a length or offset as a big-endian word
pub fn usize_word(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[24..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

/// Number of zero bytes needed to pad `len` to a word boundary
pub fn padding(len: usize) -> usize {
    (WORD - len % WORD) % WORD
}
