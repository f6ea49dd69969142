//! Fixed-width unsigned integer encoding.

use std::fmt;

use crate::error::{OracleError, Result};

/// A 256-bit unsigned integer stored as 32 big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// Width of the encoded word in bytes.
    pub const BYTES: usize = 32;

    /// Wraps an already encoded big-endian word.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Left-pads `value` with zeros to a full word.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; Self::BYTES];
        bytes[Self::BYTES - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Parses a 64-digit hex word, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; Self::BYTES];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex, always 64 digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Reads the word back as a `u64`, failing if any high byte is set.
    pub fn decode_u64(&self) -> Result<u64> {
        let (high, low) = self.0.split_at(Self::BYTES - 8);
        if high.iter().any(|b| *b != 0) {
            return Err(OracleError::Overflow);
        }
        let mut tail = [0u8; 8];
        tail.copy_from_slice(low);
        Ok(u64::from_be_bytes(tail))
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Encodes `value` as a big-endian `uint256` word.
pub fn encode_uint256(value: u64) -> Uint256 {
    Uint256::from_u64(value)
}
