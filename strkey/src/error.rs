//! Error types for address encoding and decoding

use crate::VersionByte;
use thiserror::Error;

/// Error type for address operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid base32")]
    InvalidBase32,
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("checksum mismatch: expected {expected:#06x}, found {found:#06x}")]
    ChecksumMismatch { expected: u16, found: u16 },
    #[error("invalid version byte: expected {expected:?}, found {found:#04x}")]
    InvalidVersionByte { expected: VersionByte, found: u8 },
    #[error("unknown version byte: {0:#04x}")]
    UnknownVersionByte(u8),
    #[error("invalid payload for {0:?}: {1}")]
    InvalidPayload(VersionByte, &'static str),
}
