//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("non-zero padding")]
    NonZeroPadding,
    #[error("invalid bool")]
    InvalidBool,
    #[error("length exceeded: {0} > {1}")]
    LengthExceeded(usize, usize), // found, max
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid value for enum {0}: {1}")]
    InvalidEnumValue(&'static str, i32),
    #[error("invalid discriminator for union {0}: {1}")]
    InvalidDiscriminator(&'static str, i32),
    #[error("incomplete value {0}: missing {1}")]
    IncompleteValue(&'static str, &'static str), // type, field
    #[error("invalid {0}: {1}")]
    Invalid(&'static str, &'static str), // context, message
    #[error("wrapped error in {0}: {1}")]
    Wrapped(&'static str, Box<dyn std::error::Error + Send + Sync>),
}
