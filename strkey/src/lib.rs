//! Encode and decode keys and addresses as checksummed, versioned base32 text.
//!
//! # Overview
//!
//! An address is the base32 encoding (RFC 4648 alphabet, no padding) of
//!
//! ```text
//! version byte || payload || crc16(version byte || payload) as little-endian u16
//! ```
//!
//! The version byte selects the kind of value (and so the leading character of the text), and
//! the CRC-16/XMODEM checksum catches transcription errors. Decoding is strict: only the exact
//! text [encode_check] produces for a value is accepted.
//!
//! # Example
//!
//! ```
//! use xdrkit_strkey::{decode_check, encode_check, Error, Key, PublicKey, VersionByte};
//!
//! let key = PublicKey([0; 32]);
//! let text = key.to_string();
//! assert_eq!(text, "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF");
//! assert_eq!(text.parse::<PublicKey>().unwrap(), key);
//!
//! // The raw interface checks the version byte against the expected kind
//! assert_eq!(decode_check(VersionByte::Ed25519PublicKey, &text).unwrap(), vec![0; 32]);
//! assert!(matches!(
//!     decode_check(VersionByte::Ed25519SecretSeed, &text),
//!     Err(Error::InvalidVersionByte { .. })
//! ));
//! ```

pub mod base32;
mod crc;
mod error;
mod keys;
mod version;

pub use crc::crc16;
pub use error::Error;
pub use keys::{
    ClaimableBalance, Contract, HashX, Key, LiquidityPool, MuxedAccount, PreAuthTx, PrivateKey,
    PublicKey, SignedPayload,
};
pub use version::{VersionByte, MAX_SIGNED_PAYLOAD};

use std::{fmt, str::FromStr};
use tracing::debug;

/// Encodes `payload` as an address of kind `version`.
///
/// Fails with [Error::InvalidLength] if the payload length is not valid for `version`.
pub fn encode_check(version: VersionByte, payload: &[u8]) -> Result<String, Error> {
    if !version.accepts_len(payload.len()) {
        return Err(Error::InvalidLength(payload.len()));
    }
    Ok(encode_unchecked(version, payload))
}

/// Encodes `payload` as an address of kind `version` without checking its length.
pub(crate) fn encode_unchecked(version: VersionByte, payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(1 + payload.len() + 2);
    raw.push(version.byte());
    raw.extend_from_slice(payload);
    let checksum = crc16(&raw);
    raw.extend_from_slice(&checksum.to_le_bytes());
    base32::encode(&raw)
}

/// Decodes an address, returning the version byte and payload after verifying the checksum.
fn decode_raw(text: &str) -> Result<(u8, Vec<u8>), Error> {
    let Some(mut raw) = base32::decode(text) else {
        debug!(len = text.len(), "rejected address: invalid base32");
        return Err(Error::InvalidBase32);
    };
    if raw.len() < 3 {
        debug!(len = raw.len(), "rejected address: too short");
        return Err(Error::InvalidLength(raw.len()));
    }
    let data_len = raw.len() - 2;
    let found = u16::from_le_bytes([raw[data_len], raw[data_len + 1]]);
    let expected = crc16(&raw[..data_len]);
    if found != expected {
        debug!(expected, found, "rejected address: checksum mismatch");
        return Err(Error::ChecksumMismatch { expected, found });
    }
    raw.truncate(data_len);
    let version = raw.remove(0);
    Ok((version, raw))
}

/// Decodes an address of kind `version`, returning its payload.
///
/// Checks are applied in order: base32 syntax, minimum length, checksum, version byte, and
/// payload length.
pub fn decode_check(version: VersionByte, text: &str) -> Result<Vec<u8>, Error> {
    let (found, payload) = decode_raw(text)?;
    if found != version.byte() {
        debug!(?version, found, "rejected address: unexpected version byte");
        return Err(Error::InvalidVersionByte {
            expected: version,
            found,
        });
    }
    if !version.accepts_len(payload.len()) {
        debug!(?version, len = payload.len(), "rejected address: invalid payload length");
        return Err(Error::InvalidLength(payload.len()));
    }
    Ok(payload)
}

/// Any decoded address.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strkey {
    PublicKeyEd25519(PublicKey),
    PrivateKeyEd25519(PrivateKey),
    MuxedAccountEd25519(MuxedAccount),
    PreAuthTx(PreAuthTx),
    HashX(HashX),
    SignedPayloadEd25519(SignedPayload),
    Contract(Contract),
    LiquidityPool(LiquidityPool),
    ClaimableBalance(ClaimableBalance),
}

impl Strkey {
    /// Returns the version byte of this address.
    pub fn version(&self) -> VersionByte {
        match self {
            Self::PublicKeyEd25519(_) => PublicKey::VERSION,
            Self::PrivateKeyEd25519(_) => PrivateKey::VERSION,
            Self::MuxedAccountEd25519(_) => MuxedAccount::VERSION,
            Self::PreAuthTx(_) => PreAuthTx::VERSION,
            Self::HashX(_) => HashX::VERSION,
            Self::SignedPayloadEd25519(_) => SignedPayload::VERSION,
            Self::Contract(_) => Contract::VERSION,
            Self::LiquidityPool(_) => LiquidityPool::VERSION,
            Self::ClaimableBalance(_) => ClaimableBalance::VERSION,
        }
    }
}

/// Decodes an address of any known kind.
pub fn decode(text: &str) -> Result<Strkey, Error> {
    let (byte, payload) = decode_raw(text)?;
    let Some(version) = VersionByte::from_byte(byte) else {
        debug!(byte, "rejected address: unknown version byte");
        return Err(Error::UnknownVersionByte(byte));
    };
    if !version.accepts_len(payload.len()) {
        debug!(?version, len = payload.len(), "rejected address: invalid payload length");
        return Err(Error::InvalidLength(payload.len()));
    }
    let key = match version {
        VersionByte::Ed25519PublicKey => Strkey::PublicKeyEd25519(Key::from_payload(&payload)?),
        VersionByte::Ed25519SecretSeed => Strkey::PrivateKeyEd25519(Key::from_payload(&payload)?),
        VersionByte::MuxedAccount => Strkey::MuxedAccountEd25519(Key::from_payload(&payload)?),
        VersionByte::PreAuthTx => Strkey::PreAuthTx(Key::from_payload(&payload)?),
        VersionByte::HashX => Strkey::HashX(Key::from_payload(&payload)?),
        VersionByte::SignedPayload => Strkey::SignedPayloadEd25519(Key::from_payload(&payload)?),
        VersionByte::Contract => Strkey::Contract(Key::from_payload(&payload)?),
        VersionByte::LiquidityPool => Strkey::LiquidityPool(Key::from_payload(&payload)?),
        VersionByte::ClaimableBalance => Strkey::ClaimableBalance(Key::from_payload(&payload)?),
    };
    Ok(key)
}

impl fmt::Display for Strkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicKeyEd25519(key) => fmt::Display::fmt(key, f),
            Self::PrivateKeyEd25519(key) => fmt::Display::fmt(key, f),
            Self::MuxedAccountEd25519(key) => fmt::Display::fmt(key, f),
            Self::PreAuthTx(key) => fmt::Display::fmt(key, f),
            Self::HashX(key) => fmt::Display::fmt(key, f),
            Self::SignedPayloadEd25519(key) => fmt::Display::fmt(key, f),
            Self::Contract(key) => fmt::Display::fmt(key, f),
            Self::LiquidityPool(key) => fmt::Display::fmt(key, f),
            Self::ClaimableBalance(key) => fmt::Display::fmt(key, f),
        }
    }
}

impl FromStr for Strkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Returns whether `text` is a valid Ed25519 public key address (`G...`).
pub fn is_valid_ed25519_public_key(text: &str) -> bool {
    PublicKey::is_valid(text)
}

/// Returns whether `text` is a valid Ed25519 secret seed (`S...`).
pub fn is_valid_ed25519_secret_seed(text: &str) -> bool {
    PrivateKey::is_valid(text)
}

/// Returns whether `text` is a valid muxed account address (`M...`).
pub fn is_valid_muxed_account(text: &str) -> bool {
    MuxedAccount::is_valid(text)
}

/// Returns whether `text` is a valid pre-authorized transaction hash (`T...`).
pub fn is_valid_pre_auth_tx(text: &str) -> bool {
    PreAuthTx::is_valid(text)
}

/// Returns whether `text` is a valid hash-x signer (`X...`).
pub fn is_valid_hash_x(text: &str) -> bool {
    HashX::is_valid(text)
}

/// Returns whether `text` is a valid signed payload signer (`P...`).
pub fn is_valid_signed_payload(text: &str) -> bool {
    SignedPayload::is_valid(text)
}

/// Returns whether `text` is a valid contract address (`C...`).
pub fn is_valid_contract(text: &str) -> bool {
    Contract::is_valid(text)
}

/// Returns whether `text` is a valid liquidity pool id (`L...`).
pub fn is_valid_liquidity_pool(text: &str) -> bool {
    LiquidityPool::is_valid(text)
}

/// Returns whether `text` is a valid claimable balance id (`B...`).
pub fn is_valid_claimable_balance(text: &str) -> bool {
    ClaimableBalance::is_valid(text)
}
