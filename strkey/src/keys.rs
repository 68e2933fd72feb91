//! Typed values carried by addresses.
//!
//! Each type knows its [VersionByte] and the layout of its payload. Converting to text is
//! [std::fmt::Display]; parsing text is [std::str::FromStr], which checks the version byte before
//! the payload layout.

use crate::{decode_check, encode_unchecked, Error, VersionByte, MAX_SIGNED_PAYLOAD};
use std::{fmt, str::FromStr};

/// A value that is encoded as the payload of one kind of address.
pub trait Key: Sized {
    /// The version byte of addresses holding this value.
    const VERSION: VersionByte;

    /// Parses the raw payload (the bytes between the version byte and the checksum).
    fn from_payload(payload: &[u8]) -> Result<Self, Error>;

    /// Returns the raw payload.
    fn to_payload(&self) -> Vec<u8>;

    /// Returns the address text for this value.
    fn to_strkey(&self) -> String {
        encode_unchecked(Self::VERSION, &self.to_payload())
    }

    /// Parses address text holding this kind of value.
    fn from_strkey(text: &str) -> Result<Self, Error> {
        let payload = decode_check(Self::VERSION, text)?;
        Self::from_payload(&payload)
    }

    /// Returns whether `text` is a valid address holding this kind of value.
    fn is_valid(text: &str) -> bool {
        Self::from_strkey(text).is_ok()
    }
}

/// Copies a 32-byte payload.
fn array32(version: VersionByte, payload: &[u8]) -> Result<[u8; 32], Error> {
    payload
        .try_into()
        .map_err(|_| Error::InvalidPayload(version, "expected 32 bytes"))
}

/// Declares a key type whose payload is exactly 32 bytes.
macro_rules! impl_key32 {
    ($(#[$meta:meta])* $name:ident, $version:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; 32]);

        impl $name {
            /// Returns the raw 32 bytes.
            pub const fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl Key for $name {
            const VERSION: VersionByte = VersionByte::$version;

            fn from_payload(payload: &[u8]) -> Result<Self, Error> {
                array32(Self::VERSION, payload).map(Self)
            }

            fn to_payload(&self) -> Vec<u8> {
                self.0.to_vec()
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(value: [u8; 32]) -> Self {
                Self(value)
            }
        }

        impl_text!($name);
    };
}

/// Implements `Display` and `FromStr` through [Key].
macro_rules! impl_text {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_strkey())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_strkey(s)
            }
        }
    };
}

/// Implements `Debug` as the address text.
macro_rules! impl_debug {
    ($name:ident) => {
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }
    };
}

impl_key32!(
    /// An Ed25519 public key (`G...`).
    PublicKey,
    Ed25519PublicKey
);
impl_debug!(PublicKey);

impl_key32!(
    /// An Ed25519 secret seed (`S...`).
    PrivateKey,
    Ed25519SecretSeed
);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl_key32!(
    /// The hash of a pre-authorized transaction (`T...`).
    PreAuthTx,
    PreAuthTx
);
impl_debug!(PreAuthTx);

impl_key32!(
    /// The SHA-256 hash of a signing preimage (`X...`).
    HashX,
    HashX
);
impl_debug!(HashX);

impl_key32!(
    /// A contract id (`C...`).
    Contract,
    Contract
);
impl_debug!(Contract);

impl_key32!(
    /// A liquidity pool id (`L...`).
    LiquidityPool,
    LiquidityPool
);
impl_debug!(LiquidityPool);

/// An Ed25519 public key multiplexed with a 64-bit id (`M...`).
///
/// The payload is the key followed by the id in big-endian order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MuxedAccount {
    pub ed25519: [u8; 32],
    pub id: u64,
}

impl MuxedAccount {
    /// Returns the public key without the id.
    pub const fn public_key(&self) -> PublicKey {
        PublicKey(self.ed25519)
    }
}

impl Key for MuxedAccount {
    const VERSION: VersionByte = VersionByte::MuxedAccount;

    fn from_payload(payload: &[u8]) -> Result<Self, Error> {
        if payload.len() != 40 {
            return Err(Error::InvalidPayload(Self::VERSION, "expected 40 bytes"));
        }
        let (key, id) = payload.split_at(32);
        let id: [u8; 8] = id
            .try_into()
            .map_err(|_| Error::InvalidPayload(Self::VERSION, "expected 8 byte id"))?;
        Ok(Self {
            ed25519: array32(Self::VERSION, key)?,
            id: u64::from_be_bytes(id),
        })
    }

    fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(40);
        payload.extend_from_slice(&self.ed25519);
        payload.extend_from_slice(&self.id.to_be_bytes());
        payload
    }
}

impl_text!(MuxedAccount);
impl_debug!(MuxedAccount);

/// An Ed25519 public key bound to a payload of 1 to 64 bytes (`P...`).
///
/// The address payload is the key, the payload length as a big-endian `u32`, then the payload
/// zero-padded to a multiple of 4 bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedPayload {
    ed25519: [u8; 32],
    payload: Vec<u8>,
}

impl SignedPayload {
    /// Creates a signed payload, rejecting an empty or oversized `payload`.
    pub fn new(ed25519: [u8; 32], payload: Vec<u8>) -> Result<Self, Error> {
        if payload.is_empty() || payload.len() > MAX_SIGNED_PAYLOAD {
            return Err(Error::InvalidPayload(
                VersionByte::SignedPayload,
                "payload must be 1 to 64 bytes",
            ));
        }
        Ok(Self { ed25519, payload })
    }

    /// Returns the signer's public key.
    pub const fn ed25519(&self) -> &[u8; 32] {
        &self.ed25519
    }

    /// Returns the payload to be signed.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl Key for SignedPayload {
    const VERSION: VersionByte = VersionByte::SignedPayload;

    fn from_payload(payload: &[u8]) -> Result<Self, Error> {
        if payload.len() < 32 + 4 {
            return Err(Error::InvalidPayload(Self::VERSION, "missing payload length"));
        }
        let (key, rest) = payload.split_at(32);
        let (len, inner) = rest.split_at(4);
        let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
        if len == 0 || len > MAX_SIGNED_PAYLOAD {
            return Err(Error::InvalidPayload(Self::VERSION, "payload must be 1 to 64 bytes"));
        }
        if inner.len() != len.next_multiple_of(4) {
            return Err(Error::InvalidPayload(Self::VERSION, "payload length mismatch"));
        }
        let (inner, padding) = inner.split_at(len);
        if padding.iter().any(|&b| b != 0) {
            return Err(Error::InvalidPayload(Self::VERSION, "non-zero padding"));
        }
        Ok(Self {
            ed25519: array32(Self::VERSION, key)?,
            payload: inner.to_vec(),
        })
    }

    fn to_payload(&self) -> Vec<u8> {
        let padded = self.payload.len().next_multiple_of(4);
        let mut out = Vec::with_capacity(32 + 4 + padded);
        out.extend_from_slice(&self.ed25519);
        out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.payload);
        out.resize(32 + 4 + padded, 0);
        out
    }
}

impl_text!(SignedPayload);
impl_debug!(SignedPayload);

/// A claimable balance id (`B...`).
///
/// The payload is a one-byte id type followed by the 32-byte id. Only type `0` is defined.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClaimableBalance {
    V0([u8; 32]),
}

impl Key for ClaimableBalance {
    const VERSION: VersionByte = VersionByte::ClaimableBalance;

    fn from_payload(payload: &[u8]) -> Result<Self, Error> {
        match payload.split_first() {
            Some((&0, id)) => array32(Self::VERSION, id).map(Self::V0),
            Some(_) => Err(Error::InvalidPayload(Self::VERSION, "unknown id type")),
            None => Err(Error::InvalidPayload(Self::VERSION, "empty")),
        }
    }

    fn to_payload(&self) -> Vec<u8> {
        match self {
            Self::V0(id) => {
                let mut out = Vec::with_capacity(33);
                out.push(0);
                out.extend_from_slice(id);
                out
            }
        }
    }
}

impl_text!(ClaimableBalance);
impl_debug!(ClaimableBalance);
