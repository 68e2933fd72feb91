//! Account identifiers and their address text.

use crate::Error;
use std::{fmt, str::FromStr};
use xdrkit_codec::{xdr_enum, xdr_struct, xdr_union};
use xdrkit_strkey::{self as strkey, Key, Strkey};

/// A 256-bit value, such as an Ed25519 public key or a SHA-256 hash.
pub type Uint256 = [u8; 32];

xdr_enum! {
    pub enum PublicKeyType {
        PublicKeyTypeEd25519 = 0,
    }
}

xdr_enum! {
    pub enum CryptoKeyType {
        KeyTypeEd25519 = 0,
        KeyTypePreAuthTx = 1,
        KeyTypeHashX = 2,
        KeyTypeEd25519SignedPayload = 3,
        KeyTypeMuxedEd25519 = 0x100,
    }
}

xdr_union! {
    /// A public key. Written as a `G...` address.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum PublicKey: PublicKeyType {
        PublicKeyTypeEd25519(Uint256) = PublicKeyType::PublicKeyTypeEd25519,
    }
}

/// The public key identifying an account.
pub type AccountId = PublicKey;

impl PublicKey {
    /// Returns the raw Ed25519 key.
    pub const fn ed25519(&self) -> &Uint256 {
        match self {
            Self::PublicKeyTypeEd25519(key) => key,
        }
    }
}

impl From<strkey::PublicKey> for PublicKey {
    fn from(value: strkey::PublicKey) -> Self {
        Self::PublicKeyTypeEd25519(value.0)
    }
}

impl From<PublicKey> for strkey::PublicKey {
    fn from(value: PublicKey) -> Self {
        Self(*value.ed25519())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&strkey::PublicKey(*self.ed25519()), f)
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(strkey::PublicKey::from_strkey(s)?.into())
    }
}

xdr_struct! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MuxedAccountMed25519 {
        pub id: u64,
        pub ed25519: Uint256,
    }
}

xdr_union! {
    /// An account, optionally multiplexed with a 64-bit id.
    ///
    /// Written as a `G...` address without an id and an `M...` address with one.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum MuxedAccount: CryptoKeyType {
        Ed25519(Uint256) = CryptoKeyType::KeyTypeEd25519,
        MuxedEd25519(MuxedAccountMed25519) = CryptoKeyType::KeyTypeMuxedEd25519,
    }
}

impl MuxedAccount {
    /// Returns the account without its id.
    pub fn account_id(&self) -> AccountId {
        match self {
            Self::Ed25519(key) => PublicKey::PublicKeyTypeEd25519(*key),
            Self::MuxedEd25519(muxed) => PublicKey::PublicKeyTypeEd25519(muxed.ed25519),
        }
    }

    /// Returns the multiplexing id, if any.
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Ed25519(_) => None,
            Self::MuxedEd25519(muxed) => Some(muxed.id),
        }
    }

    /// Returns a copy of this account multiplexed with `id`.
    pub fn with_id(&self, id: u64) -> Self {
        Self::MuxedEd25519(MuxedAccountMed25519 {
            id,
            ed25519: *self.account_id().ed25519(),
        })
    }
}

impl From<PublicKey> for MuxedAccount {
    fn from(value: PublicKey) -> Self {
        Self::Ed25519(*value.ed25519())
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519(key) => fmt::Display::fmt(&strkey::PublicKey(*key), f),
            Self::MuxedEd25519(muxed) => {
                let muxed = strkey::MuxedAccount {
                    ed25519: muxed.ed25519,
                    id: muxed.id,
                };
                fmt::Display::fmt(&muxed, f)
            }
        }
    }
}

impl FromStr for MuxedAccount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match strkey::decode(s)? {
            Strkey::PublicKeyEd25519(key) => Ok(Self::Ed25519(key.0)),
            Strkey::MuxedAccountEd25519(muxed) => Ok(Self::MuxedEd25519(MuxedAccountMed25519 {
                id: muxed.id,
                ed25519: muxed.ed25519,
            })),
            other => Err(Error::UnexpectedKind(other.version())),
        }
    }
}
