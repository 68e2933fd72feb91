//! Version bytes identifying what an address encodes.

use crate::base32::ALPHABET;

/// Maximum length of the payload carried by a [VersionByte::SignedPayload] address.
pub const MAX_SIGNED_PAYLOAD: usize = 64;

/// The kind of value an address encodes, written as its first byte.
///
/// Each version byte is a multiple of 8, so its top five bits alone select the address's
/// leading base32 character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum VersionByte {
    /// `G...`: an Ed25519 public key.
    Ed25519PublicKey = 6 << 3,
    /// `S...`: an Ed25519 secret seed.
    Ed25519SecretSeed = 18 << 3,
    /// `M...`: an Ed25519 public key multiplexed with a 64-bit id.
    MuxedAccount = 12 << 3,
    /// `T...`: the hash of a pre-authorized transaction.
    PreAuthTx = 19 << 3,
    /// `X...`: the SHA-256 hash of a signing preimage.
    HashX = 23 << 3,
    /// `P...`: an Ed25519 public key bound to a payload it must sign.
    SignedPayload = 15 << 3,
    /// `C...`: a contract id.
    Contract = 2 << 3,
    /// `L...`: a liquidity pool id.
    LiquidityPool = 11 << 3,
    /// `B...`: a claimable balance id, prefixed with its one-byte type.
    ClaimableBalance = 1 << 3,
}

impl VersionByte {
    /// Every known version byte.
    pub const ALL: [Self; 9] = [
        Self::Ed25519PublicKey,
        Self::Ed25519SecretSeed,
        Self::MuxedAccount,
        Self::PreAuthTx,
        Self::HashX,
        Self::SignedPayload,
        Self::Contract,
        Self::LiquidityPool,
        Self::ClaimableBalance,
    ];

    /// Returns the byte written at the start of the raw address.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Returns the leading character of every address of this kind.
    pub const fn prefix(self) -> char {
        ALPHABET[(self as u8 >> 3) as usize] as char
    }

    /// Looks up a version byte, returning `None` if it is unknown.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.byte() == byte)
    }

    /// Returns whether a payload of `len` bytes has a valid length for this kind.
    pub fn accepts_len(self, len: usize) -> bool {
        match self {
            Self::MuxedAccount => len == 32 + 8,
            Self::SignedPayload => (32 + 4 + 4..=32 + 4 + MAX_SIGNED_PAYLOAD).contains(&len),
            Self::ClaimableBalance => len == 1 + 32,
            _ => len == 32,
        }
    }
}

impl From<VersionByte> for u8 {
    fn from(value: VersionByte) -> Self {
        value.byte()
    }
}

impl TryFrom<u8> for VersionByte {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value).ok_or(crate::Error::UnknownVersionByte(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(VersionByte::Ed25519PublicKey, 'G'; "public key")]
    #[test_case(VersionByte::Ed25519SecretSeed, 'S'; "secret seed")]
    #[test_case(VersionByte::MuxedAccount, 'M'; "muxed account")]
    #[test_case(VersionByte::PreAuthTx, 'T'; "pre auth tx")]
    #[test_case(VersionByte::HashX, 'X'; "hash x")]
    #[test_case(VersionByte::SignedPayload, 'P'; "signed payload")]
    #[test_case(VersionByte::Contract, 'C'; "contract")]
    #[test_case(VersionByte::LiquidityPool, 'L'; "liquidity pool")]
    #[test_case(VersionByte::ClaimableBalance, 'B'; "claimable balance")]
    fn test_prefix(version: VersionByte, prefix: char) {
        assert_eq!(version.prefix(), prefix);
        assert_eq!(VersionByte::from_byte(version.byte()), Some(version));
    }

    #[test]
    fn test_unknown_byte() {
        assert_eq!(VersionByte::from_byte(0), None);
        assert_eq!(VersionByte::from_byte(6 << 3 | 1), None);
        assert!(matches!(
            VersionByte::try_from(0xFF),
            Err(crate::Error::UnknownVersionByte(0xFF))
        ));
    }

    #[test]
    fn test_accepts_len() {
        assert!(VersionByte::Ed25519PublicKey.accepts_len(32));
        assert!(!VersionByte::Ed25519PublicKey.accepts_len(33));
        assert!(VersionByte::MuxedAccount.accepts_len(40));
        assert!(!VersionByte::MuxedAccount.accepts_len(32));
        assert!(VersionByte::ClaimableBalance.accepts_len(33));
        assert!(!VersionByte::SignedPayload.accepts_len(36));
        assert!(VersionByte::SignedPayload.accepts_len(40));
        assert!(VersionByte::SignedPayload.accepts_len(100));
        assert!(!VersionByte::SignedPayload.accepts_len(104));
    }
}
