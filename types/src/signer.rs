//! Signer keys and their address text.

use crate::{account::Uint256, Error};
use std::str::FromStr;
use xdrkit_codec::{xdr_enum, xdr_struct, xdr_union, BytesM};
use xdrkit_strkey::{self as strkey, Key, Strkey, MAX_SIGNED_PAYLOAD};

xdr_enum! {
    pub enum SignerKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
    }
}

xdr_struct! {
    #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SignerKeyEd25519SignedPayload {
        pub ed25519: Uint256,
        pub payload: BytesM<{ MAX_SIGNED_PAYLOAD as u32 }>,
    }
}

xdr_union! {
    /// A key that can be added to an account as a signer.
    #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum SignerKey: SignerKeyType {
        Ed25519(Uint256) = SignerKeyType::Ed25519,
        PreAuthTx(Uint256) = SignerKeyType::PreAuthTx,
        HashX(Uint256) = SignerKeyType::HashX,
        Ed25519SignedPayload(SignerKeyEd25519SignedPayload) = SignerKeyType::Ed25519SignedPayload,
    }
}

impl SignerKey {
    /// Returns the address text for this signer.
    ///
    /// Fails for a signed payload signer with an empty payload, which has no address form.
    pub fn to_strkey(&self) -> Result<String, Error> {
        let text = match self {
            Self::Ed25519(key) => strkey::PublicKey(*key).to_strkey(),
            Self::PreAuthTx(hash) => strkey::PreAuthTx(*hash).to_strkey(),
            Self::HashX(hash) => strkey::HashX(*hash).to_strkey(),
            Self::Ed25519SignedPayload(signed) => {
                strkey::SignedPayload::new(signed.ed25519, signed.payload.to_vec())?.to_strkey()
            }
        };
        Ok(text)
    }
}

impl FromStr for SignerKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match strkey::decode(s)? {
            Strkey::PublicKeyEd25519(key) => Ok(Self::Ed25519(key.0)),
            Strkey::PreAuthTx(hash) => Ok(Self::PreAuthTx(hash.0)),
            Strkey::HashX(hash) => Ok(Self::HashX(hash.0)),
            Strkey::SignedPayloadEd25519(signed) => {
                Ok(Self::Ed25519SignedPayload(SignerKeyEd25519SignedPayload {
                    ed25519: *signed.ed25519(),
                    payload: BytesM::try_from(signed.payload())?,
                }))
            }
            other => Err(Error::UnexpectedKind(other.version())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xdrkit_codec::{DecodeExt, Encode, EncodeSize};

    const KEY: Uint256 = [
        0x3f, 0x0c, 0x34, 0xbf, 0x93, 0xad, 0x0d, 0x99, 0x71, 0xd0, 0x4c, 0xcc, 0x90, 0xf7, 0x05,
        0x51, 0x1c, 0x83, 0x8a, 0xad, 0x97, 0x34, 0xa4, 0xa2, 0xfb, 0x0d, 0x7a, 0x03, 0xfc, 0x7f,
        0xe8, 0x9a,
    ];

    #[test]
    fn test_strkey_round_trip() {
        let signers = [
            (
                SignerKey::Ed25519(KEY),
                "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ",
            ),
            (
                SignerKey::PreAuthTx(KEY),
                "TA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUPUI",
            ),
            (
                SignerKey::HashX(KEY),
                "XA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVLRR",
            ),
            (
                SignerKey::Ed25519SignedPayload(SignerKeyEd25519SignedPayload {
                    ed25519: KEY,
                    payload: BytesM::try_from((1..=29).collect::<Vec<u8>>()).unwrap(),
                }),
                "PA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAAAAOQCAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUAAAAFGBU",
            ),
        ];
        for (signer, text) in signers {
            assert_eq!(signer.to_strkey().unwrap(), text);
            assert_eq!(text.parse::<SignerKey>().unwrap(), signer);

            let encoded = signer.encode();
            assert_eq!(encoded.len(), signer.encode_size());
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(SignerKey::decode(encoded).unwrap(), signer);
        }
    }

    #[test]
    fn test_signed_payload_wire() {
        let signer = SignerKey::Ed25519SignedPayload(SignerKeyEd25519SignedPayload {
            ed25519: KEY,
            payload: BytesM::try_from(vec![1, 2, 3, 4, 5]).unwrap(),
        });
        // Discriminant, key, length, payload padded to 8
        let encoded = signer.encode();
        assert_eq!(encoded.len(), 4 + 32 + 4 + 8);
        assert_eq!(&encoded[36..], &[0, 0, 0, 5, 1, 2, 3, 4, 5, 0, 0, 0]);
    }

    #[test]
    fn test_empty_payload_has_no_address() {
        let signer = SignerKey::Ed25519SignedPayload(SignerKeyEd25519SignedPayload {
            ed25519: KEY,
            payload: BytesM::new(),
        });
        assert!(matches!(
            signer.to_strkey(),
            Err(Error::Strkey(strkey::Error::InvalidPayload(..)))
        ));
        // The wire form is still valid
        assert_eq!(SignerKey::decode(signer.encode()).unwrap(), signer);
    }

    #[test]
    fn test_unexpected_kind() {
        let muxed = strkey::MuxedAccount {
            ed25519: KEY,
            id: 1,
        }
        .to_strkey();
        assert!(matches!(
            muxed.parse::<SignerKey>(),
            Err(Error::UnexpectedKind(strkey::VersionByte::MuxedAccount))
        ));
    }
}
