//! Assets: the native asset, or a credit identified by a code and its issuing account.

use crate::{AccountId, Error};
use bytes::{Buf, BufMut};
use std::{fmt, str::FromStr};
use xdrkit_codec::{xdr_enum, xdr_struct, xdr_union, FixedSize, Read, ReadExt, Write};

/// Declares a fixed-width asset code: up to `$len` ASCII alphanumeric characters, zero-padded.
macro_rules! asset_code {
    ($(#[$meta:meta])* $name:ident, $min:literal, $len:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Returns the code without its zero padding.
            pub fn as_bytes(&self) -> &[u8] {
                let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                &self.0[..end]
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if !($min..=$len).contains(&s.len())
                    || !s.bytes().all(|b| b.is_ascii_alphanumeric())
                {
                    return Err(Error::InvalidAssetCode(s.to_string()));
                }
                let mut code = [0u8; $len];
                code[..s.len()].copy_from_slice(s.as_bytes());
                Ok(Self(code))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_bytes().escape_ascii())
            }
        }

        impl Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                self.0.write(buf);
            }
        }

        impl FixedSize for $name {
            const SIZE: usize = <[u8; $len]>::SIZE;
        }

        impl Read for $name {
            type Cfg = ();

            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, xdrkit_codec::Error> {
                // Alphanumeric prefix of the width's length range, then zero padding only
                let code = <[u8; $len]>::read(buf)?;
                let end = code.iter().position(|&b| b == 0).unwrap_or($len);
                if !($min..=$len).contains(&end)
                    || !code[..end].iter().all(u8::is_ascii_alphanumeric)
                    || code[end..].iter().any(|&b| b != 0)
                {
                    return Err(xdrkit_codec::Error::Invalid(
                        stringify!($name),
                        "malformed asset code",
                    ));
                }
                Ok(Self(code))
            }
        }
    };
}

asset_code!(
    /// A code of 1 to 4 characters.
    AssetCode4,
    1,
    4
);

asset_code!(
    /// A code of 5 to 12 characters.
    AssetCode12,
    5,
    12
);

xdr_enum! {
    pub enum AssetType {
        Native = 0,
        CreditAlphanum4 = 1,
        CreditAlphanum12 = 2,
        PoolShare = 3,
    }
}

xdr_struct! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AlphaNum4 {
        pub asset_code: AssetCode4,
        pub issuer: AccountId,
    }
}

xdr_struct! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AlphaNum12 {
        pub asset_code: AssetCode12,
        pub issuer: AccountId,
    }
}

xdr_union! {
    /// An asset that can be held and paid.
    ///
    /// Pool shares have an asset type but cannot be paid, so there is no arm for them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Asset: AssetType {
        Native = AssetType::Native,
        CreditAlphanum4(AlphaNum4) = AssetType::CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = AssetType::CreditAlphanum12,
    }
}

impl Asset {
    /// Creates a credit asset, choosing the code width from the length of `code`.
    pub fn credit(code: &str, issuer: AccountId) -> Result<Self, Error> {
        if code.len() <= 4 {
            Ok(Self::CreditAlphanum4(AlphaNum4 {
                asset_code: code.parse()?,
                issuer,
            }))
        } else {
            Ok(Self::CreditAlphanum12(AlphaNum12 {
                asset_code: code.parse()?,
                issuer,
            }))
        }
    }

    /// Returns the issuing account of a credit asset.
    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Self::Native => None,
            Self::CreditAlphanum4(credit) => Some(&credit.issuer),
            Self::CreditAlphanum12(credit) => Some(&credit.issuer),
        }
    }
}

/// Displays as `native` or `CODE:ISSUER`.
impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::CreditAlphanum4(credit) => write!(f, "{}:{}", credit.asset_code, credit.issuer),
            Self::CreditAlphanum12(credit) => write!(f, "{}:{}", credit.asset_code, credit.issuer),
        }
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "native" {
            return Ok(Self::Native);
        }
        let (code, issuer) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidAsset(s.to_string()))?;
        Self::credit(code, issuer.parse()?)
    }
}
