//! Codec implementation for XDR strings.
//!
//! An XDR `string name<MAX>` has the same wire form as variable-length opaque data. The protocol
//! does not require strings to be valid UTF-8 (memo text, for example, is arbitrary bytes), so
//! [StringM] stores raw bytes and only interprets them as UTF-8 on request.

use crate::{BytesM, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};
use std::{fmt, str::FromStr};

/// A string of at most `MAX` bytes.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringM<const MAX: u32 = { u32::MAX }>(BytesM<MAX>);

impl<const MAX: u32> StringM<MAX> {
    /// Creates an empty string.
    pub const fn new() -> Self {
        Self(BytesM::new())
    }

    /// Returns the raw bytes of the string.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Returns the number of bytes in the string.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interprets the string as UTF-8.
    pub fn to_utf8_string(&self) -> Result<String, Error> {
        String::from_utf8(self.0.to_vec()).map_err(|err| Error::Wrapped("StringM", err.into()))
    }

    /// Interprets the string as UTF-8, replacing invalid sequences.
    pub fn to_utf8_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for StringM<MAX> {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Ok(Self(BytesM::try_from(value)?))
    }
}

impl<const MAX: u32> TryFrom<&[u8]> for StringM<MAX> {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(BytesM::try_from(value)?))
    }
}

impl<const MAX: u32> TryFrom<&str> for StringM<MAX> {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.as_bytes())
    }
}

impl<const MAX: u32> TryFrom<String> for StringM<MAX> {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.into_bytes())
    }
}

impl<const MAX: u32> FromStr for StringM<MAX> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl<const MAX: u32> AsRef<[u8]> for StringM<MAX> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const MAX: u32> fmt::Display for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Escape anything that is not printable so the output stays on one line.
        for chunk in self.as_bytes().utf8_chunks() {
            write!(f, "{}", chunk.valid().escape_debug())?;
            for byte in chunk.invalid() {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl<const MAX: u32> fmt::Debug for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringM<{MAX}>(\"{self}\")")
    }
}

impl<const MAX: u32> Write for StringM<MAX> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl<const MAX: u32> EncodeSize for StringM<MAX> {
    #[inline]
    fn encode_size(&self) -> usize {
        self.0.encode_size()
    }
}

impl<const MAX: u32> Read for StringM<MAX> {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &()) -> Result<Self, Error> {
        Ok(Self(BytesM::read_cfg(buf, cfg)?))
    }
}
