//! Codec implementations for opaque data.
//!
//! XDR distinguishes fixed-length opaque data (`opaque name[N]`), which is written as exactly
//! `N` bytes, from variable-length opaque data (`opaque name<MAX>`), which is prefixed with its
//! length as a `u32`. Both are followed by zero bytes up to the next multiple of 4. Padding is
//! verified on read: a non-zero padding byte is reported as [Error::NonZeroPadding].
//!
//! | XDR | Rust |
//! |---|---|
//! | `opaque name[N]` | `[u8; N]` |
//! | `opaque name<MAX>` | [BytesM<MAX>] |
//! | `opaque name<>` | [BytesM] or [Bytes] (bounded by a [RangeCfg] at decode time) |

use crate::{
    util::{at_least, padded, read_len, read_len_cfg, read_padding, write_len, write_padding},
    EncodeSize, Error, FixedSize, RangeCfg, Read, Write,
};
use bytes::{Buf, BufMut, Bytes};
use std::{fmt, ops::Deref};

// Fixed-length opaque implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
        write_padding(N, buf);
    }
}

impl<const N: usize> Read for [u8; N] {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        read_padding(N, buf)?;
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = padded(N);
}

/// Variable-length opaque data holding at most `MAX` bytes.
///
/// The bound is checked whenever a value is created (so that [Write] never has to fail) and
/// again when reading, before any memory is allocated for the payload.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytesM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> BytesM<MAX> {
    /// Creates an empty value.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The maximum number of bytes this type can hold.
    pub const fn max_len() -> usize {
        MAX as usize
    }

    /// Returns the contents as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the value, returning the underlying bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Returns a copy of `self` with `bytes` appended, if the result stays within `MAX`.
    pub fn with_appended(&self, bytes: &[u8]) -> Result<Self, Error> {
        let mut next = Vec::with_capacity(self.0.len() + bytes.len());
        next.extend_from_slice(&self.0);
        next.extend_from_slice(bytes);
        Self::try_from(next)
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for BytesM<MAX> {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        if value.len() > Self::max_len() {
            return Err(Error::LengthExceeded(value.len(), Self::max_len()));
        }
        Ok(Self(value))
    }
}

impl<const MAX: u32> TryFrom<&[u8]> for BytesM<MAX> {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from(value.to_vec())
    }
}

impl<const MAX: u32, const N: usize> TryFrom<[u8; N]> for BytesM<MAX> {
    type Error = Error;

    fn try_from(value: [u8; N]) -> Result<Self, Self::Error> {
        Self::try_from(value.to_vec())
    }
}

impl<const MAX: u32> From<BytesM<MAX>> for Vec<u8> {
    fn from(value: BytesM<MAX>) -> Self {
        value.0
    }
}

impl<const MAX: u32> AsRef<[u8]> for BytesM<MAX> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> Deref for BytesM<MAX> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> fmt::Debug for BytesM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytesM<{MAX}>(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl<const MAX: u32> Write for BytesM<MAX> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.0.len(), buf);
        buf.put_slice(&self.0);
        write_padding(self.0.len(), buf);
    }
}

impl<const MAX: u32> EncodeSize for BytesM<MAX> {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + padded(self.0.len())
    }
}

impl<const MAX: u32> Read for BytesM<MAX> {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let len = read_len(buf, MAX)?;
        at_least(buf, len)?;
        let mut dst = vec![0; len];
        buf.copy_to_slice(&mut dst);
        read_padding(len, buf)?;
        Ok(Self(dst))
    }
}

// Bytes implementation (variable-length opaque bounded at decode time)
impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(self.len(), buf);
        buf.put_slice(self);
        write_padding(self.len(), buf);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + padded(self.len())
    }
}

impl Read for Bytes {
    type Cfg = RangeCfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &RangeCfg) -> Result<Self, Error> {
        let len = read_len_cfg(buf, range)?;
        at_least(buf, len)?;
        let bytes = buf.copy_to_bytes(len);
        read_padding(len, buf)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, DecodeExt, Encode};

    #[test]
    fn test_fixed_opaque() {
        let value = [1u8, 2, 3, 4, 5];
        let encoded = value.encode();
        assert_eq!(encoded, &[1, 2, 3, 4, 5, 0, 0, 0][..]);
        assert_eq!(<[u8; 5]>::SIZE, 8);
        assert_eq!(<[u8; 5]>::decode(encoded).unwrap(), value);

        // Aligned values carry no padding
        let value = [7u8; 32];
        assert_eq!(value.encode().len(), 32);
        assert_eq!(<[u8; 32]>::decode(value.encode()).unwrap(), value);

        // Empty
        assert!([0u8; 0].encode().is_empty());
    }

    #[test]
    fn test_fixed_opaque_rejects_bad_padding() {
        assert!(matches!(
            <[u8; 3]>::decode(&[1u8, 2, 3, 1][..]),
            Err(Error::NonZeroPadding)
        ));
        assert!(matches!(
            <[u8; 3]>::decode(&[1u8, 2, 3][..]),
            Err(Error::EndOfBuffer)
        ));
        assert!(matches!(
            <[u8; 4]>::decode(&[1u8, 2, 3][..]),
            Err(Error::EndOfBuffer)
        ));
    }

    #[test]
    fn test_bytes_m() {
        let value = BytesM::<8>::try_from(vec![0xAA, 0xBB, 0xCC]).unwrap();
        let encoded = value.encode();
        assert_eq!(encoded, &[0, 0, 0, 3, 0xAA, 0xBB, 0xCC, 0][..]);
        assert_eq!(value.encode_size(), 8);
        assert_eq!(BytesM::<8>::decode(encoded).unwrap(), value);

        let empty = BytesM::<8>::new();
        assert_eq!(empty.encode(), &[0, 0, 0, 0][..]);
        assert_eq!(BytesM::<8>::decode(empty.encode()).unwrap(), empty);

        let full = BytesM::<8>::try_from([9u8; 8]).unwrap();
        assert_eq!(full.encode().len(), 12);
        assert_eq!(BytesM::<8>::decode(full.encode()).unwrap(), full);
    }

    #[test]
    fn test_bytes_m_bounds() {
        // Construction
        assert!(matches!(
            BytesM::<2>::try_from(vec![1, 2, 3]),
            Err(Error::LengthExceeded(3, 2))
        ));
        let value = BytesM::<3>::try_from(vec![1, 2]).unwrap();
        assert!(value.with_appended(&[3]).is_ok());
        assert!(matches!(
            value.with_appended(&[3, 4]),
            Err(Error::LengthExceeded(4, 3))
        ));
        assert_eq!(value.as_slice(), &[1, 2]);

        // Decoding a length prefix over the bound fails before reading the payload
        assert!(matches!(
            BytesM::<2>::decode(&[0u8, 0, 0, 3, 1, 2, 3, 0][..]),
            Err(Error::LengthExceeded(3, 2))
        ));

        // A huge claimed length is rejected without allocating
        assert!(matches!(
            BytesM::<64>::decode(&[0xFFu8, 0xFF, 0xFF, 0xFF][..]),
            Err(Error::LengthExceeded(_, 64))
        ));
        assert!(matches!(
            <BytesM>::decode(&[0xFFu8, 0xFF, 0xFF, 0xFF][..]),
            Err(Error::EndOfBuffer)
        ));
    }

    #[test]
    fn test_bytes_m_rejects_bad_padding() {
        assert!(matches!(
            BytesM::<8>::decode(&[0u8, 0, 0, 1, 0xAA, 0, 0, 0x01][..]),
            Err(Error::NonZeroPadding)
        ));
        assert!(matches!(
            BytesM::<8>::decode(&[0u8, 0, 0, 1, 0xAA][..]),
            Err(Error::EndOfBuffer)
        ));
    }

    #[test]
    fn test_bytes() {
        let values = [
            Bytes::new(),
            Bytes::from_static(&[1, 2, 3]),
            Bytes::from(vec![0; 300]),
        ];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(encoded.len(), 4 + padded(value.len()));
            let len = value.len();

            // Valid decoding
            let decoded = Bytes::decode_cfg(encoded, &RangeCfg::exact(len)).unwrap();
            assert_eq!(value, decoded);

            // Failure for too long
            assert!(matches!(
                Bytes::decode_cfg(value.encode(), &RangeCfg::from(..len)),
                Err(Error::InvalidLength(_))
            ));

            // Failure for too short
            assert!(matches!(
                Bytes::decode_cfg(value.encode(), &RangeCfg::from(len + 1..)),
                Err(Error::InvalidLength(_))
            ));
        }
    }

    #[test]
    fn test_debug() {
        let value = BytesM::<4>::try_from(vec![0x0a, 0xff]).unwrap();
        assert_eq!(format!("{value:?}"), "BytesM<4>(0aff)");
    }
}
