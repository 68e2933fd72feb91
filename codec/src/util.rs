//! Helpers shared by the codec implementations.

use crate::{Error, RangeCfg};
use bytes::{Buf, BufMut};

/// Every XDR item occupies a multiple of this many bytes.
pub const ALIGNMENT: usize = 4;

/// Checks that `buf` has at least `len` bytes remaining. Returns [Error::EndOfBuffer] if not.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    let rem = buf.remaining();
    if rem < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Returns the number of zero bytes that follow `len` bytes of data.
#[inline]
pub const fn padding(len: usize) -> usize {
    (ALIGNMENT - len % ALIGNMENT) % ALIGNMENT
}

/// Returns `len` rounded up to the next multiple of [ALIGNMENT].
#[inline]
pub const fn padded(len: usize) -> usize {
    len + padding(len)
}

/// Writes the zero padding that follows `len` bytes of data.
#[inline]
pub fn write_padding(len: usize, buf: &mut impl BufMut) {
    buf.put_bytes(0, padding(len));
}

/// Consumes the padding that follows `len` bytes of data, rejecting any non-zero byte.
#[inline]
pub fn read_padding(len: usize, buf: &mut impl Buf) -> Result<(), Error> {
    let pad = padding(len);
    at_least(buf, pad)?;
    for _ in 0..pad {
        if buf.get_u8() != 0 {
            return Err(Error::NonZeroPadding);
        }
    }
    Ok(())
}

/// Writes the 4-byte length prefix of a variable-length item.
///
/// # Panics
///
/// Panics if `len` does not fit in a `u32`. Bounded types can never hold such a value.
#[inline]
pub fn write_len(len: usize, buf: &mut impl BufMut) {
    let len = u32::try_from(len).expect("length exceeds u32");
    buf.put_u32(len);
}

/// Reads a 4-byte length prefix and checks it against a static maximum.
///
/// The check happens before the caller allocates anything for the item.
#[inline]
pub fn read_len(buf: &mut impl Buf, max: u32) -> Result<usize, Error> {
    at_least(buf, 4)?;
    let len = buf.get_u32();
    if len > max {
        return Err(Error::LengthExceeded(len as usize, max as usize));
    }
    usize::try_from(len).map_err(|_| Error::InvalidLength(len as usize))
}

/// Reads a 4-byte length prefix and checks it against a runtime [RangeCfg].
#[inline]
pub fn read_len_cfg(buf: &mut impl Buf, range: &RangeCfg) -> Result<usize, Error> {
    let len = read_len(buf, u32::MAX)?;
    if !range.contains(&len) {
        return Err(Error::InvalidLength(len));
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        assert_eq!(padding(0), 0);
        assert_eq!(padding(1), 3);
        assert_eq!(padding(2), 2);
        assert_eq!(padding(3), 1);
        assert_eq!(padding(4), 0);
        assert_eq!(padded(5), 8);
        assert_eq!(padded(32), 32);
    }

    #[test]
    fn test_read_padding() {
        let mut buf: &[u8] = &[0, 0, 0];
        read_padding(1, &mut buf).unwrap();
        assert!(buf.is_empty());

        let mut buf: &[u8] = &[0, 1];
        assert!(matches!(
            read_padding(2, &mut buf),
            Err(Error::NonZeroPadding)
        ));

        let mut buf: &[u8] = &[0];
        assert!(matches!(read_padding(2, &mut buf), Err(Error::EndOfBuffer)));
    }

    #[test]
    fn test_read_len() {
        let mut buf: &[u8] = &[0, 0, 0, 5];
        assert!(matches!(
            read_len(&mut buf, 4),
            Err(Error::LengthExceeded(5, 4))
        ));

        let mut buf: &[u8] = &[0, 0, 0, 5];
        assert!(matches!(
            read_len_cfg(&mut buf, &RangeCfg::from(..5)),
            Err(Error::InvalidLength(5))
        ));

        let mut buf: &[u8] = &[0, 0, 0, 5];
        assert_eq!(read_len(&mut buf, 5).unwrap(), 5);
    }
}
