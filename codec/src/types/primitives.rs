//! Codec implementations for the XDR primitive types.
//!
//! # Mapping
//!
//! | XDR | Rust | Encoded size |
//! |---|---|---|
//! | `int` | `i32` | 4 |
//! | `unsigned int` | `u32` | 4 |
//! | `hyper` | `i64` | 8 |
//! | `unsigned hyper` | `u64` | 8 |
//! | `float` | `f32` | 4 |
//! | `double` | `f64` | 8 |
//! | `bool` | `bool` | 4 |
//! | `void` | `()` | 0 |
//! | `T *name` | `Option<T>` | 4 + size of `T` if present |
//!
//! All integers and floats are written big-endian. XDR has no 8 or 16 bit integers: smaller
//! quantities are widened to 32 bits by the schema, so `u8`/`u16` are intentionally not
//! implemented here (byte strings are covered by the opaque types).

use crate::{util::at_least, EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            type Cfg = ();

            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(i32, get_i32, put_i32);
impl_numeric!(u32, get_u32, put_u32);
impl_numeric!(i64, get_i64, put_i64);
impl_numeric!(u64, get_u64, put_u64);
impl_numeric!(f32, get_f32, put_f32);
impl_numeric!(f64, get_f64, put_f64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_i32(i32::from(*self));
    }
}

impl Read for bool {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        match i32::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 4;
}

// Void implementation
impl Write for () {
    #[inline]
    fn write(&self, _: &mut impl BufMut) {}
}

impl Read for () {
    type Cfg = ();

    #[inline]
    fn read_cfg(_: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Ok(())
    }
}

impl FixedSize for () {
    const SIZE: usize = 0;
}

// Option implementation
impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.is_some().write(buf);
        if let Some(inner) = self {
            inner.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Option<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        match self {
            Some(inner) => bool::SIZE + inner.encode_size(),
            None => bool::SIZE,
        }
    }
}

impl<T: Read> Read for Option<T> {
    type Cfg = T::Cfg;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        if bool::read(buf)? {
            Ok(Some(T::read_cfg(buf, cfg)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode, EncodeFixed};
    use bytes::Bytes;
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty, $size:expr) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = value.encode();
                        assert_eq!(encoded.len(), $size);
                        assert_eq!(value.encode_size(), $size);
                        let decoded = <$type>::decode(encoded).unwrap();
                        assert_eq!(*value, decoded);

                        let fixed: [u8; $size] = value.encode_fixed();
                        let decoded = <$type>::decode(Bytes::copy_from_slice(&fixed)).unwrap();
                        assert_eq!(*value, decoded);
                    }
                }
            }
        };
    }
    impl_num_test!(i32, 4);
    impl_num_test!(u32, 4);
    impl_num_test!(i64, 8);
    impl_num_test!(u64, 8);
    impl_num_test!(f32, 4);
    impl_num_test!(f64, 8);

    #[test]
    fn test_bool() {
        assert_eq!(true.encode(), &[0, 0, 0, 1][..]);
        assert_eq!(false.encode(), &[0, 0, 0, 0][..]);
        assert!(bool::decode(&[0u8, 0, 0, 1][..]).unwrap());
        assert!(!bool::decode(&[0u8, 0, 0, 0][..]).unwrap());

        // Anything other than 0 or 1 is rejected
        assert!(matches!(
            bool::decode(&[0u8, 0, 0, 2][..]),
            Err(Error::InvalidBool)
        ));
        assert!(matches!(
            bool::decode(&[1u8, 0, 0, 1][..]),
            Err(Error::InvalidBool)
        ));
    }

    #[test]
    fn test_void() {
        assert!(().encode().is_empty());
        <()>::decode(&[][..]).unwrap();
        assert!(matches!(<()>::decode(&[0u8][..]), Err(Error::ExtraData(1))));
    }

    #[test]
    fn test_option() {
        let some = Some(42u32);
        assert_eq!(some.encode(), &[0, 0, 0, 1, 0, 0, 0, 42][..]);
        assert_eq!(some.encode_size(), 8);
        assert_eq!(Option::<u32>::decode(some.encode()).unwrap(), some);

        let none: Option<u32> = None;
        assert_eq!(none.encode(), &[0, 0, 0, 0][..]);
        assert_eq!(none.encode_size(), 4);
        assert_eq!(Option::<u32>::decode(none.encode()).unwrap(), none);

        // Absent values carry no payload
        assert!(matches!(
            Option::<u32>::decode(&[0u8, 0, 0, 0, 0, 0, 0, 42][..]),
            Err(Error::ExtraData(4))
        ));

        // Present values must carry one
        assert!(matches!(
            Option::<u32>::decode(&[0u8, 0, 0, 1][..]),
            Err(Error::EndOfBuffer)
        ));

        // Flag must be a bool
        assert!(matches!(
            Option::<u32>::decode(&[0u8, 0, 0, 3, 0, 0, 0, 42][..]),
            Err(Error::InvalidBool)
        ));
    }

    #[test]
    fn test_conformity() {
        // 32-bit integers
        assert_eq!(0u32.encode(), &[0x00, 0x00, 0x00, 0x00][..]);
        assert_eq!(0xABCDEF01u32.encode(), &[0xAB, 0xCD, 0xEF, 0x01][..]);
        assert_eq!((-1i32).encode(), &[0xFF, 0xFF, 0xFF, 0xFF][..]);
        assert_eq!(0x12345678i32.encode(), &[0x12, 0x34, 0x56, 0x78][..]);
        assert_eq!(i32::MIN.encode(), &[0x80, 0x00, 0x00, 0x00][..]);

        // 64-bit integers
        assert_eq!(
            0x0123456789ABCDEFu64.encode(),
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF][..]
        );
        assert_eq!((-1i64).encode(), &[0xFF; 8][..]);
        assert_eq!(
            i64::MIN.encode(),
            &[0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..]
        );

        // Floats
        assert_eq!(1.0f32.encode(), &[0x3F, 0x80, 0x00, 0x00][..]);
        assert_eq!((-1.0f32).encode(), &[0xBF, 0x80, 0x00, 0x00][..]);
        assert_eq!(
            1.0f64.encode(),
            &[0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..]
        );
        assert_eq!(f64::NAN.encode(), f64::NAN.to_be_bytes()[..]);
    }
}
