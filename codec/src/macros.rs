//! Declaration macros for schema types.
//!
//! Concrete protocol types are declared once and receive their [crate::Write],
//! [crate::EncodeSize] and [crate::Read] implementations from these macros. Nothing is
//! registered at runtime: option and arm tables are expanded into `match` expressions.

/// Declares an XDR enumeration.
///
/// The enumeration derives `Clone`, `Copy`, `Debug`, `PartialEq`, `Eq`, `PartialOrd`, `Ord` and
/// `Hash`, and implements [crate::Enum], [crate::Discriminant], `TryFrom<i32>`, `From<_> for i32`
/// and `Display` (the option's name).
///
/// ```
/// use xdrkit_codec::{xdr_enum, DecodeExt, Encode};
///
/// xdr_enum! {
///     /// Kinds of signer.
///     pub enum SignerKeyType {
///         Ed25519 = 0,
///         PreAuthTx = 1,
///         HashX = 2,
///     }
/// }
///
/// assert_eq!(SignerKeyType::HashX.encode(), &[0, 0, 0, 2][..]);
/// assert_eq!(SignerKeyType::decode(&[0u8, 0, 0, 1][..]).unwrap(), SignerKeyType::PreAuthTx);
/// assert!(SignerKeyType::decode(&[0u8, 0, 0, 3][..]).is_err());
/// ```
#[macro_export]
macro_rules! xdr_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $crate::Enum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn value(&self) -> i32 {
                *self as i32
            }

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }

        impl $crate::Discriminant for $name {
            fn as_i32(&self) -> i32 {
                *self as i32
            }
        }

        impl ::core::convert::TryFrom<i32> for $name {
            type Error = $crate::Error;

            fn try_from(value: i32) -> ::core::result::Result<Self, $crate::Error> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err($crate::Error::InvalidEnumValue(stringify!($name), value)),
                }
            }
        }

        impl ::core::convert::From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Enum::name(self))
            }
        }

        impl $crate::Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl $crate::__private::BufMut) {
                buf.put_i32(*self as i32);
            }
        }

        impl $crate::Read for $name {
            type Cfg = ();

            #[inline]
            fn read_cfg(
                buf: &mut impl $crate::__private::Buf,
                _: &(),
            ) -> ::core::result::Result<Self, $crate::Error> {
                let value = <i32 as $crate::ReadExt>::read(buf)?;
                Self::try_from(value)
            }
        }

        impl $crate::FixedSize for $name {
            const SIZE: usize = 4;
        }
    };
}

/// Declares an XDR discriminated union.
///
/// Each arm names its payload type (omit it for a `void` arm) and the discriminant value that
/// selects it. The discriminant type is either an enumeration declared with [crate::xdr_enum]
/// or a plain `i32`/`u32`. Discriminants without an arm are rejected on decode with
/// [crate::Error::InvalidDiscriminator].
///
/// ```
/// use xdrkit_codec::{xdr_enum, xdr_union, DecodeExt, Encode, Union};
///
/// xdr_enum! {
///     pub enum MemoType {
///         None = 0,
///         Id = 2,
///     }
/// }
///
/// xdr_union! {
///     #[derive(Clone, Debug, PartialEq, Eq)]
///     pub enum Memo: MemoType {
///         None = MemoType::None,
///         Id(u64) = MemoType::Id,
///     }
/// }
///
/// let memo = Memo::Id(42);
/// assert_eq!(memo.discriminant(), MemoType::Id);
/// assert_eq!(memo.encode(), &[0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 42][..]);
/// assert_eq!(Memo::decode(memo.encode()).unwrap(), memo);
/// ```
#[macro_export]
macro_rules! xdr_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $dty:ty {
            $( $(#[$vmeta:meta])* $variant:ident $( ( $payload:ty ) )? = $disc:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant $( ( $payload ) )? ),+
        }

        impl $crate::Union for $name {
            type Discriminant = $dty;
            const NAME: &'static str = stringify!($name);

            fn discriminant(&self) -> $dty {
                match self {
                    $( Self::$variant { .. } => $disc, )+
                }
            }

            fn arm(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => stringify!($variant), )+
                }
            }
        }

        impl $crate::Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl $crate::__private::BufMut) {
                $crate::Write::write(&$crate::Union::discriminant(self), buf);
                match self {
                    $(
                        Self::$variant $( ( $crate::__xdr_bind!($payload, value) ) )? => {
                            $( <$payload as $crate::Write>::write(value, buf); )?
                        }
                    )+
                }
            }
        }

        impl $crate::EncodeSize for $name {
            #[inline]
            fn encode_size(&self) -> usize {
                match self {
                    $(
                        Self::$variant $( ( $crate::__xdr_bind!($payload, value) ) )? => {
                            4 $( + <$payload as $crate::EncodeSize>::encode_size(value) )?
                        }
                    )+
                }
            }
        }

        impl $crate::Read for $name {
            type Cfg = ();

            #[inline]
            fn read_cfg(
                buf: &mut impl $crate::__private::Buf,
                _: &(),
            ) -> ::core::result::Result<Self, $crate::Error> {
                let raw = <i32 as $crate::ReadExt>::read(buf)?;
                $(
                    if raw == <$dty as $crate::Discriminant>::as_i32(&$disc) {
                        return Ok(Self::$variant $( ( <$payload as $crate::ReadExt>::read(buf)? ) )?);
                    }
                )+
                Err($crate::Error::InvalidDiscriminator(stringify!($name), raw))
            }
        }
    };
}

/// Declares an XDR struct: fields are written and read in declaration order, with no padding
/// between them beyond what each field applies itself.
///
/// Field visibility is kept as declared, so a type can hide its fields behind a validating
/// constructor or builder while still receiving its codec implementation here.
///
/// ```
/// use xdrkit_codec::{xdr_struct, DecodeExt, Encode};
///
/// xdr_struct! {
///     #[derive(Clone, Debug, PartialEq, Eq)]
///     pub struct Price {
///         pub n: i32,
///         pub d: i32,
///     }
/// }
///
/// let price = Price { n: 1, d: 2 };
/// assert_eq!(price.encode(), &[0, 0, 0, 1, 0, 0, 0, 2][..]);
/// assert_eq!(Price::decode(price.encode()).unwrap(), price);
/// ```
#[macro_export]
macro_rules! xdr_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty ),*
        }

        impl $crate::Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl $crate::__private::BufMut) {
                $( <$fty as $crate::Write>::write(&self.$field, buf); )*
            }
        }

        impl $crate::EncodeSize for $name {
            #[inline]
            fn encode_size(&self) -> usize {
                0 $( + <$fty as $crate::EncodeSize>::encode_size(&self.$field) )*
            }
        }

        impl $crate::Read for $name {
            type Cfg = ();

            #[inline]
            fn read_cfg(
                buf: &mut impl $crate::__private::Buf,
                _: &(),
            ) -> ::core::result::Result<Self, $crate::Error> {
                Ok(Self {
                    $( $field: <$fty as $crate::ReadExt>::read(buf)?, )*
                })
            }
        }
    };
}

/// Expands to the binding for an arm's payload. Used in pattern position so that void arms can
/// share the same expansion as arms with a payload.
#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_bind {
    ($payload:ty, $binding:ident) => {
        $binding
    };
}
