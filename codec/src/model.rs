//! The value model: enumerations and discriminated unions.
//!
//! Every schema type is built from a closed set of node kinds:
//!
//! - **Struct**: a plain Rust `struct` whose fields are written in declared order
//!   (see [crate::xdr_struct]).
//! - **Enumeration**: a field-less Rust `enum` implementing [Enum] (see [crate::xdr_enum]).
//! - **Union**: a Rust `enum` with one variant per arm implementing [Union]
//!   (see [crate::xdr_union]).
//! - **BoundedArray**: [crate::VecM].
//! - **Opaque**: `[u8; N]` and [crate::BytesM].
//! - **Optional**: [Option].
//!
//! The option table of an enumeration and the arm table of a union are fixed at compile time,
//! and every encode/decode site matches on them exhaustively.

use crate::{Read, Write};

/// A closed set of named options, each tagged with an `i32`.
pub trait Enum: Copy + Eq + Write + Read<Cfg = ()> + 'static {
    /// Name of the enumeration, used in error messages.
    const NAME: &'static str;

    /// Every option, in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the wire value of this option.
    fn value(&self) -> i32;

    /// Returns the declared name of this option.
    fn name(&self) -> &'static str;

    /// Looks up the option with wire value `value`.
    fn from_value(value: i32) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.value() == value)
    }
}

/// A type that can select the arm of a [Union].
///
/// Implemented for every [Enum] declared with [crate::xdr_enum], and for `i32`/`u32` for unions
/// whose discriminant is a plain integer.
pub trait Discriminant: Copy + PartialEq + Write + Read<Cfg = ()> {
    /// Returns the 32 bits written on the wire, interpreted as an `i32`.
    fn as_i32(&self) -> i32;
}

impl Discriminant for i32 {
    fn as_i32(&self) -> i32 {
        *self
    }
}

impl Discriminant for u32 {
    fn as_i32(&self) -> i32 {
        i32::from_be_bytes(self.to_be_bytes())
    }
}

/// A discriminated union.
pub trait Union: Sized {
    /// The type of the discriminant written before the arm's payload.
    type Discriminant: Discriminant;

    /// Name of the union, used in error messages.
    const NAME: &'static str;

    /// Returns the discriminant of the arm this value holds.
    fn discriminant(&self) -> Self::Discriminant;

    /// Returns the declared name of the arm this value holds.
    fn arm(&self) -> &'static str;
}
