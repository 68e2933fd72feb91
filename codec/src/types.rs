//! Codec implementations for the XDR node kinds.
//!
//! - [primitives]: integers, floats, `bool`, `void` and optional values
//! - [opaque]: fixed and variable-length opaque data
//! - [string]: bounded strings
//! - [vec]: bounded arrays

pub mod opaque;
pub mod primitives;
pub mod string;
pub mod vec;
