//! Encode and decode values in the ledger network's canonical XDR wire format.
//!
//! # Overview
//!
//! A binary serialization library designed to safely:
//! - Serialize schema types into the byte-exact wire format exchanged with network peers
//! - Deserialize untrusted binary input into schema types, validating every declared bound
//!
//! # Wire format
//!
//! - All integers are big-endian.
//! - Every item occupies a multiple of 4 bytes: opaque data and strings are followed by zero
//!   padding, which is verified (and rejected if non-zero) on read.
//! - Variable-length items are prefixed with a `u32` length that is checked against the item's
//!   declared maximum before anything is allocated.
//! - A top-level [Decode] fails if any input is left over.
//!
//! # Supported Types
//!
//! | XDR | Rust |
//! |---|---|
//! | `int`, `unsigned int`, `hyper`, `unsigned hyper` | `i32`, `u32`, `i64`, `u64` |
//! | `float`, `double` | `f32`, `f64` |
//! | `bool` | `bool` |
//! | `void` | `()` |
//! | `opaque name[N]` | `[u8; N]` |
//! | `opaque name<MAX>` | [BytesM] |
//! | `string name<MAX>` | [StringM] |
//! | `T name<MAX>` | [VecM] |
//! | `T *name` | `Option<T>` |
//! | `enum` | [xdr_enum] |
//! | `union switch` | [xdr_union] |
//! | `struct` | [xdr_struct] |
//!
//! # Example
//!
//! ```
//! use xdrkit_codec::{xdr_enum, xdr_struct, DecodeExt, Encode, Error, VecM};
//!
//! xdr_enum! {
//!     pub enum Kind {
//!         Small = 0,
//!         Large = 1,
//!     }
//! }
//!
//! xdr_struct! {
//!     #[derive(Clone, Debug, PartialEq, Eq)]
//!     pub struct Item {
//!         pub id: [u8; 4],
//!         pub kind: Kind,
//!         pub sizes: VecM<u32, 2>,
//!     }
//! }
//!
//! let item = Item {
//!     id: [1, 2, 3, 4],
//!     kind: Kind::Large,
//!     sizes: VecM::try_from(vec![7]).unwrap(),
//! };
//! let encoded = item.encode();
//! assert_eq!(encoded.len(), 4 + 4 + 4 + 4);
//! assert_eq!(Item::decode(encoded).unwrap(), item);
//!
//! // Bounds are enforced on construction and on decode
//! assert!(matches!(
//!     VecM::<u32, 2>::try_from(vec![1, 2, 3]),
//!     Err(Error::LengthExceeded(3, 2))
//! ));
//! ```

pub mod codec;
pub mod config;
pub mod error;
mod macros;
pub mod model;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{
    Codec, Config, Decode, DecodeExt, Encode, EncodeFixed, EncodeSize, FixedSize, Read, ReadExt,
    Write,
};
pub use config::RangeCfg;
pub use error::Error;
pub use model::{Discriminant, Enum, Union};
pub use types::{opaque::BytesM, string::StringM, vec::VecM};

#[doc(hidden)]
pub mod __private {
    pub use bytes::{Buf, BufMut};
}
