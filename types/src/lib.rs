//! Ledger schema types declared on top of the XDR codec.
//!
//! Each type is declared once with [xdrkit_codec::xdr_enum], [xdrkit_codec::xdr_union] or
//! [xdrkit_codec::xdr_struct] and so encodes byte-for-byte as the network expects. Fields holding
//! accounts or signers convert to and from address text through [xdrkit_strkey], and amounts
//! through [xdrkit_utils::amount].
//!
//! Values are immutable: `with_*` methods return an updated copy, and [PaymentOpBuilder] only
//! yields a [PaymentOp] once every field is set.
//!
//! # Example
//!
//! ```
//! use xdrkit_codec::{DecodeExt, Encode};
//! use xdrkit_types::{Asset, PaymentOp};
//!
//! let payment = PaymentOp::builder()
//!     .destination("GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ".parse().unwrap())
//!     .asset(Asset::Native)
//!     .amount("100.25".parse().unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(payment.amount.to_string(), "100.25");
//!
//! let encoded = payment.encode();
//! assert_eq!(PaymentOp::decode(encoded).unwrap(), payment);
//! ```

pub mod account;
pub mod asset;
mod error;
pub mod memo;
pub mod payment;
pub mod signer;

pub use account::{AccountId, CryptoKeyType, MuxedAccount, PublicKey, PublicKeyType, Uint256};
pub use asset::{AlphaNum12, AlphaNum4, Asset, AssetCode12, AssetCode4, AssetType};
pub use error::Error;
pub use memo::{Memo, MemoType};
pub use payment::{PaymentOp, PaymentOpBuilder, Price, TimeBounds, Transaction, TransactionExt};
pub use signer::{SignerKey, SignerKeyType};
