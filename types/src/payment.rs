//! Payments and the transactions that carry them.

use crate::{Asset, Memo, MuxedAccount};
use tracing::debug;
use xdrkit_codec::{xdr_struct, xdr_union, Error, VecM};
use xdrkit_utils::Amount;

/// Maximum number of operations in a transaction.
pub const MAX_OPS_PER_TX: u32 = 100;

xdr_struct! {
    /// A price as a fraction `n / d`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Price {
        pub n: i32,
        pub d: i32,
    }
}

xdr_struct! {
    /// The window, in seconds since the Unix epoch, in which a transaction is valid.
    ///
    /// A `max_time` of zero leaves the window open-ended.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct TimeBounds {
        pub min_time: u64,
        pub max_time: u64,
    }
}

impl TimeBounds {
    /// Returns whether `time` falls within the window.
    pub fn contains(&self, time: u64) -> bool {
        time >= self.min_time && (self.max_time == 0 || time <= self.max_time)
    }
}

xdr_struct! {
    /// Sends `amount` of `asset` to `destination`.
    #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PaymentOp {
        pub destination: MuxedAccount,
        pub asset: Asset,
        pub amount: Amount,
    }
}

impl PaymentOp {
    /// Returns a builder with no fields set.
    pub fn builder() -> PaymentOpBuilder {
        PaymentOpBuilder::default()
    }

    /// Returns a copy of this payment sent to `destination`.
    pub fn with_destination(&self, destination: MuxedAccount) -> Self {
        Self {
            destination,
            ..self.clone()
        }
    }

    /// Returns a copy of this payment in `asset`.
    pub fn with_asset(&self, asset: Asset) -> Self {
        Self {
            asset,
            ..self.clone()
        }
    }

    /// Returns a copy of this payment for `amount`.
    pub fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

/// Collects the fields of a [PaymentOp], which can only be built once every field is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentOpBuilder {
    destination: Option<MuxedAccount>,
    asset: Option<Asset>,
    amount: Option<Amount>,
}

impl PaymentOpBuilder {
    pub fn destination(mut self, destination: MuxedAccount) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn asset(mut self, asset: Asset) -> Self {
        self.asset = Some(asset);
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Returns whether every field is set.
    pub fn is_complete(&self) -> bool {
        self.destination.is_some() && self.asset.is_some() && self.amount.is_some()
    }

    /// Builds the payment, failing with [Error::IncompleteValue] naming the first unset field.
    pub fn build(self) -> Result<PaymentOp, Error> {
        let missing = |field: &'static str| {
            debug!(field, "payment incomplete");
            Error::IncompleteValue("PaymentOp", field)
        };
        Ok(PaymentOp {
            destination: self.destination.ok_or_else(|| missing("destination"))?,
            asset: self.asset.ok_or_else(|| missing("asset"))?,
            amount: self.amount.ok_or_else(|| missing("amount"))?,
        })
    }
}

xdr_union! {
    /// Reserved for future extension.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum TransactionExt: i32 {
        #[default]
        V0 = 0,
    }
}

xdr_struct! {
    /// A sequence of payments submitted by one source account.
    #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Transaction {
        pub source_account: MuxedAccount,
        pub fee: u32,
        pub seq_num: i64,
        pub time_bounds: Option<TimeBounds>,
        pub memo: Memo,
        pub operations: VecM<PaymentOp, MAX_OPS_PER_TX>,
        pub ext: TransactionExt,
    }
}

impl Transaction {
    /// Returns a copy of this transaction with `op` appended, failing if it already holds
    /// [MAX_OPS_PER_TX] operations.
    pub fn with_operation(&self, op: PaymentOp) -> Result<Self, Error> {
        Ok(Self {
            operations: self.operations.with_pushed(op)?,
            ..self.clone()
        })
    }

    /// Returns a copy of this transaction with `memo`.
    pub fn with_memo(&self, memo: Memo) -> Self {
        Self {
            memo,
            ..self.clone()
        }
    }
}
