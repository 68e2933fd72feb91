//! Transaction memos.

use crate::{account::Uint256, Error};
use std::fmt;
use xdrkit_codec::{xdr_enum, xdr_union, StringM};
use xdrkit_utils::hex;

/// Maximum length of a text memo, in bytes.
pub const MAX_MEMO_TEXT: u32 = 28;

xdr_enum! {
    pub enum MemoType {
        MemoNone = 0,
        MemoText = 1,
        MemoId = 2,
        MemoHash = 3,
        MemoReturn = 4,
    }
}

xdr_union! {
    #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Memo: MemoType {
        #[default]
        None = MemoType::MemoNone,
        Text(StringM<MAX_MEMO_TEXT>) = MemoType::MemoText,
        Id(u64) = MemoType::MemoId,
        Hash(Uint256) = MemoType::MemoHash,
        Return(Uint256) = MemoType::MemoReturn,
    }
}

impl Memo {
    /// Creates a text memo, failing if `text` is longer than [MAX_MEMO_TEXT] bytes.
    pub fn text(text: &str) -> Result<Self, Error> {
        Ok(Self::Text(StringM::try_from(text)?))
    }
}

impl fmt::Display for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Text(text) => write!(f, "text:{text}"),
            Self::Id(id) => write!(f, "id:{id}"),
            Self::Hash(hash) => write!(f, "hash:{}", hex(hash)),
            Self::Return(hash) => write!(f, "return:{}", hex(hash)),
        }
    }
}
