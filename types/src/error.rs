use thiserror::Error;
use xdrkit_strkey::VersionByte;

/// Error type for building and converting schema values
#[derive(Error, Debug)]
pub enum Error {
    #[error("codec: {0}")]
    Codec(#[from] xdrkit_codec::Error),
    #[error("address: {0}")]
    Strkey(#[from] xdrkit_strkey::Error),
    #[error("amount: {0}")]
    Amount(#[from] xdrkit_utils::amount::Error),
    #[error("invalid asset code: {0:?}")]
    InvalidAssetCode(String),
    #[error("invalid asset: {0:?}")]
    InvalidAsset(String),
    #[error("unexpected address kind: {0:?}")]
    UnexpectedKind(VersionByte),
}
