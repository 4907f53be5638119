use thiserror::Error;

/// Address codec and conversion errors.
#[derive(Debug, Error)]
pub enum AddrError {
    #[error("empty input")]
    EmptyInput,

    #[error("hex string has odd length")]
    OddLengthHex,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}
