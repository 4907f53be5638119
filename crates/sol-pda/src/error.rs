use thiserror::Error;

/// Seed-encoding errors: the raw value could not be turned into bytes.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("seed value is empty")]
    EmptySeed,

    #[error("hex seed has odd length")]
    OddLengthHex,

    #[error("invalid hex in seed: {0}")]
    InvalidHex(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The message carries the type name and its bounds, e.g.
    /// "u8 must be between 0 and 255". Unparseable input reports the same
    /// bounds message as a genuinely out-of-range value.
    #[error("{0}")]
    OutOfRange(String),
}

impl From<sol_addr::AddrError> for EncodingError {
    fn from(e: sol_addr::AddrError) -> Self {
        match e {
            sol_addr::AddrError::EmptyInput => EncodingError::EmptySeed,
            sol_addr::AddrError::OddLengthHex => EncodingError::OddLengthHex,
            sol_addr::AddrError::InvalidHex(m) => EncodingError::InvalidHex(m),
            sol_addr::AddrError::InvalidBase58(m) | sol_addr::AddrError::InvalidPublicKey(m) => {
                EncodingError::InvalidPublicKey(m)
            }
        }
    }
}

/// Address-derivation errors: the encoded seeds could not produce a PDA.
#[derive(Debug, Error)]
pub enum DerivationError {
    /// Covers both too many seeds and an over-long single seed; the message
    /// names which limit was hit.
    #[error("{0}")]
    TooManySeeds(String),

    #[error("no valid off-curve address found for any bump")]
    NoValidBumpFound,

    #[error("derived address is on the ed25519 curve")]
    OnCurveAddress,
}
