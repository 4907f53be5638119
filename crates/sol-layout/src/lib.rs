//! Byte-layout parsers for common Solana account types.
//!
//! RPC hands back account data as an opaque byte blob; the parsers here
//! decode the fixed layouts of SPL token accounts, mints, and Metaplex
//! metadata accounts without pulling in the upstream program crates.
//!
//! All parsers take `&[u8]` and fail with [`LayoutError::TooShort`] when the
//! blob ends before the layout does. Trailing bytes (Token-2022 extensions,
//! unparsed metadata fields) are ignored.

pub mod error;
pub mod metadata;
pub mod token;

// Re-export key public types for ergonomic imports.
pub use error::LayoutError;
pub use metadata::{parse_token_metadata, TokenMetadata};
pub use token::{
    parse_mint_decimals, parse_token_account, AccountState, TokenAccount, TOKEN_ACCOUNT_LEN,
};
