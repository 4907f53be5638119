//! Solana address primitives for the inspection tools.
//!
//! A Solana address is simply the Base58 encoding of a raw 32-byte Ed25519
//! public key, with no hashing step and no checksum. This crate provides the
//! pubkey codec, a format-detecting hex/Base58 converter, and the
//! well-known program ids the rest of the workspace checks and derives
//! against.

pub mod address;
pub mod convert;
pub mod error;
pub mod programs;

// Re-export key public types for ergonomic imports.
pub use address::{format_pubkey, parse_pubkey};
pub use convert::{convert_auto, decode_hex, Conversion, Direction};
pub use error::AddrError;
pub use programs::{
    ASSOCIATED_TOKEN_PROGRAM_ID, METADATA_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID,
    TOKEN_PROGRAM_ID,
};
