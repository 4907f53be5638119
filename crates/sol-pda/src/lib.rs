//! Program Derived Address derivation for Solana.
//!
//! Covers the full derivation pipeline: typed seed values are encoded to
//! their canonical bytes, then hashed together with a bump byte, the owning
//! program id, and the `"ProgramDerivedAddress"` domain separator. A digest
//! is a valid PDA only when it is NOT a point on the Ed25519 curve; the
//! canonical bump is the highest of 256 candidates that lands off-curve.
//!
//! No `solana-sdk` dependency: the derivation is SHA-256 plus a
//! `curve25519-dalek` decompression check.

pub mod derive;
pub mod error;
pub mod seed;
pub mod spl;

// Re-export key public types for ergonomic imports.
pub use derive::{
    create_program_address, find_program_address, is_on_curve, MAX_SEEDS, MAX_SEED_LEN,
};
pub use error::{DerivationError, EncodingError};
pub use seed::{Seed, SeedKind};
pub use spl::{find_associated_token_address, find_metadata_address};
