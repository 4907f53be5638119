//! High-level Solana account inspection toolkit.
//!
//! Ties the leaf crates together into the operations an inspector frontend
//! actually performs: PDA and ATA derivation from typed seed lists, account
//! viewing with token-layer decoding, byte-level account comparison, and a
//! registry of well-known addresses. Functions here speak Base58 strings at
//! the boundary and raw bytes internally.

pub mod ata;
pub mod compare;
pub mod error;
pub mod known;
pub mod pda;
pub mod seeds;
pub mod types;
pub mod viewer;

pub use ata::derive_ata;
pub use compare::compare_accounts;
pub use error::ToolError;
pub use known::{lookup, KnownAddress, KNOWN_ADDRESSES};
pub use pda::derive_pda;
pub use seeds::SeedList;
pub use types::{
    AccountComparison, AccountReport, AccountSummary, DataDiff, DerivedPda, MetadataReport,
    TokenProgram, TokenReport,
};
pub use viewer::inspect_account;

// Re-export the leaf-crate entry points callers pair with the above, so a
// frontend can depend on this crate alone.
pub use sol_addr::{convert_auto, format_pubkey, parse_pubkey, Conversion, Direction};
pub use sol_pda::{Seed, SeedKind};
pub use sol_rpc::{Account, AccountReader, Commitment, RpcClient};
