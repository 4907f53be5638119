//! Minimal Solana JSON-RPC client for reading accounts.
//!
//! Speaks only `getAccountInfo` over HTTP POST, requesting base64-encoded
//! data, and decodes the response into a plain [`Account`]. Higher layers
//! depend on the [`AccountReader`] trait rather than the concrete client so
//! tests can substitute an in-memory store.

pub mod client;
pub mod error;
pub mod types;

// Re-export key public types for ergonomic imports.
pub use client::{Account, AccountReader, Commitment, RpcClient, DEFAULT_ENDPOINT};
pub use error::RpcError;
