//! Base58 public-key codec.
//!
//! The canonical text form of a public key is the Base58 encoding of its
//! raw 32 bytes, using the standard Bitcoin alphabet of the `bs58` crate.

use crate::error::AddrError;

/// Decode a Base58 address string to its 32-byte public key.
///
/// Returns an error if the string is not valid Base58 or does not decode
/// to exactly 32 bytes.
pub fn parse_pubkey(address: &str) -> Result<[u8; 32], AddrError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| AddrError::InvalidPublicKey(format!("base58 decode failed: {e}")))?;

    let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
        AddrError::InvalidPublicKey(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode a 32-byte public key as a Base58 address string.
pub fn format_pubkey(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}
