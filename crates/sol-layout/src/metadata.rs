//! Metaplex token metadata layout.
//!
//! ```text
//! offset  size      field
//! 0       1         key (account discriminator)
//! 1       32        update_authority
//! 33      32        mint
//! 65      4 + n     name (u32 LE length prefix + bytes)
//! ...     4 + n     symbol (u32 LE length prefix + bytes)
//! ...     4 + n     uri (u32 LE length prefix + bytes)
//! ```
//!
//! On-chain strings are allocated at fixed capacity and padded with NUL
//! bytes, so decoded values are NUL-stripped and trimmed. Fields after `uri`
//! (royalties, creators) are not decoded.

use crate::error::LayoutError;

/// Decoded name/symbol/uri block of a Metaplex metadata account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub update_authority: [u8; 32],
    pub mint: [u8; 32],
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// Decode the leading fields of a metadata account.
pub fn parse_token_metadata(data: &[u8]) -> Result<TokenMetadata, LayoutError> {
    // Skip the 1-byte account key.
    let mut pos = 1usize;

    let update_authority = take_key(data, &mut pos)?;
    let mint = take_key(data, &mut pos)?;
    let name = take_string(data, &mut pos)?;
    let symbol = take_string(data, &mut pos)?;
    let uri = take_string(data, &mut pos)?;

    Ok(TokenMetadata {
        update_authority,
        mint,
        name,
        symbol,
        uri,
    })
}

fn take_key(data: &[u8], pos: &mut usize) -> Result<[u8; 32], LayoutError> {
    let bytes = take(data, pos, 32)?;
    let mut key = [0u8; 32];
    key.copy_from_slice(bytes);
    Ok(key)
}

/// Read a u32-LE length prefix, then that many bytes, as a cleaned string.
fn take_string(data: &[u8], pos: &mut usize) -> Result<String, LayoutError> {
    let mut len_buf = [0u8; 4];
    len_buf.copy_from_slice(take(data, pos, 4)?);
    let len = u32::from_le_bytes(len_buf) as usize;

    let raw = take(data, pos, len)?;

    // Invalid UTF-8 is replaced rather than rejected; on-chain data is not
    // guaranteed to be well formed.
    let text = String::from_utf8_lossy(raw);
    Ok(text.replace('\0', "").trim().to_string())
}

fn take<'a>(data: &'a [u8], pos: &mut usize, len: usize) -> Result<&'a [u8], LayoutError> {
    if data.len().saturating_sub(*pos) < len {
        return Err(LayoutError::TooShort(format!(
            "metadata data is {} bytes (needed at least {})",
            data.len(),
            *pos + len
        )));
    }
    let slice = &data[*pos..*pos + len];
    *pos += len;
    Ok(slice)
}
