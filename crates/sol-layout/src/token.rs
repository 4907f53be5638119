//! Layouts of the two account types owned by the SPL token programs.
//!
//! Both the legacy Token program and Token-2022 store token accounts and
//! mints with the same fixed prefix; Token-2022 appends extension data that
//! these parsers skip.
//!
//! # Token account wire format
//!
//! ```text
//! offset  size  field
//! 0       32    mint
//! 32      32    owner
//! 64      8     amount (u64 LE)
//! 72      33    delegate (1-byte tag + 32-byte key)
//! 105     1     state (0 uninitialized, 1 initialized, otherwise frozen)
//! 106     9     is_native (1-byte tag + u64 LE rent-exempt reserve)
//! 119     8     delegated_amount (u64 LE)
//! 127     33    close_authority (1-byte tag + 32-byte key)
//! ```
//!
//! Optional fields carry a leading tag byte; `1` means present, any other
//! value is treated as absent.

use crate::error::LayoutError;

// ---------------------------------------------------------------------------
// Token account
// ---------------------------------------------------------------------------

/// Minimum byte length of a token account.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// Lifecycle state of a token account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Uninitialized,
    Initialized,
    Frozen,
}

impl AccountState {
    /// Decode the state byte. Values above 1 all map to `Frozen`.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => AccountState::Uninitialized,
            1 => AccountState::Initialized,
            _ => AccountState::Frozen,
        }
    }
}

/// A decoded SPL token account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAccount {
    pub mint: [u8; 32],
    pub owner: [u8; 32],
    /// Balance in base units of the mint.
    pub amount: u64,
    pub delegate: Option<[u8; 32]>,
    pub state: AccountState,
    /// Raw state byte; `Frozen` above is a catch-all for every value > 1.
    pub state_raw: u8,
    /// For wrapped SOL accounts, the rent-exempt reserve in lamports.
    pub is_native: Option<u64>,
    pub delegated_amount: u64,
    pub close_authority: Option<[u8; 32]>,
}

/// Decode a token account from raw account data.
///
/// Data longer than 165 bytes is accepted; the Token-2022 extension tail is
/// ignored.
pub fn parse_token_account(data: &[u8]) -> Result<TokenAccount, LayoutError> {
    if data.len() < TOKEN_ACCOUNT_LEN {
        return Err(LayoutError::TooShort(format!(
            "token account data is {} bytes (expected at least {TOKEN_ACCOUNT_LEN})",
            data.len()
        )));
    }

    let state_raw = data[105];

    Ok(TokenAccount {
        mint: read_key(data, 0),
        owner: read_key(data, 32),
        amount: read_u64(data, 64),
        delegate: read_option_key(data, 72),
        state: AccountState::from_byte(state_raw),
        state_raw,
        is_native: read_option_u64(data, 106),
        delegated_amount: read_u64(data, 119),
        close_authority: read_option_key(data, 127),
    })
}

// ---------------------------------------------------------------------------
// Mint
// ---------------------------------------------------------------------------

/// Byte offset of the decimals field inside a mint account.
pub const MINT_DECIMALS_OFFSET: usize = 44;

/// Read the decimals field of a mint account.
///
/// The rest of the mint layout (supply, authorities) is not decoded; display
/// scaling only needs this one byte.
pub fn parse_mint_decimals(data: &[u8]) -> Result<u8, LayoutError> {
    if data.len() <= MINT_DECIMALS_OFFSET {
        return Err(LayoutError::TooShort(format!(
            "mint data is {} bytes (expected at least {})",
            data.len(),
            MINT_DECIMALS_OFFSET + 1
        )));
    }
    Ok(data[MINT_DECIMALS_OFFSET])
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

// Callers check the overall length once; offsets below stay in bounds.

fn read_key(data: &[u8], offset: usize) -> [u8; 32] {
    let mut key = [0u8; 32];
    key.copy_from_slice(&data[offset..offset + 32]);
    key
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(buf)
}

fn read_option_key(data: &[u8], offset: usize) -> Option<[u8; 32]> {
    if data[offset] != 1 {
        return None;
    }
    Some(read_key(data, offset + 1))
}

fn read_option_u64(data: &[u8], offset: usize) -> Option<u64> {
    if data[offset] != 1 {
        return None;
    }
    Some(read_u64(data, offset + 1))
}
