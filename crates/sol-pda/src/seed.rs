//! Typed seed values and their canonical byte encodings.
//!
//! A seed starts life as user input: a kind plus a raw string value.
//! Encoding turns that pair into the exact bytes fed to the hasher:
//!
//! ```text
//! string   UTF-8 bytes of the value, no length prefix
//! hex      decoded bytes, optional 0x prefix
//! pubkey   the 32 raw bytes of the Base58-decoded key
//! uN / iN  little-endian, fixed width N/8 bytes
//! ```
//!
//! 128-bit integers are written as two 64-bit little-endian halves, low
//! half first, byte-identical to `to_le_bytes`. Signed kinds encode the
//! two's-complement representation.

use crate::error::EncodingError;

/// The closed set of seed kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    String,
    Hex,
    Pubkey,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
}

/// A typed seed awaiting encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub kind: SeedKind,
    pub value: String,
}

impl Seed {
    pub fn new(kind: SeedKind, value: impl Into<String>) -> Self {
        Seed {
            kind,
            value: value.into(),
        }
    }

    /// Encode this seed to its canonical bytes.
    ///
    /// A value that is empty after trimming fails with `EmptySeed` before
    /// any kind-specific parsing. String seeds encode the value as typed
    /// (whitespace preserved); all other kinds parse the trimmed value.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return Err(EncodingError::EmptySeed);
        }

        match self.kind {
            SeedKind::String => Ok(self.value.as_bytes().to_vec()),
            SeedKind::Hex => Ok(sol_addr::decode_hex(trimmed)?),
            SeedKind::Pubkey => Ok(sol_addr::parse_pubkey(trimmed)?.to_vec()),
            SeedKind::U8 => encode_unsigned(trimmed, 8),
            SeedKind::U16 => encode_unsigned(trimmed, 16),
            SeedKind::U32 => encode_unsigned(trimmed, 32),
            SeedKind::U64 => encode_unsigned(trimmed, 64),
            SeedKind::U128 => encode_unsigned(trimmed, 128),
            SeedKind::I8 => encode_signed(trimmed, 8),
            SeedKind::I16 => encode_signed(trimmed, 16),
            SeedKind::I32 => encode_signed(trimmed, 32),
            SeedKind::I64 => encode_signed(trimmed, 64),
            SeedKind::I128 => encode_signed(trimmed, 128),
        }
    }
}

fn encode_unsigned(value: &str, bits: u32) -> Result<Vec<u8>, EncodingError> {
    let max: u128 = if bits == 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    };
    let out_of_range = || EncodingError::OutOfRange(format!("u{bits} must be between 0 and {max}"));

    let parsed: u128 = value.parse().map_err(|_| out_of_range())?;
    if parsed > max {
        return Err(out_of_range());
    }

    Ok(parsed.to_le_bytes()[..(bits / 8) as usize].to_vec())
}

fn encode_signed(value: &str, bits: u32) -> Result<Vec<u8>, EncodingError> {
    let (min, max): (i128, i128) = if bits == 128 {
        (i128::MIN, i128::MAX)
    } else {
        let half = 1i128 << (bits - 1);
        (-half, half - 1)
    };
    let out_of_range =
        || EncodingError::OutOfRange(format!("i{bits} must be between {min} and {max}"));

    let parsed: i128 = value.parse().map_err(|_| out_of_range())?;
    if parsed < min || parsed > max {
        return Err(out_of_range());
    }

    // The low N/8 bytes of the i128 little-endian form are exactly the
    // two's-complement iN little-endian form; sign extension occupies the
    // high bytes only.
    Ok(parsed.to_le_bytes()[..(bits / 8) as usize].to_vec())
}
