//! Format-detecting hex/Base58 conversion.
//!
//! Detection precedence: an input starting with `0x`, or consisting solely
//! of ASCII hex digits, is treated as hex and converted to Base58. Anything
//! else is treated as Base58 and converted to `0x`-prefixed lowercase hex.
//! Strings like `"deadbeef"` that are valid in both alphabets therefore
//! always take the hex path.

use crate::error::AddrError;

/// Which way the converter went for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HexToBase58,
    Base58ToHex,
}

/// A conversion result plus the detected input format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub direction: Direction,
}

/// Convert between hex and Base58, detecting the input format.
///
/// The input is trimmed first; an empty input is an error rather than an
/// empty output.
pub fn convert_auto(input: &str) -> Result<Conversion, AddrError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AddrError::EmptyInput);
    }

    if looks_like_hex(input) {
        Ok(Conversion {
            output: hex_to_base58(input)?,
            direction: Direction::HexToBase58,
        })
    } else {
        Ok(Conversion {
            output: base58_to_hex(input)?,
            direction: Direction::Base58ToHex,
        })
    }
}

/// Convert a hex string (with or without `0x` prefix) to Base58.
pub fn hex_to_base58(input: &str) -> Result<String, AddrError> {
    let bytes = decode_hex(input)?;
    Ok(bs58::encode(bytes).into_string())
}

/// Decode a hex string, tolerating an optional `0x` prefix.
///
/// Odd length and non-hex digits are distinct errors; the odd-length case is
/// checked first so it is never reported as a bad digit.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, AddrError> {
    let hex_str = input.strip_prefix("0x").unwrap_or(input);

    if hex_str.len() % 2 != 0 {
        return Err(AddrError::OddLengthHex);
    }

    hex::decode(hex_str).map_err(|e| AddrError::InvalidHex(e.to_string()))
}

/// Convert a Base58 string to `0x`-prefixed lowercase hex.
pub fn base58_to_hex(input: &str) -> Result<String, AddrError> {
    let bytes = bs58::decode(input)
        .into_vec()
        .map_err(|e| AddrError::InvalidBase58(e.to_string()))?;
    Ok(format!("0x{}", hex::encode(bytes)))
}

fn looks_like_hex(input: &str) -> bool {
    input.starts_with("0x") || input.bytes().all(|b| b.is_ascii_hexdigit())
}
