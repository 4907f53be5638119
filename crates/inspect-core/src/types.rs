use serde::{Deserialize, Serialize};

/// The two programs whose accounts use the SPL token layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenProgram {
    Token,
    Token2022,
}

impl TokenProgram {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenProgram::Token => "SPL Token",
            TokenProgram::Token2022 => "Token-2022",
        }
    }

    /// Program id as raw bytes
    pub fn id(&self) -> [u8; 32] {
        match self {
            TokenProgram::Token => sol_addr::TOKEN_PROGRAM_ID,
            TokenProgram::Token2022 => sol_addr::TOKEN_2022_PROGRAM_ID,
        }
    }

    /// Match an account owner against the two token programs
    pub fn from_owner(owner: &[u8; 32]) -> Option<Self> {
        if owner == &sol_addr::TOKEN_PROGRAM_ID {
            Some(TokenProgram::Token)
        } else if owner == &sol_addr::TOKEN_2022_PROGRAM_ID {
            Some(TokenProgram::Token2022)
        } else {
            None
        }
    }
}

/// Outcome of a PDA or ATA derivation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedPda {
    pub address: String,
    pub bump: u8,
}

/// Everything the viewer learned about one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountReport {
    pub address: String,
    /// Owning program, Base58
    pub owner: String,
    /// Directory name of the owner, when it is a well-known address
    pub owner_label: Option<String>,
    pub lamports: u64,
    pub executable: bool,
    pub data_len: usize,
    /// Hex of the leading data bytes (at most 100 of them)
    pub data_preview: String,
    /// Present when the owner is a token program and the data parses
    pub token: Option<TokenReport>,
}

/// Decoded token-account layer of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenReport {
    pub program: TokenProgram,
    pub mint: String,
    pub owner: String,
    /// Balance in base units
    pub amount: u64,
    pub delegate: Option<String>,
    pub state: String,
    /// Rent-exempt reserve for wrapped SOL accounts
    pub is_native: Option<u64>,
    pub delegated_amount: u64,
    pub close_authority: Option<String>,
    /// From the mint account, when it could be fetched
    pub decimals: Option<u8>,
    /// From the Metaplex metadata PDA, when one exists
    pub metadata: Option<MetadataReport>,
}

/// Name block of a Metaplex metadata account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataReport {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub update_authority: String,
}

/// One side of an account comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub address: String,
    pub owner: String,
    pub lamports: u64,
    pub executable: bool,
    pub data_len: usize,
}

/// Byte-level difference between two data blobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataDiff {
    /// Positions examined: the longer of the two lengths
    pub compared: usize,
    /// Positions that differ, counting positions past the shorter blob
    pub differing: usize,
    /// The differing positions, ascending
    pub offsets: Vec<usize>,
}

/// Outcome of comparing two accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountComparison {
    pub first: AccountSummary,
    pub second: AccountSummary,
    pub owners_match: bool,
    pub lamports_match: bool,
    pub executable_match: bool,
    pub data_len_match: bool,
    pub data: DataDiff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_program_ids_roundtrip() {
        assert_eq!(
            sol_addr::format_pubkey(&TokenProgram::Token.id()),
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
        assert_eq!(
            sol_addr::format_pubkey(&TokenProgram::Token2022.id()),
            "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"
        );
    }

    #[test]
    fn from_owner_recognizes_both_programs() {
        assert_eq!(
            TokenProgram::from_owner(&sol_addr::TOKEN_PROGRAM_ID),
            Some(TokenProgram::Token)
        );
        assert_eq!(
            TokenProgram::from_owner(&sol_addr::TOKEN_2022_PROGRAM_ID),
            Some(TokenProgram::Token2022)
        );
        assert_eq!(TokenProgram::from_owner(&[0u8; 32]), None);
    }

    #[test]
    fn reports_serialize_to_json() {
        let report = AccountReport {
            address: "abc".into(),
            owner: "def".into(),
            owner_label: None,
            lamports: 5,
            executable: false,
            data_len: 2,
            data_preview: "aabb".into(),
            token: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["lamports"], 5);
        assert_eq!(json["data_preview"], "aabb");
        assert!(json["token"].is_null());
    }
}
