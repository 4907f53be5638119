//! Associated token account derivation for both token programs.

use crate::error::ToolError;
use crate::types::{DerivedPda, TokenProgram};

/// Derive the associated token account for `owner` holding `mint` under the
/// chosen token program.
pub fn derive_ata(
    owner: &str,
    token_program: TokenProgram,
    mint: &str,
) -> Result<DerivedPda, ToolError> {
    let owner_key = sol_addr::parse_pubkey(owner.trim())?;
    let mint_key = sol_addr::parse_pubkey(mint.trim())?;

    let (address, bump) =
        sol_pda::find_associated_token_address(&owner_key, &token_program.id(), &mint_key)?;

    Ok(DerivedPda {
        address: sol_addr::format_pubkey(&address),
        bump,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn owner() -> String {
        sol_addr::format_pubkey(&[0x42u8; 32])
    }

    #[test]
    fn legacy_token_ata() {
        let derived = derive_ata(&owner(), TokenProgram::Token, USDC_MINT).unwrap();
        assert_eq!(derived.address, "4pw5VSwn2Sec4SjMhbUSBcVjS51rG34Ho1WuHQgxqVd2");
        assert_eq!(derived.bump, 250);
    }

    #[test]
    fn token_2022_ata() {
        let derived = derive_ata(&owner(), TokenProgram::Token2022, USDC_MINT).unwrap();
        assert_eq!(derived.address, "22azTH3E48Dxqj4a4xwq4caszCFr8ihrwhGGadt1KSRH");
        assert_eq!(derived.bump, 255);
    }

    #[test]
    fn program_choice_changes_the_address() {
        let legacy = derive_ata(&owner(), TokenProgram::Token, USDC_MINT).unwrap();
        let modern = derive_ata(&owner(), TokenProgram::Token2022, USDC_MINT).unwrap();
        assert_ne!(legacy.address, modern.address);
    }

    #[test]
    fn invalid_owner_is_rejected() {
        let err = derive_ata("0I0I0I", TokenProgram::Token, USDC_MINT).unwrap_err();
        assert!(matches!(err, ToolError::InvalidAddress(_)));
    }

    #[test]
    fn invalid_mint_is_rejected() {
        let err = derive_ata(&owner(), TokenProgram::Token, "not a mint").unwrap_err();
        assert!(matches!(err, ToolError::InvalidAddress(_)));
    }

    #[test]
    fn inputs_are_trimmed() {
        let padded_owner = format!(" {} ", owner());
        let padded_mint = format!("\t{USDC_MINT}\n");
        let derived = derive_ata(&padded_owner, TokenProgram::Token, &padded_mint).unwrap();
        assert_eq!(derived.address, "4pw5VSwn2Sec4SjMhbUSBcVjS51rG34Ho1WuHQgxqVd2");
    }
}
