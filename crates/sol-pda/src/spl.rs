//! Well-known PDA layouts from the SPL program suite.
//!
//! Associated token accounts and Metaplex metadata accounts are plain PDAs
//! with fixed seed recipes; the helpers here just fill the seeds in.

use sol_addr::{ASSOCIATED_TOKEN_PROGRAM_ID, METADATA_PROGRAM_ID};

use crate::derive::find_program_address;
use crate::error::DerivationError;

/// Literal first seed of every Metaplex metadata PDA.
const METADATA_SEED: &[u8] = b"metadata";

/// Derive the associated token account for a wallet and mint.
///
/// Seeds are `[owner, token_program_id, mint]`, derived under the associated
/// token program. The token program id must be the one that owns the mint
/// (legacy Token and Token-2022 mints get different ATAs).
pub fn find_associated_token_address(
    owner: &[u8; 32],
    token_program_id: &[u8; 32],
    mint: &[u8; 32],
) -> Result<([u8; 32], u8), DerivationError> {
    find_program_address(
        &[owner.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}

/// Derive the Metaplex metadata account for a mint.
///
/// Seeds are `["metadata", metadata_program_id, mint]`, derived under the
/// metadata program itself. The bump is dropped; metadata lookups only need
/// the address.
pub fn find_metadata_address(mint: &[u8; 32]) -> Result<[u8; 32], DerivationError> {
    find_program_address(
        &[METADATA_SEED, METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::is_on_curve;
    use sol_addr::{format_pubkey, parse_pubkey, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID};

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    // -- associated token accounts -----------------------------------------

    #[test]
    fn ata_for_legacy_token_program() {
        let owner = [0x42u8; 32];
        let mint = parse_pubkey(USDC_MINT).unwrap();

        let (ata, bump) =
            find_associated_token_address(&owner, &TOKEN_PROGRAM_ID, &mint).unwrap();

        assert_eq!(
            format_pubkey(&ata),
            "4pw5VSwn2Sec4SjMhbUSBcVjS51rG34Ho1WuHQgxqVd2"
        );
        assert_eq!(bump, 250);
    }

    #[test]
    fn ata_for_token_2022_program() {
        let owner = [0x42u8; 32];
        let mint = parse_pubkey(USDC_MINT).unwrap();

        let (ata, bump) =
            find_associated_token_address(&owner, &TOKEN_2022_PROGRAM_ID, &mint).unwrap();

        assert_eq!(
            format_pubkey(&ata),
            "22azTH3E48Dxqj4a4xwq4caszCFr8ihrwhGGadt1KSRH"
        );
        assert_eq!(bump, 255);
    }

    #[test]
    fn token_program_choice_changes_the_ata() {
        let owner = [0x42u8; 32];
        let mint = parse_pubkey(USDC_MINT).unwrap();

        let (legacy, _) =
            find_associated_token_address(&owner, &TOKEN_PROGRAM_ID, &mint).unwrap();
        let (t2022, _) =
            find_associated_token_address(&owner, &TOKEN_2022_PROGRAM_ID, &mint).unwrap();

        assert_ne!(legacy, t2022);
    }

    #[test]
    fn different_mints_give_different_atas() {
        let owner = [0x42u8; 32];
        let mint_a = [0x11u8; 32];
        let mint_b = [0x22u8; 32];

        let (a, _) = find_associated_token_address(&owner, &TOKEN_PROGRAM_ID, &mint_a).unwrap();
        let (b, _) = find_associated_token_address(&owner, &TOKEN_PROGRAM_ID, &mint_b).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn ata_is_off_curve() {
        let owner = [0x42u8; 32];
        let mint = parse_pubkey(USDC_MINT).unwrap();
        let (ata, _) = find_associated_token_address(&owner, &TOKEN_PROGRAM_ID, &mint).unwrap();
        assert!(!is_on_curve(&ata));
    }

    // -- metadata accounts --------------------------------------------------

    #[test]
    fn usdc_metadata_address() {
        let mint = parse_pubkey(USDC_MINT).unwrap();
        let metadata = find_metadata_address(&mint).unwrap();

        // Publicly known metadata account for the USDC mint.
        assert_eq!(
            format_pubkey(&metadata),
            "5x38Kp4hvdomTCnCrAny4UtMUt5rQBdB6px2K1Ui45Wq"
        );
    }

    #[test]
    fn metadata_derivation_is_deterministic() {
        let mint = [0x02u8; 32];
        let a = find_metadata_address(&mint).unwrap();
        let b = find_metadata_address(&mint).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_address_tracks_the_mint() {
        let a = find_metadata_address(&[0x01u8; 32]).unwrap();
        let b = find_metadata_address(&[0x02u8; 32]).unwrap();
        assert_ne!(a, b);
    }
}
