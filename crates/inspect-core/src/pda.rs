//! PDA derivation from a seed list, with Base58 in and out.

use crate::error::ToolError;
use crate::seeds::SeedList;
use crate::types::DerivedPda;

/// Derive a program derived address for `program_id` from the listed seeds.
///
/// Without `bump` the canonical bump is searched. An explicit bump is used
/// as given and fails when its digest lands on the curve.
pub fn derive_pda(
    program_id: &str,
    seeds: &SeedList,
    bump: Option<u8>,
) -> Result<DerivedPda, ToolError> {
    let program_key = sol_addr::parse_pubkey(program_id.trim())?;

    if seeds.is_empty() {
        return Err(ToolError::NoSeeds);
    }

    let encoded = seeds.encode_all()?;
    let seed_refs: Vec<&[u8]> = encoded.iter().map(|s| s.as_slice()).collect();

    let (address, bump) = match bump {
        Some(b) => {
            let address = sol_pda::create_program_address(&seed_refs, b, &program_key)?;
            (address, b)
        }
        None => sol_pda::find_program_address(&seed_refs, &program_key)?,
    };

    Ok(DerivedPda {
        address: sol_addr::format_pubkey(&address),
        bump,
    })
}
