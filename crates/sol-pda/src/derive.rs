//! PDA digest computation and the off-curve bump search.
//!
//! ```text
//! candidate = SHA-256(seed_0 || seed_1 || ... || bump || program_id || "ProgramDerivedAddress")
//! ```
//!
//! A candidate is a usable PDA only when it is NOT a valid Ed25519 point.
//! Canonical derivation walks bumps 255 down to 0 and takes the first
//! off-curve hit; explicit derivation checks a single caller-chosen bump.

use sha2::{Digest, Sha256};

use crate::error::DerivationError;

/// Protocol limit on the number of seeds in one derivation.
pub const MAX_SEEDS: usize = 16;

/// Protocol limit on the byte length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// The domain separator appended to every PDA digest.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the canonical PDA for the given seeds and program.
///
/// Tries bump seeds from 255 down to 0 and returns the first address that
/// falls off the curve, together with the bump that produced it.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &[u8; 32],
) -> Result<([u8; 32], u8), DerivationError> {
    validate_seeds(seeds)?;

    for bump in (0u8..=255).rev() {
        if let Some(address) = try_derive(seeds, bump, program_id) {
            return Ok((address, bump));
        }
    }

    Err(DerivationError::NoValidBumpFound)
}

/// Derive a PDA with a caller-supplied bump, no search.
///
/// Fails with `OnCurveAddress` if the digest for this exact bump is a valid
/// curve point; the caller can retry with a different bump or fall back to
/// `find_program_address`.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &[u8; 32],
) -> Result<[u8; 32], DerivationError> {
    validate_seeds(seeds)?;

    try_derive(seeds, bump, program_id).ok_or(DerivationError::OnCurveAddress)
}

fn validate_seeds(seeds: &[&[u8]]) -> Result<(), DerivationError> {
    if seeds.len() > MAX_SEEDS {
        return Err(DerivationError::TooManySeeds(format!(
            "too many seeds: {} (max {MAX_SEEDS})",
            seeds.len()
        )));
    }
    for (i, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(DerivationError::TooManySeeds(format!(
                "seed {} is {} bytes (max {MAX_SEED_LEN})",
                i + 1,
                seed.len()
            )));
        }
    }
    Ok(())
}

fn try_derive(seeds: &[&[u8]], bump: u8, program_id: &[u8; 32]) -> Option<[u8; 32]> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);

    let hash: [u8; 32] = hasher.finalize().into();

    // A valid PDA must NOT be on the Ed25519 curve.
    if is_on_curve(&hash) {
        return None;
    }

    Some(hash)
}

/// Check whether 32 bytes are a valid compressed Ed25519 point.
///
/// Uses `curve25519-dalek` to attempt decompression; success means the
/// bytes are on the curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use sol_addr::{format_pubkey, ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};

    // -- curve membership ---------------------------------------------------

    #[test]
    fn basepoint_is_on_curve() {
        // The Ed25519 basepoint (compressed form).
        let basepoint: [u8; 32] = [
            0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66,
        ];
        assert!(is_on_curve(&basepoint));
    }

    #[test]
    fn repeated_02_is_off_curve() {
        let not_a_point: [u8; 32] = [0x02; 32];
        assert!(!is_on_curve(&not_a_point));
    }

    #[test]
    fn real_program_ids_are_on_curve() {
        // Normal account keys are curve points; only PDAs are forced off.
        assert!(is_on_curve(&TOKEN_PROGRAM_ID));
        assert!(is_on_curve(&ASSOCIATED_TOKEN_PROGRAM_ID));
    }

    // -- canonical derivation ----------------------------------------------

    #[test]
    fn known_vault_pda() {
        let user = [0x01u8; 32];
        let (address, bump) =
            find_program_address(&[b"vault", &user], &TOKEN_PROGRAM_ID).unwrap();

        assert_eq!(
            format_pubkey(&address),
            "XG3ufJoyxopqg6SHmiRCqYozqrVzAJJg2KicfprUeWS"
        );
        assert_eq!(bump, 254);
    }

    #[test]
    fn known_pool_counter_pda() {
        let counter = 42u64.to_le_bytes();
        let (address, bump) =
            find_program_address(&[b"pool", &counter], &ASSOCIATED_TOKEN_PROGRAM_ID).unwrap();

        assert_eq!(
            format_pubkey(&address),
            "7x1Np538sPSW6GDfUr4xuUTwa2FjcxzCoqFEX4crgF7v"
        );
        assert_eq!(bump, 253);
    }

    #[test]
    fn derived_address_is_off_curve() {
        let (address, _bump) =
            find_program_address(&[b"state"], &TOKEN_PROGRAM_ID).unwrap();
        assert!(!is_on_curve(&address));
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = find_program_address(&[b"config", &[7u8]], &TOKEN_PROGRAM_ID).unwrap();
        let b = find_program_address(&[b"config", &[7u8]], &TOKEN_PROGRAM_ID).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn canonical_bump_reproduces_via_explicit_mode() {
        let user = [0x01u8; 32];
        let (found, bump) =
            find_program_address(&[b"vault", &user], &TOKEN_PROGRAM_ID).unwrap();
        let recreated =
            create_program_address(&[b"vault", &user], bump, &TOKEN_PROGRAM_ID).unwrap();
        assert_eq!(found, recreated);
    }

    #[test]
    fn canonical_bump_is_highest_off_curve() {
        // Every bump above the canonical one must land on the curve.
        let user = [0x01u8; 32];
        let (_, bump) = find_program_address(&[b"vault", &user], &TOKEN_PROGRAM_ID).unwrap();
        for higher in (bump + 1)..=255 {
            let result = create_program_address(&[b"vault", &user], higher, &TOKEN_PROGRAM_ID);
            assert!(
                matches!(result, Err(DerivationError::OnCurveAddress)),
                "bump {higher} unexpectedly derived off-curve"
            );
        }
    }

    // -- explicit-bump mode -------------------------------------------------

    #[test]
    fn explicit_non_canonical_bump_gives_different_address() {
        let user = [0x01u8; 32];
        let address =
            create_program_address(&[b"vault", &user], 252, &TOKEN_PROGRAM_ID).unwrap();
        assert_eq!(
            format_pubkey(&address),
            "4pUbiDKnQdobxQKmyRyGv94uAp3kxgTkasJdwgQ4bKjw"
        );
    }

    #[test]
    fn explicit_on_curve_bump_is_rejected() {
        // For these seeds the bump-255 digest is a curve point.
        let user = [0x01u8; 32];
        let result = create_program_address(&[b"vault", &user], 255, &TOKEN_PROGRAM_ID);
        assert!(matches!(result, Err(DerivationError::OnCurveAddress)));
    }

    // -- seed limits --------------------------------------------------------

    #[test]
    fn seventeen_seeds_rejected() {
        let seed: &[u8] = b"x";
        let seeds = vec![seed; 17];
        let result = find_program_address(&seeds, &TOKEN_PROGRAM_ID);
        assert!(matches!(result, Err(DerivationError::TooManySeeds(_))));
    }

    #[test]
    fn sixteen_seeds_accepted() {
        let seed: &[u8] = b"x";
        let seeds = vec![seed; 16];
        assert!(find_program_address(&seeds, &TOKEN_PROGRAM_ID).is_ok());
    }

    #[test]
    fn oversized_seed_rejected_in_both_modes() {
        let long = [0u8; 33];
        let seeds: &[&[u8]] = &[&long];

        let result = find_program_address(seeds, &TOKEN_PROGRAM_ID);
        assert!(matches!(result, Err(DerivationError::TooManySeeds(_))));

        let result = create_program_address(seeds, 255, &TOKEN_PROGRAM_ID);
        assert!(matches!(result, Err(DerivationError::TooManySeeds(_))));
    }

    #[test]
    fn thirty_two_byte_seed_accepted() {
        let exact = [0u8; 32];
        assert!(find_program_address(&[&exact], &TOKEN_PROGRAM_ID).is_ok());
    }

    #[test]
    fn seed_limit_message_names_position() {
        let long = [0u8; 40];
        let err = find_program_address(&[b"ok", &long], &TOKEN_PROGRAM_ID).unwrap_err();
        assert_eq!(err.to_string(), "seed 2 is 40 bytes (max 32)");
    }

    // -- randomized roundtrip -----------------------------------------------

    #[test]
    fn random_inputs_find_then_recreate() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let program_id: [u8; 32] = rng.gen();
            let seed_a: [u8; 32] = rng.gen();
            let seed_b: [u8; 8] = rng.gen();
            let seeds: &[&[u8]] = &[&seed_a, &seed_b];

            let (found, bump) = find_program_address(seeds, &program_id).unwrap();
            let recreated = create_program_address(seeds, bump, &program_id).unwrap();
            assert_eq!(found, recreated);
            assert!(!is_on_curve(&found));
        }
    }
}
