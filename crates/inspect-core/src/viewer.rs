//! Account inspection: fetch an account and build a layered report.
//!
//! The base layer always carries the raw account fields plus a bounded hex
//! preview of the data. When the owner is one of the two token programs an
//! SPL token layer is attached on top. Everything past the primary fetch
//! (token layout, mint decimals, metadata) is best-effort: a failure there
//! drops that layer instead of failing the whole report.

use sol_layout::AccountState;
use sol_rpc::{Account, AccountReader};

use crate::error::ToolError;
use crate::known;
use crate::types::{AccountReport, MetadataReport, TokenProgram, TokenReport};

/// Byte length of the hex data preview.
const PREVIEW_LEN: usize = 100;

/// Fetch `address` and build its report.
///
/// Fails when the address does not parse, the fetch itself fails, or no
/// account exists at the address.
pub async fn inspect_account<R: AccountReader>(
    reader: &R,
    address: &str,
) -> Result<AccountReport, ToolError> {
    let address = address.trim();
    let key = sol_addr::parse_pubkey(address)?;

    let account = match reader.get_account(&key).await? {
        Some(account) => account,
        None => return Err(ToolError::AccountNotFound(address.to_string())),
    };

    let token = match TokenProgram::from_owner(&account.owner) {
        Some(program) => build_token_report(reader, program, &account).await,
        None => None,
    };

    let preview_end = account.data.len().min(PREVIEW_LEN);
    let owner = sol_addr::format_pubkey(&account.owner);
    let owner_label = known::lookup(&owner).map(|entry| entry.name.to_string());

    Ok(AccountReport {
        address: address.to_string(),
        owner,
        owner_label,
        lamports: account.lamports,
        executable: account.executable,
        data_len: account.data.len(),
        data_preview: hex::encode(&account.data[..preview_end]),
        token,
    })
}

async fn build_token_report<R: AccountReader>(
    reader: &R,
    program: TokenProgram,
    account: &Account,
) -> Option<TokenReport> {
    let parsed = match sol_layout::parse_token_account(&account.data) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Token programs also own mints and multisigs; those are not
            // token accounts and simply get no token layer.
            tracing::debug!(error = %e, "token-owned account did not parse as a token account");
            return None;
        }
    };

    let decimals = fetch_decimals(reader, &parsed.mint).await;
    let metadata = fetch_metadata(reader, &parsed.mint).await;

    Some(TokenReport {
        program,
        mint: sol_addr::format_pubkey(&parsed.mint),
        owner: sol_addr::format_pubkey(&parsed.owner),
        amount: parsed.amount,
        delegate: parsed.delegate.as_ref().map(sol_addr::format_pubkey),
        state: state_name(parsed.state).to_string(),
        is_native: parsed.is_native,
        delegated_amount: parsed.delegated_amount,
        close_authority: parsed.close_authority.as_ref().map(sol_addr::format_pubkey),
        decimals,
        metadata,
    })
}

fn state_name(state: AccountState) -> &'static str {
    match state {
        AccountState::Uninitialized => "Uninitialized",
        AccountState::Initialized => "Initialized",
        AccountState::Frozen => "Frozen",
    }
}

async fn fetch_decimals<R: AccountReader>(reader: &R, mint: &[u8; 32]) -> Option<u8> {
    let mint_account = match reader.get_account(mint).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            tracing::debug!("mint account not found");
            return None;
        }
        Err(e) => {
            tracing::debug!(error = %e, "mint fetch failed");
            return None;
        }
    };

    match sol_layout::parse_mint_decimals(&mint_account.data) {
        Ok(decimals) => Some(decimals),
        Err(e) => {
            tracing::debug!(error = %e, "mint data did not parse");
            None
        }
    }
}

async fn fetch_metadata<R: AccountReader>(reader: &R, mint: &[u8; 32]) -> Option<MetadataReport> {
    let metadata_address = match sol_pda::find_metadata_address(mint) {
        Ok(address) => address,
        Err(e) => {
            tracing::debug!(error = %e, "metadata address derivation failed");
            return None;
        }
    };

    // Most mints have no metadata account; absence is the normal case.
    let metadata_account = match reader.get_account(&metadata_address).await {
        Ok(Some(account)) => account,
        Ok(None) => return None,
        Err(e) => {
            tracing::debug!(error = %e, "metadata fetch failed");
            return None;
        }
    };

    match sol_layout::parse_token_metadata(&metadata_account.data) {
        Ok(metadata) => Some(MetadataReport {
            name: metadata.name,
            symbol: metadata.symbol,
            uri: metadata.uri,
            update_authority: sol_addr::format_pubkey(&metadata.update_authority),
        }),
        Err(e) => {
            tracing::debug!(error = %e, "metadata did not parse");
            None
        }
    }
}
