//! Side-by-side comparison of two accounts.

use sol_rpc::{Account, AccountReader};

use crate::error::ToolError;
use crate::types::{AccountComparison, AccountSummary, DataDiff};

/// Fetch two accounts and compare field by field and byte by byte.
///
/// Comparing an address with itself is rejected before any fetch. Both
/// accounts must exist; the error names the one that is missing.
pub async fn compare_accounts<R: AccountReader>(
    reader: &R,
    first: &str,
    second: &str,
) -> Result<AccountComparison, ToolError> {
    let first = first.trim();
    let second = second.trim();

    let first_key = sol_addr::parse_pubkey(first)?;
    let second_key = sol_addr::parse_pubkey(second)?;

    if first_key == second_key {
        return Err(ToolError::SameAccount);
    }

    let (first_account, second_account) = futures::try_join!(
        reader.get_account(&first_key),
        reader.get_account(&second_key)
    )?;

    let first_account = match first_account {
        Some(account) => account,
        None => return Err(ToolError::AccountNotFound(first.to_string())),
    };
    let second_account = match second_account {
        Some(account) => account,
        None => return Err(ToolError::AccountNotFound(second.to_string())),
    };

    Ok(build_comparison(first, second, &first_account, &second_account))
}

fn build_comparison(
    first_address: &str,
    second_address: &str,
    first: &Account,
    second: &Account,
) -> AccountComparison {
    AccountComparison {
        first: summarize(first_address, first),
        second: summarize(second_address, second),
        owners_match: first.owner == second.owner,
        lamports_match: first.lamports == second.lamports,
        executable_match: first.executable == second.executable,
        data_len_match: first.data.len() == second.data.len(),
        data: diff_data(&first.data, &second.data),
    }
}

fn summarize(address: &str, account: &Account) -> AccountSummary {
    AccountSummary {
        address: address.to_string(),
        owner: sol_addr::format_pubkey(&account.owner),
        lamports: account.lamports,
        executable: account.executable,
        data_len: account.data.len(),
    }
}

/// Walk both buffers over the longer length; a position past the end of the
/// shorter buffer counts as differing.
fn diff_data(a: &[u8], b: &[u8]) -> DataDiff {
    let compared = a.len().max(b.len());
    let mut offsets = Vec::new();

    for i in 0..compared {
        if a.get(i) != b.get(i) {
            offsets.push(i);
        }
    }

    DataDiff {
        compared,
        differing: offsets.len(),
        offsets,
    }
}
