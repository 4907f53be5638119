//! The HTTP client and the [`AccountReader`] abstraction.

use async_trait::async_trait;
use base64::{prelude::BASE64_STANDARD, Engine};

use crate::error::RpcError;
use crate::types::{AccountInfoConfig, AccountInfoResult, JsonRpcRequest, JsonRpcResponse};

/// Public endpoint used when the caller does not supply one.
pub const DEFAULT_ENDPOINT: &str = "https://solana.drpc.org/";

/// Confirmation level attached to read requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    /// Wire spelling expected by RPC nodes.
    pub fn as_str(self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// A fetched account with its data already base64-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Program that owns the account.
    pub owner: [u8; 32],
    /// Balance in lamports.
    pub lamports: u64,
    pub executable: bool,
    pub data: Vec<u8>,
}

/// Read-only account access.
///
/// Higher layers take `&dyn AccountReader` (or a generic bound) instead of
/// the concrete client so tests can run against an in-memory store.
#[async_trait]
pub trait AccountReader {
    /// Fetch one account. `Ok(None)` means the account does not exist.
    async fn get_account(&self, address: &[u8; 32]) -> Result<Option<Account>, RpcError>;
}

/// HTTP JSON-RPC client.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: String,
    commitment: Commitment,
}

impl RpcClient {
    /// Client against the default public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        RpcClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            commitment: Commitment::default(),
        }
    }

    pub fn commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RpcClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountReader for RpcClient {
    async fn get_account(&self, address: &[u8; 32]) -> Result<Option<Account>, RpcError> {
        let address_b58 = sol_addr::format_pubkey(address);
        let request = JsonRpcRequest::new(
            "getAccountInfo",
            (
                address_b58.clone(),
                AccountInfoConfig {
                    encoding: "base64",
                    commitment: self.commitment.as_str(),
                },
            ),
        );

        let body = serde_json::to_string(&request)
            .map_err(|e| RpcError::Json(format!("error serializing request: {e}")))?;

        tracing::debug!(address = %address_b58, endpoint = %self.endpoint, "fetching account");

        let res = self
            .http
            .post(&self.endpoint)
            .body(body)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| RpcError::Transport(format!("error sending request: {e}")))?;

        if !res.status().is_success() {
            return Err(RpcError::HttpStatus(res.status().as_u16()));
        }

        let text = res
            .text()
            .await
            .map_err(|e| RpcError::Transport(format!("error reading response: {e}")))?;

        parse_account_response(&text)
    }
}

/// Decode a `getAccountInfo` response body into an optional account.
///
/// Split out of the transport path so the decoding rules are testable
/// without a network.
fn parse_account_response(body: &str) -> Result<Option<Account>, RpcError> {
    let response: JsonRpcResponse<AccountInfoResult> = serde_json::from_str(body)
        .map_err(|e| RpcError::MalformedResponse(format!("error deserializing response: {e}")))?;

    if let Some(error) = response.error {
        return Err(RpcError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    let result = response.result.ok_or_else(|| {
        RpcError::MalformedResponse("response carries neither result nor error".into())
    })?;

    let ui = match result.value {
        Some(ui) => ui,
        None => return Ok(None),
    };

    let data = BASE64_STANDARD
        .decode(ui.data.0.as_bytes())
        .map_err(|e| RpcError::MalformedResponse(format!("error decoding account data: {e}")))?;

    let owner = sol_addr::parse_pubkey(&ui.owner)
        .map_err(|e| RpcError::MalformedResponse(format!("error decoding owner: {e}")))?;

    Ok(Some(Account {
        owner,
        lamports: ui.lamports,
        executable: ui.executable,
        data,
    }))
}
