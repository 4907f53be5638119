//! JSON-RPC 2.0 wire types for `getAccountInfo`.
//!
//! Request:
//!
//! ```text
//! {"jsonrpc":"2.0","id":1,"method":"getAccountInfo",
//!  "params":["<base58 address>",{"encoding":"base64","commitment":"confirmed"}]}
//! ```
//!
//! Response (`value` is `null` when the account does not exist):
//!
//! ```text
//! {"jsonrpc":"2.0","id":1,"result":{"context":{"slot":311178098},
//!  "value":{"data":["<base64>","base64"],"executable":false,
//!           "lamports":2039280,"owner":"<base58 program>"}}}
//! ```
//!
//! Only consumed fields are declared; extras like `rentEpoch` and `space`
//! are ignored during deserialization.

use serde::{Deserialize, Serialize};

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P> JsonRpcRequest<P> {
    pub fn new(method: &'static str, params: P) -> Self {
        JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

/// Configuration object sent as the second `getAccountInfo` parameter.
#[derive(Debug, Serialize)]
pub struct AccountInfoConfig {
    pub encoding: &'static str,
    pub commitment: &'static str,
}

/// A JSON-RPC 2.0 response envelope. Exactly one of `result` and `error`
/// is present in a well-formed response.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a failed JSON-RPC response.
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// The `result` member of a `getAccountInfo` response.
#[derive(Debug, Deserialize)]
pub struct AccountInfoResult {
    pub value: Option<UiAccount>,
}

/// Account fields as the RPC node serializes them.
#[derive(Debug, Deserialize)]
pub struct UiAccount {
    /// Payload and encoding name; the payload is base64 when requested so.
    pub data: (String, String),
    pub executable: bool,
    pub lamports: u64,
    /// Base58-encoded owning program.
    pub owner: String,
}
