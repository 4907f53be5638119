//! Error types for the RPC client.

use thiserror::Error;

/// Errors that can occur while talking to a Solana RPC endpoint.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Network-level failure sending the request or reading the body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned http status {0}")]
    HttpStatus(u16),

    /// The request could not be encoded as JSON.
    #[error("error encoding request: {0}")]
    Json(String),

    /// The endpoint returned a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
