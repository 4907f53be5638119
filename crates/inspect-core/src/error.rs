use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Seed {position}: {message}")]
    InvalidSeed { position: usize, message: String },

    #[error("No seeds provided")]
    NoSeeds,

    #[error("Derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Cannot compare an account with itself")]
    SameAccount,

    #[error("Layout decode failed: {0}")]
    LayoutFailed(String),

    #[error("RPC request failed: {0}")]
    RpcFailed(String),
}

impl From<sol_addr::AddrError> for ToolError {
    fn from(e: sol_addr::AddrError) -> Self {
        ToolError::InvalidAddress(e.to_string())
    }
}

impl From<sol_pda::DerivationError> for ToolError {
    fn from(e: sol_pda::DerivationError) -> Self {
        ToolError::DerivationFailed(e.to_string())
    }
}

impl From<sol_layout::LayoutError> for ToolError {
    fn from(e: sol_layout::LayoutError) -> Self {
        ToolError::LayoutFailed(e.to_string())
    }
}

impl From<sol_rpc::RpcError> for ToolError {
    fn from(e: sol_rpc::RpcError) -> Self {
        ToolError::RpcFailed(e.to_string())
    }
}
