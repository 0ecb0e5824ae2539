use web3::{contract, ethabi};

/// Errors surfaced by the client.
///
/// Fallback paths (ABI resolution, the quote ladder, the user-liquidity
/// lookup) swallow their per-attempt failures; everything else propagates
/// here. Nothing is retried and nothing is fatal beyond the single call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("ABI error: {0}")]
    Abi(#[from] ethabi::Error),
    #[error("contract call failed: {0}")]
    Contract(#[from] contract::Error),
    #[error("transport error: {0}")]
    Transport(#[from] web3::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        ClientError::InvalidInput(message.into())
    }
}
