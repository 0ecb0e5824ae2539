pub mod mock_rpc;
pub mod provider;
pub mod signer;

pub use provider::{HttpProvider, http_provider, http_provider_from_env};
pub use signer::LocalSigner;
