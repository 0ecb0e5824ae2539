//! Read-only provider construction.

use web3::Web3;
use web3::transports::Http;

use crate::error::Result;

/// Environment variable naming the JSON-RPC endpoint.
pub const RPC_URL_ENV: &str = "QUANTUMDEX_RPC_URL";
const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

pub type HttpProvider = Web3<Http>;

/// Build an HTTP provider for the given JSON-RPC endpoint.
///
/// Timeouts and cancellation are delegated entirely to the transport; the
/// client adds none of its own.
pub fn http_provider(rpc_url: &str) -> Result<HttpProvider> {
    Ok(Web3::new(Http::new(rpc_url)?))
}

/// Build an HTTP provider from `QUANTUMDEX_RPC_URL`, defaulting to a local
/// node.
pub fn http_provider_from_env() -> Result<HttpProvider> {
    let rpc_url =
        std::env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    http_provider(&rpc_url)
}
