pub mod abi;
pub mod networks;

pub use networks::{Network, SUPPORTED_NETWORKS, network_by_chain_id};

/// Environment variable naming the directory ABI files are loaded from.
pub const ABI_DIR_ENV: &str = "QUANTUMDEX_ABI_DIR";
/// Default ABI directory when [`ABI_DIR_ENV`] is unset.
pub const DEFAULT_ABI_DIR: &str = "abi";

/// Environment variables carrying deployed contract addresses. Each defaults
/// to the zero address, which the client treats as "not configured".
pub const AMM_ADDRESS_ENV: &str = "QUANTUMDEX_AMM_ADDRESS";
pub const ROUTER_ADDRESS_ENV: &str = "QUANTUMDEX_ROUTER_ADDRESS";
pub const FACTORY_ADDRESS_ENV: &str = "QUANTUMDEX_FACTORY_ADDRESS";
pub const STREAMING_ADDRESS_ENV: &str = "QUANTUMDEX_STREAMING_ADDRESS";
