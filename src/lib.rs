//! Rust SDK for the QuantumDEX AMM contracts on EVM networks.
//!
//! The crate is a thin, best-effort client over externally deployed
//! contracts: it resolves ABIs, reads pool and factory state, computes
//! advisory swap quotes, and submits approve/create/add/remove/swap
//! transaction flows. All economically meaningful computation happens in the
//! contracts themselves; correctness of a trade is decided on chain, not
//! here.
//!
//! ```no_run
//! use quantumdex_client::{ContractAddresses, QuoteRequest, amm, common, utils};
//!
//! # async fn quote() -> quantumdex_client::Result<()> {
//! let provider = common::http_provider("https://eth.example.org")?;
//! let addresses = ContractAddresses::from_env();
//! let request = QuoteRequest {
//!     token_in: utils::parse_address("0x1111111111111111111111111111111111111111")?,
//!     token_out: utils::parse_address("0x2222222222222222222222222222222222222222")?,
//!     amount_in: "1.5".to_string(),
//!     decimals_in: 18,
//!     decimals_out: 6,
//! };
//! let quote = amm::get_quote(
//!     &provider,
//!     addresses.router,
//!     &request,
//!     None,
//!     Some(addresses.factory),
//!     None,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod abi;
pub mod amm;
pub mod common;
pub mod config;
pub mod constants;
pub mod error;
pub mod utils;

pub use amm::{
    LiquidityKind, LiquidityOutcome, Pool, PoolCreation, PoolInfo, QuoteRequest, SubmitOptions,
    SwapOutcome, UserLiquidity, add_liquidity, create_pool, get_pool_info, get_quote,
    get_user_liquidity, remove_liquidity, resolve_all_pools, swap,
};
pub use common::{HttpProvider, LocalSigner, http_provider, http_provider_from_env};
pub use config::ContractAddresses;
pub use constants::{Network, SUPPORTED_NETWORKS, network_by_chain_id};
pub use error::{ClientError, Result};
pub use utils::{from_base_units, shorten_address, to_base_units};
