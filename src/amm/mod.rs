//! The on-chain call surface.
//!
//! Everything here is a stateless projector over external contract state:
//! each call builds its own short-lived contract binding, performs its reads
//! or submits its transaction, and discards the binding on return. Nothing
//! is cached, retried, or coordinated across calls; the deployed contracts
//! are the sole arbiter of conflicting state transitions.

pub mod approval;
pub mod events;
pub mod liquidity;
pub mod pools;
pub mod quote;
pub mod swap;
pub mod types;
pub mod user;

pub use approval::ensure_allowance;
pub use events::{extract_event_address, extract_event_uint};
pub use liquidity::{add_liquidity, remove_liquidity};
pub use pools::{create_pool, get_pool_info, resolve_all_pools};
pub use quote::{constant_product_out, get_quote};
pub use swap::swap;
pub use types::{
    LiquidityKind, LiquidityOutcome, Pool, PoolCreation, PoolInfo, QuoteRequest, SubmitOptions,
    SwapOutcome, UserLiquidity,
};
pub use user::get_user_liquidity;
