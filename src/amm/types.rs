//! Records returned by the call surface.

use serde::Serialize;
use web3::types::{Address, H256, TransactionReceipt, U256};

/// One deployed pool, as recovered from the factory's creation event.
///
/// Pools are discovered, never locally created: the record is a projection of
/// the event and carries no locally mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    pub address: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee_bps: u32,
    /// Block the creation event was emitted in.
    pub block_number: Option<u64>,
    /// Transaction that created the pool.
    pub tx_hash: Option<H256>,
}

/// Current state of one pool: the token pair, raw reserves, fee, and total
/// share supply, read fresh from the pool contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolInfo {
    pub token0: Address,
    pub token1: Address,
    pub reserve0: U256,
    pub reserve1: U256,
    pub fee_bps: u32,
    pub total_supply: U256,
}

/// Inputs for a quote: an exact-in token pair with the human-readable input
/// amount and each token's decimal precision.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub token_in: Address,
    pub token_out: Address,
    /// Human-readable amount, e.g. `"1.5"`. Converted with `decimals_in`.
    pub amount_in: String,
    pub decimals_in: u8,
    /// Output token precision; the returned quote is rendered through it
    /// (`utils::from_base_units`), ready for display.
    pub decimals_out: u8,
}

/// How a mutating call is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Confirmations to wait for. `None` submits without waiting at all, in
    /// which case the operation returns no receipt-derived outcome.
    pub confirmations: Option<usize>,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self { confirmations: Some(1) }
    }
}

impl SubmitOptions {
    /// Fire-and-forget submission: no confirmation wait, no outcome.
    pub fn no_wait() -> Self {
        Self { confirmations: None }
    }

    pub fn confirmations(confirmations: usize) -> Self {
        Self { confirmations: Some(confirmations) }
    }
}

/// Outcome of a pool-creation submission.
#[derive(Debug, Clone, Serialize)]
pub struct PoolCreation {
    /// Address from the `PoolCreated` event, zero when the event was absent.
    pub pool: Address,
    pub tx_hash: H256,
    pub receipt: TransactionReceipt,
}

/// Outcome of a swap submission.
#[derive(Debug, Clone, Serialize)]
pub struct SwapOutcome {
    /// Output amount from the `Swap` event, zero when the event was absent.
    pub amount_out: U256,
    pub tx_hash: H256,
    pub receipt: TransactionReceipt,
}

/// Outcome of an add/remove liquidity submission.
#[derive(Debug, Clone, Serialize)]
pub struct LiquidityOutcome {
    pub amount0: U256,
    pub amount1: U256,
    /// Shares minted or burned, from the emitted event; zero when absent.
    pub liquidity: U256,
    pub tx_hash: H256,
    pub receipt: TransactionReceipt,
}

/// Which lookup produced a user-liquidity reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiquidityKind {
    /// The pool exposes `liquidityOf(address)`.
    LiquidityOf,
    /// The pool is a plain LP token with `balanceOf(address)`.
    BalanceOf,
    /// Neither lookup succeeded.
    Unavailable,
}

/// A user's current claim on a pool. Read on demand; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserLiquidity {
    pub kind: LiquidityKind,
    pub amount: U256,
}
