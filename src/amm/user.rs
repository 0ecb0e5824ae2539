//! User liquidity lookup.

use tracing::{debug, warn};
use web3::contract::{Contract, Options};
use web3::types::{Address, U256};
use web3::{Transport, Web3, ethabi};

use crate::abi::resolve_pool_abi;
use crate::amm::types::{LiquidityKind, UserLiquidity};

/// Read a user's current claim on a pool.
///
/// Pool interfaces vary, so two lookups are tried in order: `liquidityOf`,
/// then plain LP-token `balanceOf`. Both failing is reported as
/// `Unavailable` with a zero amount, never as an error: this is a
/// compatibility fallback, not a correctness recovery.
pub async fn get_user_liquidity<T: Transport>(
    web3: &Web3<T>,
    user: Address,
    pool: Address,
    pool_abi: Option<ethabi::Contract>,
) -> UserLiquidity {
    let contract = Contract::new(web3.eth(), pool, resolve_pool_abi(pool_abi));
    let attempts =
        [("liquidityOf", LiquidityKind::LiquidityOf), ("balanceOf", LiquidityKind::BalanceOf)];
    for (method, kind) in attempts {
        match contract
            .query::<U256, _, _, _>(method, (user,), None, Options::default(), None)
            .await
        {
            Ok(amount) => return UserLiquidity { kind, amount },
            Err(err) => debug!(%pool, method, err = %err, "liquidity lookup attempt failed"),
        }
    }
    warn!(%pool, "no liquidity lookup method available on pool");
    UserLiquidity { kind: LiquidityKind::Unavailable, amount: U256::zero() }
}
