//! Liquidity management through the router.

use tracing::debug;
use web3::contract::{Contract, Options};
use web3::types::{Address, TransactionReceipt, U256};
use web3::{Transport, Web3, ethabi};

use crate::abi::resolve_router_abi;
use crate::amm::approval::ensure_allowance;
use crate::amm::events::extract_event_uint;
use crate::amm::types::{LiquidityOutcome, SubmitOptions};
use crate::common::signer::LocalSigner;
use crate::error::Result;

/// Supply both tokens of a pool through the router.
///
/// Approvals follow the crate-wide policy: the allowance for each token is
/// checked first and an `approve` is submitted only when it falls short.
pub async fn add_liquidity<T: Transport>(
    web3: &Web3<T>,
    signer: &LocalSigner,
    router: Address,
    pool: Address,
    token_a: Address,
    token_b: Address,
    amount_a: U256,
    amount_b: U256,
    router_abi: Option<ethabi::Contract>,
    submit: SubmitOptions,
) -> Result<Option<LiquidityOutcome>> {
    ensure_allowance(web3, signer, token_a, router, amount_a, None, submit).await?;
    ensure_allowance(web3, signer, token_b, router, amount_b, None, submit).await?;

    let contract = Contract::new(web3.eth(), router, resolve_router_abi(router_abi));
    submit_liquidity_call(
        &contract,
        signer,
        "addLiquidity",
        (pool, amount_a, amount_b),
        "LiquidityAdded",
        submit,
    )
    .await
}

/// Burn `shares` of a pool's liquidity through the router.
///
/// No approval step: the router burns shares the signer already holds, it
/// does not pull a token allowance.
pub async fn remove_liquidity<T: Transport>(
    web3: &Web3<T>,
    signer: &LocalSigner,
    router: Address,
    pool: Address,
    shares: U256,
    router_abi: Option<ethabi::Contract>,
    submit: SubmitOptions,
) -> Result<Option<LiquidityOutcome>> {
    let contract = Contract::new(web3.eth(), router, resolve_router_abi(router_abi));
    submit_liquidity_call(
        &contract,
        signer,
        "removeLiquidity",
        (pool, shares),
        "LiquidityRemoved",
        submit,
    )
    .await
}

async fn submit_liquidity_call<T: Transport>(
    contract: &Contract<T>,
    signer: &LocalSigner,
    func: &str,
    params: impl web3::contract::tokens::Tokenize,
    event: &str,
    submit: SubmitOptions,
) -> Result<Option<LiquidityOutcome>> {
    match submit.confirmations {
        None => {
            let tx = contract
                .signed_call(func, params, Options::default(), signer.key())
                .await?;
            debug!(func, ?tx, "liquidity call submitted without waiting");
            Ok(None)
        }
        Some(confirmations) => {
            let receipt = contract
                .signed_call_with_confirmations(
                    func,
                    params,
                    Options::default(),
                    confirmations,
                    signer.key(),
                )
                .await?;
            Ok(Some(outcome_from_receipt(contract.abi(), receipt, event)))
        }
    }
}

fn outcome_from_receipt(
    abi: &ethabi::Contract,
    receipt: TransactionReceipt,
    event: &str,
) -> LiquidityOutcome {
    LiquidityOutcome {
        amount0: extract_event_uint(abi, &receipt, event, "amount0"),
        amount1: extract_event_uint(abi, &receipt, event, "amount1"),
        liquidity: extract_event_uint(abi, &receipt, event, "liquidity"),
        tx_hash: receipt.transaction_hash,
        receipt,
    }
}
