//! Pool discovery, state reads, and creation.

use tracing::{debug, warn};
use web3::contract::{Contract, Options};
use web3::ethabi::{self, RawLog};
use web3::types::{Address, BlockNumber, FilterBuilder, U256};
use web3::{Transport, Web3};

use crate::abi::{resolve_factory_abi, resolve_pool_abi};
use crate::amm::events::{extract_event_address, param_address, param_uint};
use crate::amm::types::{Pool, PoolCreation, PoolInfo, SubmitOptions};
use crate::common::signer::LocalSigner;
use crate::error::Result;

/// Scan the factory's full `PoolCreated` history and return every pool in
/// emission order.
///
/// The scan is recomputed fresh on every call; nothing is cached. A resolved
/// ABI without the creation event yields an empty list rather than an error,
/// and logs that fail to decode are skipped.
pub async fn resolve_all_pools<T: Transport>(
    web3: &Web3<T>,
    factory: Address,
    factory_abi: Option<ethabi::Contract>,
) -> Result<Vec<Pool>> {
    let abi = resolve_factory_abi(factory_abi);
    let event = match abi.event("PoolCreated") {
        Ok(event) => event,
        Err(err) => {
            warn!(%factory, %err, "factory ABI has no PoolCreated event, returning no pools");
            return Ok(Vec::new());
        }
    };

    let filter = FilterBuilder::default()
        .address(vec![factory])
        .from_block(BlockNumber::Earliest)
        .to_block(BlockNumber::Latest)
        .topics(Some(vec![event.signature()]), None, None, None)
        .build();
    let logs = web3.eth().logs(filter).await?;

    let mut pools = Vec::with_capacity(logs.len());
    for log in logs {
        let raw = RawLog { topics: log.topics.clone(), data: log.data.0.clone() };
        let parsed = match event.parse_log(raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(%factory, %err, "skipping undecodable PoolCreated log");
                continue;
            }
        };
        pools.push(Pool {
            address: param_address(&parsed, "pool").unwrap_or_else(Address::zero),
            token0: param_address(&parsed, "token0").unwrap_or_else(Address::zero),
            token1: param_address(&parsed, "token1").unwrap_or_else(Address::zero),
            fee_bps: param_uint(&parsed, "feeBps").map(|v| v.low_u32()).unwrap_or(0),
            block_number: log.block_number.map(|n| n.as_u64()),
            tx_hash: log.transaction_hash,
        });
    }
    Ok(pools)
}

/// Read a pool's current state: token pair, raw reserves, fee, and total
/// share supply.
///
/// Pool interfaces vary, so a contract that lacks any of the reads is
/// reported as `Ok(None)` rather than an error; the failing read is logged.
pub async fn get_pool_info<T: Transport>(
    web3: &Web3<T>,
    pool: Address,
    pool_abi: Option<ethabi::Contract>,
) -> Result<Option<PoolInfo>> {
    let contract = Contract::new(web3.eth(), pool, resolve_pool_abi(pool_abi));
    match read_pool_info(&contract).await {
        Ok(info) => Ok(Some(info)),
        Err(err) => {
            debug!(%pool, err = %err, "pool state read failed");
            Ok(None)
        }
    }
}

async fn read_pool_info<T: Transport>(contract: &Contract<T>) -> anyhow::Result<PoolInfo> {
    let token0: Address = contract.query("token0", (), None, Options::default(), None).await?;
    let token1: Address = contract.query("token1", (), None, Options::default(), None).await?;
    let (reserve0, reserve1, _): (U256, U256, U256) =
        contract.query("getReserves", (), None, Options::default(), None).await?;
    let fee_bps: U256 = contract.query("feeBps", (), None, Options::default(), None).await?;
    let total_supply: U256 =
        contract.query("totalSupply", (), None, Options::default(), None).await?;
    Ok(PoolInfo {
        token0,
        token1,
        reserve0,
        reserve1,
        fee_bps: fee_bps.low_u32(),
        total_supply,
    })
}

/// Submit a pool-creation transaction to the factory.
///
/// Not idempotent: a second submission with identical arguments is a second
/// transaction, and rejecting a duplicate pair is the contract's concern.
pub async fn create_pool<T: Transport>(
    web3: &Web3<T>,
    signer: &LocalSigner,
    factory: Address,
    token_a: Address,
    token_b: Address,
    fee_bps: u32,
    factory_abi: Option<ethabi::Contract>,
    submit: SubmitOptions,
) -> Result<Option<PoolCreation>> {
    let contract = Contract::new(web3.eth(), factory, resolve_factory_abi(factory_abi));
    let params = (token_a, token_b, U256::from(fee_bps));
    match submit.confirmations {
        None => {
            let tx = contract
                .signed_call("createPool", params, Options::default(), signer.key())
                .await?;
            debug!(%factory, ?tx, "createPool submitted without waiting");
            Ok(None)
        }
        Some(confirmations) => {
            let receipt = contract
                .signed_call_with_confirmations(
                    "createPool",
                    params,
                    Options::default(),
                    confirmations,
                    signer.key(),
                )
                .await?;
            let pool = extract_event_address(contract.abi(), &receipt, "PoolCreated", "pool")
                .unwrap_or_else(Address::zero);
            Ok(Some(PoolCreation { pool, tx_hash: receipt.transaction_hash, receipt }))
        }
    }
}
