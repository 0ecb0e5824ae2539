//! Swap execution.

use tracing::debug;
use web3::contract::{Contract, Options};
use web3::types::{Address, U256};
use web3::{Transport, Web3, ethabi};

use crate::abi::resolve_router_abi;
use crate::amm::approval::ensure_allowance;
use crate::amm::events::extract_event_uint;
use crate::amm::types::{SubmitOptions, SwapOutcome};
use crate::common::signer::LocalSigner;
use crate::error::Result;

/// Swap `amount_in` of `token_in` for at least `min_amount_out` of
/// `token_out` through the router.
///
/// `min_amount_out` is passed through verbatim; slippage is enforced on
/// chain, not here. Reverts (insufficient output, stale pool, revoked
/// approval) propagate as errors and are not retried. The achieved output
/// amount is recovered from the `Swap` event when a receipt is awaited.
pub async fn swap<T: Transport>(
    web3: &Web3<T>,
    signer: &LocalSigner,
    router: Address,
    token_in: Address,
    token_out: Address,
    amount_in: U256,
    min_amount_out: U256,
    router_abi: Option<ethabi::Contract>,
    submit: SubmitOptions,
) -> Result<Option<SwapOutcome>> {
    ensure_allowance(web3, signer, token_in, router, amount_in, None, submit).await?;

    let contract = Contract::new(web3.eth(), router, resolve_router_abi(router_abi));
    let params = (token_in, token_out, amount_in, min_amount_out, signer.address());
    match submit.confirmations {
        None => {
            let tx = contract
                .signed_call("swap", params, Options::default(), signer.key())
                .await?;
            debug!(%router, ?tx, "swap submitted without waiting");
            Ok(None)
        }
        Some(confirmations) => {
            let receipt = contract
                .signed_call_with_confirmations(
                    "swap",
                    params,
                    Options::default(),
                    confirmations,
                    signer.key(),
                )
                .await?;
            let amount_out = extract_event_uint(contract.abi(), &receipt, "Swap", "amountOut");
            Ok(Some(SwapOutcome {
                amount_out,
                tx_hash: receipt.transaction_hash,
                receipt,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::mock_rpc::MockTransport;
    use serde_json::json;
    use web3::ethabi::Token;

    const KEY: &str = "4646464646464646464646464646464646464646464646464646464646464646";

    fn uint_result(value: u64) -> serde_json::Value {
        json!(format!(
            "0x{}",
            hex::encode(ethabi::encode(&[Token::Uint(value.into())]))
        ))
    }

    #[tokio::test]
    async fn no_wait_swap_returns_no_outcome() {
        let transport = MockTransport::new();
        // Allowance already covers the trade, then the fire-and-forget send.
        transport.respond("eth_call", uint_result(1_000_000));
        transport.respond("eth_getTransactionCount", json!("0x0"));
        transport.respond("eth_gasPrice", json!("0x3b9aca00"));
        transport.respond("eth_chainId", json!("0x1"));
        transport.respond("eth_sendRawTransaction", json!(format!("0x{}", "cd".repeat(32))));
        let web3 = Web3::new(transport.clone());
        let signer = LocalSigner::from_hex_key(KEY, 1).unwrap();

        let outcome = swap(
            &web3,
            &signer,
            Address::from_low_u64_be(9),
            Address::from_low_u64_be(1),
            Address::from_low_u64_be(2),
            U256::from(1000u64),
            U256::from(990u64),
            None,
            SubmitOptions::no_wait(),
        )
        .await
        .unwrap();
        assert!(outcome.is_none());
        assert_eq!(transport.calls_of("eth_sendRawTransaction"), 1);
    }

    #[tokio::test]
    async fn a_revert_propagates_as_an_error() {
        let transport = MockTransport::new();
        transport.respond("eth_call", uint_result(1_000_000));
        transport.respond("eth_getTransactionCount", json!("0x0"));
        transport.respond("eth_gasPrice", json!("0x3b9aca00"));
        transport.respond("eth_chainId", json!("0x1"));
        transport.respond_error("eth_sendRawTransaction", "execution reverted: slippage");
        let web3 = Web3::new(transport);
        let signer = LocalSigner::from_hex_key(KEY, 1).unwrap();

        let result = swap(
            &web3,
            &signer,
            Address::from_low_u64_be(9),
            Address::from_low_u64_be(1),
            Address::from_low_u64_be(2),
            U256::from(1000u64),
            U256::from(990u64),
            None,
            SubmitOptions::no_wait(),
        )
        .await;
        assert!(result.is_err());
    }
}
