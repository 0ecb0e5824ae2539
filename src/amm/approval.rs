//! Token approval policy.
//!
//! Every flow that spends a caller's tokens goes through the same policy:
//! read the current allowance and submit an `approve` transaction only when
//! it is insufficient. A sufficient allowance submits nothing.

use tracing::debug;
use web3::contract::{Contract, Options};
use web3::types::{Address, U256};
use web3::{Transport, Web3, ethabi};

use crate::abi::resolve_erc20_abi;
use crate::amm::types::SubmitOptions;
use crate::common::signer::LocalSigner;
use crate::error::Result;

/// Ensure `spender` may move `amount` of `token` on behalf of the signer.
/// Returns whether an approval transaction was submitted.
pub async fn ensure_allowance<T: Transport>(
    web3: &Web3<T>,
    signer: &LocalSigner,
    token: Address,
    spender: Address,
    amount: U256,
    erc20_abi: Option<ethabi::Contract>,
    submit: SubmitOptions,
) -> Result<bool> {
    let contract = Contract::new(web3.eth(), token, resolve_erc20_abi(erc20_abi));
    let current: U256 = contract
        .query("allowance", (signer.address(), spender), None, Options::default(), None)
        .await?;
    if current >= amount {
        debug!(%token, %spender, "existing allowance is sufficient");
        return Ok(false);
    }

    match submit.confirmations {
        None => {
            let tx = contract
                .signed_call("approve", (spender, amount), Options::default(), signer.key())
                .await?;
            debug!(%token, %spender, ?tx, "approval submitted without waiting");
        }
        Some(confirmations) => {
            let receipt = contract
                .signed_call_with_confirmations(
                    "approve",
                    (spender, amount),
                    Options::default(),
                    confirmations,
                    signer.key(),
                )
                .await?;
            debug!(%token, %spender, tx = ?receipt.transaction_hash, "approval confirmed");
        }
    }
    Ok(true)
}
