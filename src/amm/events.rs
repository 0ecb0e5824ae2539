//! Typed recovery of values from emitted events.
//!
//! A write call only returns a transaction handle; amounts and addresses
//! produced by the contract are recovered from the receipt's logs. Extraction
//! is by event name and field name with a defined not-found outcome, so
//! callers never scan logs themselves.

use web3::ethabi::{self, RawLog};
use web3::types::{Address, TransactionReceipt, U256};

/// Extract a uint field from the first matching event in the receipt.
/// Returns zero when the event or field is absent.
pub fn extract_event_uint(
    abi: &ethabi::Contract,
    receipt: &TransactionReceipt,
    event: &str,
    field: &str,
) -> U256 {
    find_event_log(abi, receipt, event)
        .and_then(|log| param(&log, field)?.into_uint())
        .unwrap_or_else(U256::zero)
}

/// Extract an address field from the first matching event in the receipt.
pub fn extract_event_address(
    abi: &ethabi::Contract,
    receipt: &TransactionReceipt,
    event: &str,
    field: &str,
) -> Option<Address> {
    find_event_log(abi, receipt, event).and_then(|log| param(&log, field)?.into_address())
}

fn find_event_log(
    abi: &ethabi::Contract,
    receipt: &TransactionReceipt,
    event: &str,
) -> Option<ethabi::Log> {
    let event = abi.event(event).ok()?;
    let signature = event.signature();
    receipt
        .logs
        .iter()
        .filter(|log| log.topics.first() == Some(&signature))
        .find_map(|log| {
            event
                .parse_log(RawLog { topics: log.topics.clone(), data: log.data.0.clone() })
                .ok()
        })
}

fn param(log: &ethabi::Log, name: &str) -> Option<ethabi::Token> {
    log.params.iter().find(|p| p.name == name).map(|p| p.value.clone())
}

/// Named address field of an already-parsed log.
pub(crate) fn param_address(log: &ethabi::Log, name: &str) -> Option<Address> {
    param(log, name)?.into_address()
}

/// Named uint field of an already-parsed log.
pub(crate) fn param_uint(log: &ethabi::Log, name: &str) -> Option<U256> {
    param(log, name)?.into_uint()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::abi::ROUTER_ABI;
    use serde_json::json;
    use web3::ethabi::Token;
    use web3::types::H256;

    fn receipt_with_logs(logs: serde_json::Value) -> TransactionReceipt {
        serde_json::from_value(json!({
            "transactionHash": format!("0x{}", "11".repeat(32)),
            "transactionIndex": "0x0",
            "blockNumber": "0x5",
            "from": format!("0x{}", "22".repeat(20)),
            "to": format!("0x{}", "33".repeat(20)),
            "cumulativeGasUsed": "0x0",
            "gasUsed": "0x0",
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "status": "0x1",
            "logs": logs,
        }))
        .unwrap()
    }

    fn swap_log(amount_in: u64, amount_out: u64) -> serde_json::Value {
        let event = ROUTER_ABI.event("Swap").unwrap();
        let sender = Address::from_low_u64_be(7);
        let data = ethabi::encode(&[
            Token::Address(Address::from_low_u64_be(1)),
            Token::Address(Address::from_low_u64_be(2)),
            Token::Uint(amount_in.into()),
            Token::Uint(amount_out.into()),
        ]);
        json!({
            "address": format!("0x{}", "44".repeat(20)),
            "topics": [
                format!("{:#x}", event.signature()),
                format!("{:#x}", H256::from(sender)),
            ],
            "data": format!("0x{}", hex::encode(data)),
            "logIndex": "0x0",
            "removed": false,
        })
    }

    #[test]
    fn recovers_a_uint_field_from_the_named_event() {
        let receipt = receipt_with_logs(json!([swap_log(1000, 1950)]));
        let out = extract_event_uint(&ROUTER_ABI, &receipt, "Swap", "amountOut");
        assert_eq!(out, U256::from(1950u64));
    }

    #[test]
    fn recovers_an_indexed_address_field() {
        let receipt = receipt_with_logs(json!([swap_log(1, 2)]));
        let sender = extract_event_address(&ROUTER_ABI, &receipt, "Swap", "sender");
        assert_eq!(sender, Some(Address::from_low_u64_be(7)));
    }

    #[test]
    fn absent_event_yields_the_defined_not_found_outcome() {
        let receipt = receipt_with_logs(json!([]));
        assert_eq!(extract_event_uint(&ROUTER_ABI, &receipt, "Swap", "amountOut"), U256::zero());
        assert_eq!(extract_event_address(&ROUTER_ABI, &receipt, "Swap", "sender"), None);
    }

    #[test]
    fn unknown_field_yields_zero() {
        let receipt = receipt_with_logs(json!([swap_log(1, 2)]));
        assert_eq!(extract_event_uint(&ROUTER_ABI, &receipt, "Swap", "nope"), U256::zero());
    }
}
