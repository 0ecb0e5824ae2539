//! Deployed contract addresses, sourced from the environment.
//!
//! Each address defaults to the zero address when its variable is unset or
//! malformed. The zero address means "not configured": reads against it fail
//! at the network layer with a contract-not-found style revert, and the
//! client does not pre-validate. Callers are expected to check
//! [`ContractAddresses::is_configured`] before invoking write operations.

use serde::Serialize;
use tracing::warn;
use web3::types::Address;

use crate::constants::{
    AMM_ADDRESS_ENV, FACTORY_ADDRESS_ENV, ROUTER_ADDRESS_ENV, STREAMING_ADDRESS_ENV,
};
use crate::utils::parse_address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractAddresses {
    pub amm: Address,
    pub router: Address,
    pub factory: Address,
    pub streaming: Address,
}

impl ContractAddresses {
    /// Read all contract addresses from the environment, defaulting each to
    /// the zero address.
    pub fn from_env() -> Self {
        Self {
            amm: address_or_zero(std::env::var(AMM_ADDRESS_ENV).ok().as_deref(), AMM_ADDRESS_ENV),
            router: address_or_zero(
                std::env::var(ROUTER_ADDRESS_ENV).ok().as_deref(),
                ROUTER_ADDRESS_ENV,
            ),
            factory: address_or_zero(
                std::env::var(FACTORY_ADDRESS_ENV).ok().as_deref(),
                FACTORY_ADDRESS_ENV,
            ),
            streaming: address_or_zero(
                std::env::var(STREAMING_ADDRESS_ENV).ok().as_deref(),
                STREAMING_ADDRESS_ENV,
            ),
        }
    }

    /// True when an address is set to something other than the zero-address
    /// placeholder.
    pub fn is_configured(address: Address) -> bool {
        !address.is_zero()
    }
}

fn address_or_zero(raw: Option<&str>, var: &str) -> Address {
    match raw {
        None => Address::zero(),
        Some(raw) => match parse_address(raw) {
            Ok(address) => address,
            Err(err) => {
                warn!(var, %err, "ignoring malformed contract address");
                Address::zero()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_and_malformed_values_default_to_zero() {
        assert_eq!(address_or_zero(None, "X"), Address::zero());
        assert_eq!(address_or_zero(Some("bogus"), "X"), Address::zero());
        assert_eq!(address_or_zero(Some("0x1234"), "X"), Address::zero());
    }

    #[test]
    fn valid_values_parse() {
        let addr = address_or_zero(Some("0x1234567890abcdef1234567890abcdef12345678"), "X");
        assert!(ContractAddresses::is_configured(addr));
    }

    #[test]
    fn zero_address_is_not_configured() {
        assert!(!ContractAddresses::is_configured(Address::zero()));
    }
}
