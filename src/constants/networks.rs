//! Supported networks.
//!
//! Process-wide immutable configuration: the same fixed list the front end
//! initializes its wallet adapter with. Callers match the wallet's reported
//! chain id against this table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Network {
    pub chain_id: u64,
    pub name: &'static str,
    /// Native currency symbol, for display.
    pub symbol: &'static str,
}

pub const SUPPORTED_NETWORKS: &[Network] = &[
    Network { chain_id: 1, name: "Ethereum", symbol: "ETH" },
    Network { chain_id: 42161, name: "Arbitrum One", symbol: "ETH" },
    Network { chain_id: 10, name: "OP Mainnet", symbol: "ETH" },
    Network { chain_id: 8453, name: "Base", symbol: "ETH" },
    Network { chain_id: 137, name: "Polygon", symbol: "POL" },
];

/// Look up a supported network by chain id.
pub fn network_by_chain_id(chain_id: u64) -> Option<&'static Network> {
    SUPPORTED_NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chain_ids_resolve() {
        assert_eq!(network_by_chain_id(1).unwrap().name, "Ethereum");
        assert_eq!(network_by_chain_id(8453).unwrap().name, "Base");
        assert!(network_by_chain_id(31337).is_none());
    }
}
