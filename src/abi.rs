//! Ordered ABI resolution.
//!
//! The ABI for each contract role is a strategy selected at call time, tried
//! in strict priority order: explicit override, JSON file at the conventional
//! location, hardcoded fallback fragment. Resolution never fails; a missing
//! or unreadable file downgrades to the fallback so callers can still reach
//! the minimal common surface of arbitrary deployed routers and factories.

use std::path::{Path, PathBuf};

use tracing::debug;
use web3::ethabi;

use crate::constants::abi::{ERC20_ABI, FACTORY_ABI, POOL_ABI, ROUTER_ABI};
use crate::constants::{ABI_DIR_ENV, DEFAULT_ABI_DIR};

pub const ROUTER_ABI_FILE: &str = "Router.json";
pub const FACTORY_ABI_FILE: &str = "Factory.json";
pub const POOL_ABI_FILE: &str = "Pool.json";
pub const ERC20_ABI_FILE: &str = "Erc20.json";

/// Directory ABI files are loaded from: `$QUANTUMDEX_ABI_DIR`, defaulting to
/// `abi/` relative to the working directory.
pub fn abi_dir() -> PathBuf {
    std::env::var(ABI_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_ABI_DIR))
}

/// Resolve an ABI from an explicit override, a file under `dir`, or the
/// fallback fragment, in that order. First available option wins.
pub fn resolve_abi_in(
    dir: &Path,
    file_name: &str,
    abi_override: Option<ethabi::Contract>,
    fallback: &ethabi::Contract,
) -> ethabi::Contract {
    if let Some(abi) = abi_override {
        return abi;
    }
    let path = dir.join(file_name);
    match load_abi_file(&path) {
        Ok(abi) => abi,
        Err(err) => {
            debug!(path = %path.display(), %err, "ABI file unavailable, using builtin fallback");
            fallback.clone()
        }
    }
}

fn load_abi_file(path: &Path) -> anyhow::Result<ethabi::Contract> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn resolve_router_abi(abi_override: Option<ethabi::Contract>) -> ethabi::Contract {
    resolve_abi_in(&abi_dir(), ROUTER_ABI_FILE, abi_override, &ROUTER_ABI)
}

pub fn resolve_factory_abi(abi_override: Option<ethabi::Contract>) -> ethabi::Contract {
    resolve_abi_in(&abi_dir(), FACTORY_ABI_FILE, abi_override, &FACTORY_ABI)
}

pub fn resolve_pool_abi(abi_override: Option<ethabi::Contract>) -> ethabi::Contract {
    resolve_abi_in(&abi_dir(), POOL_ABI_FILE, abi_override, &POOL_ABI)
}

pub fn resolve_erc20_abi(abi_override: Option<ethabi::Contract>) -> ethabi::Contract {
    resolve_abi_in(&abi_dir(), ERC20_ABI_FILE, abi_override, &ERC20_ABI)
}
