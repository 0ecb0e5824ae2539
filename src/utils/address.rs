//! Address formatting and parsing helpers.

use web3::types::Address;

use crate::error::{ClientError, Result};

/// Shorten a hex address for display: `0x1234...5678`.
///
/// Inputs too short to shorten (or empty) are returned unchanged. Counted in
/// characters, not bytes, so arbitrary display strings cannot panic.
pub fn shorten_address(value: &str, chars: usize) -> String {
    if value.is_empty() {
        return String::new();
    }
    let prefix_len = chars + 2;
    let total = value.chars().count();
    if total <= prefix_len + chars {
        return value.to_string();
    }
    let prefix: String = value.chars().take(prefix_len).collect();
    let suffix: String = value.chars().skip(total - chars).collect();
    format!("{prefix}...{suffix}")
}

/// Parse a 20-byte hex address, with or without the `0x` prefix, any casing.
pub fn parse_address(value: &str) -> Result<Address> {
    let stripped = value.trim().trim_start_matches("0x");
    let bytes = hex::decode(stripped)
        .map_err(|err| ClientError::invalid_input(format!("malformed address {value:?}: {err}")))?;
    if bytes.len() != 20 {
        return Err(ClientError::invalid_input(format!(
            "address {value:?} is {} bytes, expected 20",
            bytes.len()
        )));
    }
    Ok(Address::from_slice(&bytes))
}
