//! Exact conversion between human-readable amounts and token base units.
//!
//! All arithmetic is integer-only; floating point would drift at token-unit
//! scale.

use web3::types::U256;

use crate::error::{ClientError, Result};

/// Convert a human-readable decimal string (`"1.5"`) into base units for a
/// token with the given decimal precision.
///
/// Rejects malformed input and fractional digits beyond `decimals`.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256> {
    let trimmed = amount.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ClientError::invalid_input(format!("empty amount {amount:?}")));
    }
    if frac_part.len() > decimals as usize {
        return Err(ClientError::invalid_input(format!(
            "amount {amount:?} has more than {decimals} fractional digits"
        )));
    }

    let ten = U256::from(10u64);
    let mut value = U256::zero();
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| ClientError::invalid_input(format!("malformed amount {amount:?}")))?;
        value = value
            .checked_mul(ten)
            .and_then(|v| v.checked_add(U256::from(digit)))
            .ok_or_else(|| {
                ClientError::invalid_input(format!("amount {amount:?} exceeds 256 bits"))
            })?;
    }
    for _ in 0..(decimals as usize - frac_part.len()) {
        value = value.checked_mul(ten).ok_or_else(|| {
            ClientError::invalid_input(format!("amount {amount:?} exceeds 256 bits"))
        })?;
    }
    Ok(value)
}

/// Render a base-unit amount as a human-readable decimal string, trimming
/// trailing fractional zeros.
pub fn from_base_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    if decimals == 0 {
        return digits;
    }
    let decimals = decimals as usize;
    let padded = if digits.len() <= decimals {
        format!("{}{digits}", "0".repeat(decimals - digits.len() + 1))
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}
