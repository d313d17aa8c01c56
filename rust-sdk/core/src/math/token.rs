//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    CoreError, AMOUNT_EXCEEDS_MAX_U64, ARITHMETIC_OVERFLOW, BPS_DENOMINATOR, FEE_DENOMINATOR, INVALID_AMOUNT, INVALID_SLIPPAGE_TOLERANCE,
    PRICE_IMPACT_DENOMINATOR,
};

/// Get the minimum amount with a slippage tolerance
///
/// # Parameters
/// - `amount`: The amount to apply the slippage to
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (should be in range 0..BPS_DENOMINATOR)
///
/// # Returns
/// - `u64`: The minimum amount, rounded down
pub fn try_get_min_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let product = amount as u128 * (BPS_DENOMINATOR - slippage_tolerance_bps) as u128;
    Ok((product / BPS_DENOMINATOR as u128) as u64)
}

/// Get the maximum amount with a slippage tolerance
///
/// # Parameters
/// - `amount`: The amount to apply the slippage to
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (should be in range 0..BPS_DENOMINATOR)
///
/// # Returns
/// - `u64`: The maximum amount, rounded up
pub fn try_get_max_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let product = amount as u128 * (BPS_DENOMINATOR as u128 + slippage_tolerance_bps as u128);
    let result = product.div_ceil(BPS_DENOMINATOR as u128);
    u64::try_from(result).map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

/// Render a raw token amount with `decimals` fractional digits, trailing zeros trimmed.
pub fn format_amount(amount: u128, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }
    let (whole, fraction) = if digits.len() <= decimals {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    } else {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Parse a user-entered decimal string into raw token units.
///
/// Empty input parses to zero. Fractional digits beyond `decimals` are truncated.
pub fn parse_ui_amount(input: &str, decimals: u8) -> Result<u64, CoreError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(INVALID_AMOUNT);
    }
    if !whole.bytes().chain(fraction.bytes()).all(|byte| byte.is_ascii_digit()) {
        return Err(INVALID_AMOUNT);
    }

    let decimals = decimals as usize;
    let fraction = &fraction[..fraction.len().min(decimals)];
    let digits = format!("{whole}{fraction:0<decimals$}");
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u64>().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

/// Pool fee as a percentage, e.g. `0.3` for a 0.3% pool.
pub fn fee_percent(fee: u128) -> f64 {
    fee as f64 * 100.0 / FEE_DENOMINATOR as f64
}

/// Price impact as a two-decimal percentage, or `"<0.01"` when it rounds to nothing.
pub fn format_price_impact(price_impact: u128) -> String {
    let percent = price_impact as f64 * 100.0 / PRICE_IMPACT_DENOMINATOR as f64;
    if percent < 0.01 {
        "<0.01".to_string()
    } else {
        format!("{percent:.2}")
    }
}

/// Output received per one whole unit of input, rendered in output token units.
pub fn exchange_rate(amount_in: u64, decimals_in: u8, amount_out: u64, decimals_out: u8) -> Result<String, CoreError> {
    if amount_in == 0 {
        return Ok("0".to_string());
    }
    let scale = 10u128.checked_pow(decimals_in as u32).ok_or(ARITHMETIC_OVERFLOW)?;
    let scaled = (amount_out as u128).checked_mul(scale).ok_or(ARITHMETIC_OVERFLOW)? / amount_in as u128;
    Ok(format_amount(scaled, decimals_out))
}
