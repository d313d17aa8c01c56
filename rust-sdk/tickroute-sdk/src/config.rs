//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::{HashMap, HashSet};
use std::time::Duration;
use std::{error::Error, sync::Mutex};

use solana_pubkey::{pubkey, Pubkey};
use tickroute_client::NATIVE_MINT;
use tickroute_core::{CrossLimits, FeeTier, DEFAULT_FEE_TIERS};

/// Maximum number of addresses requested in one batch fetch.
pub const FETCH_BATCH_SIZE: usize = 100;

/// The default wallet whose holding accounts are probed.
pub const DEFAULT_WALLET: Pubkey = Pubkey::new_from_array([0; 32]);

/// The currently selected wallet.
pub static WALLET: Mutex<Pubkey> = Mutex::new(DEFAULT_WALLET);

/// Sets the currently selected wallet.
pub fn set_wallet(wallet: Pubkey) -> Result<(), Box<dyn Error>> {
    *WALLET.try_lock()? = wallet;
    Ok(())
}

/// The default slippage tolerance, expressed in basis points. Value of 50 is equivalent to 0.5%.
pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = tickroute_core::DEFAULT_SLIPPAGE_TOLERANCE_BPS;

/// The currently selected slippage tolerance, expressed in basis points.
pub static SLIPPAGE_TOLERANCE_BPS: Mutex<u16> = Mutex::new(DEFAULT_SLIPPAGE_TOLERANCE_BPS);

/// Sets the currently selected slippage tolerance, expressed in basis points.
pub fn set_slippage_tolerance_bps(tolerance: u16) -> Result<(), Box<dyn Error>> {
    *SLIPPAGE_TOLERANCE_BPS.try_lock()? = tolerance;
    Ok(())
}

/// The default time between automatic full refreshes of a live quote.
pub const DEFAULT_REQUOTE_INTERVAL: Duration = Duration::from_secs(60);

/// The currently selected requote interval.
pub static REQUOTE_INTERVAL: Mutex<Duration> = Mutex::new(DEFAULT_REQUOTE_INTERVAL);

/// Sets the currently selected requote interval.
pub fn set_requote_interval(interval: Duration) -> Result<(), Box<dyn Error>> {
    *REQUOTE_INTERVAL.try_lock()? = interval;
    Ok(())
}

/// The default quiet period after an amount change before re-simulating.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// The currently selected debounce delay.
pub static DEBOUNCE_DELAY: Mutex<Duration> = Mutex::new(DEFAULT_DEBOUNCE_DELAY);

/// Sets the currently selected debounce delay.
pub fn set_debounce_delay(delay: Duration) -> Result<(), Box<dyn Error>> {
    *DEBOUNCE_DELAY.try_lock()? = delay;
    Ok(())
}

/// Mints tried as the middle asset of two-hop routes: ETH (native), SOL and USDC.
pub const DEFAULT_INTERMEDIATES: [Pubkey; 3] = [
    NATIVE_MINT,
    pubkey!("BeRUj3h7BqkbdfFU7FBNYbodgf8GCHodzKvF9aVjNNfL"),
    pubkey!("AKEWE7Bgh87GPp171b4cJPSSZfmZwQ3KaqYqXoKLNAEE"),
];

/// Resets the configuration to its default values.
pub fn reset_configuration() -> Result<(), Box<dyn Error>> {
    *WALLET.try_lock()? = DEFAULT_WALLET;
    *SLIPPAGE_TOLERANCE_BPS.try_lock()? = DEFAULT_SLIPPAGE_TOLERANCE_BPS;
    *REQUOTE_INTERVAL.try_lock()? = DEFAULT_REQUOTE_INTERVAL;
    *DEBOUNCE_DELAY.try_lock()? = DEFAULT_DEBOUNCE_DELAY;
    Ok(())
}

/// Everything a quotation cycle reads, captured once so a running cycle never sees a half-applied change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    pub wallet: Pubkey,
    pub slippage_tolerance_bps: u16,
    pub requote_interval: Duration,
    pub debounce_delay: Duration,
    pub fee_tiers: Vec<FeeTier>,
    pub intermediates: Vec<Pubkey>,
    /// Pools with a registered address lookup table get a larger tick crossing budget.
    pub pools_with_luts: HashSet<Pubkey>,
    /// Tickmap addresses known ahead of time, fetched together with their pools.
    pub tickmap_hints: HashMap<Pubkey, Pubkey>,
    pub native_mint: Pubkey,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            wallet: DEFAULT_WALLET,
            slippage_tolerance_bps: DEFAULT_SLIPPAGE_TOLERANCE_BPS,
            requote_interval: DEFAULT_REQUOTE_INTERVAL,
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            fee_tiers: DEFAULT_FEE_TIERS.to_vec(),
            intermediates: DEFAULT_INTERMEDIATES.to_vec(),
            pools_with_luts: HashSet::new(),
            tickmap_hints: HashMap::new(),
            native_mint: NATIVE_MINT,
        }
    }
}

impl RouterConfig {
    /// Snapshot of the currently selected global settings on top of the defaults.
    pub fn current() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            wallet: *WALLET.try_lock()?,
            slippage_tolerance_bps: *SLIPPAGE_TOLERANCE_BPS.try_lock()?,
            requote_interval: *REQUOTE_INTERVAL.try_lock()?,
            debounce_delay: *DEBOUNCE_DELAY.try_lock()?,
            ..Self::default()
        })
    }

    pub fn cross_limits(&self) -> CrossLimits {
        CrossLimits {
            pools_with_luts: self.pools_with_luts.clone(),
            native_mint: self.native_mint,
        }
    }
}
