//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::FeeTier;

/// Pool fees are fractions of this value, so `FEE_DENOMINATOR` is a 100% fee.
pub const FEE_DENOMINATOR: u128 = 1_000_000_000_000;

/// One fee unit as used by fee tier tables (0.001%).
pub const FEE_UNIT: u128 = 10_000_000;

/// Price impact values are fractions of this value.
pub const PRICE_IMPACT_DENOMINATOR: u128 = 1_000_000_000_000;

pub const BPS_DENOMINATOR: u16 = 10_000;

pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = 50;

/// A single-hop result crossing more ticks than this cannot be executed in one transaction.
pub const MAX_TICK_CROSSES_PER_SWAP: usize = 16;

/// Crossing budget for pools with an address lookup table.
pub const LUT_MAX_CROSSES: u16 = 34;

/// Crossing budget when the native mint is one side of the swap.
pub const NATIVE_MAX_CROSSES: u16 = 10;

pub const DEFAULT_MAX_CROSSES: u16 = 16;

/// Number of tick accounts fetched ahead for a direct pool with a lookup table.
pub const LUT_TICK_FETCH_LIMIT: usize = 35;

pub const DEFAULT_TICK_FETCH_LIMIT: usize = 19;

pub const DEFAULT_FEE_TIERS: [FeeTier; 10] = [
    FeeTier::from_fee_units(1, 1),
    FeeTier::from_fee_units(5, 1),
    FeeTier::from_fee_units(10, 1),
    FeeTier::from_fee_units(30, 5),
    FeeTier::from_fee_units(50, 5),
    FeeTier::from_fee_units(100, 10),
    FeeTier::from_fee_units(300, 16),
    FeeTier::from_fee_units(1000, 32),
    FeeTier::from_fee_units(5000, 100),
    FeeTier::from_fee_units(10000, 100),
];
