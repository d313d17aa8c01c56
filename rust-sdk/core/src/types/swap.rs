//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

use crate::{CoreError, FeeTier, PoolFacade, TickLookup, TickmapFacade, MAX_TICK_CROSSES_PER_SWAP};

/// A swap amount together with the side it fixes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwapAmount {
    /// Sell exactly this much of the input token.
    ExactIn(u64),
    /// Buy exactly this much of the output token.
    ExactOut(u64),
}

impl Default for SwapAmount {
    fn default() -> Self {
        SwapAmount::ExactIn(0)
    }
}

impl SwapAmount {
    pub fn value(&self) -> u64 {
        match self {
            SwapAmount::ExactIn(amount) | SwapAmount::ExactOut(amount) => *amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0
    }

    pub fn by_amount_in(&self) -> bool {
        matches!(self, SwapAmount::ExactIn(_))
    }

    pub fn with_value(&self, value: u64) -> Self {
        match self {
            SwapAmount::ExactIn(_) => SwapAmount::ExactIn(value),
            SwapAmount::ExactOut(_) => SwapAmount::ExactOut(value),
        }
    }

    /// Returns `true` if `candidate` is a strictly better route than `incumbent`:
    /// more output for exact input, less total input for exact output.
    pub fn improves(&self, candidate: &impl RouteAmounts, incumbent: &impl RouteAmounts) -> bool {
        match self {
            SwapAmount::ExactIn(_) => candidate.total_amount_out() > incumbent.total_amount_out(),
            SwapAmount::ExactOut(_) => candidate.total_amount_in() < incumbent.total_amount_in(),
        }
    }
}

/// Outcome classification reported by the swap simulator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SimulationStatus {
    #[default]
    Ok,
    WrongLimit,
    PriceLimitReached,
    TickNotFound,
    NoGainSwap,
    TooLargeGap,
    LimitReached,
}

/// Everything the swap simulator needs to walk one pool.
#[derive(Copy, Clone, Debug)]
pub struct SwapSimulationRequest<'a> {
    pub pool: &'a PoolFacade,
    pub ticks: &'a TickLookup,
    pub tickmap: &'a TickmapFacade,
    pub x_to_y: bool,
    pub amount: SwapAmount,
    pub max_crosses: u16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SwapSimulation {
    pub status: SimulationStatus,
    /// Input consumed by the swap, excluding the pool fee.
    pub amount_in: u64,
    pub amount_out: u64,
    pub fee: u64,
    pub price_after_swap: u128,
    /// Scaled by `PRICE_IMPACT_DENOMINATOR`.
    pub price_impact: u128,
    pub ticks_crossed: usize,
}

/// Concentrated-liquidity swap simulation. The implementation lives outside this crate.
pub trait SwapSimulator {
    fn simulate_swap(&self, request: SwapSimulationRequest<'_>) -> Result<SwapSimulation, CoreError>;
}

/// Amounts a route is compared by.
pub trait RouteAmounts {
    /// Input including pool fees.
    fn total_amount_in(&self) -> u64;
    fn total_amount_out(&self) -> u64;
    fn is_ok(&self) -> bool;
}

/// A simulated swap through one pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HopSimulation {
    pub pool: Pubkey,
    pub fee_tier: FeeTier,
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub x_to_y: bool,
    pub status: SimulationStatus,
    pub amount_in: u64,
    pub fee_amount: u64,
    pub amount_out: u64,
    pub min_received: u64,
    pub price_after_swap: u128,
    pub price_impact: u128,
    pub ticks_crossed: usize,
}

impl HopSimulation {
    /// A hop that was never simulated because the previous hop produced nothing to route.
    pub fn unreached(pool: &PoolFacade, token_in: Pubkey) -> Result<Self, CoreError> {
        Ok(Self {
            pool: pool.address,
            fee_tier: pool.fee_tier(),
            token_in,
            token_out: pool.other_token(&token_in)?,
            x_to_y: pool.is_x_to_y(&token_in)?,
            status: SimulationStatus::NoGainSwap,
            amount_in: 0,
            fee_amount: 0,
            amount_out: 0,
            min_received: 0,
            price_after_swap: pool.sqrt_price,
            price_impact: 0,
            ticks_crossed: 0,
        })
    }

    /// Succeeded and fits in a single transaction.
    pub fn is_executable(&self) -> bool {
        self.is_ok() && self.ticks_crossed <= MAX_TICK_CROSSES_PER_SWAP
    }
}

impl RouteAmounts for HopSimulation {
    fn total_amount_in(&self) -> u64 {
        self.amount_in.saturating_add(self.fee_amount)
    }

    fn total_amount_out(&self) -> u64 {
        self.amount_out
    }

    fn is_ok(&self) -> bool {
        self.status == SimulationStatus::Ok
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwoHopSimulation {
    pub intermediate: Pubkey,
    pub first: HopSimulation,
    pub second: HopSimulation,
}

impl TwoHopSimulation {
    pub fn price_impact(&self) -> u128 {
        self.first.price_impact.max(self.second.price_impact)
    }
}

impl RouteAmounts for TwoHopSimulation {
    fn total_amount_in(&self) -> u64 {
        self.first.total_amount_in()
    }

    fn total_amount_out(&self) -> u64 {
        self.second.amount_out
    }

    fn is_ok(&self) -> bool {
        self.first.is_ok() && self.second.is_ok()
    }
}
