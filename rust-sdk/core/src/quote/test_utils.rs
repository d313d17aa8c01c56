//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::cell::RefCell;
use std::collections::HashMap;

use solana_pubkey::Pubkey;

use crate::{
    AccountSet, CoreError, DirectCandidate, FeeTier, MintFacade, PoolFacade, PoolKey, SimulationStatus, SwapAmount, SwapSimulation,
    SwapSimulationRequest, SwapSimulator, TickmapFacade, TwoHopCandidate,
};

/// Output is `(input - fee) * numerator / denominator` with a 0.1% fee.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MockSwap {
    numerator: u64,
    denominator: u64,
    status: SimulationStatus,
    ticks_crossed: usize,
    price_impact: u128,
    error: Option<CoreError>,
}

impl MockSwap {
    pub(crate) fn rate(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
            status: SimulationStatus::Ok,
            ticks_crossed: 1,
            price_impact: 0,
            error: None,
        }
    }

    pub(crate) fn error(err: CoreError) -> Self {
        Self {
            error: Some(err),
            ..Self::rate(1, 1)
        }
    }

    pub(crate) fn status(self, status: SimulationStatus) -> Self {
        Self { status, ..self }
    }

    pub(crate) fn crossing(self, ticks_crossed: usize) -> Self {
        Self { ticks_crossed, ..self }
    }

    pub(crate) fn impact(self, price_impact: u128) -> Self {
        Self { price_impact, ..self }
    }
}

#[derive(Default)]
pub(crate) struct MockSimulator {
    swaps: HashMap<Pubkey, MockSwap>,
    pub(crate) calls: RefCell<Vec<(Pubkey, SwapAmount, u16)>>,
}

impl MockSimulator {
    pub(crate) fn with(mut self, pool: &PoolFacade, swap: MockSwap) -> Self {
        self.swaps.insert(pool.address, swap);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SwapSimulator for MockSimulator {
    fn simulate_swap(&self, request: SwapSimulationRequest<'_>) -> Result<SwapSimulation, CoreError> {
        self.calls.borrow_mut().push((request.pool.address, request.amount, request.max_crosses));
        let swap = self.swaps.get(&request.pool.address).copied().ok_or("Unknown pool")?;
        if let Some(err) = swap.error {
            return Err(err);
        }
        let (numerator, denominator) = (swap.numerator as u128, swap.denominator as u128);

        let (amount_in, fee, amount_out) = match request.amount {
            SwapAmount::ExactIn(amount) => {
                let fee = amount / 1000;
                let amount_in = amount - fee;
                (amount_in, fee, (amount_in as u128 * numerator / denominator) as u64)
            }
            SwapAmount::ExactOut(amount) => {
                let amount_in = (amount as u128 * denominator).div_ceil(numerator) as u64;
                (amount_in, amount_in / 1000, amount)
            }
        };

        Ok(SwapSimulation {
            status: swap.status,
            amount_in,
            amount_out,
            fee,
            price_after_swap: request.pool.sqrt_price,
            price_impact: swap.price_impact,
            ticks_crossed: swap.ticks_crossed,
        })
    }
}

pub(crate) fn test_pool(token_x: Pubkey, token_y: Pubkey, fee_units: u64) -> PoolFacade {
    PoolFacade {
        address: Pubkey::new_unique(),
        token_x,
        token_y,
        tick_spacing: 10,
        fee: FeeTier::from_fee_units(fee_units, 10).fee,
        liquidity: 1_000_000_000,
        sqrt_price: 1 << 64,
        tickmap: Pubkey::new_unique(),
        ..PoolFacade::default()
    }
}

pub(crate) fn test_accounts(pools: &[PoolFacade], mints: &[(Pubkey, u8)]) -> AccountSet {
    let mut accounts = AccountSet::new();
    for pool in pools {
        accounts.insert_pool(*pool);
        accounts.insert_tickmap(pool.tickmap, TickmapFacade::default());
    }
    for (address, decimals) in mints {
        accounts.insert_mint(MintFacade {
            address: *address,
            decimals: *decimals,
            ..MintFacade::default()
        });
    }
    accounts
}

pub(crate) fn pool_key(pool: &PoolFacade) -> PoolKey {
    PoolKey {
        address: pool.address,
        token_x: pool.token_x,
        token_y: pool.token_y,
        fee_tier: pool.fee_tier(),
    }
}

pub(crate) fn direct(pool: &PoolFacade) -> DirectCandidate {
    DirectCandidate { pool: pool_key(pool) }
}

pub(crate) fn two_hop(intermediate: Pubkey, first: &PoolFacade, second: &PoolFacade) -> TwoHopCandidate {
    TwoHopCandidate {
        intermediate,
        first: pool_key(first),
        second: pool_key(second),
    }
}
