//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod decision;
mod single_hop;
mod two_hop;

#[cfg(test)]
pub(crate) mod test_utils;

pub use decision::*;
pub use single_hop::*;
pub use two_hop::*;

use solana_pubkey::Pubkey;

use crate::{try_get_min_amount_with_slippage_tolerance, CoreError, HopSimulation, PoolState, SwapAmount, SwapSimulationRequest, SwapSimulator};

/// Simulates selling `token_in` into one pool and annotates the result with the pool it ran against.
pub fn simulate_hop<S: SwapSimulator + ?Sized>(
    simulator: &S,
    state: PoolState<'_>,
    token_in: Pubkey,
    amount: SwapAmount,
    slippage_tolerance_bps: u16,
    max_crosses: u16,
) -> Result<HopSimulation, CoreError> {
    let x_to_y = state.pool.is_x_to_y(&token_in)?;
    let simulation = simulator.simulate_swap(SwapSimulationRequest {
        pool: state.pool,
        ticks: state.ticks,
        tickmap: state.tickmap,
        x_to_y,
        amount,
        max_crosses,
    })?;
    let min_received = try_get_min_amount_with_slippage_tolerance(simulation.amount_out, slippage_tolerance_bps)?;

    Ok(HopSimulation {
        pool: state.pool.address,
        fee_tier: state.pool.fee_tier(),
        token_in,
        token_out: state.pool.other_token(&token_in)?,
        x_to_y,
        status: simulation.status,
        amount_in: simulation.amount_in,
        fee_amount: simulation.fee,
        amount_out: simulation.amount_out,
        min_received,
        price_after_swap: simulation.price_after_swap,
        price_impact: simulation.price_impact,
        ticks_crossed: simulation.ticks_crossed,
    })
}
