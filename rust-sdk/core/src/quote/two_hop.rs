//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    simulate_hop, AccountSet, CoreError, CrossLimits, HopSimulation, PoolState, QuoteRequest, RouteAmounts, Selection, SwapAmount,
    SwapSimulator, TwoHopCandidate, TwoHopSimulation,
};

/// Simulates a chained swap through both pools of a candidate.
///
/// Exact input runs the first pool forward and feeds its output into the second. Exact output
/// runs the second pool first and asks the first pool for the fee-inclusive input it needs.
/// When one leg has nothing to route, the other is reported as `NoGainSwap` without simulating.
pub fn simulate_two_hop<S: SwapSimulator + ?Sized>(
    simulator: &S,
    first: PoolState<'_>,
    second: PoolState<'_>,
    candidate: &TwoHopCandidate,
    request: &QuoteRequest,
    max_crosses: u16,
) -> Result<TwoHopSimulation, CoreError> {
    let token_in = request.pair.token_in;
    let intermediate = candidate.intermediate;
    let slippage = request.slippage_tolerance_bps;

    let (first_hop, second_hop) = match request.amount {
        SwapAmount::ExactIn(amount) => {
            let first_hop = simulate_hop(simulator, first, token_in, SwapAmount::ExactIn(amount), slippage, max_crosses)?;
            let second_hop = if first_hop.amount_out == 0 {
                HopSimulation::unreached(second.pool, intermediate)?
            } else {
                simulate_hop(simulator, second, intermediate, SwapAmount::ExactIn(first_hop.amount_out), slippage, max_crosses)?
            };
            (first_hop, second_hop)
        }
        SwapAmount::ExactOut(amount) => {
            let second_hop = simulate_hop(simulator, second, intermediate, SwapAmount::ExactOut(amount), slippage, max_crosses)?;
            let needed = second_hop.total_amount_in();
            let first_hop = if needed == 0 {
                HopSimulation::unreached(first.pool, token_in)?
            } else {
                simulate_hop(simulator, first, token_in, SwapAmount::ExactOut(needed), slippage, max_crosses)?
            };
            (first_hop, second_hop)
        }
    };

    Ok(TwoHopSimulation {
        intermediate,
        first: first_hop,
        second: second_hop,
    })
}

/// Simulates every two-hop candidate and picks the best chain.
///
/// Candidates with a missing pool or tickmap are dropped first; if none remain the result is
/// `NoRoute`. For exact output a chain only replaces the current best if it delivers exactly the
/// requested amount for less fee-inclusive input.
pub fn score_two_hop<S: SwapSimulator + ?Sized>(
    simulator: &S,
    accounts: &AccountSet,
    candidates: &[TwoHopCandidate],
    request: &QuoteRequest,
    limits: &CrossLimits,
) -> Selection<TwoHopSimulation> {
    if request.amount.is_zero() {
        return Selection::NoAmount;
    }

    let max_crosses = limits.two_hop_max_crosses(&request.pair);
    let simulations: Vec<TwoHopSimulation> = candidates
        .iter()
        .filter_map(|candidate| {
            let first = accounts.pool_state(&candidate.first.address)?;
            let second = accounts.pool_state(&candidate.second.address)?;
            simulate_two_hop(simulator, first, second, candidate, request, max_crosses).ok()
        })
        .collect();

    let mut best: Option<&TwoHopSimulation> = None;
    let mut best_failed: Option<&TwoHopSimulation> = None;

    for simulation in &simulations {
        if simulation.is_ok() {
            let replaces = match (best, request.amount) {
                (None, _) => true,
                (Some(incumbent), SwapAmount::ExactIn(_)) => simulation.total_amount_out() > incumbent.total_amount_out(),
                (Some(incumbent), SwapAmount::ExactOut(amount)) => {
                    simulation.total_amount_out() == amount && simulation.total_amount_in() < incumbent.total_amount_in()
                }
            };
            if replaces {
                best = Some(simulation);
            }
        } else {
            let replaces = match best_failed {
                None => true,
                Some(incumbent) => simulation.total_amount_out() != 0 && request.amount.improves(simulation, incumbent),
            };
            if replaces {
                best_failed = Some(simulation);
            }
        }
    }

    match (best, best_failed) {
        (Some(best), _) => Selection::Success(*best),
        (None, Some(best_failed)) => Selection::Degraded(*best_failed),
        (None, None) => Selection::NoRoute,
    }
}
