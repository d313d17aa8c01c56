//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{simulate_hop, AccountSet, CrossLimits, DirectCandidate, HopSimulation, QuoteRequest, Selection, SwapSimulator};

/// Simulates every direct pool and picks the best one.
///
/// A result counts as a success only if the simulator reports `Ok`, the swap crosses no more
/// ticks than fit in one transaction and it produces some output. Among successes the best output (exact input) or lowest
/// fee-inclusive input (exact output) wins; on ties the earlier candidate is kept. If nothing
/// succeeds, the best failure is returned as `Degraded`. Candidates whose pool or tickmap is
/// missing from `accounts`, or whose simulation errors, are skipped.
pub fn select_single_hop<S: SwapSimulator + ?Sized>(
    simulator: &S,
    accounts: &AccountSet,
    candidates: &[DirectCandidate],
    request: &QuoteRequest,
    limits: &CrossLimits,
) -> Selection<HopSimulation> {
    if request.amount.is_zero() {
        return Selection::NoAmount;
    }

    let mut best: Option<HopSimulation> = None;
    let mut best_failed: Option<HopSimulation> = None;

    for candidate in candidates {
        let Some(state) = accounts.pool_state(&candidate.pool.address) else {
            continue;
        };
        let max_crosses = limits.single_hop_max_crosses(state.pool);
        let Ok(hop) = simulate_hop(
            simulator,
            state,
            request.pair.token_in,
            request.amount,
            request.slippage_tolerance_bps,
            max_crosses,
        ) else {
            continue;
        };

        let slot = if hop.is_executable() && hop.amount_out > 0 { &mut best } else { &mut best_failed };
        if slot.as_ref().map_or(true, |incumbent| request.amount.improves(&hop, incumbent)) {
            *slot = Some(hop);
        }
    }

    match (best, best_failed) {
        (Some(best), _) => Selection::Success(best),
        (None, Some(best_failed)) => Selection::Degraded(best_failed),
        (None, None) => Selection::NoRoute,
    }
}
