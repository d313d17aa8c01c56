//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

use crate::{
    exchange_rate, format_amount, try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance, AccountSet, CoreError, HopSimulation, Quote, QuoteHop,
    QuoteOutcome, QuoteRequest, RouteAmounts, Selection, SwapAmount, TwoHopSimulation, MINT_NOT_FOUND,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    NoAmount,
    NoRoute,
    SingleHop { simulation: HopSimulation, degraded: bool },
    TwoHop { simulation: TwoHopSimulation, degraded: bool },
}

/// The intermediate mint whose holding account must be probed before deciding, if any.
///
/// Only needed when both strategies failed and the two-hop attempt is the better one.
pub fn intermediate_probe_target(single_hop: &Selection<HopSimulation>, two_hop: &Selection<TwoHopSimulation>, amount: SwapAmount) -> Option<Pubkey> {
    match (single_hop, two_hop) {
        (Selection::Degraded(single), Selection::Degraded(double)) if amount.improves(double, single) => Some(double.intermediate),
        _ => None,
    }
}

/// Chooses between the single-hop and two-hop selections.
///
/// - A zero amount on either side yields `NoAmount`.
/// - If exactly one strategy succeeded it is used. If both did, two-hop wins only when strictly better.
/// - If both failed, the two-hop attempt is used only when strictly better and the wallet has no
///   holding account for the intermediate mint (`intermediate_account_exists == Some(false)`).
/// - A failed attempt beats a strategy with no route at all.
pub fn decide_route(
    single_hop: &Selection<HopSimulation>,
    two_hop: &Selection<TwoHopSimulation>,
    amount: SwapAmount,
    intermediate_account_exists: Option<bool>,
) -> RouteDecision {
    let single = |simulation: &HopSimulation, degraded| RouteDecision::SingleHop {
        simulation: *simulation,
        degraded,
    };
    let double = |simulation: &TwoHopSimulation, degraded| RouteDecision::TwoHop {
        simulation: *simulation,
        degraded,
    };

    match (single_hop, two_hop) {
        (Selection::NoAmount, _) | (_, Selection::NoAmount) => RouteDecision::NoAmount,
        (Selection::Success(s), Selection::Success(t)) => {
            if amount.improves(t, s) {
                double(t, false)
            } else {
                single(s, false)
            }
        }
        (Selection::Success(s), _) => single(s, false),
        (_, Selection::Success(t)) => double(t, false),
        (Selection::Degraded(s), Selection::Degraded(t)) => {
            if amount.improves(t, s) && intermediate_account_exists == Some(false) {
                double(t, true)
            } else {
                single(s, true)
            }
        }
        (Selection::Degraded(s), Selection::NoRoute) => single(s, true),
        (Selection::NoRoute, Selection::Degraded(t)) => double(t, true),
        (Selection::NoRoute, Selection::NoRoute) => RouteDecision::NoRoute,
    }
}

fn quote_hop(hop: &HopSimulation, accounts: &AccountSet) -> Result<QuoteHop, CoreError> {
    let decimals = accounts.decimals(&hop.token_in).ok_or(MINT_NOT_FOUND)?;
    let amount_in = hop.total_amount_in();
    Ok(QuoteHop {
        pool: hop.pool,
        token_in: hop.token_in,
        token_out: hop.token_out,
        fee: hop.fee_tier.fee,
        status: hop.status,
        amount_in,
        amount_in_display: format_amount(amount_in as u128, decimals),
        fee_amount: hop.fee_amount,
        amount_out: hop.amount_out,
        price_impact: hop.price_impact,
    })
}

/// Renders a route decision into the user-facing quote.
pub fn build_quote(decision: &RouteDecision, request: &QuoteRequest, accounts: &AccountSet) -> Result<QuoteOutcome, CoreError> {
    let (hops, amounts, price_impact, degraded): (Vec<QuoteHop>, (u64, u64), u128, bool) = match decision {
        RouteDecision::NoAmount => return Ok(QuoteOutcome::Quote(Quote::zero(request.pair, request.amount))),
        RouteDecision::NoRoute => return Ok(QuoteOutcome::NoRoute),
        RouteDecision::SingleHop { simulation, degraded } => (
            vec![quote_hop(simulation, accounts)?],
            (simulation.total_amount_in(), simulation.total_amount_out()),
            simulation.price_impact,
            *degraded,
        ),
        RouteDecision::TwoHop { simulation, degraded } => (
            vec![quote_hop(&simulation.first, accounts)?, quote_hop(&simulation.second, accounts)?],
            (simulation.total_amount_in(), simulation.total_amount_out()),
            simulation.price_impact(),
            *degraded,
        ),
    };
    let (amount_in, amount_out) = amounts;

    let decimals_in = accounts.decimals(&request.pair.token_in).ok_or(MINT_NOT_FOUND)?;
    let decimals_out = accounts.decimals(&request.pair.token_out).ok_or(MINT_NOT_FOUND)?;
    let slippage = request.slippage_tolerance_bps;
    let (minimum_received, maximum_spent) = match request.amount {
        SwapAmount::ExactIn(_) => (try_get_min_amount_with_slippage_tolerance(amount_out, slippage)?, amount_in),
        SwapAmount::ExactOut(_) => (amount_out, try_get_max_amount_with_slippage_tolerance(amount_in, slippage)?),
    };

    let quote = Quote {
        pair: request.pair,
        amount: request.amount,
        amount_in,
        amount_out,
        minimum_received,
        maximum_spent,
        hops,
        price_impact,
        exchange_rate: exchange_rate(amount_in, decimals_in, amount_out, decimals_out)?,
    };

    Ok(if degraded {
        QuoteOutcome::Degraded(quote)
    } else {
        QuoteOutcome::Quote(quote)
    })
}
