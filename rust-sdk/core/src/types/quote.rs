//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

use crate::{format_price_impact, SimulationStatus, SwapAmount, TokenPair, FEE_DENOMINATOR};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
    pub pair: TokenPair,
    pub amount: SwapAmount,
    pub slippage_tolerance_bps: u16,
}

impl QuoteRequest {
    pub fn new(pair: TokenPair, amount: SwapAmount, slippage_tolerance_bps: u16) -> Self {
        Self {
            pair,
            amount,
            slippage_tolerance_bps,
        }
    }
}

/// Result of a route selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<T> {
    /// The requested amount is zero, nothing was simulated.
    NoAmount,
    /// No candidate could be simulated.
    NoRoute,
    Success(T),
    /// Every simulation failed; this is the least bad one.
    Degraded(T),
}

impl<T> Selection<T> {
    pub fn simulation(&self) -> Option<&T> {
        match self {
            Selection::Success(simulation) | Selection::Degraded(simulation) => Some(simulation),
            Selection::NoAmount | Selection::NoRoute => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Selection::Success(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteHop {
    pub pool: Pubkey,
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub fee: u128,
    pub status: SimulationStatus,
    /// Input of this hop including the pool fee.
    pub amount_in: u64,
    pub amount_in_display: String,
    pub fee_amount: u64,
    pub amount_out: u64,
    pub price_impact: u128,
}

/// User-facing quotation for one route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub pair: TokenPair,
    pub amount: SwapAmount,
    pub amount_in: u64,
    pub amount_out: u64,
    pub minimum_received: u64,
    pub maximum_spent: u64,
    pub hops: Vec<QuoteHop>,
    /// Worst price impact across hops, scaled by `PRICE_IMPACT_DENOMINATOR`.
    pub price_impact: u128,
    /// Output per one unit of input, in output token units.
    pub exchange_rate: String,
}

impl Quote {
    /// An empty quote for a zero amount.
    pub fn zero(pair: TokenPair, amount: SwapAmount) -> Self {
        Self {
            pair,
            amount,
            amount_in: 0,
            amount_out: 0,
            minimum_received: 0,
            maximum_spent: 0,
            hops: Vec::new(),
            price_impact: 0,
            exchange_rate: "0".to_string(),
        }
    }

    pub fn is_two_hop(&self) -> bool {
        self.hops.len() == 2
    }

    pub fn intermediate(&self) -> Option<Pubkey> {
        self.is_two_hop().then(|| self.hops[0].token_out)
    }

    /// Sum of the pool fees along the route, scaled by `FEE_DENOMINATOR`.
    pub fn total_fee(&self) -> u128 {
        self.hops.iter().map(|hop| hop.fee).sum()
    }

    pub fn total_fee_percent(&self) -> f64 {
        self.total_fee() as f64 * 100.0 / FEE_DENOMINATOR as f64
    }

    pub fn price_impact_display(&self) -> String {
        format_price_impact(self.price_impact)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteOutcome {
    Quote(Quote),
    /// Every candidate failed to simulate; the quote shows the least bad attempt and must not be executed.
    Degraded(Quote),
    NoRoute,
}

impl QuoteOutcome {
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            QuoteOutcome::Quote(quote) | QuoteOutcome::Degraded(quote) => Some(quote),
            QuoteOutcome::NoRoute => None,
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, QuoteOutcome::Quote(_))
    }
}
