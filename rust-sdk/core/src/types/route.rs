//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::HashSet;

use solana_pubkey::Pubkey;

use crate::{
    PoolFacade, DEFAULT_MAX_CROSSES, DEFAULT_TICK_FETCH_LIMIT, FEE_UNIT, LUT_MAX_CROSSES, LUT_TICK_FETCH_LIMIT, NATIVE_MAX_CROSSES,
};

/// A pool's fee and tick spacing. Together with the two mints it identifies a pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FeeTier {
    pub fee: u128,
    pub tick_spacing: u16,
}

impl FeeTier {
    pub const fn new(fee: u128, tick_spacing: u16) -> Self {
        Self { fee, tick_spacing }
    }

    /// Builds a tier from a fee given in thousandths of a percent.
    pub const fn from_fee_units(units: u64, tick_spacing: u16) -> Self {
        Self::new(units as u128 * FEE_UNIT, tick_spacing)
    }
}

/// The two assets of a quote request. The order matters: `token_in` is sold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenPair {
    pub token_in: Pubkey,
    pub token_out: Pubkey,
}

impl TokenPair {
    pub fn new(token_in: Pubkey, token_out: Pubkey) -> Self {
        Self { token_in, token_out }
    }

    pub fn involves(&self, mint: &Pubkey) -> bool {
        self.token_in == *mint || self.token_out == *mint
    }
}

/// A derived pool address that may or may not exist on chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PoolKey {
    pub address: Pubkey,
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub fee_tier: FeeTier,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectCandidate {
    pub pool: PoolKey,
}

/// `token_in -> intermediate` through `first`, then `intermediate -> token_out` through `second`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwoHopCandidate {
    pub intermediate: Pubkey,
    pub first: PoolKey,
    pub second: PoolKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteCandidates {
    pub pair: TokenPair,
    pub direct: Vec<DirectCandidate>,
    pub two_hop: Vec<TwoHopCandidate>,
}

impl RouteCandidates {
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.two_hop.is_empty()
    }

    /// Every pool address referenced by a candidate, deduplicated, in first-seen order.
    pub fn pool_addresses(&self) -> Vec<Pubkey> {
        let direct = self.direct.iter().map(|candidate| candidate.pool.address);
        let two_hop = self.two_hop.iter().flat_map(|candidate| [candidate.first.address, candidate.second.address]);
        dedup(direct.chain(two_hop))
    }

    /// Intermediate mints referenced by two-hop candidates, deduplicated.
    pub fn intermediates(&self) -> Vec<Pubkey> {
        dedup(self.two_hop.iter().map(|candidate| candidate.intermediate))
    }

    /// Drops candidates that reference a pool for which `keep` returns `false`.
    pub fn retain_pools(&mut self, keep: impl Fn(&Pubkey) -> bool) {
        self.direct.retain(|candidate| keep(&candidate.pool.address));
        self.two_hop.retain(|candidate| keep(&candidate.first.address) && keep(&candidate.second.address));
    }
}

pub(crate) fn dedup(addresses: impl IntoIterator<Item = Pubkey>) -> Vec<Pubkey> {
    let mut seen = HashSet::new();
    addresses.into_iter().filter(|address| seen.insert(*address)).collect()
}

/// Per-pool tick crossing budgets handed to the swap simulator.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CrossLimits {
    pub pools_with_luts: HashSet<Pubkey>,
    pub native_mint: Pubkey,
}

impl CrossLimits {
    pub fn has_lut(&self, pool: &Pubkey) -> bool {
        self.pools_with_luts.contains(pool)
    }

    pub fn single_hop_max_crosses(&self, pool: &PoolFacade) -> u16 {
        if self.has_lut(&pool.address) {
            LUT_MAX_CROSSES
        } else if pool.contains(&self.native_mint) {
            NATIVE_MAX_CROSSES
        } else {
            DEFAULT_MAX_CROSSES
        }
    }

    pub fn two_hop_max_crosses(&self, pair: &TokenPair) -> u16 {
        if pair.involves(&self.native_mint) {
            NATIVE_MAX_CROSSES
        } else {
            DEFAULT_MAX_CROSSES
        }
    }

    pub fn direct_tick_fetch_limit(&self, pool: &Pubkey) -> usize {
        if self.has_lut(pool) {
            LUT_TICK_FETCH_LIMIT
        } else {
            DEFAULT_TICK_FETCH_LIMIT
        }
    }

    pub fn two_hop_tick_fetch_limit(&self, pair: &TokenPair) -> usize {
        self.two_hop_max_crosses(pair) as usize
    }
}
