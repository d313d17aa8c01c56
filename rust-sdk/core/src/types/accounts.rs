//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::HashMap;

use solana_pubkey::Pubkey;

use crate::{MintFacade, PoolFacade, TickFacade, TickLookup, TickmapFacade};

static NO_TICKS: TickLookup = TickLookup::new();

/// Decoded ledger state gathered for one quotation cycle, keyed by account address.
#[derive(Clone, Debug, Default)]
pub struct AccountSet {
    pools: HashMap<Pubkey, PoolFacade>,
    tickmaps: HashMap<Pubkey, TickmapFacade>,
    ticks: HashMap<Pubkey, TickFacade>,
    mints: HashMap<Pubkey, MintFacade>,
    pool_ticks: HashMap<Pubkey, TickLookup>,
}

/// Borrowed view of everything needed to simulate a swap through one pool.
#[derive(Copy, Clone, Debug)]
pub struct PoolState<'a> {
    pub pool: &'a PoolFacade,
    pub tickmap: &'a TickmapFacade,
    pub ticks: &'a TickLookup,
}

impl AccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_pool(&mut self, pool: PoolFacade) {
        self.pools.insert(pool.address, pool);
    }

    pub fn insert_tickmap(&mut self, address: Pubkey, tickmap: TickmapFacade) {
        self.tickmaps.insert(address, tickmap);
    }

    pub fn insert_tick(&mut self, address: Pubkey, tick: TickFacade) {
        self.pool_ticks.entry(tick.pool).or_default().insert(tick.index, tick);
        self.ticks.insert(address, tick);
    }

    pub fn insert_mint(&mut self, mint: MintFacade) {
        self.mints.insert(mint.address, mint);
    }

    pub fn pool(&self, address: &Pubkey) -> Option<&PoolFacade> {
        self.pools.get(address)
    }

    pub fn tickmap(&self, address: &Pubkey) -> Option<&TickmapFacade> {
        self.tickmaps.get(address)
    }

    pub fn tick(&self, address: &Pubkey) -> Option<&TickFacade> {
        self.ticks.get(address)
    }

    pub fn mint(&self, address: &Pubkey) -> Option<&MintFacade> {
        self.mints.get(address)
    }

    pub fn decimals(&self, mint: &Pubkey) -> Option<u8> {
        self.mints.get(mint).map(|mint| mint.decimals)
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.pools.contains_key(address)
            || self.tickmaps.contains_key(address)
            || self.ticks.contains_key(address)
            || self.mints.contains_key(address)
    }

    /// The pool with its tickmap and known ticks. `None` if the pool or its tickmap is missing.
    pub fn pool_state(&self, address: &Pubkey) -> Option<PoolState<'_>> {
        let pool = self.pools.get(address)?;
        let tickmap = self.tickmaps.get(&pool.tickmap)?;
        let ticks = self.pool_ticks.get(address).unwrap_or(&NO_TICKS);
        Some(PoolState { pool, tickmap, ticks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_state_requires_tickmap() {
        let tickmap = Pubkey::new_unique();
        let pool = PoolFacade {
            address: Pubkey::new_unique(),
            tickmap,
            ..PoolFacade::default()
        };
        let mut accounts = AccountSet::new();
        accounts.insert_pool(pool);
        assert!(accounts.pool_state(&pool.address).is_none());

        accounts.insert_tickmap(tickmap, TickmapFacade::default());
        let state = accounts.pool_state(&pool.address).unwrap();
        assert_eq!(state.pool, &pool);
        assert!(state.ticks.is_empty());
    }

    #[test]
    fn test_ticks_are_grouped_by_pool() {
        let pool = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let mut accounts = AccountSet::new();
        for (index, owner) in [(-10, pool), (20, pool), (5, other)] {
            let tick = TickFacade {
                pool: owner,
                index,
                ..TickFacade::default()
            };
            accounts.insert_tick(Pubkey::new_unique(), tick);
        }
        let tickmap = Pubkey::new_unique();
        accounts.insert_pool(PoolFacade {
            address: pool,
            tickmap,
            ..PoolFacade::default()
        });
        accounts.insert_tickmap(tickmap, TickmapFacade::default());

        let state = accounts.pool_state(&pool).unwrap();
        assert_eq!(state.ticks.keys().copied().collect::<Vec<_>>(), vec![-10, 20]);
    }
}
