//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::HashSet;

use futures_util::future::join_all;
use log::{debug, info, warn};
use solana_pubkey::Pubkey;
use tickroute_client::{get_tick_address, AccountFetcher, AccountKind};
use tickroute_core::{AccountSet, RouteCandidates, TokenPair};

use crate::{generate_route_candidates, AccountCache, RouterConfig, RouterError, FETCH_BATCH_SIZE};

/// Candidates that survived account resolution, with the ledger state needed to simulate them.
#[derive(Clone, Debug)]
pub struct ResolvedRoutes {
    pub candidates: RouteCandidates,
    pub accounts: AccountSet,
}

impl ResolvedRoutes {
    pub fn pair(&self) -> TokenPair {
        self.candidates.pair
    }

    /// `true` when no route of either length is feasible.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Fetches pools, tickmaps and ticks for a candidate set in three dependent batches.
pub struct AccountResolver<'a, F: AccountFetcher + ?Sized> {
    fetcher: &'a F,
    config: &'a RouterConfig,
    cache: AccountCache,
}

impl<'a, F: AccountFetcher + ?Sized> AccountResolver<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a RouterConfig) -> Self {
        Self {
            fetcher,
            config,
            cache: AccountCache::new(),
        }
    }

    /// Resolves every account the candidates depend on and drops the candidates that cannot be simulated.
    ///
    /// A missing or malformed account, or a failed request, only prunes the candidates that depend on it.
    /// The resolution fails only if every request of a batch fails.
    pub async fn resolve(mut self, mut candidates: RouteCandidates) -> Result<ResolvedRoutes, RouterError> {
        let pair = candidates.pair;
        let pools = candidates.pool_addresses();

        let mut requests: Vec<(Pubkey, AccountKind)> = pools.iter().map(|pool| (*pool, AccountKind::Pool)).collect();
        requests.extend([pair.token_in, pair.token_out].into_iter().chain(candidates.intermediates()).map(|mint| (mint, AccountKind::Mint)));
        requests.extend(pools.iter().filter_map(|pool| self.config.tickmap_hints.get(pool)).map(|tickmap| (*tickmap, AccountKind::Tickmap)));
        self.fetch_batch("pools", requests).await?;

        let accounts = self.cache.accounts();
        if accounts.mint(&pair.token_in).is_none() || accounts.mint(&pair.token_out).is_none() {
            warn!(target: "log", "Mint of {} -> {} is not available, no route", pair.token_in, pair.token_out);
            candidates.direct.clear();
            candidates.two_hop.clear();
            return Ok(self.finish(candidates));
        }
        candidates.retain_pools(|pool| accounts.pool(pool).is_some());
        candidates.two_hop.retain(|candidate| accounts.mint(&candidate.intermediate).is_some());

        let requests = candidates
            .pool_addresses()
            .iter()
            .filter_map(|pool| accounts.pool(pool))
            .map(|pool| (pool.tickmap, AccountKind::Tickmap))
            .collect();
        self.fetch_batch("tickmaps", requests).await?;

        let accounts = self.cache.accounts();
        candidates.retain_pools(|pool| accounts.pool_state(pool).is_some());

        let (tick_plan, unusable) = self.tick_plan(&candidates);
        let requests = tick_plan.iter().flat_map(|(_, ticks)| ticks.iter().map(|tick| (*tick, AccountKind::Tick))).collect();
        self.fetch_batch("ticks", requests).await?;

        let cache = &self.cache;
        candidates.retain_pools(|pool| {
            !unusable.contains(pool)
                && tick_plan
                    .iter()
                    .filter(|(planned, _)| planned == pool)
                    .all(|(_, ticks)| ticks.iter().all(|tick| !cache.is_failed(tick)))
        });

        Ok(self.finish(candidates))
    }

    fn finish(self, candidates: RouteCandidates) -> ResolvedRoutes {
        if candidates.is_empty() {
            info!(target: "log", "No feasible route for {} -> {}", candidates.pair.token_in, candidates.pair.token_out);
        } else {
            debug!(
                target: "log",
                "Resolved {} direct and {} two-hop routes for {} -> {}",
                candidates.direct.len(),
                candidates.two_hop.len(),
                candidates.pair.token_in,
                candidates.pair.token_out
            );
        }
        ResolvedRoutes {
            candidates,
            accounts: self.cache.into_accounts(),
        }
    }

    /// Tick addresses to fetch per pool, walking each tickmap in the direction the pool is swapped.
    fn tick_plan(&self, candidates: &RouteCandidates) -> (Vec<(Pubkey, Vec<Pubkey>)>, HashSet<Pubkey>) {
        let pair = candidates.pair;
        let limits = self.config.cross_limits();
        let two_hop_limit = limits.two_hop_tick_fetch_limit(&pair);

        let direct = candidates
            .direct
            .iter()
            .map(|candidate| (candidate.pool.address, pair.token_in, limits.direct_tick_fetch_limit(&candidate.pool.address)));
        let two_hop = candidates
            .two_hop
            .iter()
            .flat_map(|candidate| [(candidate.first.address, pair.token_in, two_hop_limit), (candidate.second.address, candidate.intermediate, two_hop_limit)]);

        let mut seen = HashSet::new();
        let mut plan = Vec::new();
        let mut unusable = HashSet::new();
        for (pool, token_in, limit) in direct.chain(two_hop) {
            if !seen.insert(pool) {
                continue;
            }
            match self.tick_addresses(&pool, &token_in, limit) {
                Ok(ticks) => plan.push((pool, ticks)),
                Err(err) => {
                    warn!(target: "log", "Skipping pool {}: {}", pool, err);
                    unusable.insert(pool);
                }
            }
        }
        (plan, unusable)
    }

    fn tick_addresses(&self, pool: &Pubkey, token_in: &Pubkey, limit: usize) -> Result<Vec<Pubkey>, RouterError> {
        let Some(state) = self.cache.accounts().pool_state(pool) else {
            return Ok(Vec::new());
        };
        let x_to_y = state.pool.is_x_to_y(token_in).map_err(RouterError::Core)?;
        let indexes = state
            .tickmap
            .ticks_for_swap(state.pool.current_tick_index, state.pool.tick_spacing, x_to_y, limit)
            .map_err(RouterError::Core)?;
        indexes
            .into_iter()
            .map(|index| -> Result<Pubkey, RouterError> { Ok(get_tick_address(pool, index)?.0) })
            .collect()
    }

    /// Fetches the uncached addresses of one batch in concurrent requests of `FETCH_BATCH_SIZE`.
    ///
    /// A failed request marks its addresses as failed so dependent candidates get pruned. Only
    /// when every request of the batch fails is the resolution aborted with
    /// `RouterError::FetchUnavailable`. A batch small enough for one request therefore aborts on
    /// that single failure.
    async fn fetch_batch(&mut self, batch: &'static str, requests: Vec<(Pubkey, AccountKind)>) -> Result<(), RouterError> {
        let mut seen = HashSet::new();
        let requests: Vec<(Pubkey, AccountKind)> = requests
            .into_iter()
            .filter(|(address, _)| !self.cache.is_resolved(address) && seen.insert(*address))
            .collect();
        if requests.is_empty() {
            return Ok(());
        }

        let chunks: Vec<&[(Pubkey, AccountKind)]> = requests.chunks(FETCH_BATCH_SIZE).collect();
        let addresses: Vec<Vec<Pubkey>> = chunks.iter().map(|chunk| chunk.iter().map(|(address, _)| *address).collect()).collect();
        debug!(target: "log", "Fetching {} {} accounts in {} requests", requests.len(), batch, chunks.len());

        let fetcher = self.fetcher;
        let results = join_all(addresses.iter().map(|chunk| fetcher.get_multiple_accounts(chunk))).await;

        let mut failed = 0;
        for (chunk, result) in chunks.iter().zip(results) {
            match result {
                Ok(accounts) => {
                    for ((address, kind), account) in chunk.iter().zip(accounts) {
                        self.cache.store(*kind, *address, account);
                    }
                }
                Err(err) => {
                    warn!(target: "log", "Failed to fetch {} {} accounts: {}", chunk.len(), batch, err);
                    failed += 1;
                    self.cache.mark_failed(chunk.iter().map(|(address, _)| *address));
                }
            }
        }

        if failed == chunks.len() {
            return Err(RouterError::FetchUnavailable { batch });
        }
        Ok(())
    }
}

/// Generates the candidates of a pair and resolves their accounts.
pub async fn resolve_routes<F: AccountFetcher + ?Sized>(fetcher: &F, config: &RouterConfig, pair: TokenPair) -> Result<ResolvedRoutes, RouterError> {
    let candidates = generate_route_candidates(pair, config)?;
    AccountResolver::new(fetcher, config).resolve(candidates).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{setup_pool, MockSwap, TestMarket, TEST_FEE_TIERS};
    use tickroute_core::DEFAULT_FEE_TIERS;

    #[tokio::test]
    async fn test_resolve_prunes_missing_pools() {
        let market = TestMarket::new();
        let direct = market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let first = market.add_pool(market.token_in, market.intermediate, TEST_FEE_TIERS[1], MockSwap::rate(1, 1));
        let second = market.add_pool(market.intermediate, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));

        let routes = resolve_routes(&*market.fetcher, &market.config(), market.pair()).await.unwrap();

        assert_eq!(routes.candidates.direct.len(), 1);
        assert_eq!(routes.candidates.direct[0].pool.address, direct.address);
        assert_eq!(routes.candidates.two_hop.len(), 1);
        assert_eq!(routes.candidates.two_hop[0].first.address, first.address);
        assert_eq!(routes.candidates.two_hop[0].second.address, second.address);
        assert!(routes.accounts.pool_state(&direct.address).is_some());
        assert_eq!(routes.accounts.decimals(&market.intermediate), Some(9));

        let requests = market.fetcher.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].len(), 3);
        assert_eq!(requests[2].len(), 3);
        for pool in [&direct, &first, &second] {
            let fetched = pool.ticks.iter().filter(|tick| routes.accounts.tick(tick).is_some()).count();
            assert_eq!(fetched, 1);
        }
    }

    #[tokio::test]
    async fn test_missing_output_mint_is_no_route() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.fetcher.remove(&market.token_out);

        let routes = resolve_routes(&*market.fetcher, &market.config(), market.pair()).await.unwrap();

        assert!(routes.is_empty());
        assert_eq!(market.fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_intermediate_mint_prunes_two_hop() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.add_pool(market.token_in, market.intermediate, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.add_pool(market.intermediate, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.fetcher.remove(&market.intermediate);

        let routes = resolve_routes(&*market.fetcher, &market.config(), market.pair()).await.unwrap();

        assert_eq!(routes.candidates.direct.len(), 1);
        assert!(routes.candidates.two_hop.is_empty());
    }

    #[tokio::test]
    async fn test_missing_tickmap_prunes_pool() {
        let market = TestMarket::new();
        let direct = market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.add_pool(market.token_in, market.intermediate, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.add_pool(market.intermediate, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.fetcher.remove(&direct.tickmap);

        let routes = resolve_routes(&*market.fetcher, &market.config(), market.pair()).await.unwrap();

        assert!(routes.candidates.direct.is_empty());
        assert_eq!(routes.candidates.two_hop.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_batch_is_unavailable() {
        let market = TestMarket::new();
        let direct = market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        market.fetcher.fail(direct.address);

        let result = resolve_routes(&*market.fetcher, &market.config(), market.pair()).await;

        assert_eq!(result.unwrap_err(), RouterError::FetchUnavailable { batch: "pools" });
    }

    #[tokio::test]
    async fn test_failed_chunk_prunes_only_its_candidates() {
        let market = TestMarket::new();
        let tier = DEFAULT_FEE_TIERS[0];
        let direct = setup_pool(&market.fetcher, market.token_in, market.token_out, tier);
        let first = setup_pool(&market.fetcher, market.token_in, market.intermediate, tier);
        let second = setup_pool(&market.fetcher, market.intermediate, market.token_out, tier);
        market.fetcher.fail(direct.address);

        // 130 pools and 8 mints: the last intermediate's pools land in the second request.
        let mut intermediates: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        intermediates.push(market.intermediate);
        let config = RouterConfig {
            intermediates,
            ..RouterConfig::default()
        };

        let routes = resolve_routes(&*market.fetcher, &config, market.pair()).await.unwrap();

        assert_eq!(market.fetcher.requests()[0].len(), FETCH_BATCH_SIZE);
        assert_eq!(market.fetcher.requests()[1].len(), 38);
        assert!(routes.candidates.direct.is_empty());
        assert_eq!(routes.candidates.two_hop.len(), 1);
        assert_eq!(routes.candidates.two_hop[0].first.address, first.address);
        assert_eq!(routes.candidates.two_hop[0].second.address, second.address);
    }

    #[tokio::test]
    async fn test_tickmap_hints_are_fetched_with_pools() {
        let market = TestMarket::new();
        let direct = market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let mut config = market.config();
        config.intermediates.clear();
        config.tickmap_hints.insert(direct.address, direct.tickmap);

        let routes = resolve_routes(&*market.fetcher, &config, market.pair()).await.unwrap();

        let requests = market.fetcher.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].contains(&direct.tickmap));
        assert_eq!(routes.candidates.direct.len(), 1);
    }
}
