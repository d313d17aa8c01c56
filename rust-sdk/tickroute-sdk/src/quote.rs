//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use log::warn;
use tickroute_client::AccountFetcher;
use tickroute_core::{build_quote, decide_route, intermediate_probe_target, score_two_hop, select_single_hop, QuoteOutcome, QuoteRequest, SwapAmount, SwapSimulator, TokenPair};

use crate::{resolve_routes, AccountProbe, ResolvedRoutes, RouterConfig, RouterError};

/// Scores both route lengths over already resolved accounts and renders the chosen route.
///
/// The holding account probe only runs when both strategies failed and the two-hop attempt is
/// better. A probe that errors counts as a missing account.
pub async fn quote_resolved_routes<S, P>(simulator: &S, probe: &P, routes: &ResolvedRoutes, amount: SwapAmount, config: &RouterConfig) -> Result<QuoteOutcome, RouterError>
where
    S: SwapSimulator + ?Sized,
    P: AccountProbe + ?Sized,
{
    let request = QuoteRequest::new(routes.pair(), amount, config.slippage_tolerance_bps);
    let limits = config.cross_limits();

    let (single_hop, two_hop) = tokio::join!(
        async { select_single_hop(simulator, &routes.accounts, &routes.candidates.direct, &request, &limits) },
        async { score_two_hop(simulator, &routes.accounts, &routes.candidates.two_hop, &request, &limits) },
    );

    let intermediate_account_exists = match intermediate_probe_target(&single_hop, &two_hop, amount) {
        Some(intermediate) => Some(probe.account_exists(&config.wallet, &intermediate).await.unwrap_or_else(|err| {
            warn!(target: "log", "Holding account probe for {} failed: {}", intermediate, err);
            false
        })),
        None => None,
    };

    let decision = decide_route(&single_hop, &two_hop, amount, intermediate_account_exists);
    build_quote(&decision, &request, &routes.accounts).map_err(RouterError::Core)
}

/// Fetches everything a pair needs and quotes it once.
pub async fn fetch_swap_quote<F, P, S>(fetcher: &F, probe: &P, simulator: &S, config: &RouterConfig, pair: TokenPair, amount: SwapAmount) -> Result<QuoteOutcome, RouterError>
where
    F: AccountFetcher + ?Sized,
    P: AccountProbe + ?Sized,
    S: SwapSimulator + ?Sized,
{
    let routes = resolve_routes(fetcher, config, pair).await?;
    quote_resolved_routes(simulator, probe, &routes, amount, config).await
}
