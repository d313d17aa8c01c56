//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;
use tickroute_client::{get_pool_address, order_mints};
use tickroute_core::{DirectCandidate, FeeTier, PoolKey, RouteCandidates, TokenPair, TwoHopCandidate};

use crate::{RouterConfig, RouterError};

/// Derives the pool of every fee tier between two mints, in fee tier order.
pub fn pool_keys(mint_1: &Pubkey, mint_2: &Pubkey, fee_tiers: &[FeeTier]) -> Result<Vec<PoolKey>, RouterError> {
    let [token_x, token_y] = order_mints(*mint_1, *mint_2);
    fee_tiers
        .iter()
        .map(|fee_tier| -> Result<PoolKey, RouterError> {
            let (address, _) = get_pool_address(&token_x, &token_y, fee_tier)?;
            Ok(PoolKey {
                address,
                token_x,
                token_y,
                fee_tier: *fee_tier,
            })
        })
        .collect()
}

/// Enumerates the direct pools and the two-hop paths through every whitelisted intermediate.
///
/// No account is fetched here, so most candidates usually do not exist on the ledger.
pub fn generate_route_candidates(pair: TokenPair, config: &RouterConfig) -> Result<RouteCandidates, RouterError> {
    if pair.token_in == pair.token_out {
        return Err(RouterError::InvalidPair(format!("{} cannot be swapped for itself", pair.token_in)));
    }

    let direct = pool_keys(&pair.token_in, &pair.token_out, &config.fee_tiers)?
        .into_iter()
        .map(|pool| DirectCandidate { pool })
        .collect();

    let mut two_hop = Vec::new();
    let mut seen = Vec::with_capacity(config.intermediates.len());
    for intermediate in &config.intermediates {
        if pair.involves(intermediate) || seen.contains(intermediate) {
            continue;
        }
        seen.push(*intermediate);

        let first_pools = pool_keys(&pair.token_in, intermediate, &config.fee_tiers)?;
        let second_pools = pool_keys(intermediate, &pair.token_out, &config.fee_tiers)?;
        for first in &first_pools {
            for second in &second_pools {
                two_hop.push(TwoHopCandidate {
                    intermediate: *intermediate,
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    Ok(RouteCandidates { pair, direct, two_hop })
}
