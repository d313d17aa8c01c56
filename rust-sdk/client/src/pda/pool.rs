//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use tickroute_core::FeeTier;

use crate::{CLMM_PROGRAM_ID, POOL_SEED};

/// Orders two mints the way the program stores them as the pool's x and y sides.
pub fn order_mints(mint_1: Pubkey, mint_2: Pubkey) -> [Pubkey; 2] {
    if mint_1.to_bytes() < mint_2.to_bytes() {
        [mint_1, mint_2]
    } else {
        [mint_2, mint_1]
    }
}

/// Derives the pool address for a pair of mints at one fee tier. The mints may be given in any order.
pub fn get_pool_address(mint_1: &Pubkey, mint_2: &Pubkey, fee_tier: &FeeTier) -> Result<(Pubkey, u8), ProgramError> {
    let [token_x, token_y] = order_mints(*mint_1, *mint_2);
    let fee_bytes = fee_tier.fee.to_le_bytes();
    let tick_spacing_bytes = fee_tier.tick_spacing.to_le_bytes();
    let seeds: &[&[u8]] = &[POOL_SEED, token_x.as_ref(), token_y.as_ref(), &fee_bytes, &tick_spacing_bytes];
    Pubkey::try_find_program_address(seeds, &CLMM_PROGRAM_ID).ok_or(ProgramError::InvalidSeeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickroute_core::DEFAULT_FEE_TIERS;

    #[test]
    fn test_order_mints() {
        let low = Pubkey::new_from_array([1; 32]);
        let high = Pubkey::new_from_array([2; 32]);
        assert_eq!(order_mints(high, low), [low, high]);
        assert_eq!(order_mints(low, high), [low, high]);
    }

    #[test]
    fn test_get_pool_address_is_order_independent() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let tier = DEFAULT_FEE_TIERS[3];
        assert_eq!(get_pool_address(&a, &b, &tier).unwrap(), get_pool_address(&b, &a, &tier).unwrap());
    }

    #[test]
    fn test_fee_tiers_derive_distinct_pools() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut addresses: Vec<Pubkey> = DEFAULT_FEE_TIERS.iter().map(|tier| get_pool_address(&a, &b, tier).unwrap().0).collect();
        addresses.sort();
        addresses.dedup();
        assert_eq!(addresses.len(), DEFAULT_FEE_TIERS.len());
    }
}
