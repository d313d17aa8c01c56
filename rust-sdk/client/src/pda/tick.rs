//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_program::program_error::ProgramError;
use solana_pubkey::Pubkey;

use crate::{CLMM_PROGRAM_ID, TICK_SEED};

pub fn get_tick_address(pool: &Pubkey, tick_index: i32) -> Result<(Pubkey, u8), ProgramError> {
    let tick_index_bytes = tick_index.to_le_bytes();
    let seeds: &[&[u8]] = &[TICK_SEED, pool.as_ref(), &tick_index_bytes];
    Pubkey::try_find_program_address(seeds, &CLMM_PROGRAM_ID).ok_or(ProgramError::InvalidSeeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tick_address() {
        let pool = Pubkey::new_unique();
        let (address, _) = get_tick_address(&pool, -10).unwrap();
        assert_eq!(get_tick_address(&pool, -10).unwrap().0, address);
        assert_ne!(get_tick_address(&pool, 10).unwrap().0, address);
        assert_ne!(get_tick_address(&Pubkey::new_unique(), -10).unwrap().0, address);
    }
}
