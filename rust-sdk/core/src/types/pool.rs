//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

use crate::{CoreError, FeeTier, TOKEN_NOT_IN_POOL};

/// The subset of on-chain pool state that quoting needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PoolFacade {
    pub address: Pubkey,
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub token_x_reserve: Pubkey,
    pub token_y_reserve: Pubkey,
    pub tick_spacing: u16,
    pub fee: u128,
    pub protocol_fee: u128,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub current_tick_index: i32,
    pub tickmap: Pubkey,
}

impl PoolFacade {
    pub fn fee_tier(&self) -> FeeTier {
        FeeTier::new(self.fee, self.tick_spacing)
    }

    pub fn contains(&self, mint: &Pubkey) -> bool {
        self.token_x == *mint || self.token_y == *mint
    }

    /// Returns `true` if swapping `token_in` moves the price down (token x in, token y out).
    pub fn is_x_to_y(&self, token_in: &Pubkey) -> Result<bool, CoreError> {
        if *token_in == self.token_x {
            Ok(true)
        } else if *token_in == self.token_y {
            Ok(false)
        } else {
            Err(TOKEN_NOT_IN_POOL)
        }
    }

    /// The mint received when `token_in` is sold into this pool.
    pub fn other_token(&self, token_in: &Pubkey) -> Result<Pubkey, CoreError> {
        Ok(if self.is_x_to_y(token_in)? { self.token_y } else { self.token_x })
    }
}
