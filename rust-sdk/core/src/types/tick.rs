//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::BTreeMap;

use solana_pubkey::Pubkey;

use crate::TICKMAP_SIZE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickFacade {
    pub pool: Pubkey,
    pub index: i32,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub sqrt_price: u128,
    pub fee_growth_outside_x: u128,
    pub fee_growth_outside_y: u128,
}

/// Initialized ticks of one pool keyed by tick index.
pub type TickLookup = BTreeMap<i32, TickFacade>;

/// One bit per `tick_spacing` multiple, set when the tick is initialized.
#[derive(Clone, PartialEq, Eq)]
pub struct TickmapFacade {
    pub bitmap: Box<[u8; TICKMAP_SIZE]>,
}

impl Default for TickmapFacade {
    fn default() -> Self {
        Self {
            bitmap: Box::new([0; TICKMAP_SIZE]),
        }
    }
}

impl std::fmt::Debug for TickmapFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let initialized: u32 = self.bitmap.iter().map(|byte| byte.count_ones()).sum();
        f.debug_struct("TickmapFacade").field("initialized", &initialized).finish()
    }
}
