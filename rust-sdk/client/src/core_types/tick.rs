//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use tickroute_core::{TickFacade, TickmapFacade};

use crate::{Tick, Tickmap};

impl From<Tick> for TickFacade {
    fn from(val: Tick) -> Self {
        TickFacade {
            pool: val.pool,
            index: val.index,
            liquidity_net: val.liquidity_net(),
            liquidity_gross: val.liquidity_gross,
            sqrt_price: val.sqrt_price,
            fee_growth_outside_x: val.fee_growth_outside_x,
            fee_growth_outside_y: val.fee_growth_outside_y,
        }
    }
}

impl From<Tickmap> for TickmapFacade {
    fn from(val: Tickmap) -> Self {
        TickmapFacade { bitmap: val.bitmap }
    }
}
