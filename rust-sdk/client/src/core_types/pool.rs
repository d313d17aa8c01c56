//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use tickroute_core::PoolFacade;

use crate::{DecodedAccount, Pool};

impl From<DecodedAccount<Pool>> for PoolFacade {
    fn from(val: DecodedAccount<Pool>) -> Self {
        let pool = val.data;
        PoolFacade {
            address: val.address,
            token_x: pool.token_x,
            token_y: pool.token_y,
            token_x_reserve: pool.token_x_reserve,
            token_y_reserve: pool.token_y_reserve,
            tick_spacing: pool.tick_spacing,
            fee: pool.fee,
            protocol_fee: pool.protocol_fee,
            liquidity: pool.liquidity,
            sqrt_price: pool.sqrt_price,
            current_tick_index: pool.current_tick_index,
            tickmap: pool.tickmap,
        }
    }
}
