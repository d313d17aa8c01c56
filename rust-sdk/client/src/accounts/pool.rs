//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use super::{decode_fixed, encode_fixed, AccountDecode, AccountKind};
use crate::DecodeError;

pub const POOL_DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq, Default)]
pub struct Pool {
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub token_x_reserve: Pubkey,
    pub token_y_reserve: Pubkey,
    pub position_iterator: u128,
    pub tick_spacing: u16,
    pub fee: u128,
    pub protocol_fee: u128,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub current_tick_index: i32,
    pub tickmap: Pubkey,
    pub fee_growth_global_x: u128,
    pub fee_growth_global_y: u128,
    pub fee_protocol_token_x: u64,
    pub fee_protocol_token_y: u64,
    pub seconds_per_liquidity_global: u128,
    pub start_timestamp: u64,
    pub last_timestamp: u64,
    pub fee_receiver: Pubkey,
    pub oracle_address: Pubkey,
    pub oracle_initialized: bool,
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 400;

    #[inline(always)]
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        decode_fixed(AccountKind::Pool, &POOL_DISCRIMINATOR, Self::LEN, data)
    }

    pub fn to_bytes(&self) -> std::io::Result<Vec<u8>> {
        encode_fixed(&POOL_DISCRIMINATOR, self)
    }
}

impl AccountDecode for Pool {
    const KIND: AccountKind = AccountKind::Pool;

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        Pool::from_bytes(data)
    }
}
