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

pub const TICK_DISCRIMINATOR: [u8; 8] = [176, 94, 67, 247, 133, 173, 7, 115];

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq, Default)]
pub struct Tick {
    pub pool: Pubkey,
    pub index: i32,
    /// `true` when `liquidity_change` is added while crossing upwards.
    pub sign: bool,
    pub liquidity_change: u128,
    pub liquidity_gross: u128,
    pub sqrt_price: u128,
    pub fee_growth_outside_x: u128,
    pub fee_growth_outside_y: u128,
    pub seconds_per_liquidity_outside: u128,
    pub bump: u8,
}

impl Tick {
    pub const LEN: usize = 142;

    #[inline(always)]
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        decode_fixed(AccountKind::Tick, &TICK_DISCRIMINATOR, Self::LEN, data)
    }

    pub fn to_bytes(&self) -> std::io::Result<Vec<u8>> {
        encode_fixed(&TICK_DISCRIMINATOR, self)
    }

    pub fn liquidity_net(&self) -> i128 {
        let change = i128::try_from(self.liquidity_change).unwrap_or(i128::MAX);
        if self.sign {
            change
        } else {
            -change
        }
    }
}

impl AccountDecode for Tick {
    const KIND: AccountKind = AccountKind::Tick;

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        Tick::from_bytes(data)
    }
}
