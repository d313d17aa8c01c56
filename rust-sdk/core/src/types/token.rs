//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct MintFacade {
    pub address: Pubkey,
    pub decimals: u8,
    pub supply: u64,
    /// The token program that owns the mint account.
    pub token_program: Pubkey,
}
