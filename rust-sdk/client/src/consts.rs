//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::{pubkey, Pubkey};

/// The concentrated-liquidity program that owns pool, tick and tickmap accounts.
pub const CLMM_PROGRAM_ID: Pubkey = pubkey!("iNvTyprs4TX8m6UeUEkeqDFjAL9zRCRWcexK9Sd4WEU");

/// The wrapped native token mint.
pub const NATIVE_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

pub const POOL_SEED: &[u8] = b"poolv1";

pub const TICK_SEED: &[u8] = b"tickv1";
