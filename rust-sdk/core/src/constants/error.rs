//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const TICK_INDEX_NOT_ALIGNED: CoreError = "Tick index is not a multiple of the tick spacing";

pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const AMOUNT_EXCEEDS_MAX_U64: CoreError = "Amount exceeds max u64";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";

pub const INVALID_AMOUNT: CoreError = "Invalid amount";

pub const TOKEN_NOT_IN_POOL: CoreError = "Token is not part of the pool";

pub const MINT_NOT_FOUND: CoreError = "Mint account not found";
