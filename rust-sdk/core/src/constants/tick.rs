//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Offset added to `tick_index / tick_spacing` to get a tickmap bit position.
pub const TICK_LIMIT: i32 = 44_364;

/// The number of bit positions a tickmap tracks.
pub const TICKMAP_BITS: usize = 2 * TICK_LIMIT as usize - 1;

/// The size of a tickmap bitmap in bytes.
pub const TICKMAP_SIZE: usize = TICKMAP_BITS.div_ceil(8);

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -221_818;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 221_818;
