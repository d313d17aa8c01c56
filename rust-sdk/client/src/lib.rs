//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod accounts;
mod consts;
mod core_types;
mod errors;
mod pda;
mod shared;

#[cfg(feature = "fetch")]
mod fetch;

pub use accounts::*;
pub use consts::*;
pub use errors::*;
pub use pda::*;
pub use shared::*;

#[cfg(feature = "fetch")]
pub use fetch::*;
