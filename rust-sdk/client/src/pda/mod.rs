//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod pool;
mod tick;
mod token_account;

pub use pool::*;
pub use tick::*;
pub use token_account::*;
