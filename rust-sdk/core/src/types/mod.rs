//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod accounts;
mod pool;
mod quote;
mod route;
mod swap;
mod tick;
mod token;

pub use accounts::*;
pub use pool::*;
pub use quote::*;
pub use route::*;
pub use swap::*;
pub use tick::*;
pub use token::*;
