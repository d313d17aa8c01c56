//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod cache;
mod candidates;
mod config;
mod error;
mod probe;
mod quote;
mod requote;
mod resolver;

#[cfg(test)]
mod tests;

pub use cache::*;
pub use candidates::*;
pub use config::*;
pub use error::*;
pub use probe::*;
pub use quote::*;
pub use requote::*;
pub use resolver::*;
