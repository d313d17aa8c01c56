//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_program::program_error::ProgramError;
use thiserror::Error;
use tickroute_client::FetchError;
use tickroute_core::CoreError;

/// Infrastructure faults. Routing outcomes such as "no route" are values, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Account fetch failed: {0}")]
    AccountFetchFailed(#[from] FetchError),

    #[error("Every request of the {batch} batch failed")]
    FetchUnavailable { batch: &'static str },

    #[error("Invalid token pair: {0}")]
    InvalidPair(String),

    #[error("Routing math failed: {0}")]
    Core(CoreError),

    #[error("Address derivation failed: {0}")]
    AddressDerivation(#[from] ProgramError),

    #[error("Requote controller has been shut down")]
    Disposed,
}
