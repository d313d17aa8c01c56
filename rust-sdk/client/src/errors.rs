//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use thiserror::Error;

use crate::AccountKind;

/// A raw account buffer that does not match the layout of the expected record kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed {kind} account: expected {expected} bytes, got {actual}")]
    InvalidLength { kind: AccountKind, expected: usize, actual: usize },

    #[error("Malformed {kind} account: discriminator mismatch")]
    InvalidDiscriminator { kind: AccountKind },

    #[error("Malformed {kind} account: {reason}")]
    InvalidData { kind: AccountKind, reason: String },
}

impl DecodeError {
    pub fn kind(&self) -> AccountKind {
        match self {
            DecodeError::InvalidLength { kind, .. } | DecodeError::InvalidDiscriminator { kind } | DecodeError::InvalidData { kind, .. } => *kind,
        }
    }
}

#[cfg(feature = "fetch")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("RPC returned {actual} accounts for {expected} addresses")]
    LengthMismatch { expected: usize, actual: usize },
}

#[cfg(feature = "fetch")]
impl From<solana_client::client_error::ClientError> for FetchError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        FetchError::Rpc(err.to_string())
    }
}
