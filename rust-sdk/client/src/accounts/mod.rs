//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod pool;
mod tick;
mod tickmap;
mod token;

pub use pool::*;
pub use tick::*;
pub use tickmap::*;
pub use token::*;

use std::fmt;

use borsh::BorshDeserialize;

use crate::DecodeError;

/// Length of the account type prefix on program-owned accounts.
pub const DISCRIMINATOR_LEN: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Pool,
    Tick,
    Tickmap,
    Mint,
    TokenAccount,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountKind::Pool => "pool",
            AccountKind::Tick => "tick",
            AccountKind::Tickmap => "tickmap",
            AccountKind::Mint => "mint",
            AccountKind::TokenAccount => "token account",
        };
        f.write_str(name)
    }
}

/// A record that can be decoded from a raw account buffer.
pub trait AccountDecode: Sized {
    const KIND: AccountKind;

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError>;
}

/// Checks the length and type prefix of a fixed-size program account, returning its body.
pub(crate) fn account_body<'a>(kind: AccountKind, discriminator: &[u8; DISCRIMINATOR_LEN], len: usize, data: &'a [u8]) -> Result<&'a [u8], DecodeError> {
    if data.len() != len {
        return Err(DecodeError::InvalidLength {
            kind,
            expected: len,
            actual: data.len(),
        });
    }
    if data[..DISCRIMINATOR_LEN] != discriminator[..] {
        return Err(DecodeError::InvalidDiscriminator { kind });
    }
    Ok(&data[DISCRIMINATOR_LEN..])
}

pub(crate) fn decode_fixed<T: BorshDeserialize>(kind: AccountKind, discriminator: &[u8; DISCRIMINATOR_LEN], len: usize, data: &[u8]) -> Result<T, DecodeError> {
    let mut body = account_body(kind, discriminator, len, data)?;
    T::deserialize(&mut body).map_err(|err| DecodeError::InvalidData {
        kind,
        reason: err.to_string(),
    })
}

pub(crate) fn encode_fixed<T: borsh::BorshSerialize>(discriminator: &[u8; DISCRIMINATOR_LEN], value: &T) -> std::io::Result<Vec<u8>> {
    let mut data = discriminator.to_vec();
    value.serialize(&mut data)?;
    Ok(data)
}
