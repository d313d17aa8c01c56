//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_account::Account;
use solana_pubkey::Pubkey;

use crate::{AccountDecode, DecodeError};

#[derive(Debug, Clone)]
pub struct DecodedAccount<T> {
    pub address: Pubkey,
    pub account: Account,
    pub data: T,
}

/// A fetched account, or the address that the ledger reported as not found.
#[derive(Debug, Clone)]
pub enum MaybeAccount<T> {
    Exists(DecodedAccount<T>),
    NotFound(Pubkey),
}

pub fn decode_account<T: AccountDecode>(address: Pubkey, account: Account) -> Result<DecodedAccount<T>, DecodeError> {
    let data = T::from_bytes(&account.data)?;
    Ok(DecodedAccount { address, account, data })
}

/// Decodes a fetch result. A missing account is not an error.
pub fn decode_maybe_account<T: AccountDecode>(address: Pubkey, account: Option<Account>) -> Result<MaybeAccount<T>, DecodeError> {
    match account {
        Some(account) => Ok(MaybeAccount::Exists(decode_account(address, account)?)),
        None => Ok(MaybeAccount::NotFound(address)),
    }
}
