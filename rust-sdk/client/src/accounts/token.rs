//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_program::program_pack::Pack;
use solana_pubkey::Pubkey;
use spl_token_2022::extension::StateWithExtensions;
use spl_token_2022::state::{Account as SplAccount, AccountState, Mint as SplMint};

use super::{AccountDecode, AccountKind};
use crate::DecodeError;

fn invalid(kind: AccountKind, err: impl ToString) -> DecodeError {
    DecodeError::InvalidData {
        kind,
        reason: err.to_string(),
    }
}

/// Base mint state. Works for both token programs; extensions are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Mint {
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
}

impl Mint {
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let state = StateWithExtensions::<SplMint>::unpack(data).map_err(|err| invalid(AccountKind::Mint, err))?;
        Ok(Self {
            supply: state.base.supply,
            decimals: state.base.decimals,
            is_initialized: state.base.is_initialized,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        let mint = SplMint {
            supply: self.supply,
            decimals: self.decimals,
            is_initialized: self.is_initialized,
            ..SplMint::default()
        };
        let mut data = vec![0u8; SplMint::LEN];
        SplMint::pack(mint, &mut data).map_err(|err| invalid(AccountKind::Mint, err))?;
        Ok(data)
    }
}

impl AccountDecode for Mint {
    const KIND: AccountKind = AccountKind::Mint;

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        Mint::from_bytes(data)
    }
}

/// A wallet's holding account for one mint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub is_initialized: bool,
}

impl TokenAccount {
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let state = StateWithExtensions::<SplAccount>::unpack(data).map_err(|err| invalid(AccountKind::TokenAccount, err))?;
        Ok(Self {
            mint: state.base.mint,
            owner: state.base.owner,
            amount: state.base.amount,
            is_initialized: state.base.state != AccountState::Uninitialized,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        let account = SplAccount {
            mint: self.mint,
            owner: self.owner,
            amount: self.amount,
            state: if self.is_initialized {
                AccountState::Initialized
            } else {
                AccountState::Uninitialized
            },
            ..SplAccount::default()
        };
        let mut data = vec![0u8; SplAccount::LEN];
        SplAccount::pack(account, &mut data).map_err(|err| invalid(AccountKind::TokenAccount, err))?;
        Ok(data)
    }
}

impl AccountDecode for TokenAccount {
    const KIND: AccountKind = AccountKind::TokenAccount;

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        TokenAccount::from_bytes(data)
    }
}
