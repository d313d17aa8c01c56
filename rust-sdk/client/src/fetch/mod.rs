//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod utils;

pub use utils::*;

use async_trait::async_trait;
use solana_account::Account;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;

use crate::FetchError;

/// Order-preserving batch access to ledger accounts.
#[async_trait]
pub trait AccountFetcher: Send + Sync {
    /// Returns one entry per address, `None` where the ledger has no account.
    async fn get_multiple_accounts(&self, addresses: &[Pubkey]) -> Result<Vec<Option<Account>>, FetchError>;

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, FetchError> {
        let mut accounts = self.get_multiple_accounts(std::slice::from_ref(address)).await?;
        Ok(accounts.pop().flatten())
    }
}

#[async_trait]
impl AccountFetcher for RpcClient {
    async fn get_multiple_accounts(&self, addresses: &[Pubkey]) -> Result<Vec<Option<Account>>, FetchError> {
        let response = self.get_multiple_accounts_with_config(addresses, rpc_account_info_config()).await?;
        if response.value.len() != addresses.len() {
            return Err(FetchError::LengthMismatch {
                expected: addresses.len(),
                actual: response.value.len(),
            });
        }
        Ok(response.value)
    }
}
