//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use solana_pubkey::Pubkey;
use tickroute_client::{fetch_maybe_accounts, get_holding_account_address, AccountFetcher, MaybeAccount, TokenAccount};

use crate::RouterError;

/// Answers whether a wallet already holds an account for a mint.
#[async_trait]
pub trait AccountProbe: Send + Sync {
    async fn account_exists(&self, owner: &Pubkey, mint: &Pubkey) -> Result<bool, RouterError>;
}

/// Probes the associated holding account on the ledger.
///
/// The mint is fetched first since its owner decides which token program the holding account belongs to.
pub struct LedgerAccountProbe<F: ?Sized> {
    fetcher: Arc<F>,
}

impl<F: AccountFetcher + ?Sized> LedgerAccountProbe<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl<F: AccountFetcher + ?Sized> AccountProbe for LedgerAccountProbe<F> {
    async fn account_exists(&self, owner: &Pubkey, mint: &Pubkey) -> Result<bool, RouterError> {
        let Some(mint_account) = self.fetcher.get_account(mint).await? else {
            return Ok(false);
        };
        let address = get_holding_account_address(owner, mint, &mint_account.owner);

        let mut holdings = fetch_maybe_accounts::<TokenAccount, F>(&*self.fetcher, &[address]).await?;
        match holdings.pop() {
            Some(Ok(MaybeAccount::Exists(holding))) => Ok(holding.data.is_initialized && holding.data.mint == *mint && holding.data.owner == *owner),
            Some(Ok(MaybeAccount::NotFound(_))) | None => Ok(false),
            Some(Err(err)) => {
                debug!(target: "log", "Holding account {} is not usable: {}", address, err);
                Ok(false)
            }
        }
    }
}
