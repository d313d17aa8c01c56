//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::HashSet;

use log::{debug, warn};
use solana_account::Account;
use solana_pubkey::Pubkey;
use tickroute_client::{decode_maybe_account, AccountDecode, AccountKind, DecodedAccount, MaybeAccount, Mint, Pool, Tick, Tickmap};
use tickroute_core::AccountSet;

/// Read-through cache for one quotation cycle.
///
/// Every requested address ends up in exactly one place: decoded in `accounts`, in `missing`
/// when the ledger has no (usable) account, or in `failed` when the request itself failed.
/// A full refresh starts from an empty cache instead of updating this one.
#[derive(Debug, Default)]
pub struct AccountCache {
    accounts: AccountSet,
    missing: HashSet<Pubkey>,
    failed: HashSet<Pubkey>,
}

impl AccountCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &AccountSet {
        &self.accounts
    }

    pub fn into_accounts(self) -> AccountSet {
        self.accounts
    }

    /// `true` once the address has been answered, whether or not the account exists.
    pub fn is_resolved(&self, address: &Pubkey) -> bool {
        self.accounts.contains(address) || self.missing.contains(address)
    }

    pub fn is_missing(&self, address: &Pubkey) -> bool {
        self.missing.contains(address)
    }

    pub fn is_failed(&self, address: &Pubkey) -> bool {
        self.failed.contains(address)
    }

    pub fn mark_failed(&mut self, addresses: impl IntoIterator<Item = Pubkey>) {
        self.failed.extend(addresses);
    }

    /// Decodes a fetched account and stores it. Malformed accounts are logged and treated as missing.
    pub fn store(&mut self, kind: AccountKind, address: Pubkey, account: Option<Account>) {
        self.failed.remove(&address);
        match kind {
            AccountKind::Pool => self.apply::<Pool>(address, account, |accounts, pool| accounts.insert_pool(pool.into())),
            AccountKind::Tickmap => self.apply::<Tickmap>(address, account, |accounts, tickmap| {
                accounts.insert_tickmap(tickmap.address, tickmap.data.into())
            }),
            AccountKind::Tick => self.apply::<Tick>(address, account, |accounts, tick| accounts.insert_tick(tick.address, tick.data.into())),
            AccountKind::Mint => self.apply::<Mint>(address, account, |accounts, mint| accounts.insert_mint(mint.into())),
            AccountKind::TokenAccount => debug!(target: "log", "Not caching holding account {}", address),
        }
    }

    fn apply<T: AccountDecode>(&mut self, address: Pubkey, account: Option<Account>, insert: impl FnOnce(&mut AccountSet, DecodedAccount<T>)) {
        match decode_maybe_account::<T>(address, account) {
            Ok(MaybeAccount::Exists(decoded)) => insert(&mut self.accounts, decoded),
            Ok(MaybeAccount::NotFound(_)) => {
                self.missing.insert(address);
            }
            Err(err) => {
                warn!(target: "log", "Ignoring account {}: {}", address, err);
                self.missing.insert(address);
            }
        }
    }
}
