//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_account_decoder::UiAccountEncoding;
use solana_client::rpc_config::RpcAccountInfoConfig;
use solana_pubkey::Pubkey;

use crate::{decode_maybe_account, AccountDecode, AccountFetcher, DecodeError, FetchError, MaybeAccount};

pub fn rpc_account_info_config() -> RpcAccountInfoConfig {
    RpcAccountInfoConfig {
        encoding: Some(UiAccountEncoding::Base64),
        data_slice: None,
        commitment: None,
        min_context_slot: None,
    }
}

/// Fetches and decodes accounts of one kind. Each entry decodes independently.
pub async fn fetch_maybe_accounts<T, F>(fetcher: &F, addresses: &[Pubkey]) -> Result<Vec<Result<MaybeAccount<T>, DecodeError>>, FetchError>
where
    T: AccountDecode,
    F: AccountFetcher + ?Sized,
{
    let accounts = fetcher.get_multiple_accounts(addresses).await?;
    Ok(addresses
        .iter()
        .zip(accounts)
        .map(|(address, account)| decode_maybe_account(*address, account))
        .collect())
}
