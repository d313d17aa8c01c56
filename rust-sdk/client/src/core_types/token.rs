//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use tickroute_core::MintFacade;

use crate::{DecodedAccount, Mint};

impl From<DecodedAccount<Mint>> for MintFacade {
    fn from(val: DecodedAccount<Mint>) -> Self {
        MintFacade {
            address: val.address,
            decimals: val.data.decimals,
            supply: val.data.supply,
            token_program: val.account.owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use solana_account::Account;
    use solana_pubkey::Pubkey;

    use super::*;

    #[test]
    fn test_mint_facade_takes_token_program_from_owner() {
        let token_program = spl_token_2022::ID;
        let address = Pubkey::new_unique();
        let decoded = DecodedAccount {
            address,
            account: Account {
                owner: token_program,
                ..Account::default()
            },
            data: Mint {
                supply: 10,
                decimals: 6,
                is_initialized: true,
            },
        };
        let facade = MintFacade::from(decoded);
        assert_eq!(facade.address, address);
        assert_eq!(facade.decimals, 6);
        assert_eq!(facade.token_program, token_program);
    }
}
