//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use tickroute_core::TICKMAP_SIZE;

use super::{account_body, AccountDecode, AccountKind, DISCRIMINATOR_LEN};
use crate::DecodeError;

pub const TICKMAP_DISCRIMINATOR: [u8; 8] = [236, 6, 101, 196, 85, 189, 0, 227];

#[derive(Clone, PartialEq, Eq)]
pub struct Tickmap {
    pub bitmap: Box<[u8; TICKMAP_SIZE]>,
}

impl Tickmap {
    pub const LEN: usize = DISCRIMINATOR_LEN + TICKMAP_SIZE;

    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let body = account_body(AccountKind::Tickmap, &TICKMAP_DISCRIMINATOR, Self::LEN, data)?;
        let mut bitmap = Box::new([0u8; TICKMAP_SIZE]);
        bitmap.copy_from_slice(body);
        Ok(Self { bitmap })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::LEN);
        data.extend_from_slice(&TICKMAP_DISCRIMINATOR);
        data.extend_from_slice(self.bitmap.as_ref());
        data
    }
}

impl Default for Tickmap {
    fn default() -> Self {
        Self {
            bitmap: Box::new([0; TICKMAP_SIZE]),
        }
    }
}

impl std::fmt::Debug for Tickmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tickmap").finish_non_exhaustive()
    }
}

impl AccountDecode for Tickmap {
    const KIND: AccountKind = AccountKind::Tickmap;

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        Tickmap::from_bytes(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tickmap() {
        let mut tickmap = Tickmap::default();
        tickmap.bitmap[0] = 0b0000_0101;
        tickmap.bitmap[TICKMAP_SIZE - 1] = 0x40;
        let data = tickmap.to_bytes();
        assert_eq!(data.len(), 11_099);
        assert_eq!(Tickmap::from_bytes(&data).unwrap(), tickmap);
    }

    #[test]
    fn test_rejects_truncated_tickmap() {
        let data = Tickmap::default().to_bytes();
        assert_eq!(
            Tickmap::from_bytes(&data[..100]).unwrap_err(),
            DecodeError::InvalidLength {
                kind: AccountKind::Tickmap,
                expected: Tickmap::LEN,
                actual: 100,
            }
        );
    }
}
