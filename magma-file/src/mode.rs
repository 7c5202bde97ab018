use crate::Error;
use magma_cipher::{RoundKeys, BLOCK_SIZE};
use std::{fmt, str::FromStr};

/// Direction of the block transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Forward key order.
    Encrypt,
    /// Reversed key order.
    Decrypt,
}

impl Mode {
    /// Transform one block in this direction.
    #[inline]
    pub fn apply(self, keys: &RoundKeys, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        match self {
            Mode::Encrypt => keys.encrypt(block),
            Mode::Decrypt => keys.decrypt(block),
        }
    }

    /// Transform one block in place.
    pub(crate) fn apply_in_place(self, keys: &RoundKeys, chunk: &mut [u8]) {
        debug_assert_eq!(chunk.len(), BLOCK_SIZE);
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&self.apply(keys, &block));
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        })
    }
}
