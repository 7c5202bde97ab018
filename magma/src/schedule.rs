use crate::{Error, KEY_SIZE, ROUNDS};
use core::{fmt, ops::Index, slice};

/// Ordered round keys for the 32 Feistel rounds.
///
/// Derived once per cipher key and shared read-only by every block
/// transformed under that key.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys([u32; ROUNDS]);

/// Derive the round-key schedule from a 256-bit key.
///
/// The key is split into eight big-endian words `K0..K7` which are used as
/// `K0..K7` three times, followed by `K7..K0`.
pub fn derive_round_keys(key: &[u8]) -> Result<RoundKeys, Error> {
    if key.len() != KEY_SIZE {
        return Err(Error::InvalidKeyLength(key.len()));
    }
    Ok(RoundKeys::expand(key))
}

impl RoundKeys {
    /// Expects exactly `KEY_SIZE` bytes.
    pub(crate) fn expand(key: &[u8]) -> Self {
        debug_assert_eq!(key.len(), KEY_SIZE);
        let mut words = [0u32; 8];
        key.chunks_exact(4)
            .zip(words.iter_mut())
            .for_each(|(chunk, w)| *w = crate::to_u32(chunk));

        let mut keys = [0u32; ROUNDS];
        for (i, k) in keys.iter_mut().enumerate() {
            *k = if i < 24 { words[i % 8] } else { words[7 - i % 8] };
        }
        Self(keys)
    }

    /// Round keys in the order used for encryption.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Iterate over round keys in encryption order.
    pub fn iter(&self) -> slice::Iter<'_, u32> {
        self.0.iter()
    }

    /// Encrypt a single block.
    #[inline]
    pub fn encrypt(&self, block: &[u8; crate::BLOCK_SIZE]) -> [u8; crate::BLOCK_SIZE] {
        crate::feistel(block, self.0.iter())
    }

    /// Decrypt a single block.
    #[inline]
    pub fn decrypt(&self, block: &[u8; crate::BLOCK_SIZE]) -> [u8; crate::BLOCK_SIZE] {
        crate::feistel(block, self.0.iter().rev())
    }
}

impl Index<usize> for RoundKeys {
    type Output = u32;

    fn index(&self, i: usize) -> &u32 {
        &self.0[i]
    }
}

impl AsRef<[u32]> for RoundKeys {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for RoundKeys {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.0);
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for RoundKeys {}
