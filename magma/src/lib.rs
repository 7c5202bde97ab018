//! Implementation of the Magma [block cipher][1] defined in
//! GOST R 34.12-2015, applied block by block without chaining.
//!
//! The free functions [`derive_round_keys`], [`g`], [`encrypt_block`] and
//! [`decrypt_block`] expose every stage of the cipher. [`Magma`] wraps a
//! derived schedule and implements the [`cipher`] traits.
//!
//! # Examples
//! ```
//! use magma_cipher::{derive_round_keys, decrypt_block, encrypt_block};
//! use hex_literal::hex;
//!
//! let key = hex!("
//!     000102030405060708090A0B0C0D0E0F
//!     101112131415161718191A1B1C1D1E1F
//! ");
//! let keys = derive_round_keys(&key).unwrap();
//!
//! let ciphertext = encrypt_block(b"ABCDEFGH", &keys).unwrap();
//! assert_eq!(ciphertext, hex!("62D5107D6BB07AF0"));
//! assert_eq!(&decrypt_block(&ciphertext, &keys).unwrap(), b"ABCDEFGH");
//! ```
//!
//! Through the [`cipher`] traits:
//! ```
//! use magma_cipher::Magma;
//! use magma_cipher::cipher::{
//!     generic_array::GenericArray,
//!     BlockEncrypt, BlockDecrypt, KeyInit,
//! };
//! use hex_literal::hex;
//!
//! let key = hex!("
//!     FFEEDDCCBBAA99887766554433221100
//!     F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF
//! ");
//! let plaintext = hex!("FEDCBA9876543210");
//! let ciphertext = hex!("4C831FAD5766F1C2");
//!
//! let cipher = Magma::new(GenericArray::from_slice(&key));
//!
//! let mut block = GenericArray::clone_from_slice(&plaintext);
//! cipher.encrypt_block(&mut block);
//! assert_eq!(&ciphertext, block.as_slice());
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(&plaintext, block.as_slice());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/GOST_(block_cipher)
#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use cipher;

use cipher::{
    consts::{U32, U8},
    AlgorithmName, BlockCipher, Key, KeyInit, KeySizeUser,
};
use core::fmt;

mod error;
mod round;
mod sboxes;
mod schedule;

pub use error::Error;
pub use round::g;
pub use sboxes::{sbox, SBOX};
pub use schedule::{derive_round_keys, RoundKeys};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;
/// Key size in bytes.
pub const KEY_SIZE: usize = 32;
/// Number of Feistel rounds.
pub const ROUNDS: usize = 32;

/// Encrypt one 8-byte block with a derived round-key schedule.
pub fn encrypt_block(block: &[u8], round_keys: &RoundKeys) -> Result<[u8; BLOCK_SIZE], Error> {
    Ok(round_keys.encrypt(&as_block(block)?))
}

/// Decrypt one 8-byte block with a derived round-key schedule.
pub fn decrypt_block(block: &[u8], round_keys: &RoundKeys) -> Result<[u8; BLOCK_SIZE], Error> {
    Ok(round_keys.decrypt(&as_block(block)?))
}

/// Magma block cipher over a fixed round-key schedule.
#[derive(Clone)]
pub struct Magma {
    keys: RoundKeys,
}

impl Magma {
    /// Build a cipher from an already derived schedule.
    pub fn from_round_keys(keys: RoundKeys) -> Self {
        Self { keys }
    }

    /// Schedule used by this cipher instance.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.keys
    }
}

impl KeySizeUser for Magma {
    type KeySize = U32;
}

impl KeyInit for Magma {
    fn new(key: &Key<Self>) -> Self {
        Self {
            keys: RoundKeys::expand(key),
        }
    }
}

impl BlockCipher for Magma {}

impl AlgorithmName for Magma {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma")
    }
}

impl fmt::Debug for Magma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for Magma {}

cipher::impl_simple_block_encdec!(
    Magma, U8, cipher, block,
    encrypt: {
        let v = split(block.get_in());
        let v = rounds(v, cipher.keys.iter());
        join(v, block.get_out());
    }
    decrypt: {
        let v = split(block.get_in());
        let v = rounds(v, cipher.keys.iter().rev());
        join(v, block.get_out());
    }
);

/// Run the full Feistel network over `block`, consuming `keys` in order.
pub(crate) fn feistel<'a>(
    block: &[u8; BLOCK_SIZE],
    keys: impl Iterator<Item = &'a u32>,
) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    join(rounds(split(block), keys), &mut out);
    out
}

#[inline(always)]
fn rounds<'a>(mut v: (u32, u32), keys: impl Iterator<Item = &'a u32>) -> (u32, u32) {
    for &k in keys {
        v = (v.1, v.0 ^ g(v.1, k));
    }
    v
}

#[inline(always)]
fn split(b: &[u8]) -> (u32, u32) {
    (to_u32(&b[0..4]), to_u32(&b[4..8]))
}

/// Halves are written back swapped: `R || L`.
#[inline(always)]
fn join(v: (u32, u32), out: &mut [u8]) {
    out[0..4].copy_from_slice(&v.1.to_be_bytes());
    out[4..8].copy_from_slice(&v.0.to_be_bytes());
}

fn as_block(block: &[u8]) -> Result<[u8; BLOCK_SIZE], Error> {
    if block.len() != BLOCK_SIZE {
        return Err(Error::InvalidBlockLength(block.len()));
    }
    let mut b = [0u8; BLOCK_SIZE];
    b.copy_from_slice(block);
    Ok(b)
}

pub(crate) fn to_u32(chunk: &[u8]) -> u32 {
    u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}
