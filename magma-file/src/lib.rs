//! File encryption with the Magma block cipher in unchained mode.
//!
//! Input is cut into 8-byte blocks, the last one zero-padded, and every block
//! is transformed on its own under the same round keys. The output has no
//! header: its length is the input length rounded up to a multiple of 8.
//!
//! # Examples
//! ```
//! use magma_file::{process_stream, Mode};
//!
//! let key: Vec<u8> = (0u8..32).collect();
//!
//! let mut ciphertext = Vec::new();
//! process_stream(&b"ABCDEFGHIJKL"[..], &mut ciphertext, &key, Mode::Encrypt).unwrap();
//! assert_eq!(ciphertext.len(), 16);
//!
//! let mut plaintext = Vec::new();
//! process_stream(&ciphertext[..], &mut plaintext, &key, Mode::Decrypt).unwrap();
//! assert_eq!(plaintext, b"ABCDEFGHIJKL\0\0\0\0");
//! ```
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use magma_cipher;

mod error;
mod file;
mod key;
mod mode;
mod parallel;
mod stream;

pub use error::{Error, Result};
pub use file::process_file;
pub use key::parse_key_hex;
pub use mode::Mode;
pub use parallel::{process_stream_parallel, Options, MAX_BATCH_BLOCKS};
pub use stream::{process_stream, Summary};
