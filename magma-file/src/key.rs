use crate::Result;
use magma_cipher::{Error as CipherError, KEY_SIZE};

/// Parse a 256-bit key written as 64 hexadecimal characters.
///
/// Surrounding whitespace is ignored. Both letter cases are accepted.
pub fn parse_key_hex(text: &str) -> Result<[u8; KEY_SIZE]> {
    let bytes = hex::decode(text.trim())?;
    if bytes.len() != KEY_SIZE {
        return Err(CipherError::InvalidKeyLength(bytes.len()).into());
    }
    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    Ok(key)
}
