use core::fmt;

/// Errors raised by the block transform and key schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Key is not exactly 32 bytes long. Carries the rejected length.
    InvalidKeyLength(usize),
    /// Block is not exactly 8 bytes long. Carries the rejected length.
    InvalidBlockLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength(n) => {
                write!(f, "invalid key length: expected 32 bytes, got {}", n)
            }
            Error::InvalidBlockLength(n) => {
                write!(f, "invalid block length: expected 8 bytes, got {}", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
