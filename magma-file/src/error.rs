use thiserror::Error;

/// Errors produced while processing a stream or file.
#[derive(Debug, Error)]
pub enum Error {
    /// Key or block rejected by the cipher.
    #[error(transparent)]
    Cipher(#[from] magma_cipher::Error),

    /// Underlying read or write failed. The output may be incomplete.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Key text is not valid hexadecimal.
    #[error("malformed hex key: {0}")]
    KeyHex(#[from] hex::FromHexError),

    /// Mode text is neither `encrypt` nor `decrypt`.
    #[error("unknown mode `{0}`, expected `encrypt` or `decrypt`")]
    UnknownMode(String),

    /// Worker pool for parallel processing could not be created.
    #[error("thread pool build failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
