use crate::{process_stream, process_stream_parallel, Mode, Options, Result, Summary};
use magma_cipher::{Error as CipherError, KEY_SIZE};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};
use tracing::debug;

/// Transform the file at `input` into a new file at `output`.
///
/// The output file is created or truncated. On failure it may be left
/// partially written.
pub fn process_file(
    input: &Path,
    output: &Path,
    key: &[u8],
    mode: Mode,
    options: &Options,
) -> Result<Summary> {
    if key.len() != KEY_SIZE {
        return Err(CipherError::InvalidKeyLength(key.len()).into());
    }
    debug!("{} {:?} -> {:?}", mode, input, output);
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    if options.threads == Some(1) {
        process_stream(reader, writer, key, mode)
    } else {
        process_stream_parallel(reader, writer, key, mode, options)
    }
}
