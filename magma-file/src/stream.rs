use crate::{Mode, Result};
use magma_cipher::{derive_round_keys, BLOCK_SIZE};
use std::io::{self, Read, Write};
use tracing::{debug, trace};

/// Counters describing a finished stream operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of 8-byte blocks written.
    pub blocks: u64,
    /// Bytes consumed from the source.
    pub bytes_read: u64,
    /// Bytes written to the sink, always `blocks * 8`.
    pub bytes_written: u64,
    /// Zero bytes appended to the final block.
    pub padding: u64,
}

impl Summary {
    pub(crate) fn record(&mut self, read: usize, blocks: usize) {
        let padding = blocks * BLOCK_SIZE - read;
        self.bytes_read += read as u64;
        self.blocks += blocks as u64;
        self.bytes_written += (blocks * BLOCK_SIZE) as u64;
        self.padding += padding as u64;
    }
}

/// Encrypt or decrypt `input` into `output` block by block.
///
/// The last block is zero-padded on the right when the input length is not a
/// multiple of 8. Padding is never removed, so decrypting such a stream
/// yields the original bytes followed by the zeros. An empty input produces
/// an empty output.
///
/// I/O failures are returned as is; whatever was written before the failure
/// stays in `output`.
pub fn process_stream<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    key: &[u8],
    mode: Mode,
) -> Result<Summary> {
    let keys = derive_round_keys(key)?;
    debug!("{} stream started", mode);

    let mut summary = Summary::default();
    let mut block = [0u8; BLOCK_SIZE];
    loop {
        let n = read_full(&mut input, &mut block)?;
        if n == 0 {
            break;
        }
        block[n..].iter_mut().for_each(|b| *b = 0);
        output.write_all(&mode.apply(&keys, &block))?;
        summary.record(n, 1);
        trace!("block {} done, {} bytes of input", summary.blocks, n);
        if n < BLOCK_SIZE {
            break;
        }
    }
    output.flush()?;

    debug!(
        "{} stream finished: {} blocks, {} padding bytes",
        mode, summary.blocks, summary.padding
    );
    Ok(summary)
}

/// Read until `buf` is full or the source is exhausted.
///
/// Returns the number of bytes read; less than `buf.len()` only at end of
/// input.
pub(crate) fn read_full<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
