use crate::{stream::read_full, Mode, Result, Summary};
use magma_cipher::{derive_round_keys, RoundKeys, BLOCK_SIZE};
use rayon::prelude::*;
use std::io::{Read, Write};
use tracing::{debug, trace};

/// Upper bound on [`Options::batch_blocks`], 8 MiB of buffer.
pub const MAX_BATCH_BLOCKS: usize = 1 << 20;

/// Tuning knobs for [`process_stream_parallel`] and [`crate::process_file`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Worker threads. `None` uses rayon's global pool, `Some(1)` makes
    /// [`crate::process_file`] run sequentially.
    pub threads: Option<usize>,
    /// Blocks read and transformed per batch, clamped to
    /// `1..=MAX_BATCH_BLOCKS`.
    pub batch_blocks: usize,
}

impl Options {
    /// Batch buffer size in bytes.
    pub(crate) fn batch_len(&self) -> usize {
        self.batch_blocks.clamp(1, MAX_BATCH_BLOCKS) * BLOCK_SIZE
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threads: None,
            // 64 KiB
            batch_blocks: 8192,
        }
    }
}

/// Same output as [`crate::process_stream`], with the blocks of each batch
/// transformed concurrently.
///
/// Batches are read, transformed and written one after another, so the
/// output order always matches the input order.
pub fn process_stream_parallel<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    key: &[u8],
    mode: Mode,
    options: &Options,
) -> Result<Summary> {
    let keys = derive_round_keys(key)?;
    let pool = match options.threads {
        Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
        None => None,
    };
    let batch_len = options.batch_len();
    debug!(
        "{} stream started, batch {} bytes, threads {:?}",
        mode, batch_len, options.threads
    );

    let mut summary = Summary::default();
    let mut buf = vec![0u8; batch_len];
    loop {
        let n = read_full(&mut input, &mut buf)?;
        if n == 0 {
            break;
        }
        let blocks = (n + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let len = blocks * BLOCK_SIZE;
        buf[n..len].iter_mut().for_each(|b| *b = 0);

        match &pool {
            Some(pool) => pool.install(|| transform(&mut buf[..len], &keys, mode)),
            None => transform(&mut buf[..len], &keys, mode),
        }
        output.write_all(&buf[..len])?;
        summary.record(n, blocks);
        trace!("batch of {} blocks done", blocks);

        if n < batch_len {
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

fn transform(data: &mut [u8], keys: &RoundKeys, mode: Mode) {
    data.par_chunks_mut(BLOCK_SIZE)
        .for_each(|chunk| mode.apply_in_place(keys, chunk));
}
