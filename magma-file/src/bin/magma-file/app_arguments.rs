use magma_file::Mode;
use std::path::PathBuf;
use structopt::StructOpt;

/// Encrypt or decrypt a file with the Magma block cipher
#[derive(StructOpt, Debug)]
#[structopt(name = "magma-file")]
pub struct AppArguments {
    /// Operation: encrypt or decrypt
    #[structopt(possible_values = &["encrypt", "decrypt"], case_insensitive = true)]
    pub mode: Mode,

    /// Input file
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,

    /// Output file, created or truncated
    #[structopt(parse(from_os_str))]
    pub output: PathBuf,

    /// 256-bit key as 64 hex characters
    #[structopt(short, long, env = "MAGMA_KEY", hide_env_values = true)]
    pub key: String,

    /// Worker threads, 1 disables parallel processing
    #[structopt(short = "j", long)]
    pub threads: Option<usize>,

    /// Blocks per batch in parallel mode, at most 1048576
    #[structopt(long, default_value = "8192")]
    pub batch_blocks: usize,

    /// Verbose
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}
