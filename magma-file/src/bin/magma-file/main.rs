mod app_arguments;

use crate::app_arguments::AppArguments;
use eyre::WrapErr;
use magma_file::{parse_key_hex, process_file, Options};
use structopt::StructOpt;
use tracing::{info, Level};

/// Logging level from the number of `-v` flags
fn setup_logging(arguments: &AppArguments) -> Result<(), eyre::Error> {
    let level = match arguments.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| eyre::eyre!("Tracing init failed: {}", e))
}

fn validate_arguments(arguments: &AppArguments) -> Result<(), eyre::Error> {
    if !arguments.input.is_file() {
        eyre::bail!("Input file does not exist: {:?}", arguments.input);
    }
    if arguments.threads == Some(0) {
        eyre::bail!("Thread count must be positive");
    }
    if arguments.batch_blocks == 0 {
        eyre::bail!("Batch size must be positive");
    }
    Ok(())
}

fn main() -> Result<(), eyre::Error> {
    color_eyre::install()?;

    let arguments = AppArguments::from_args();
    setup_logging(&arguments)?;
    validate_arguments(&arguments)?;

    let key = parse_key_hex(&arguments.key).wrap_err("Key parse failed")?;
    let options = Options {
        threads: arguments.threads,
        batch_blocks: arguments.batch_blocks,
    };

    let summary = process_file(
        &arguments.input,
        &arguments.output,
        &key,
        arguments.mode,
        &options,
    )
    .wrap_err_with(|| format!("Failed to {} {:?}", arguments.mode, arguments.input))?;

    info!(
        "Done: {} blocks ({} bytes) written to {:?}",
        summary.blocks, summary.bytes_written, arguments.output
    );
    Ok(())
}
