use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use ahk_cli::args::CliArgs;
use ahk_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Initialize tracing if AHKGEN_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let outcome = driver::run(&args)?;

    if args.check || outcome.written_to.is_some() {
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(outcome.script.as_bytes())
        .context("failed to write stdout")?;
    stdout.flush().context("failed to write stdout")
}
