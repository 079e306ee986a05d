use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use tsm_cli::args::{CliArgs, OutputFormat};
use tsm_cli::{driver, report, tracing_config};

fn main() -> Result<()> {
    // Initialize tracing if TSM_LOG or RUST_LOG is set (zero cost otherwise).
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let reports = driver::run(&args, &cwd)?;

    let output = match args.format {
        OutputFormat::Text => report::render_text(&reports),
        OutputFormat::Json => report::render_json(&reports)?,
    };
    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write suggestions")?;
    Ok(())
}
