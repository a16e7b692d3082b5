//! BookBuilder CLI: merge numbered markdown chapters into one book.
//!
//! Scans a chapter directory, orders files by their `<chapter>.<section>`
//! prefix, and writes a single document with a generated table of contents.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
