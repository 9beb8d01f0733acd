//! `kindctl` is a CLI to look up local kind clusters before starting them

use anyhow::Result;
use clap::Parser;
use kindctl::{Cli, Commands};
use tracing_log::AsTrace;

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(cli.verbose.log_level_filter().as_trace())
    .init();

  match &cli.commands {
    Commands::Start(args) => kindctl::start(args).await?,
  }

  Ok(())
}
