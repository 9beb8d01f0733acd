pub mod clients;
pub mod config;
pub mod output;
pub mod providers;
pub mod resolve;

use std::{io::Write, path::PathBuf};

use anstyle::AnsiColor;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, builder::styling::Styles};
use clap_verbosity_flag::Verbosity;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
  clients::{ClusterProvider, RealProvider},
  providers::ProviderKind,
  resolve::Resolution,
};

const STYLES: Styles = Styles::styled()
  .header(AnsiColor::Green.on_default().bold())
  .usage(AnsiColor::Green.on_default().bold())
  .literal(AnsiColor::Cyan.on_default().bold())
  .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(author, about, version)]
#[command(propagate_version = true)]
#[command(styles = STYLES)]
pub struct Cli {
  #[command(subcommand)]
  pub commands: Commands,

  #[clap(flatten)]
  pub verbose: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  #[command(arg_required_else_help = true)]
  Start(Start),
}

/// Start one of the local kind clusters
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Start {
  #[command(subcommand)]
  pub command: StartCommands,
}

#[derive(Debug, Subcommand, Serialize, Deserialize)]
pub enum StartCommands {
  /// Starts one of the local Kubernetes clusters in --name
  #[command(override_usage = "kindctl start cluster --name [cluster context name]")]
  Cluster(Cluster),
}

/// Look up a kind cluster by name
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Cluster {
  /// Cluster context name
  #[arg(long, default_value = "")]
  pub name: String,

  /// Backend used to enumerate clusters (auto-detected when unset)
  #[arg(long, value_enum)]
  pub provider: Option<ProviderKind>,

  /// Kubeconfig read by the kubeconfig provider
  #[arg(long)]
  pub kubeconfig: Option<PathBuf>,

  #[arg(short, long, value_enum, default_value_t)]
  pub format: output::Format,

  /// Path to config file (default: .kindctl.yaml in current directory)
  #[arg(long)]
  pub config: Option<PathBuf>,
}

pub async fn start(args: &Start) -> Result<()> {
  match &args.command {
    StartCommands::Cluster(cluster) => {
      let cfg = config::load(cluster.config.as_deref())?;
      let backend = providers::select(cluster.provider, cfg.provider).await;
      let kubeconfig = cluster.kubeconfig.clone().or(cfg.kubeconfig);
      let provider = RealProvider::new(backend, kubeconfig);
      info!(backend = ?provider.backend(), "looking up cluster '{}'", cluster.name);

      let mut stdout = std::io::stdout();
      start_cluster(&provider, &cluster.name, cluster.format, &mut stdout).await?;
    }
  }

  Ok(())
}

/// Resolve `name` against the provider's inventory and report the outcome to `out`
///
/// A missing cluster is not an error. Only a failure to list clusters is returned,
/// unchanged, and in that case nothing is written.
pub async fn start_cluster<P, W>(provider: &P, name: &str, format: output::Format, out: &mut W) -> Result<Resolution>
where
  P: ClusterProvider,
  W: Write,
{
  let clusters = provider.list().await?;
  debug!(count = clusters.len(), "listed clusters");

  let resolution = resolve::resolve(name, clusters);
  output::output(&resolution, format, out)?;

  Ok(resolution)
}
