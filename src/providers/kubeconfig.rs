use std::{collections::BTreeSet, path::Path};

use anyhow::{Context, Result};
use kube::config::Kubeconfig;
use tracing::debug;

/// kind names the kubeconfig context of every cluster it creates `kind-<cluster>`
pub const CONTEXT_PREFIX: &str = "kind-";

/// Returns the names of the kind clusters registered in the kubeconfig
///
/// Without an explicit path this follows the usual `KUBECONFIG` / `~/.kube/config` resolution
pub fn list_clusters(path: Option<&Path>) -> Result<Vec<String>> {
  let kubeconfig = match path {
    Some(path) => Kubeconfig::read_from(path)
      .with_context(|| format!("Failed to read kubeconfig: {}", path.display()))?,
    None => Kubeconfig::read().context("Failed to read kubeconfig")?,
  };
  debug!(contexts = kubeconfig.contexts.len(), "loaded kubeconfig");

  Ok(cluster_names(&kubeconfig))
}

pub(crate) fn cluster_names(kubeconfig: &Kubeconfig) -> Vec<String> {
  kubeconfig
    .contexts
    .iter()
    .filter_map(|ctx| ctx.name.strip_prefix(CONTEXT_PREFIX))
    .filter(|name| !name.is_empty())
    .map(str::to_owned)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}
