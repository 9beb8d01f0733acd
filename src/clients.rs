use std::path::PathBuf;

use anyhow::Result;

use crate::providers::{Backend, kubeconfig, runtime};

/// Trait abstracting the cluster inventory used by kindctl
pub trait ClusterProvider {
  /// Names of every cluster currently known to the backend
  fn list(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

/// Real provider reading from a container runtime or the kubeconfig
pub struct RealProvider {
  backend: Backend,
  kubeconfig: Option<PathBuf>,
}

impl RealProvider {
  pub fn new(backend: Backend, kubeconfig: Option<PathBuf>) -> Self {
    Self { backend, kubeconfig }
  }

  pub fn backend(&self) -> Backend {
    self.backend
  }
}

impl ClusterProvider for RealProvider {
  async fn list(&self) -> Result<Vec<String>> {
    match self.backend {
      Backend::Runtime(rt) => runtime::list_clusters(rt).await,
      Backend::Kubeconfig => kubeconfig::list_clusters(self.kubeconfig.as_deref()),
    }
  }
}
