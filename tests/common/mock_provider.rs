use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};

use kindctl::clients::ClusterProvider;

/// Mock provider returning a fixed inventory in the order given
#[derive(Default)]
pub struct MockProvider {
  pub clusters: Vec<String>,
  pub calls: AtomicUsize,
}

impl MockProvider {
  pub fn new(clusters: Vec<String>) -> Self {
    Self {
      clusters,
      calls: AtomicUsize::new(0),
    }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl ClusterProvider for MockProvider {
  async fn list(&self) -> Result<Vec<String>> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.clusters.clone())
  }
}

/// Mock that fails every list, used for error path testing
pub struct MockProviderError;

impl ClusterProvider for MockProviderError {
  async fn list(&self) -> Result<Vec<String>> {
    bail!("mock provider error")
  }
}
