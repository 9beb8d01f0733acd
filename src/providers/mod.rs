pub mod kubeconfig;
pub mod runtime;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use runtime::Runtime;

/// Backend that enumerates kind clusters
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
  /// Docker node containers
  Docker,
  /// Podman node containers
  Podman,
  /// nerdctl (containerd) node containers
  Nerdctl,
  /// nerdctl inside a Lima VM
  #[value(name = "nerdctl.lima")]
  #[serde(rename = "nerdctl.lima")]
  NerdctlLima,
  /// Finch node containers
  Finch,
  /// `kind-*` contexts in the kubeconfig
  Kubeconfig,
}

/// Resolved backend the inventory is read from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
  Runtime(Runtime),
  Kubeconfig,
}

impl From<ProviderKind> for Backend {
  fn from(kind: ProviderKind) -> Self {
    match kind {
      ProviderKind::Docker => Backend::Runtime(Runtime::Docker),
      ProviderKind::Podman => Backend::Runtime(Runtime::Podman),
      ProviderKind::Nerdctl => Backend::Runtime(Runtime::Nerdctl),
      ProviderKind::NerdctlLima => Backend::Runtime(Runtime::NerdctlLima),
      ProviderKind::Finch => Backend::Runtime(Runtime::Finch),
      ProviderKind::Kubeconfig => Backend::Kubeconfig,
    }
  }
}

/// Explicit backend choice in precedence order: flag, `KIND_EXPERIMENTAL_PROVIDER`, config file
///
/// `None` means the runtime should be auto-detected
pub(crate) fn explicit_backend(
  flag: Option<ProviderKind>,
  env: Option<Runtime>,
  config: Option<ProviderKind>,
) -> Option<Backend> {
  flag
    .map(Backend::from)
    .or(env.map(Backend::Runtime))
    .or(config.map(Backend::from))
}

/// Determine which backend to read the cluster inventory from
pub async fn select(flag: Option<ProviderKind>, config: Option<ProviderKind>) -> Backend {
  match explicit_backend(flag, runtime::from_env(), config) {
    Some(backend) => {
      debug!(?backend, "using configured provider");
      backend
    }
    None => Backend::Runtime(runtime::detect().await),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flag_wins_over_env_and_config() {
    let backend = explicit_backend(
      Some(ProviderKind::Kubeconfig),
      Some(Runtime::Podman),
      Some(ProviderKind::Nerdctl),
    );
    assert_eq!(backend, Some(Backend::Kubeconfig));
  }

  #[test]
  fn env_wins_over_config() {
    let backend = explicit_backend(None, Some(Runtime::Podman), Some(ProviderKind::Nerdctl));
    assert_eq!(backend, Some(Backend::Runtime(Runtime::Podman)));
  }

  #[test]
  fn config_used_when_nothing_else_set() {
    let backend = explicit_backend(None, None, Some(ProviderKind::Finch));
    assert_eq!(backend, Some(Backend::Runtime(Runtime::Finch)));
  }

  #[test]
  fn nothing_set_means_detect() {
    assert_eq!(explicit_backend(None, None, None), None);
  }

  #[test]
  fn empty_or_unknown_env_value_is_skipped() {
    for value in ["", "bogus"] {
      let env = runtime::parse_env(Some(value));
      assert_eq!(explicit_backend(None, env, None), None, "value: {value:?}");
      assert_eq!(
        explicit_backend(None, env, Some(ProviderKind::Podman)),
        Some(Backend::Runtime(Runtime::Podman)),
        "value: {value:?}"
      );
    }
  }

  #[test]
  fn nerdctl_lima_provider_names() {
    assert_eq!(
      ProviderKind::from_str("nerdctl.lima", false),
      Ok(ProviderKind::NerdctlLima)
    );
    let kind: ProviderKind = serde_yaml::from_str("nerdctl.lima").unwrap();
    assert_eq!(Backend::from(kind), Backend::Runtime(Runtime::NerdctlLima));
  }
}
