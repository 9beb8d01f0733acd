use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::providers::ProviderKind;

/// Top-level configuration loaded from `.kindctl.yaml` or an explicit path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
  /// Backend used when neither `--provider` nor `KIND_EXPERIMENTAL_PROVIDER` is set.
  #[serde(default)]
  pub provider: Option<ProviderKind>,

  /// Kubeconfig read by the `kubeconfig` provider.
  #[serde(default)]
  pub kubeconfig: Option<PathBuf>,
}

const DEFAULT_CONFIG_FILE: &str = ".kindctl.yaml";

/// Load configuration from an explicit path, the default `.kindctl.yaml` in the
/// current working directory, or fall back to `Config::default()`.
pub fn load(path: Option<&Path>) -> Result<Config> {
  load_from(path, std::env::current_dir().ok().as_deref())
}

fn load_from(path: Option<&Path>, base_dir: Option<&Path>) -> Result<Config> {
  if let Some(p) = path {
    return read(p);
  }

  if let Some(dir) = base_dir {
    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
      return read(&default_path);
    }
  }

  Ok(Config::default())
}

fn read(path: &Path) -> Result<Config> {
  let contents =
    std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
  let config: Config =
    serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))?;
  tracing::debug!(path = %path.display(), ?config, "loaded config");

  Ok(config)
}
