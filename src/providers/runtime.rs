use std::{collections::BTreeSet, fmt, process::Stdio};

use anyhow::{Context, Result, bail};
use tokio::process::Command;
use tracing::{debug, warn};

/// Label kind applies to every node container it creates; the value is the cluster name
pub const CLUSTER_LABEL: &str = "io.x-k8s.kind.cluster";

/// Environment variable kind reads to override runtime detection
pub const PROVIDER_ENV: &str = "KIND_EXPERIMENTAL_PROVIDER";

/// Container runtime hosting the kind node containers
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Runtime {
  Docker,
  Podman,
  Nerdctl,
  /// nerdctl shipped inside a Lima VM
  NerdctlLima,
  Finch,
}

impl fmt::Display for Runtime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.binary())
  }
}

impl Runtime {
  /// Executable invoked for this runtime
  pub fn binary(&self) -> &'static str {
    match self {
      Runtime::Docker => "docker",
      Runtime::Podman => "podman",
      Runtime::Nerdctl => "nerdctl",
      Runtime::NerdctlLima => "nerdctl.lima",
      Runtime::Finch => "finch",
    }
  }

  /// Arguments that list the distinct cluster label values across all containers
  ///
  /// Docker exposes a `.Label` template helper; the others only support indexing `.Labels`
  pub fn list_args(&self) -> Vec<String> {
    let format = match self {
      Runtime::Docker => format!("{{{{.Label \"{CLUSTER_LABEL}\"}}}}"),
      _ => format!("{{{{index .Labels \"{CLUSTER_LABEL}\"}}}}"),
    };

    vec![
      "ps".to_string(),
      "-a".to_string(),
      "--filter".to_string(),
      format!("label={CLUSTER_LABEL}"),
      "--format".to_string(),
      format,
    ]
  }

  /// Prefix of `<binary> -v` output when the runtime is installed and responding
  fn version_prefix(&self) -> &'static str {
    match self {
      Runtime::Docker => "Docker version",
      Runtime::Podman => "podman version",
      Runtime::Nerdctl | Runtime::NerdctlLima | Runtime::Finch => "nerdctl version",
    }
  }

  /// Parse a `KIND_EXPERIMENTAL_PROVIDER` value
  pub fn from_env_value(value: &str) -> Option<Self> {
    match value {
      "docker" => Some(Runtime::Docker),
      "podman" => Some(Runtime::Podman),
      "nerdctl" => Some(Runtime::Nerdctl),
      "nerdctl.lima" => Some(Runtime::NerdctlLima),
      "finch" => Some(Runtime::Finch),
      _ => None,
    }
  }
}

/// Runtime requested through `KIND_EXPERIMENTAL_PROVIDER`, if any
pub fn from_env() -> Option<Runtime> {
  parse_env(std::env::var(PROVIDER_ENV).ok().as_deref())
}

/// Unset, empty and unrecognised values all leave the choice to detection
pub(crate) fn parse_env(value: Option<&str>) -> Option<Runtime> {
  let value = value.filter(|v| !v.is_empty())?;

  match Runtime::from_env_value(value) {
    Some(runtime) => {
      debug!(%runtime, "using runtime from {PROVIDER_ENV}");
      Some(runtime)
    }
    None => {
      warn!("ignoring unknown {PROVIDER_ENV} value '{value}'");
      None
    }
  }
}

/// Pick the first installed runtime, preferring docker, then nerdctl, then podman
///
/// Falls back to docker when nothing responds so that the eventual error names a real binary
pub async fn detect() -> Runtime {
  for runtime in [Runtime::Docker, Runtime::Nerdctl, Runtime::Podman] {
    if is_available(runtime).await {
      debug!(%runtime, "detected container runtime");
      return runtime;
    }
  }

  debug!("no container runtime detected, defaulting to docker");
  Runtime::Docker
}

async fn is_available(runtime: Runtime) -> bool {
  let output = Command::new(runtime.binary())
    .arg("-v")
    .stdin(Stdio::null())
    .output()
    .await;

  match output {
    Ok(output) if output.status.success() => {
      String::from_utf8_lossy(&output.stdout).starts_with(runtime.version_prefix())
    }
    _ => false,
  }
}

/// Returns the names of all kind clusters with at least one container in the runtime
pub async fn list_clusters(runtime: Runtime) -> Result<Vec<String>> {
  list_with(runtime.binary(), &runtime.list_args()).await
}

/// Run `binary args..` and read one cluster name per stdout line
///
/// A spawn failure or non-zero exit is an error carrying the command's stderr
pub(crate) async fn list_with(binary: &str, args: &[String]) -> Result<Vec<String>> {
  debug!(binary, ?args, "listing kind node containers");

  let output = Command::new(binary)
    .args(args)
    .stdin(Stdio::null())
    .output()
    .await
    .with_context(|| format!("Failed to execute '{binary}'. Is it installed and on the PATH?"))?;

  if !output.status.success() {
    bail!(
      "Failed to list clusters with '{binary}': {}",
      String::from_utf8_lossy(&output.stderr).trim()
    );
  }

  Ok(parse_cluster_names(&String::from_utf8_lossy(&output.stdout)))
}

/// One line per container; a multi-node cluster shows up once per node
pub(crate) fn parse_cluster_names(stdout: &str) -> Vec<String> {
  stdout
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_owned)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}
