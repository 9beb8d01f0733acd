use serde::{Deserialize, Serialize};

/// Outcome of looking up a single cluster name in the inventory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
  /// The requested cluster is present
  Found { name: String },
  /// The requested cluster is absent; every known cluster is listed in sorted order
  NotFound { requested: String, alternatives: Vec<String> },
  /// The provider reported no clusters at all
  Empty,
}

/// Classify `requested` against the cluster names returned by the provider
///
/// An empty inventory is reported as `Empty` before any other work is done.
/// Otherwise the inventory is sorted (byte order, case-sensitive) so that the
/// binary search holds and so that the alternatives are stable across runs.
pub fn resolve(requested: &str, mut inventory: Vec<String>) -> Resolution {
  if inventory.is_empty() {
    return Resolution::Empty;
  }

  inventory.sort_unstable();

  match inventory.binary_search_by(|name| name.as_str().cmp(requested)) {
    Ok(_) => Resolution::Found {
      name: requested.to_owned(),
    },
    Err(_) => Resolution::NotFound {
      requested: requested.to_owned(),
      alternatives: inventory,
    },
  }
}
