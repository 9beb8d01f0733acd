use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::resolve::Resolution;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Format {
  /// JSON format used for scripting against the lookup result
  Json,
  /// Text format used for writing to stdout
  #[default]
  Text,
}

impl Resolution {
  /// Human readable rendering, one statement per line
  pub fn to_text(&self) -> String {
    match self {
      Resolution::Empty => "No kind clusters found.\n".to_string(),
      Resolution::Found { name } => format!("Cluster {name} exist\n"),
      Resolution::NotFound {
        requested,
        alternatives,
      } => {
        let mut text = format!("Cluster {requested} does not exist\nList of Available Clusters to start\n");
        for cluster in alternatives {
          text.push_str(cluster);
          text.push('\n');
        }
        text
      }
    }
  }
}

/// Write the resolution to `out` in the requested format
pub fn output<W: Write>(resolution: &Resolution, format: Format, out: &mut W) -> Result<()> {
  let rendered = match format {
    Format::Json => format!("{}\n", serde_json::to_string_pretty(resolution)?),
    Format::Text => resolution.to_text(),
  };

  out.write_all(rendered.as_bytes())?;
  out.flush()?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_empty() {
    assert_eq!(Resolution::Empty.to_text(), "No kind clusters found.\n");
  }

  #[test]
  fn text_found() {
    let resolution = Resolution::Found { name: "dev".into() };
    assert_eq!(resolution.to_text(), "Cluster dev exist\n");
  }

  #[test]
  fn text_not_found_lists_each_alternative() {
    let resolution = Resolution::NotFound {
      requested: "staging".into(),
      alternatives: vec!["dev".into(), "prod".into()],
    };
    assert_eq!(
      resolution.to_text(),
      "Cluster staging does not exist\nList of Available Clusters to start\ndev\nprod\n"
    );
  }

  #[test]
  fn json_is_parseable() {
    let resolution = Resolution::Found { name: "dev".into() };
    let mut buf = Vec::new();
    output(&resolution, Format::Json, &mut buf).unwrap();

    let parsed: Resolution = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed, resolution);
  }
}
