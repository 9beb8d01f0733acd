use kindctl::output::Format;

use super::mock_provider::MockProvider;

/// Converts string literals into an owned inventory
pub fn names(v: &[&str]) -> Vec<String> {
  v.iter().map(|s| s.to_string()).collect()
}

/// Provider with the given clusters, in the given order
pub fn provider(clusters: &[&str]) -> MockProvider {
  MockProvider::new(names(clusters))
}

/// Runs the lookup against `provider` and returns what was written
pub async fn render(provider: &MockProvider, name: &str, format: Format) -> String {
  let mut out = Vec::new();
  kindctl::start_cluster(provider, name, format, &mut out).await.unwrap();
  String::from_utf8(out).unwrap()
}
