use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub transport: Transport,
	pub defaults: Defaults,
	pub backends: Vec<BackendConfig>,
}
impl Config {
	pub fn backend(&self, id: &str) -> Option<&BackendConfig> {
		self.backends.iter().find(|backend| backend.id == id)
	}
}

/// Where set requests go. Cloned into each spawned transport task.
#[derive(Clone, Debug, Deserialize)]
pub struct Transport {
	pub api_base: String,
	pub sets_path: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Defaults {
	/// Backend used to prefill the search UI when no preference is stored.
	pub backend: String,
}

#[derive(Debug, Deserialize)]
pub struct BackendConfig {
	pub id: String,
	pub name: String,
	/// Dataset the search UI starts from when the user never picked one.
	#[serde(default)]
	pub default_dataset: Option<String>,
}
