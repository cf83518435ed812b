use std::{
	collections::HashMap,
	fs,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Last-used search fields, remembered across sessions. Not part of the
/// shareable URL state; only used to prefill the search UI.
pub trait PrefsStore
where
	Self: Send,
{
	fn last_backend(&self) -> Option<String>;

	fn set_last_backend(&mut self, backend: &str);

	fn last_dataset(&self, backend: &str) -> Option<String>;

	fn set_last_dataset(&mut self, backend: &str, dataset: &str);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsData {
	#[serde(default)]
	last_backend: Option<String>,
	#[serde(default)]
	last_dataset: HashMap<String, String>,
}

/// JSON-file preference store. Writes are best effort: a failed write is
/// logged and the in-memory value stays authoritative for the session.
#[derive(Debug)]
pub struct FilePrefs {
	path: PathBuf,
	data: PrefsData,
}
impl FilePrefs {
	pub fn open(path: &Path) -> Result<Self> {
		let data = if path.exists() {
			let raw = fs::read_to_string(path)
				.map_err(|err| Error::ReadPrefs { path: path.to_path_buf(), source: err })?;

			serde_json::from_str(&raw)
				.map_err(|err| Error::ParsePrefs { path: path.to_path_buf(), source: err })?
		} else {
			PrefsData::default()
		};

		Ok(Self { path: path.to_path_buf(), data })
	}

	fn save(&self) {
		let raw = match serde_json::to_string_pretty(&self.data) {
			Ok(raw) => raw,
			Err(err) => {
				tracing::warn!(error = %err, "Failed to serialize preferences.");

				return;
			},
		};

		if let Err(err) = fs::write(&self.path, raw) {
			tracing::warn!(error = %err, path = %self.path.display(), "Failed to persist preferences.");
		}
	}
}
impl PrefsStore for FilePrefs {
	fn last_backend(&self) -> Option<String> {
		self.data.last_backend.clone()
	}

	fn set_last_backend(&mut self, backend: &str) {
		self.data.last_backend = Some(backend.to_string());
		self.save();
	}

	fn last_dataset(&self, backend: &str) -> Option<String> {
		self.data.last_dataset.get(backend).cloned()
	}

	fn set_last_dataset(&mut self, backend: &str, dataset: &str) {
		self.data.last_dataset.insert(backend.to_string(), dataset.to_string());
		self.save();
	}
}

/// Ephemeral preference store for tests and hosts without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
	data: PrefsData,
}
impl MemoryPrefs {
	pub fn new() -> Self {
		Self::default()
	}
}
impl PrefsStore for MemoryPrefs {
	fn last_backend(&self) -> Option<String> {
		self.data.last_backend.clone()
	}

	fn set_last_backend(&mut self, backend: &str) {
		self.data.last_backend = Some(backend.to_string());
	}

	fn last_dataset(&self, backend: &str) -> Option<String> {
		self.data.last_dataset.get(backend).cloned()
	}

	fn set_last_dataset(&mut self, backend: &str, dataset: &str) {
		self.data.last_dataset.insert(backend.to_string(), dataset.to_string());
	}
}
