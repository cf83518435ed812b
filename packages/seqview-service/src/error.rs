pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read preferences at {path:?}.")]
	ReadPrefs { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse preferences at {path:?}.")]
	ParsePrefs { path: std::path::PathBuf, source: serde_json::Error },
}
