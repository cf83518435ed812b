mod error;
mod types;

pub use error::{Error, Result};
pub use types::{BackendConfig, Config, Defaults, Transport};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.transport.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "transport.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.transport.sets_path.trim().is_empty() {
		return Err(Error::Validation {
			message: "transport.sets_path must be non-empty.".to_string(),
		});
	}
	if cfg.transport.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "transport.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.backends.is_empty() {
		return Err(Error::Validation { message: "backends must be non-empty.".to_string() });
	}

	for backend in &cfg.backends {
		if backend.id.trim().is_empty() {
			return Err(Error::Validation { message: "backends.id must be non-empty.".to_string() });
		}
		if cfg.backends.iter().filter(|other| other.id == backend.id).count() > 1 {
			return Err(Error::Validation {
				message: format!("Backend id {} is declared more than once.", backend.id),
			});
		}
	}

	if cfg.backend(&cfg.defaults.backend).is_none() {
		return Err(Error::Validation {
			message: "defaults.backend must name a configured backend.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for backend in &mut cfg.backends {
		if backend.default_dataset.as_deref().map(|dataset| dataset.trim().is_empty()).unwrap_or(false)
		{
			backend.default_dataset = None;
		}
	}
}
