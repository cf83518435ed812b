use seqview_config::{BackendConfig, Config, Defaults, Error, Transport, validate};

fn base_config() -> Config {
	Config {
		transport: Transport {
			api_base: "http://localhost:8080".to_string(),
			sets_path: "/api/sets".to_string(),
			timeout_ms: 10_000,
		},
		defaults: Defaults { backend: "GOOGLE".to_string() },
		backends: vec![
			BackendConfig {
				id: "GOOGLE".to_string(),
				name: "Google".to_string(),
				default_dataset: Some("376902546192".to_string()),
			},
			BackendConfig { id: "LOCAL".to_string(), name: "Local".to_string(), default_dataset: None },
		],
	}
}

fn message(result: seqview_config::Result<()>) -> String {
	match result {
		Err(Error::Validation { message }) => message,
		other => panic!("expected a validation error, got {other:?}"),
	}
}

#[test]
fn accepts_a_well_formed_config() {
	assert!(validate(&base_config()).is_ok());
}

#[test]
fn rejects_an_empty_api_base() {
	let mut cfg = base_config();
	cfg.transport.api_base = "  ".to_string();

	assert_eq!(message(validate(&cfg)), "transport.api_base must be non-empty.");
}

#[test]
fn rejects_an_empty_sets_path() {
	let mut cfg = base_config();
	cfg.transport.sets_path = String::new();

	assert_eq!(message(validate(&cfg)), "transport.sets_path must be non-empty.");
}

#[test]
fn rejects_a_zero_timeout() {
	let mut cfg = base_config();
	cfg.transport.timeout_ms = 0;

	assert_eq!(message(validate(&cfg)), "transport.timeout_ms must be greater than zero.");
}

#[test]
fn rejects_an_empty_backend_list() {
	let mut cfg = base_config();
	cfg.backends.clear();

	assert_eq!(message(validate(&cfg)), "backends must be non-empty.");
}

#[test]
fn rejects_duplicate_backend_ids() {
	let mut cfg = base_config();
	cfg.backends.push(BackendConfig {
		id: "GOOGLE".to_string(),
		name: "Google again".to_string(),
		default_dataset: None,
	});

	assert_eq!(message(validate(&cfg)), "Backend id GOOGLE is declared more than once.");
}

#[test]
fn rejects_an_unknown_default_backend() {
	let mut cfg = base_config();
	cfg.defaults.backend = "NCBI".to_string();

	assert_eq!(message(validate(&cfg)), "defaults.backend must name a configured backend.");
}

#[test]
fn loads_and_normalizes_a_toml_file() {
	let dir = tempfile::tempdir().expect("failed to create temp dir");
	let path = dir.path().join("seqview.toml");
	std::fs::write(
		&path,
		r#"
[transport]
api_base = "http://localhost:8080"
sets_path = "/api/sets"
timeout_ms = 10000

[defaults]
backend = "GOOGLE"

[[backends]]
id = "GOOGLE"
name = "Google"
default_dataset = "  "
"#,
	)
	.expect("failed to write config");

	let cfg = seqview_config::load(&path).expect("config should load");

	assert_eq!(cfg.backend("GOOGLE").map(|backend| backend.name.as_str()), Some("Google"));
	// Whitespace-only datasets normalize away.
	assert_eq!(cfg.backend("GOOGLE").and_then(|backend| backend.default_dataset.clone()), None);
}
