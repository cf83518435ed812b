//! Transport for the sets endpoint. The wire shape differs by set kind
//! (readset responses nest reference sequences inside a file-data wrapper,
//! callset responses carry them directly); both are normalized to
//! [`SetDescriptor`] here so downstream code never sees the difference.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use seqview_config::Transport;
use seqview_domain::{ReferenceSequence, SetDescriptor, SetSummary, SetType};

use crate::{Error, FetchSetRequest, Result, SearchSetsRequest};

pub async fn fetch_set(cfg: &Transport, req: &FetchSetRequest) -> Result<SetDescriptor> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.sets_path);
	let res = client
		.get(url)
		.query(&[
			("backend", req.backend.as_str()),
			("setType", req.set_type.as_str()),
			("setId", req.set_id.as_str()),
		])
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	normalize_set_response(req, json)
}

pub async fn search_sets(cfg: &Transport, req: &SearchSetsRequest) -> Result<Vec<SetSummary>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.sets_path);
	let mut query =
		vec![("backend", req.backend.as_str()), ("setType", req.set_type.as_str())];

	if let Some(dataset_id) = &req.dataset_id {
		query.push(("datasetId", dataset_id.as_str()));
	}
	if let Some(name) = &req.name {
		query.push(("name", name.as_str()));
	}

	let res = client.get(url).query(&query).send().await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_search_response(req.set_type, json)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadsetResponse {
	name: String,
	#[serde(default)]
	file_data: Vec<FileData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileData {
	#[serde(default)]
	ref_sequences: Vec<ReferenceSequence>,
}

#[derive(Debug, Deserialize)]
struct CallsetResponse {
	name: String,
	#[serde(default)]
	contigs: Vec<ReferenceSequence>,
}

pub fn normalize_set_response(req: &FetchSetRequest, json: Value) -> Result<SetDescriptor> {
	let (name, sequences) = match req.set_type {
		SetType::Readset => {
			let body: ReadsetResponse = serde_json::from_value(json)?;
			let file = body.file_data.into_iter().next().ok_or_else(|| Error::InvalidResponse {
				message: "Readset response is missing file data.".to_string(),
			})?;

			(body.name, file.ref_sequences)
		},
		SetType::Callset => {
			let body: CallsetResponse = serde_json::from_value(json)?;

			(body.name, body.contigs)
		},
	};

	Ok(SetDescriptor {
		id: req.set_id.clone(),
		name,
		set_type: req.set_type,
		backend: req.backend.clone(),
		sequences,
	})
}

pub fn parse_search_response(set_type: SetType, json: Value) -> Result<Vec<SetSummary>> {
	match json.get(summaries_key(set_type)) {
		Some(entries) => Ok(serde_json::from_value(entries.clone())?),
		// The endpoint omits the key entirely when nothing matched.
		None => Ok(Vec::new()),
	}
}

fn summaries_key(set_type: SetType) -> &'static str {
	match set_type {
		SetType::Readset => "readsets",
		SetType::Callset => "callsets",
	}
}
