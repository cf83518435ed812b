mod error;
pub mod sets;

pub use error::{Error, Result};
pub use sets::{fetch_set, normalize_set_response, parse_search_response, search_sets};

use seqview_domain::SetType;

/// Parameters for fetching one set descriptor.
#[derive(Clone, Debug)]
pub struct FetchSetRequest {
	pub backend: String,
	pub set_type: SetType,
	pub set_id: String,
}

/// Parameters for a set search.
#[derive(Clone, Debug)]
pub struct SearchSetsRequest {
	pub backend: String,
	pub dataset_id: Option<String>,
	pub set_type: SetType,
	pub name: Option<String>,
}
