use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const BACKEND_KEY: &str = "backend";
pub const READSET_KEY: &str = "readsetId";
pub const CALLSET_KEY: &str = "callsetId";
pub const LOCATION_KEY: &str = "location";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetType {
	Readset,
	Callset,
}
impl SetType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Readset => "READSET",
			Self::Callset => "CALLSET",
		}
	}

	pub fn fragment_key(self) -> &'static str {
		match self {
			Self::Readset => READSET_KEY,
			Self::Callset => CALLSET_KEY,
		}
	}
}

/// The structured form of the URL fragment. The fragment is the single
/// source of truth for what the browser should display; every user action
/// mutates this state and re-enters through the fragment-change
/// notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
	pub backend: Option<String>,
	pub readset_ids: Vec<String>,
	pub callset_ids: Vec<String>,
	pub location: Option<String>,
	/// Unrecognized scalar keys, carried through encode/decode untouched.
	pub extra: BTreeMap<String, String>,
}
impl SelectionState {
	/// Returns the selection the loader should resolve, or `None` when the
	/// state is incomplete and the search UI should be shown instead.
	///
	/// Only the first readset id ever drives the view; the rest of the
	/// sequence is kept in the fragment but ignored here.
	pub fn active(&self) -> Option<ActiveSelection> {
		let backend = self.backend.clone()?;
		let first = self.readset_ids.first()?;

		Some(ActiveSelection {
			backend,
			readset_ids: vec![first.clone()],
			callset_ids: self.callset_ids.clone(),
			location: self.location.clone(),
		})
	}

	pub fn remove_set(&mut self, set_type: SetType, id: &str) {
		self.ids_mut(set_type).retain(|existing| existing != id);
	}

	pub fn select_set(&mut self, backend: &str, set_type: SetType, id: &str) {
		match set_type {
			// A single readset at a time; callsets stack.
			SetType::Readset => self.readset_ids = vec![id.to_string()],
			SetType::Callset => self.callset_ids.push(id.to_string()),
		}

		self.backend = Some(backend.to_string());
	}

	pub fn set_location(&mut self, location: &str) {
		self.location = Some(location.to_string());
	}

	fn ids_mut(&mut self, set_type: SetType) -> &mut Vec<String> {
		match set_type {
			SetType::Readset => &mut self.readset_ids,
			SetType::Callset => &mut self.callset_ids,
		}
	}
}

/// A complete, viewable selection handed to the sequential loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSelection {
	pub backend: String,
	pub readset_ids: Vec<String>,
	pub callset_ids: Vec<String>,
	pub location: Option<String>,
}
impl ActiveSelection {
	/// Whether a cached descriptor belongs in this selection. Matching is by
	/// id and kind against the cache contents, not by per-request lookup.
	pub fn wants(&self, descriptor: &SetDescriptor) -> bool {
		match descriptor.set_type {
			SetType::Readset => self.readset_ids.iter().any(|id| *id == descriptor.id),
			SetType::Callset => self.callset_ids.iter().any(|id| *id == descriptor.id),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSequence {
	pub name: String,
	#[serde(default)]
	pub length: Option<u64>,
}

/// The normalized record for a fetched readset or callset. Created once per
/// id on first successful fetch and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetDescriptor {
	pub id: String,
	pub name: String,
	pub set_type: SetType,
	pub backend: String,
	pub sequences: Vec<ReferenceSequence>,
}

/// One row of a search response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SetSummary {
	pub id: String,
	pub name: String,
}
