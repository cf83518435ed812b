//! Step function of the sequential set loader. The orchestrator calls
//! [`next_step`] once per turn: either it names the single fetch to issue
//! next, or the selection's dependency closure is satisfied and the
//! consolidated set list is ready. Re-running after every fetch completion
//! gives the fixed-point behavior: ids added to the selection while a fetch
//! was outstanding are picked up under the same discipline.

use seqview_domain::{ActiveSelection, SetDescriptor, SetType};

use crate::cache::SetCache;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStep {
	/// Issue exactly this fetch and wait for it; never two outstanding.
	Fetch { set_type: SetType, set_id: String },
	/// Every requested id is cached; deliver the filtered list.
	Ready { sets: Vec<SetDescriptor> },
}

pub fn next_step(cache: &SetCache, selection: &ActiveSelection) -> LoadStep {
	// Readsets first, in selection order; callsets only once every readset
	// is cached.
	for id in &selection.readset_ids {
		if !cache.has(id) {
			return LoadStep::Fetch { set_type: SetType::Readset, set_id: id.clone() };
		}
	}
	for id in &selection.callset_ids {
		if !cache.has(id) {
			return LoadStep::Fetch { set_type: SetType::Callset, set_id: id.clone() };
		}
	}

	LoadStep::Ready { sets: selected_sets(cache, selection) }
}

/// The cache-content filter: every cached descriptor whose id and kind
/// match the selection, in cache insertion order, regardless of which pass
/// fetched it.
pub fn selected_sets(cache: &SetCache, selection: &ActiveSelection) -> Vec<SetDescriptor> {
	cache.iter().filter(|descriptor| selection.wants(descriptor)).cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn selection(readsets: &[&str], callsets: &[&str]) -> ActiveSelection {
		ActiveSelection {
			backend: "GOOGLE".to_string(),
			readset_ids: readsets.iter().map(|id| id.to_string()).collect(),
			callset_ids: callsets.iter().map(|id| id.to_string()).collect(),
			location: None,
		}
	}

	fn descriptor(id: &str, set_type: SetType) -> SetDescriptor {
		SetDescriptor {
			id: id.to_string(),
			name: format!("set {id}"),
			set_type,
			backend: "GOOGLE".to_string(),
			sequences: Vec::new(),
		}
	}

	fn fetch(set_type: SetType, set_id: &str) -> LoadStep {
		LoadStep::Fetch { set_type, set_id: set_id.to_string() }
	}

	#[test]
	fn only_the_first_missing_id_is_fetched() {
		let cache = SetCache::new();
		let selection = selection(&["a"], &["b", "c"]);

		assert_eq!(next_step(&cache, &selection), fetch(SetType::Readset, "a"));
	}

	#[test]
	fn each_completion_advances_to_the_next_missing_id() {
		let mut cache = SetCache::new();
		let selection = selection(&["a"], &["b", "c"]);

		cache.put(descriptor("a", SetType::Readset));
		assert_eq!(next_step(&cache, &selection), fetch(SetType::Callset, "b"));

		cache.put(descriptor("b", SetType::Callset));
		assert_eq!(next_step(&cache, &selection), fetch(SetType::Callset, "c"));

		cache.put(descriptor("c", SetType::Callset));
		assert!(matches!(next_step(&cache, &selection), LoadStep::Ready { .. }));
	}

	#[test]
	fn cached_ids_are_never_refetched() {
		let mut cache = SetCache::new();
		cache.put(descriptor("a", SetType::Readset));

		let selection = selection(&["a", "b"], &[]);

		assert_eq!(next_step(&cache, &selection), fetch(SetType::Readset, "b"));
	}

	#[test]
	fn readsets_load_before_callsets() {
		let cache = SetCache::new();
		let selection = selection(&["r"], &["c"]);

		assert_eq!(next_step(&cache, &selection), fetch(SetType::Readset, "r"));
	}

	#[test]
	fn the_filter_matches_cache_content_not_requests() {
		let mut cache = SetCache::new();

		// Cached by an earlier, unrelated pass; still part of this result
		// because id and kind match the selection.
		cache.put(descriptor("c1", SetType::Callset));
		cache.put(descriptor("r1", SetType::Readset));
		// Same id as a requested callset but the wrong kind; excluded.
		cache.put(descriptor("c2", SetType::Readset));

		let selection = selection(&["r1"], &["c1", "c2"]);

		match next_step(&cache, &selection) {
			LoadStep::Ready { sets } => {
				let ids = sets.iter().map(|set| set.id.as_str()).collect::<Vec<_>>();

				// Insertion order, not request order.
				assert_eq!(ids, vec!["c1", "r1"]);
			},
			step => panic!("expected a ready step, got {step:?}"),
		}
	}

	#[test]
	fn an_empty_selection_is_ready_with_no_sets() {
		let cache = SetCache::new();
		let selection = selection(&[], &[]);

		assert_eq!(next_step(&cache, &selection), LoadStep::Ready { sets: Vec::new() });
	}
}
