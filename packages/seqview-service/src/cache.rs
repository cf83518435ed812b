use std::collections::HashMap;

use seqview_domain::SetDescriptor;

/// Session-wide store of fetched set descriptors, keyed by id. Grows
/// monotonically; nothing is ever evicted or overwritten.
#[derive(Debug, Default)]
pub struct SetCache {
	order: Vec<String>,
	entries: HashMap<String, SetDescriptor>,
}
impl SetCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn has(&self, id: &str) -> bool {
		self.entries.contains_key(id)
	}

	pub fn get(&self, id: &str) -> Option<&SetDescriptor> {
		self.entries.get(id)
	}

	/// Inserts the descriptor unless its id is already present, and reports
	/// whether the insert happened. The first fetched copy always wins.
	pub fn put(&mut self, descriptor: SetDescriptor) -> bool {
		if self.entries.contains_key(&descriptor.id) {
			return false;
		}

		self.order.push(descriptor.id.clone());
		self.entries.insert(descriptor.id.clone(), descriptor);

		true
	}

	/// Descriptors in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &SetDescriptor> {
		self.order.iter().filter_map(|id| self.entries.get(id))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
