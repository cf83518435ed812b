//! Codec between the flat URL fragment and [`SelectionState`].
//!
//! `readsetId` and `callsetId` are the only multi-valued keys: they
//! contribute one `key=value` pair per element and accumulate on decode.
//! Every other key is a scalar, last occurrence wins. An empty sequence is
//! absent from the encoded form, so empty sequences do not round-trip.

use std::borrow::Cow;

use crate::state::{BACKEND_KEY, CALLSET_KEY, LOCATION_KEY, READSET_KEY, SelectionState};

pub fn encode(state: &SelectionState) -> String {
	let mut pairs = Vec::new();

	if let Some(backend) = &state.backend {
		pairs.push(pair(BACKEND_KEY, backend));
	}
	for id in &state.readset_ids {
		pairs.push(pair(READSET_KEY, id));
	}
	for id in &state.callset_ids {
		pairs.push(pair(CALLSET_KEY, id));
	}
	if let Some(location) = &state.location {
		pairs.push(pair(LOCATION_KEY, location));
	}
	for (key, value) in &state.extra {
		pairs.push(pair(key, value));
	}

	pairs.join("&")
}

pub fn decode(fragment: &str) -> SelectionState {
	let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
	let mut state = SelectionState::default();

	for part in fragment.split('&') {
		if part.is_empty() {
			continue;
		}

		let (key, value) = match part.split_once('=') {
			Some((key, value)) => (key, value),
			None => (part, ""),
		};
		let key = unescape(key);
		let value = unescape(value);

		match key.as_str() {
			READSET_KEY => state.readset_ids.push(value),
			CALLSET_KEY => state.callset_ids.push(value),
			BACKEND_KEY => state.backend = Some(value),
			LOCATION_KEY => state.location = Some(value),
			_ => {
				state.extra.insert(key, value);
			},
		}
	}

	state
}

fn pair(key: &str, value: &str) -> String {
	format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

fn unescape(raw: &str) -> String {
	urlencoding::decode(raw).map(Cow::into_owned).unwrap_or_else(|_| raw.to_string())
}
