use seqview_domain::{SelectionState, SetType, decode, encode, strip_contig};

#[test]
fn a_shared_url_decodes_into_a_viewable_selection() {
	let state = decode("#backend=GOOGLE&readsetId=R1&location=chr1:100-200");
	let active = state.active().expect("backend plus a readset should be viewable");

	assert_eq!(active.backend, "GOOGLE");
	assert_eq!(active.readset_ids, vec!["R1".to_string()]);
	assert_eq!(active.location.as_deref(), Some("chr1:100-200"));
	assert_eq!(strip_contig(active.location.as_deref().unwrap()), "100-200");
}

#[test]
fn user_actions_compose_through_the_fragment() {
	// Pick a readset from search results, then focus a location, then add a
	// callset. Each step goes state -> fragment -> state.
	let mut state = SelectionState::default();

	state.select_set("GOOGLE", SetType::Readset, "R1");
	let mut state = decode(&encode(&state));

	state.set_location("chr2:5-50");
	let mut state = decode(&encode(&state));

	state.select_set("GOOGLE", SetType::Callset, "C1");
	let state = decode(&encode(&state));

	assert_eq!(encode(&state), "backend=GOOGLE&readsetId=R1&callsetId=C1&location=chr2%3A5-50");
}

#[test]
fn removing_the_only_readset_leaves_a_search_state() {
	let mut state = decode("backend=GOOGLE&readsetId=R1&callsetId=C1");

	state.remove_set(SetType::Readset, "R1");

	assert!(state.active().is_none());
	assert_eq!(encode(&state), "backend=GOOGLE&callsetId=C1");
}

#[test]
fn set_type_serializes_to_the_wire_spelling() {
	assert_eq!(serde_json::to_string(&SetType::Readset).unwrap(), r#""READSET""#);
	assert_eq!(serde_json::from_str::<SetType>(r#""CALLSET""#).unwrap(), SetType::Callset);
	assert_eq!(SetType::Readset.as_str(), "READSET");
	assert_eq!(SetType::Callset.fragment_key(), "callsetId");
}
