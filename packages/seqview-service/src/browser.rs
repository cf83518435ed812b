//! The selection orchestrator. One instance owns the cache, the search
//! controller, the view, and the preference store, and is driven entirely
//! by [`Event`]s from a single channel. Transport work happens in spawned
//! tasks that only ever report back through that channel.

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use seqview_config::Config;
use seqview_domain::{self as domain, ActiveSelection, SetType};
use seqview_providers::{FetchSetRequest, SearchSetsRequest};

use crate::{
	Event, Navigator, SetProvider, Severity, View,
	cache::SetCache,
	loader::{self, LoadStep},
	prefs::PrefsStore,
	search::{SearchController, SearchHandle},
};

pub struct Browser<V, N, P>
where
	V: View,
	N: Navigator,
	P: PrefsStore,
{
	cfg: Config,
	provider: Arc<dyn SetProvider>,
	view: V,
	navigator: N,
	prefs: P,
	cache: SetCache,
	search: SearchController,
	search_type: SetType,
	search_name: String,
	events: UnboundedSender<Event>,
}

impl<V, N, P> Browser<V, N, P>
where
	V: View,
	N: Navigator,
	P: PrefsStore,
{
	pub fn new(
		cfg: Config,
		provider: Arc<dyn SetProvider>,
		view: V,
		navigator: N,
		prefs: P,
		events: UnboundedSender<Event>,
	) -> Self {
		Self {
			cfg,
			provider,
			view,
			navigator,
			prefs,
			cache: SetCache::new(),
			search: SearchController::new(),
			search_type: SetType::Readset,
			search_name: String::new(),
			events,
		}
	}

	/// Seeds preferences with the configured default backend and replays
	/// whatever fragment the navigator already holds.
	pub fn bootstrap(&mut self) {
		if self.prefs.last_backend().is_none() {
			self.prefs.set_last_backend(&self.cfg.defaults.backend);
		}

		let fragment = self.navigator.fragment();

		self.on_fragment_changed(&fragment);
	}

	/// Drains the event channel until every sender is gone.
	pub async fn run(mut self, mut events: UnboundedReceiver<Event>) {
		while let Some(event) = events.recv().await {
			self.handle(event);
		}
	}

	pub fn handle(&mut self, event: Event) {
		match event {
			Event::FragmentChanged(fragment) => self.on_fragment_changed(&fragment),
			Event::SetFetched { selection, set_type, set_id, outcome } =>
				self.on_set_fetched(selection, set_type, set_id, outcome),
			Event::SearchSettled { handle, outcome } => self.on_search_settled(handle, outcome),
		}
	}

	// User actions. Each one rewrites the fragment and relies on the change
	// notification to re-enter `on_fragment_changed`; the cache and the
	// view are never touched here, so URL, cache, and view cannot diverge.

	pub fn remove_set(&mut self, set_type: SetType, id: &str) {
		let mut state = domain::decode(&self.navigator.fragment());

		state.remove_set(set_type, id);
		self.navigator.set_fragment(&domain::encode(&state));
	}

	pub fn select_set(&mut self, backend: &str, set_type: SetType, id: &str) {
		let mut state = domain::decode(&self.navigator.fragment());

		state.select_set(backend, set_type, id);
		self.navigator.set_fragment(&domain::encode(&state));
	}

	/// Focuses a user-entered location: the view canonicalizes it first,
	/// and the canonical form is what lands in the fragment.
	pub fn update_location(&mut self, raw: &str) {
		let canonical = self.view.jump_graph(raw);
		let mut state = domain::decode(&self.navigator.fragment());

		state.set_location(&canonical);
		self.navigator.set_fragment(&domain::encode(&state));
	}

	// Search-field changes re-issue the search immediately; backend and
	// dataset picks are also remembered for the next session.

	pub fn set_search_backend(&mut self, backend: &str) {
		self.prefs.set_last_backend(backend);
		self.begin_search();
	}

	pub fn set_search_dataset(&mut self, dataset: &str) {
		let backend = self.search_backend();

		self.prefs.set_last_dataset(&backend, dataset);
		self.begin_search();
	}

	pub fn set_search_name(&mut self, name: &str) {
		self.search_name = name.to_string();
		self.begin_search();
	}

	pub fn set_search_type(&mut self, set_type: SetType) {
		self.search_type = set_type;
		self.begin_search();
	}

	fn on_fragment_changed(&mut self, fragment: &str) {
		let state = domain::decode(fragment);

		match state.active() {
			Some(selection) => {
				self.view.show_search(false);

				if let Some(location) = &selection.location {
					self.view.set_position_display(domain::strip_contig(location));
				}

				self.resume_load(selection);
			},
			None => {
				self.view.show_search(true);
				self.begin_search();
			},
		}
	}

	/// One turn of the sequential loader: either issue the single next
	/// fetch, or deliver the consolidated list exactly once.
	fn resume_load(&mut self, selection: ActiveSelection) {
		match loader::next_step(&self.cache, &selection) {
			LoadStep::Fetch { set_type, set_id } => self.spawn_fetch(selection, set_type, set_id),
			LoadStep::Ready { sets } => {
				self.view.update_sets(&sets);

				if !sets.is_empty()
					&& let Some(location) = &selection.location
				{
					self.view.jump_graph(location);
				}
			},
		}
	}

	fn spawn_fetch(&mut self, selection: ActiveSelection, set_type: SetType, set_id: String) {
		self.view.notify(Severity::Info, "Loading data.");

		let provider = self.provider.clone();
		let transport = self.cfg.transport.clone();
		let events = self.events.clone();
		let req = FetchSetRequest {
			backend: selection.backend.clone(),
			set_type,
			set_id: set_id.clone(),
		};

		tokio::spawn(async move {
			let outcome = provider.fetch_set(&transport, &req).await;
			let _ = events.send(Event::SetFetched { selection, set_type, set_id, outcome });
		});
	}

	fn on_set_fetched(
		&mut self,
		selection: ActiveSelection,
		set_type: SetType,
		set_id: String,
		outcome: seqview_providers::Result<seqview_domain::SetDescriptor>,
	) {
		match outcome {
			Ok(descriptor) => {
				// An overlapping pass may have fetched the same id; the
				// cache keeps the first copy.
				if !self.cache.put(descriptor) {
					tracing::debug!(set_id = %set_id, "Set descriptor was already cached.");
				}

				self.resume_load(selection);
			},
			Err(err) => {
				tracing::warn!(
					error = %err,
					set_type = %set_type.as_str(),
					set_id = %set_id,
					"Set fetch failed; the load pass stalls until the selection changes."
				);
				self.view.notify(
					Severity::Error,
					&format!("Sorry, the api request failed for some reason. ({err})"),
				);
			},
		}
	}

	fn begin_search(&mut self) {
		let backend = self.search_backend();
		let dataset_id = self.prefs.last_dataset(&backend).or_else(|| {
			self.cfg.backend(&backend).and_then(|backend| backend.default_dataset.clone())
		});
		let name = (!self.search_name.trim().is_empty()).then(|| self.search_name.clone());
		let req = SearchSetsRequest { backend, dataset_id, set_type: self.search_type, name };

		let handle = self.search.begin();

		self.view.show_search_pending();

		let provider = self.provider.clone();
		let transport = self.cfg.transport.clone();
		let events = self.events.clone();
		let task = tokio::spawn(async move {
			let outcome = provider.search_sets(&transport, &req).await;
			let _ = events.send(Event::SearchSettled { handle, outcome });
		});

		self.search.bind(handle, task.abort_handle());
	}

	fn on_search_settled(
		&mut self,
		handle: SearchHandle,
		outcome: seqview_providers::Result<Vec<seqview_domain::SetSummary>>,
	) {
		if !self.search.settle(handle) {
			tracing::debug!(?handle, "Discarding a superseded search response.");

			return;
		}

		match outcome {
			Ok(results) => self.view.show_search_results(&results),
			Err(err) => {
				tracing::warn!(error = %err, "Set search failed.");
				self.view.notify(
					Severity::Error,
					&format!("Sorry, the api request failed for some reason. ({err})"),
				);
			},
		}
	}

	fn search_backend(&self) -> String {
		self.prefs.last_backend().unwrap_or_else(|| self.cfg.defaults.backend.clone())
	}
}
