pub mod browser;
pub mod cache;
mod error;
pub mod loader;
pub mod prefs;
pub mod search;

pub use browser::Browser;
pub use cache::SetCache;
pub use error::{Error, Result};
pub use prefs::{FilePrefs, MemoryPrefs, PrefsStore};
pub use search::{SearchController, SearchHandle};

use std::{
	future::Future,
	pin::Pin,
	sync::{Arc, Mutex},
};

use tokio::sync::mpsc::UnboundedSender;

use seqview_config::Transport;
use seqview_domain::{ActiveSelection, SetDescriptor, SetSummary, SetType};
use seqview_providers::{FetchSetRequest, SearchSetsRequest, sets};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The opaque transport. The engine never retries a failed request;
/// failures come back as transient notices and the affected pass stalls
/// until the user changes the selection.
pub trait SetProvider
where
	Self: Send + Sync,
{
	fn fetch_set<'a>(
		&'a self,
		cfg: &'a Transport,
		req: &'a FetchSetRequest,
	) -> BoxFuture<'a, seqview_providers::Result<SetDescriptor>>;

	fn search_sets<'a>(
		&'a self,
		cfg: &'a Transport,
		req: &'a SearchSetsRequest,
	) -> BoxFuture<'a, seqview_providers::Result<Vec<SetSummary>>>;
}

/// Reqwest-backed [`SetProvider`].
pub struct HttpSets;
impl SetProvider for HttpSets {
	fn fetch_set<'a>(
		&'a self,
		cfg: &'a Transport,
		req: &'a FetchSetRequest,
	) -> BoxFuture<'a, seqview_providers::Result<SetDescriptor>> {
		Box::pin(sets::fetch_set(cfg, req))
	}

	fn search_sets<'a>(
		&'a self,
		cfg: &'a Transport,
		req: &'a SearchSetsRequest,
	) -> BoxFuture<'a, seqview_providers::Result<Vec<SetSummary>>> {
		Box::pin(sets::search_sets(cfg, req))
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	Info,
	Error,
}

/// The dependent visualization and the widgets around it. Rendering is the
/// implementer's concern; the engine only pushes finalized data.
pub trait View
where
	Self: Send,
{
	/// Replace the displayed sets. Called once per completed load pass,
	/// never with a partially loaded selection.
	fn update_sets(&mut self, sets: &[SetDescriptor]);

	/// Navigate the visualization and return the canonicalized location.
	fn jump_graph(&mut self, location: &str) -> String;

	fn show_search(&mut self, visible: bool);

	fn show_search_pending(&mut self);

	fn show_search_results(&mut self, results: &[SetSummary]);

	fn set_position_display(&mut self, position: &str);

	/// Transient, auto-dismissing notification.
	fn notify(&mut self, severity: Severity, message: &str);
}

/// Where the shareable fragment lives. `set_fragment` must deliver an
/// [`Event::FragmentChanged`] back to the event loop; the browser never
/// applies a user action to its own state directly.
pub trait Navigator
where
	Self: Send,
{
	fn fragment(&self) -> String;

	fn set_fragment(&self, fragment: &str);
}

/// In-memory navigator: stores the fragment and echoes every write back as
/// a change event, the way a browser hash does.
#[derive(Clone)]
pub struct LocalNavigator {
	fragment: Arc<Mutex<String>>,
	events: UnboundedSender<Event>,
}
impl LocalNavigator {
	pub fn new(events: UnboundedSender<Event>) -> Self {
		Self { fragment: Arc::new(Mutex::new(String::new())), events }
	}
}
impl Navigator for LocalNavigator {
	fn fragment(&self) -> String {
		self.fragment.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	fn set_fragment(&self, fragment: &str) {
		*self.fragment.lock().unwrap_or_else(|err| err.into_inner()) = fragment.to_string();

		let _ = self.events.send(Event::FragmentChanged(fragment.to_string()));
	}
}

/// Every asynchronous completion re-enters the engine through this one
/// channel, so browser state is only ever touched from event turns and
/// needs no locking.
#[derive(Debug)]
pub enum Event {
	FragmentChanged(String),
	SetFetched {
		selection: ActiveSelection,
		set_type: SetType,
		set_id: String,
		outcome: seqview_providers::Result<SetDescriptor>,
	},
	SearchSettled {
		handle: SearchHandle,
		outcome: seqview_providers::Result<Vec<SetSummary>>,
	},
}
