use tokio::task::AbortHandle;

/// Identity token for one outstanding search. Comparable, never reused
/// within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHandle(u64);

/// Two-state request controller: idle (no outstanding search) or pending
/// (exactly one, identified by its handle). A newer search always cancels
/// and supersedes the pending one, and completions prove their identity
/// before they are honored, so stale results never overwrite fresher ones
/// regardless of network completion order.
#[derive(Debug, Default)]
pub struct SearchController {
	current: Option<Pending>,
	issued: u64,
}

#[derive(Debug)]
struct Pending {
	handle: SearchHandle,
	abort: Option<AbortHandle>,
}

impl SearchController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Supersedes any pending search (asking its transport to abort) and
	/// returns the handle identifying the new one.
	pub fn begin(&mut self) -> SearchHandle {
		if let Some(pending) = self.current.take()
			&& let Some(abort) = pending.abort
		{
			abort.abort();
		}

		self.issued += 1;

		let handle = SearchHandle(self.issued);

		self.current = Some(Pending { handle, abort: None });

		handle
	}

	/// Attaches the transport abort for `handle`. If the handle was already
	/// superseded by the time its task was spawned, the task is aborted on
	/// the spot.
	pub fn bind(&mut self, handle: SearchHandle, abort: AbortHandle) {
		match &mut self.current {
			Some(pending) if pending.handle == handle => pending.abort = Some(abort),
			_ => abort.abort(),
		}
	}

	/// Resolves a completion. True iff `handle` is still the current one
	/// (the controller then returns to idle); a superseded handle is stale
	/// and its response must be discarded silently.
	pub fn settle(&mut self, handle: SearchHandle) -> bool {
		match &self.current {
			Some(pending) if pending.handle == handle => {
				self.current = None;

				true
			},
			_ => false,
		}
	}

	pub fn is_pending(&self) -> bool {
		self.current.is_some()
	}
}
