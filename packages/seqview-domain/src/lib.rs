pub mod fragment;
pub mod location;
pub mod state;

pub use fragment::{decode, encode};
pub use location::strip_contig;
pub use state::{
	ActiveSelection, BACKEND_KEY, CALLSET_KEY, LOCATION_KEY, READSET_KEY, ReferenceSequence,
	SelectionState, SetDescriptor, SetSummary, SetType,
};
