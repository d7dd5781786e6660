//! Court location data for Courtside
//!
//! Loads the static court-location list, filters it with a user-supplied
//! search expression, and projects the filtered view to map-marker
//! descriptors for the external map widget.

pub mod error;
pub mod filter;
pub mod markers;
pub mod store;

pub use error::{FilterError, LocationsError};
pub use filter::filter;
pub use markers::{to_markers, Marker};
pub use store::{LocationRecord, LocationStore, RecordIssue};
