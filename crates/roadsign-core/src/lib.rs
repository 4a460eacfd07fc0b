/// RoadSign Core: loading, classification, filtering and aggregation of
/// road signage inventories.
///
/// This crate contains all business logic with zero UI dependencies.
/// Chart, map and widget rendering belong to the frontend.
///
/// # Modules
///
/// - [`model`]: Records, derived fields and condition classes.
/// - [`loader`]: Semicolon-delimited inventory reader with per-row skipping.
/// - [`analysis`]: Keyword classifier, label normalization, rankings and counts.
/// - [`filter`]: Caller-supplied predicates over loaded records.
/// - [`overlay`]: Map marker/polyline descriptors for filtered batches.
/// - [`service`]: Snapshot cache over both inventory files.
pub mod analysis;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod overlay;
pub mod service;

pub use error::{LoadError, RecordError};
pub use filter::{filter, DateRange, FilterSet};
