/// Data model for signage inventories.
///
/// Re-exports records, condition classes and the loaded table type.
pub mod condition;
pub mod record;
pub mod table;

pub use condition::ConditionClass;
pub use record::{DerivedFields, GeoPoint, Geometry, RawRecord, SignageKind, SignageRecord};
pub use table::{SignageTable, SkippedRow};
