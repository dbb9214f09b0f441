// Resource metadata contract: what a model exposes and how a resource
// describes it to the dashboard.

pub mod fields;
pub mod key;
pub mod traits;

pub use fields::{FieldType, Fields, RelationSpec};
pub use key::{KeyValue, ModelRef};
pub use traits::{ModelOf, OtterModel, Resource, available_fields};
