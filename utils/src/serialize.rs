
///
/// Derives for types with a serialized form, so that workspace members take
/// their serialization surface from one place.
///
pub use serde::{Serialize, Deserialize};
