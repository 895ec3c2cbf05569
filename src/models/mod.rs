pub mod library;
pub mod metadata;
pub mod record;

pub use library::Library;
pub use metadata::Metadata;
pub use record::{Category, Record, RecordInput, RecordPatch};
