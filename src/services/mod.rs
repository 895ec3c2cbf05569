pub mod metadata;
pub use metadata::{LookupConfig, MetadataLookup};

pub mod reconciler;
pub use reconciler::UpsertOutcome;

pub mod search;

pub mod stats;
pub use stats::{Recommendation, Stats};

pub mod tracker;
pub use tracker::{AddOptions, AddResult, TrackerError, TrackerService};
