//! One method per user action.
//!
//! Every mutating method is a load, mutate, save cycle over a fresh snapshot,
//! and reports the result read back from disk.

use crate::clients::tmdb::{SearchTransport, TmdbClient};
use crate::db::Store;
use crate::models::{Category, Record, RecordInput, RecordPatch};
use crate::services::metadata::{LookupConfig, MetadataLookup};
use crate::services::reconciler::{self, UpsertOutcome};
use crate::services::search;
use crate::services::stats::{self, Recommendation, Stats};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("'{title}' not found in {category}")]
    NotFound { category: Category, title: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for TrackerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/// What `add` did and the record as it now sits in the store.
#[derive(Debug, Clone)]
pub struct AddResult {
    pub outcome: UpsertOutcome,
    pub category: Category,
    pub record: Record,
}

/// Options for `add` beyond the form fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Use the tv search even when the category is not `Series`.
    pub force_series: bool,
}

pub struct TrackerService<T = TmdbClient> {
    store: Store,
    lookup: MetadataLookup<T>,
    lookup_config: LookupConfig,
}

impl<T: SearchTransport> TrackerService<T> {
    pub const fn new(store: Store, transport: T, lookup_config: LookupConfig) -> Self {
        Self {
            store,
            lookup: MetadataLookup::new(transport),
            lookup_config,
        }
    }

    pub async fn add(
        &self,
        category: Category,
        input: RecordInput,
        options: AddOptions,
    ) -> Result<AddResult> {
        let is_series = options.force_series || category.is_series();
        let metadata = self
            .lookup
            .lookup(&input.title, is_series, &self.lookup_config)
            .await;

        let title = input.title.clone();
        let mut library = self.store.snapshot().into_library();
        let outcome = reconciler::upsert(&mut library, category, input, metadata);
        self.store.save(&library)?;

        info!("{:?} {} '{}'", outcome, category, title);

        let record = self.reload(category, &title)?;
        Ok(AddResult {
            outcome,
            category,
            record,
        })
    }

    pub fn update(&self, category: Category, title: &str, patch: RecordPatch) -> Result<Record> {
        let mut library = self.store.snapshot().into_library();
        if reconciler::update(&mut library, category, title, patch).is_none() {
            return Err(TrackerError::NotFound {
                category,
                title: title.to_string(),
            });
        }
        self.store.save(&library)?;

        info!("Updated {} '{}'", category, title);
        self.reload(category, title)
    }

    /// Deletes the title from every category. A missing title removes
    /// nothing and leaves the file untouched.
    pub fn remove(&self, title: &str) -> Result<usize> {
        let mut library = self.store.snapshot().into_library();
        let removed = reconciler::delete(&mut library, title);
        if removed > 0 {
            self.store.save(&library)?;
            info!("Removed {} record(s) titled '{}'", removed, title);
        }
        Ok(removed)
    }

    #[must_use]
    pub fn list(&self, category: Option<Category>) -> Vec<(Category, Record)> {
        let snapshot = self.store.snapshot();
        search::list(snapshot.library(), category)
            .into_iter()
            .map(|(c, r)| (c, r.clone()))
            .collect()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<(Category, Record)> {
        let snapshot = self.store.snapshot();
        search::search(snapshot.library(), query)
            .into_iter()
            .map(|(c, r)| (c, r.clone()))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        stats::stats(self.store.snapshot().library())
    }

    #[must_use]
    pub fn recommend(&self) -> Vec<Recommendation> {
        stats::recommend(self.store.snapshot().library())
    }

    fn reload(&self, category: Category, title: &str) -> Result<Record> {
        self.store
            .snapshot()
            .library()
            .find(category, title)
            .cloned()
            .ok_or_else(|| TrackerError::Storage(format!("'{title}' missing after save")))
    }
}
