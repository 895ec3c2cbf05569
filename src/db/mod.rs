//! JSON file persistence for the library.
//!
//! The whole document is read on load and rewritten on save. There is no
//! incremental update path.

use crate::models::Library;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    persistence_notice: bool,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            persistence_notice: true,
        }
    }

    /// Turns the "changes are only saved locally" notice on or off.
    #[must_use]
    pub const fn with_persistence_notice(mut self, enabled: bool) -> Self {
        self.persistence_notice = enabled;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the library from disk.
    ///
    /// A missing or unreadable file yields an empty library with every
    /// category present.
    #[must_use]
    pub fn load(&self) -> Library {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Library::default();
            }
            Err(e) => {
                warn!("Failed to read store {}: {}", self.path.display(), e);
                return Library::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(library) => library,
            Err(e) => {
                warn!(
                    "Store {} is not a valid library, starting empty: {}",
                    self.path.display(),
                    e
                );
                Library::default()
            }
        }
    }

    /// Overwrites the file with the full library.
    pub fn save(&self, library: &Library) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = to_pretty_json(library)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write store: {}", self.path.display()))?;

        debug!(
            "Saved {} records to {}",
            library.len(),
            self.path.display()
        );

        if self.persistence_notice {
            warn!(
                "Changes saved to {}. This is a local file; keep a copy under version control if the deployment is not persistent.",
                self.path.display()
            );
        }

        Ok(())
    }

    /// Starts a read-through view for one command.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            store: self,
            library: OnceCell::new(),
        }
    }
}

/// Request-scoped view of the store. The file is read at most once per
/// snapshot; a new command must take a new snapshot.
#[derive(Debug)]
pub struct Snapshot<'a> {
    store: &'a Store,
    library: OnceCell<Library>,
}

impl Snapshot<'_> {
    pub fn library(&self) -> &Library {
        self.library.get_or_init(|| self.store.load())
    }

    /// Takes the loaded library for mutation, loading it first if needed.
    pub fn into_library(self) -> Library {
        let Self { store, library } = self;
        library.into_inner().unwrap_or_else(|| store.load())
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize library")?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn temp_store() -> Store {
        let path = std::env::temp_dir().join(format!(
            "movietracker-store-test-{}.json",
            uuid::Uuid::new_v4()
        ));
        Store::new(path).with_persistence_notice(false)
    }

    fn record(title: &str, genre: &str) -> Record {
        Record {
            title: title.to_string(),
            rating: 7,
            comment: "пересмотреть".to_string(),
            year: "2014".to_string(),
            genre: genre.to_string(),
            parts: 1,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let store = temp_store();
        assert_eq!(store.load(), Library::default());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let store = temp_store();
        std::fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), Library::default());
        std::fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_save_uses_four_space_indent_and_literal_unicode() {
        let store = temp_store();
        let library = Library {
            movies: vec![record("Сталкер", "Sci-Fi")],
            ..Library::default()
        };
        store.save(&library).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n    \"movies\": [\n        {\n"));
        assert!(text.contains("\"title\": \"Сталкер\""));
        assert!(!text.contains("\\u"));
        assert!(text.find("\"movies\"") < text.find("\"series\""));
        assert!(text.find("\"series\"") < text.find("\"cartoons\""));

        std::fs::remove_file(store.path()).ok();
    }

    #[test]
    fn test_snapshot_reads_file_once() {
        let store = temp_store();
        let library = Library {
            series: vec![record("Dark", "Sci-Fi")],
            ..Library::default()
        };
        store.save(&library).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.library().len(), 1);

        store.save(&Library::default()).unwrap();
        assert_eq!(snapshot.library().len(), 1);
        assert_eq!(snapshot.into_library().len(), 1);

        assert!(store.snapshot().library().is_empty());
        std::fs::remove_file(store.path()).ok();
    }
}
