//! Merging user input with looked-up metadata and keeping titles unique.

use crate::models::{Category, Library, Metadata, Record, RecordInput, RecordPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// User parts win only when greater than one.
///
/// Entering exactly one never overrides a larger looked-up count.
#[must_use]
pub const fn resolve_parts(user_parts: u32, looked_up_parts: u32) -> u32 {
    if user_parts > 1 {
        user_parts
    } else {
        looked_up_parts
    }
}

/// Inserts the record, or replaces the entry with the same title (ignoring
/// case) in place.
pub fn upsert(
    library: &mut Library,
    category: Category,
    input: RecordInput,
    looked_up: Metadata,
) -> UpsertOutcome {
    let record = Record {
        parts: resolve_parts(input.parts, looked_up.parts),
        title: input.title,
        rating: input.rating,
        comment: input.comment,
        year: looked_up.year,
        genre: looked_up.genre,
    };

    let records = library.records_mut(category);
    if let Some(existing) = records.iter_mut().find(|r| r.matches_title(&record.title)) {
        *existing = record;
        UpsertOutcome::Updated
    } else {
        records.push(record);
        UpsertOutcome::Added
    }
}

/// Applies an explicit edit. Year and genre are left alone.
pub fn update<'a>(
    library: &'a mut Library,
    category: Category,
    title: &str,
    patch: RecordPatch,
) -> Option<&'a Record> {
    let record = library
        .records_mut(category)
        .iter_mut()
        .find(|r| r.matches_title(title))?;

    if let Some(rating) = patch.rating {
        record.rating = rating;
    }
    if let Some(comment) = patch.comment {
        record.comment = comment;
    }
    if let Some(parts) = patch.parts {
        record.parts = parts;
    }

    Some(record)
}

/// Removes the title from every category. Returns how many records went.
pub fn delete(library: &mut Library, title: &str) -> usize {
    let before = library.len();
    for category in Category::ALL {
        library
            .records_mut(category)
            .retain(|r| !r.matches_title(title));
    }
    before - library.len()
}
