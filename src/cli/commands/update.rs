use crate::models::{Category, RecordPatch};
use crate::services::{TrackerError, TrackerService};

pub fn cmd_update(
    service: &TrackerService,
    category: Category,
    title: &str,
    patch: RecordPatch,
) -> anyhow::Result<()> {
    if patch.is_empty() {
        println!("Nothing to change. Pass --rating, --comment or --parts.");
        return Ok(());
    }

    match service.update(category, title, patch) {
        Ok(record) => {
            println!("✓ Updated: {} '{}'", category, record.title);
            println!(
                "  Rating: {}/10 | Parts: {} | Comment: {}",
                record.rating, record.parts, record.comment
            );
            Ok(())
        }
        Err(e @ TrackerError::NotFound { .. }) => {
            println!("{e}");
            println!("Use 'movietracker list' to see tracked titles.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
