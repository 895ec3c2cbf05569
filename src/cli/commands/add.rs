use crate::models::{Category, RecordInput};
use crate::services::{AddOptions, TrackerService, UpsertOutcome};

pub async fn cmd_add(
    service: &TrackerService,
    category: Category,
    input: RecordInput,
    options: AddOptions,
) -> anyhow::Result<()> {
    if input.title.trim().is_empty() {
        println!("Title cannot be empty.");
        return Ok(());
    }

    let input = RecordInput {
        title: input.title.trim().to_string(),
        ..input
    };

    println!("Looking up: {}", input.title);
    let result = service.add(category, input, options).await?;

    let verb = match result.outcome {
        UpsertOutcome::Added => "Added",
        UpsertOutcome::Updated => "Updated",
    };

    println!();
    println!("✓ {}: {} '{}'", verb, result.category, result.record.title);
    println!("  Year: {}", result.record.year);
    println!("  Genre: {}", result.record.genre);
    println!("  Parts: {}", result.record.parts);
    println!("  Rating: {}/10", result.record.rating);

    Ok(())
}
