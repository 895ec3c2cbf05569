use crate::services::TrackerService;

pub fn cmd_remove(service: &TrackerService, title: &str) -> anyhow::Result<()> {
    let removed = service.remove(title)?;

    if removed == 0 {
        println!("'{title}' is not in your list.");
    } else {
        println!("✓ Removed: {title} ({removed} record(s))");
    }

    Ok(())
}
