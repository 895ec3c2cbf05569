//! List command handler

use super::print_record;
use crate::models::Category;
use crate::services::TrackerService;

pub fn cmd_list(service: &TrackerService, category: Option<Category>) -> anyhow::Result<()> {
    let records = service.list(category);

    if records.is_empty() {
        println!("Nothing tracked yet.");
        println!();
        println!("Add a title with: movietracker add \"title\" --category movie --rating 8");
        return Ok(());
    }

    println!("Your list, highest rated first ({} total)", records.len());
    println!("{:-<70}", "");

    for (category, record) in &records {
        print_record(*category, record);
    }

    Ok(())
}
