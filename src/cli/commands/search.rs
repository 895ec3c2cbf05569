use super::print_record;
use crate::services::TrackerService;

pub fn cmd_search(service: &TrackerService, query: &str) -> anyhow::Result<()> {
    let results = service.search(query);

    if results.is_empty() {
        println!("Nothing matches '{query}'");
        return Ok(());
    }

    println!("Matches for '{query}':");
    println!("{:-<60}", "");

    for (category, record) in &results {
        print_record(*category, record);
    }

    Ok(())
}
