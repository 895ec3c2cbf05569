use crate::services::TrackerService;

pub fn cmd_stats(service: &TrackerService) -> anyhow::Result<()> {
    let stats = service.stats();

    println!("Statistics");
    println!("{:-<40}", "");
    println!("Total: {}", stats.count);
    for (category, count) in &stats.per_category {
        println!("  {category}: {count}");
    }
    println!("Average rating: {:.1}", stats.average_rating);
    println!("Top genre: {} ({})", stats.top_genre, stats.top_genre_count);

    Ok(())
}
