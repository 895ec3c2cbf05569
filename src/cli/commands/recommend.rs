use crate::services::TrackerService;

pub fn cmd_recommend(service: &TrackerService) -> anyhow::Result<()> {
    let picks = service.recommend();

    println!("Recommendations");
    println!("{:-<60}", "");

    for (i, pick) in picks.iter().enumerate() {
        println!(
            "[{}] {} ({}, parts: {})",
            i + 1,
            pick.title,
            pick.category,
            pick.parts
        );
        println!("    {}", pick.reason);
    }

    Ok(())
}
