mod add;
mod list;
mod recommend;
mod remove;
mod search;
mod stats;
mod update;

pub use add::cmd_add;
pub use list::cmd_list;
pub use recommend::cmd_recommend;
pub use remove::cmd_remove;
pub use search::cmd_search;
pub use stats::cmd_stats;
pub use update::cmd_update;

use crate::models::{Category, Record};

fn print_record(category: Category, record: &Record) {
    let comment = if record.comment.is_empty() {
        String::new()
    } else {
        format!(" | {}", record.comment)
    };

    println!(
        "{}: {} ({}, {}, parts: {}) Rating: {}/10{}",
        category, record.title, record.year, record.genre, record.parts, record.rating, comment
    );
}
