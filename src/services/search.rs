use crate::models::{Category, Library, Record};

/// Records whose title or genre contains `query`, ignoring case.
#[must_use]
pub fn search<'a>(library: &'a Library, query: &str) -> Vec<(Category, &'a Record)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    library
        .iter()
        .filter(|(_, r)| {
            r.title.to_lowercase().contains(&query) || r.genre.to_lowercase().contains(&query)
        })
        .collect()
}

/// Records sorted by rating, highest first. Equal ratings keep stored order.
#[must_use]
pub fn list(library: &Library, category: Option<Category>) -> Vec<(Category, &Record)> {
    let mut records: Vec<_> = library
        .iter()
        .filter(|(c, _)| category.is_none_or(|wanted| wanted == *c))
        .collect();
    records.sort_by(|(_, a), (_, b)| b.rating.cmp(&a.rating));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, rating: u8, genre: &str) -> Record {
        Record {
            title: title.to_string(),
            rating,
            comment: String::new(),
            year: "2000".to_string(),
            genre: genre.to_string(),
            parts: 1,
        }
    }

    fn library() -> Library {
        Library {
            movies: vec![record("Alien", 8, "Sci-Fi"), record("Airplane!", 6, "Comedy")],
            series: vec![record("Office", 8, "Comedy")],
            cartoons: vec![record("Futurama", 9, "Sci-Fi")],
        }
    }

    #[test]
    fn test_search_matches_title_or_genre() {
        let library = library();

        let titles: Vec<_> = search(&library, "sci")
            .into_iter()
            .map(|(_, r)| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Alien", "Futurama"]);

        let hits = search(&library, "OFF");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, Category::Series);

        assert!(search(&library, "  ").is_empty());
        assert!(search(&library, "western").is_empty());
    }

    #[test]
    fn test_list_sorts_by_rating_stably() {
        let library = library();

        let titles: Vec<_> = list(&library, None)
            .into_iter()
            .map(|(_, r)| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Futurama", "Alien", "Office", "Airplane!"]);

        let movies = list(&library, Some(Category::Movie));
        assert_eq!(movies.len(), 2);
        assert!(movies.iter().all(|(c, _)| *c == Category::Movie));
    }
}
