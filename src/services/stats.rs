//! Library statistics and the fixed recommendation list.

use crate::constants::{NO_GENRE, UNKNOWN};
use crate::models::{Category, Library};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub average_rating: f64,
    pub top_genre: String,
    pub top_genre_count: usize,
    pub per_category: Vec<(Category, usize)>,
}

#[must_use]
pub fn stats(library: &Library) -> Stats {
    let count = library.len();

    let average_rating = if count == 0 {
        0.0
    } else {
        let total: u32 = library.iter().map(|(_, r)| u32::from(r.rating)).sum();
        f64::from(total) / count as f64
    };

    let (top_genre, top_genre_count) = most_frequent_genre(library)
        .map_or_else(|| (NO_GENRE.to_string(), 0), |(g, n)| (g.to_string(), n));

    Stats {
        count,
        average_rating,
        top_genre,
        top_genre_count,
        per_category: Category::ALL
            .into_iter()
            .map(|c| (c, library.records(c).len()))
            .collect(),
    }
}

/// Most frequent genre. Ties go to the genre seen first.
fn most_frequent_genre(library: &Library) -> Option<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for (_, record) in library.iter() {
        match counts.iter_mut().find(|(g, _)| *g == record.genre) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.genre.as_str(), 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best, (genre, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((genre, n)),
        })
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub category: Category,
    pub parts: u32,
    pub reason: String,
}

const PICKS: [(&str, Category, u32); 6] = [
    ("Interstellar", Category::Movie, 1),
    ("The Grand Budapest Hotel", Category::Movie, 1),
    ("Dark", Category::Series, 3),
    ("Breaking Bad", Category::Series, 5),
    ("Spirited Away", Category::Cartoon, 1),
    ("Avatar: The Last Airbender", Category::Cartoon, 3),
];

/// Six fixed picks. Only the reason text looks at the library.
#[must_use]
pub fn recommend(library: &Library) -> Vec<Recommendation> {
    let genre = most_frequent_genre(library).map_or(UNKNOWN, |(g, _)| g);

    PICKS
        .iter()
        .map(|&(title, category, parts)| Recommendation {
            title,
            category,
            parts,
            reason: format!(
                "Your top genre is '{genre}'. Try this {} next.",
                category.label().to_lowercase()
            ),
        })
        .collect()
}
