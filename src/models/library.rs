use serde::{Deserialize, Serialize};

use super::record::{Category, Record};

/// Every tracked record, one ordered list per category.
///
/// Field order here is the key order of the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    pub movies: Vec<Record>,
    pub series: Vec<Record>,
    pub cartoons: Vec<Record>,
}

impl Library {
    #[must_use]
    pub fn records(&self, category: Category) -> &[Record] {
        match category {
            Category::Movie => &self.movies,
            Category::Series => &self.series,
            Category::Cartoon => &self.cartoons,
        }
    }

    pub fn records_mut(&mut self, category: Category) -> &mut Vec<Record> {
        match category {
            Category::Movie => &mut self.movies,
            Category::Series => &mut self.series,
            Category::Cartoon => &mut self.cartoons,
        }
    }

    /// All records with their category: movies, then series, then cartoons.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Record)> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.records(category).iter().map(move |r| (category, r)))
    }

    #[must_use]
    pub fn find(&self, category: Category, title: &str) -> Option<&Record> {
        self.records(category).iter().find(|r| r.matches_title(title))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len() + self.series.len() + self.cartoons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> Record {
        Record {
            title: title.to_string(),
            rating: 5,
            comment: String::new(),
            year: "2000".to_string(),
            genre: "Comedy".to_string(),
            parts: 1,
        }
    }

    #[test]
    fn test_iter_walks_categories_in_order() {
        let library = Library {
            movies: vec![record("A")],
            series: vec![record("B"), record("C")],
            cartoons: vec![record("D")],
        };

        let seen: Vec<(Category, &str)> = library
            .iter()
            .map(|(c, r)| (c, r.title.as_str()))
            .collect();

        assert_eq!(
            seen,
            vec![
                (Category::Movie, "A"),
                (Category::Series, "B"),
                (Category::Series, "C"),
                (Category::Cartoon, "D"),
            ]
        );
        assert_eq!(library.len(), 4);
    }

    #[test]
    fn test_missing_keys_default_to_empty_lists() {
        let library: Library =
            serde_json::from_str(r#"{"series": [{"title": "Dark", "rating": 9}]}"#).unwrap();
        assert!(library.movies.is_empty());
        assert!(library.cartoons.is_empty());
        assert_eq!(library.series.len(), 1);
    }

    #[test]
    fn test_empty_library_serializes_all_keys() {
        let json = serde_json::to_value(Library::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"movies": [], "series": [], "cartoons": []})
        );
    }
}
