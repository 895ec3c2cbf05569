use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{UNKNOWN, limits};

/// Which list of the library a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movie,
    Series,
    Cartoon,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Movie, Self::Series, Self::Cartoon];

    /// Whether lookups for this category go to the tv search by default.
    #[must_use]
    pub const fn is_series(self) -> bool {
        matches!(self, Self::Series)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
            Self::Cartoon => "Cartoon",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" | "film" => Ok(Self::Movie),
            "series" | "show" | "tv" => Ok(Self::Series),
            "cartoon" | "cartoons" | "animation" => Ok(Self::Cartoon),
            other => Err(format!(
                "unknown category '{other}' (expected movie, series or cartoon)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default = "unknown")]
    pub year: String,
    #[serde(default = "unknown")]
    pub genre: String,
    #[serde(default = "default_parts")]
    pub parts: u32,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

const fn default_parts() -> u32 {
    limits::DEFAULT_PARTS
}

impl Record {
    /// Case-insensitive title comparison used as the identity key.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// User-entered fields of the add form.
#[derive(Debug, Clone)]
pub struct RecordInput {
    pub title: String,
    pub rating: u8,
    pub comment: String,
    pub parts: u32,
}

/// Fields changed by an explicit edit. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub parts: Option<u32>,
}

impl RecordPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rating.is_none() && self.comment.is_none() && self.parts.is_none()
    }
}
