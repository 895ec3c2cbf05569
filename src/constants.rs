pub const UNKNOWN: &str = "Unknown";

pub const NO_GENRE: &str = "None";

pub mod tmdb {

    pub const API_BASE: &str = "https://api.themoviedb.org/3";

    pub const DEFAULT_LANGUAGE: &str = "ru-RU";

    pub const USER_AGENT: &str = "MovieTracker/1.0";

    pub const API_KEY_ENV: &str = "TMDB_API_KEY";

    /// Genre ids with a label. Checked in order, first hit wins.
    pub const GENRE_LABELS: &[(i64, &str)] = &[(878, "Sci-Fi"), (35, "Comedy")];
}

pub mod limits {

    pub const MIN_RATING: u8 = 1;

    pub const MAX_RATING: u8 = 10;

    pub const DEFAULT_PARTS: u32 = 1;
}
