pub mod tmdb;

pub use tmdb::{SearchKind, SearchResult, SearchTransport, TmdbClient};
