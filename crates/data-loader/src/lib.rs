//! # Data Loader Crate
//!
//! This crate handles loading and indexing the movie dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieTable)
//! - **parser**: Parse spreadsheet exports (CSV/TSV) into Rust structs
//! - **table**: Build the table and its lookup indices
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieTable;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let table = MovieTable::load_from_file(Path::new("data/movies.csv"))?;
//!
//! // Query data
//! for movie in table.by_year(1999) {
//!     println!("{} ({:?})", movie.title, movie.rating);
//! }
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod table;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use types::{Movie, MovieTable};

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: Option<u16>, genres: &[&str]) -> Movie {
        Movie {
            id: String::new(),
            title_type: "movie".to_string(),
            title: title.to_string(),
            year,
            runtime_minutes: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating: None,
            votes: None,
        }
    }

    #[test]
    fn test_empty_table() {
        let table = MovieTable::new();
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_and_query_by_year() {
        let mut table = MovieTable::new();
        table.insert_movie(movie("Old", Some(1980), &["Drama"]));
        table.insert_movie(movie("New", Some(2010), &["Drama"]));
        table.insert_movie(movie("Undated", None, &["Drama"]));
        table.build_indices();

        let titles: Vec<&str> = table.by_year(1980).map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Old"]);
        assert_eq!(table.by_year(1999).count(), 0);
    }

    #[test]
    fn test_genre_lookup_is_case_insensitive() {
        let mut table = MovieTable::new();
        table.insert_movie(movie("Loud", Some(2000), &["Action", "Sci-Fi"]));
        table.build_indices();

        assert_eq!(table.by_genre("action").count(), 1);
        assert_eq!(table.by_genre("ACTION").count(), 1);
        assert_eq!(table.by_genre(" sci-fi ").count(), 1);
        assert_eq!(table.by_genre("romance").count(), 0);
    }

    #[test]
    fn test_empty_queries() {
        let table = MovieTable::new();
        assert_eq!(table.by_year(1999).count(), 0);
        assert_eq!(table.by_genre("drama").count(), 0);
    }
}
