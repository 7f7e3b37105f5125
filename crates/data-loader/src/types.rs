//! Core domain types for the movie dataset.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One row of the dataset: a single movie.
///
/// Every field except the title may be missing in the source data. Numeric
/// fields that fail coercion load as `None` rather than failing the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title_type: String,
    pub title: String,
    pub year: Option<u16>,
    pub runtime_minutes: Option<u32>,
    /// Genres as listed in the dataset; matching is case-insensitive
    pub genres: Vec<String>,
    /// Rating on the dataset's 0-10 scale
    pub rating: Option<f32>,
    pub votes: Option<u64>,
}

/// The in-memory table of movie records.
///
/// Holds the records in load order plus secondary indices for the two
/// filter axes the reports use. Accessors return empty iterators for keys
/// that aren't present.
#[derive(Debug, Default)]
pub struct MovieTable {
    // Records in load order; indices below store row positions
    pub(crate) movies: Vec<Movie>,

    /// Row positions grouped by release year
    pub(crate) year_index: BTreeMap<u16, Vec<usize>>,
    /// Row positions grouped by lowercased genre
    pub(crate) genre_index: HashMap<String, Vec<usize>>,
}

impl MovieTable {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            year_index: BTreeMap::new(),
            genre_index: HashMap::new(),
        }
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movies.iter()
    }

    /// All records released in the given year, in load order.
    ///
    /// Requires [`MovieTable::build_indices`] to have run; returns nothing
    /// for years absent from the index.
    pub fn by_year(&self, year: u16) -> impl Iterator<Item = &Movie> + '_ {
        self.year_index
            .get(&year)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&row| &self.movies[row])
    }

    /// All records carrying the given genre, matched case-insensitively.
    pub fn by_genre(&self, genre: &str) -> impl Iterator<Item = &Movie> + '_ {
        let needle = genre.trim().to_lowercase();
        self.genre_index
            .get(needle.as_str())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&row| &self.movies[row])
    }

    /// Append a record. Indices are rebuilt separately, see
    /// [`MovieTable::build_indices`].
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }
}
