//! Table building: parse the dataset file and build the lookup indices.

use crate::error::Result;
use crate::parser;
use crate::types::MovieTable;
use std::path::Path;

impl MovieTable {
    /// Load the dataset from a spreadsheet export.
    ///
    /// This is the main entry point for loading data: parse the file,
    /// insert the records in row order, then build the year and genre
    /// indices.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let movies = parser::parse_records(path)?;

        let mut table = MovieTable::new();
        for movie in movies {
            table.insert_movie(movie);
        }
        table.build_indices();

        tracing::info!(
            movies = table.len(),
            years = table.year_index.len(),
            genres = table.genre_index.len(),
            "dataset loaded"
        );
        Ok(table)
    }

    /// Build the secondary indices from the current records.
    ///
    /// Genre keys are lowercased so report lookups are case-insensitive.
    /// Safe to call again after further inserts; indices are rebuilt from
    /// scratch.
    pub fn build_indices(&mut self) {
        self.year_index.clear();
        self.genre_index.clear();

        for (row, movie) in self.movies.iter().enumerate() {
            if let Some(year) = movie.year {
                self.year_index
                    .entry(year)
                    .or_insert_with(Vec::new)
                    .push(row);
            }
            for genre in &movie.genres {
                self.genre_index
                    .entry(genre.to_lowercase())
                    .or_insert_with(Vec::new)
                    .push(row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_file_builds_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(
            &path,
            "primaryTitle,startYear,runtimeMinutes,genres,rating,numVotes\n\
             Alpha,1999,100,\"Action, Drama\",7.5,500\n\
             Beta,1999,90,Comedy,6.0,200\n\
             Gamma,2003,110,Drama,8.2,900\n",
        )
        .unwrap();

        let table = MovieTable::load_from_file(&path).unwrap();
        assert_eq!(table.len(), 3);

        let titles: Vec<&str> = table.by_year(1999).map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);

        let dramas: Vec<&str> = table.by_genre("drama").map(|m| m.title.as_str()).collect();
        assert_eq!(dramas, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = MovieTable::load_from_file(Path::new("nope/movies.csv")).unwrap_err();
        assert!(matches!(err, crate::error::LoadError::FileNotFound { .. }));
    }
}
