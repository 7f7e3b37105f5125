//! Report generation over the in-memory movie table.
//!
//! This crate provides one operation per report type:
//! - [`year_report`]: rating extremes + average runtime for a year
//! - [`genre_report`]: count + mean rating for a genre
//! - [`top_rated_report`]: the best movies of a year with vote-derived
//!   likes
//! - [`average_runtime`]: mean runtime for a year on its own
//!
//! An empty filter result is the non-fatal [`ReportError`]; callers render
//! it as a message and carry on.
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::MovieTable;
//!
//! let table = MovieTable::load_from_file(path)?;
//! match reports::year_report(&table, 1999) {
//!     Ok(report) => println!("{} tops {}", report.highest.title, report.year),
//!     Err(err) => println!("{err}"),
//! }
//! ```

pub mod error;
pub mod genre;
pub mod top_rated;
pub mod year;

// Re-export main types
pub use error::{ReportError, Result};
pub use genre::{GenreReport, genre_report};
pub use top_rated::{LIKES_SCALE, TopEntry, TopRatedReport, top_rated_report};
pub use year::{RatedEntry, YearReport, average_runtime, year_report};

#[cfg(test)]
pub(crate) mod testing {
    use data_loader::{Movie, MovieTable};

    pub fn movie(
        title: &str,
        year: Option<u16>,
        genres: &[&str],
        rating: Option<f32>,
        votes: Option<u64>,
        runtime_minutes: Option<u32>,
    ) -> Movie {
        Movie {
            id: String::new(),
            title_type: "movie".to_string(),
            title: title.to_string(),
            year,
            runtime_minutes,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating,
            votes,
        }
    }

    pub fn table_of(movies: Vec<Movie>) -> MovieTable {
        let mut table = MovieTable::new();
        for movie in movies {
            table.insert_movie(movie);
        }
        table.build_indices();
        table
    }
}
