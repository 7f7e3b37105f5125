//! Genre report: match count and average rating for one genre.

use crate::error::{ReportError, Result};
use data_loader::MovieTable;
use serde::Serialize;

/// Count and mean rating of the records carrying a genre.
#[derive(Debug, Clone, Serialize)]
pub struct GenreReport {
    /// The genre as the caller spelled it
    pub genre: String,
    pub count: usize,
    pub average_rating: f32,
}

/// Report how many rated movies carry the genre and their mean rating.
///
/// Matching is case-insensitive; unrated records don't count.
pub fn genre_report(table: &MovieTable, genre: &str) -> Result<GenreReport> {
    let ratings: Vec<f32> = table.by_genre(genre).filter_map(|m| m.rating).collect();
    tracing::debug!(genre, matches = ratings.len(), "genre report filter");

    if ratings.is_empty() {
        return Err(ReportError::NoMoviesForGenre(genre.to_string()));
    }

    let average_rating = ratings.iter().sum::<f32>() / ratings.len() as f32;
    Ok(GenreReport {
        genre: genre.to_string(),
        count: ratings.len(),
        average_rating,
    })
}
