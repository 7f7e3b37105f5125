//! Year report: rating extremes and average runtime for one year.

use crate::error::{ReportError, Result};
use data_loader::{Movie, MovieTable};
use serde::Serialize;
use std::cmp::Ordering;

/// One titled entry of a year report.
#[derive(Debug, Clone, Serialize)]
pub struct RatedEntry {
    pub title: String,
    pub rating: f32,
    pub votes: u64,
}

impl RatedEntry {
    fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            rating: movie.rating.unwrap_or(0.0),
            votes: movie.votes.unwrap_or(0),
        }
    }
}

/// Rating extremes and average runtime for one year.
#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    pub year: u16,
    pub highest: RatedEntry,
    pub lowest: RatedEntry,
    /// Mean over the year's known runtimes; `None` when no runtime is known
    pub average_runtime: Option<f32>,
}

/// Report the highest- and lowest-rated movie of a year plus the average
/// runtime over that year's records.
///
/// Only rated records compete for the extremes. Among equal ratings the
/// record with more votes wins, for both slots; ties beyond that are
/// unspecified.
pub fn year_report(table: &MovieTable, year: u16) -> Result<YearReport> {
    let rated: Vec<&Movie> = table.by_year(year).filter(|m| m.rating.is_some()).collect();
    tracing::debug!(year, matches = rated.len(), "year report filter");

    let highest = rated.iter().copied().max_by(|a, b| highest_rank(a, b));
    let lowest = rated.iter().copied().min_by(|a, b| lowest_rank(a, b));
    let (Some(highest), Some(lowest)) = (highest, lowest) else {
        return Err(ReportError::NoMoviesForYear(year));
    };

    Ok(YearReport {
        year,
        highest: RatedEntry::from_movie(highest),
        lowest: RatedEntry::from_movie(lowest),
        average_runtime: average_runtime(table, year),
    })
}

/// Arithmetic mean of the known runtimes of a year's records.
pub fn average_runtime(table: &MovieTable, year: u16) -> Option<f32> {
    let runtimes: Vec<u32> = table.by_year(year).filter_map(|m| m.runtime_minutes).collect();
    if runtimes.is_empty() {
        return None;
    }
    Some(runtimes.iter().sum::<u32>() as f32 / runtimes.len() as f32)
}

// Rating ascending, then votes ascending: max_by yields the top-rated
// record, with more votes winning a rating tie.
fn highest_rank(a: &Movie, b: &Movie) -> Ordering {
    rating_of(a)
        .partial_cmp(&rating_of(b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| votes_of(a).cmp(&votes_of(b)))
}

// Rating ascending, then votes descending: min_by yields the lowest-rated
// record, with more votes winning a rating tie here too.
fn lowest_rank(a: &Movie, b: &Movie) -> Ordering {
    rating_of(a)
        .partial_cmp(&rating_of(b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| votes_of(b).cmp(&votes_of(a)))
}

fn rating_of(movie: &Movie) -> f32 {
    movie.rating.unwrap_or(0.0)
}

fn votes_of(movie: &Movie) -> u64 {
    movie.votes.unwrap_or(0)
}
