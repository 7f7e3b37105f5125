//! Top-rated report: the best movies of a year, with vote-derived likes.

use crate::error::{ReportError, Result};
use data_loader::{Movie, MovieTable};
use serde::Serialize;
use std::cmp::Ordering;

/// Upper bound for a likes bar; also the rescaling reference.
pub const LIKES_SCALE: u64 = 80;

/// One ranked entry of a top-rated report.
#[derive(Debug, Clone, Serialize)]
pub struct TopEntry {
    pub title: String,
    pub rating: f32,
    pub votes: u64,
    /// Votes rescaled to at most [`LIKES_SCALE`] display units
    pub likes: u64,
}

/// The top-rated movies of one year, best first.
#[derive(Debug, Clone, Serialize)]
pub struct TopRatedReport {
    pub year: u16,
    pub entries: Vec<TopEntry>,
}

/// Report the `limit` best-rated movies of a year.
///
/// Records need a rating and a positive vote count to be ranked. The sort
/// key is rating descending with votes descending as the tie-break; the
/// sort is stable, so equal keys keep load order. Votes never blend into
/// the rating: they only break ties and feed the likes bars, which are
/// scaled relative to the top entry's vote count.
pub fn top_rated_report(table: &MovieTable, year: u16, limit: usize) -> Result<TopRatedReport> {
    let mut ranked: Vec<&Movie> = table
        .by_year(year)
        .filter(|m| m.rating.is_some() && m.votes.unwrap_or(0) > 0)
        .collect();
    tracing::debug!(year, matches = ranked.len(), "top rated filter");

    if ranked.is_empty() {
        return Err(ReportError::NoMoviesForYear(year));
    }

    ranked.sort_by(|a, b| {
        b.rating
            .unwrap_or(0.0)
            .partial_cmp(&a.rating.unwrap_or(0.0))
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.votes.unwrap_or(0).cmp(&a.votes.unwrap_or(0)))
    });
    ranked.truncate(limit);

    let max_votes = ranked.first().and_then(|m| m.votes).unwrap_or(0);
    let divisor = likes_divisor(max_votes);

    let entries = ranked
        .into_iter()
        .map(|m| {
            let votes = m.votes.unwrap_or(0);
            TopEntry {
                title: m.title.clone(),
                rating: m.rating.unwrap_or(0.0),
                votes,
                likes: likes_for(votes, divisor),
            }
        })
        .collect();

    Ok(TopRatedReport { year, entries })
}

/// Divisor that maps the top entry's votes to roughly [`LIKES_SCALE`]
/// units.
fn likes_divisor(max_votes: u64) -> u64 {
    max_votes.div_ceil(LIKES_SCALE).max(1)
}

fn likes_for(votes: u64, divisor: u64) -> u64 {
    if votes == 0 {
        return 0;
    }
    votes.div_ceil(divisor).min(LIKES_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, table_of};

    #[test]
    fn test_sorted_by_rating_then_votes() {
        let table = table_of(vec![
            movie("Third", Some(1999), &[], Some(7.0), Some(500), None),
            movie("First", Some(1999), &[], Some(9.0), Some(100), None),
            movie("Second", Some(1999), &[], Some(7.0), Some(900), None),
        ]);

        let report = top_rated_report(&table, 1999, 10).unwrap();
        let titles: Vec<&str> = report.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_truncated_to_limit() {
        let movies = (0..15)
            .map(|i| {
                movie(
                    &format!("M{i}"),
                    Some(1999),
                    &[],
                    Some(5.0 + i as f32 * 0.1),
                    Some(10),
                    None,
                )
            })
            .collect();
        let table = table_of(movies);

        let report = top_rated_report(&table, 1999, 10).unwrap();
        assert_eq!(report.entries.len(), 10);
    }

    #[test]
    fn test_needs_rating_and_votes() {
        let table = table_of(vec![
            movie("Ranked", Some(1999), &[], Some(6.0), Some(12), None),
            movie("No Votes", Some(1999), &[], Some(9.9), Some(0), None),
            movie("No Rating", Some(1999), &[], None, Some(5000), None),
        ]);

        let report = top_rated_report(&table, 1999, 10).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].title, "Ranked");
    }

    #[test]
    fn test_empty_year() {
        let table = table_of(vec![]);
        assert_eq!(
            top_rated_report(&table, 1999, 10).unwrap_err(),
            ReportError::NoMoviesForYear(1999)
        );
    }

    #[test]
    fn test_likes_bounded_by_scale() {
        // Top entry's votes set the divisor; nobody exceeds the scale
        let divisor = likes_divisor(1_000_000);
        assert_eq!(likes_for(1_000_000, divisor), LIKES_SCALE);
        assert!(likes_for(999_999, divisor) <= LIKES_SCALE);
        assert_eq!(likes_for(0, divisor), 0);

        // Small vote counts keep a unit divisor
        assert_eq!(likes_divisor(0), 1);
        assert_eq!(likes_divisor(80), 1);
        assert_eq!(likes_for(3, 1), 3);
    }

    #[test]
    fn test_likes_monotone_in_votes() {
        let divisor = likes_divisor(40_000);
        let mut last = 0;
        for votes in [1, 100, 5_000, 20_000, 40_000] {
            let likes = likes_for(votes, divisor);
            assert!(likes >= last);
            last = likes;
        }
    }
}
