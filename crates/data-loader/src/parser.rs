//! Parser for spreadsheet exports of the movie dataset.
//!
//! The input is a delimited text export of the sheet: a header row naming
//! the columns, then one row per movie. Column order is free; unknown
//! columns are ignored. Recognized names follow the dataset:
//! `id`, `titleType`, `primaryTitle`, `originalTitle`, `startYear`,
//! `runtimeMinutes`, `genres`, `rating`, `numVotes`.
//!
//! Numeric cells are coerced leniently: empty cells, `\N`, `null`, `NaN`,
//! and unparseable text become missing values instead of failing the row.

use crate::error::{LoadError, Result};
use crate::types::Movie;
use std::fs;
use std::path::Path;

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Header {
    id: Option<usize>,
    title_type: Option<usize>,
    primary_title: Option<usize>,
    original_title: Option<usize>,
    start_year: Option<usize>,
    runtime_minutes: Option<usize>,
    genres: Option<usize>,
    rating: Option<usize>,
    num_votes: Option<usize>,
    /// Expected field count for every data row
    width: usize,
}

impl Header {
    fn resolve(fields: &[String]) -> Result<Self> {
        let mut header = Header::default();
        for (idx, name) in fields.iter().enumerate() {
            match name.trim() {
                "id" => header.id = Some(idx),
                "titleType" => header.title_type = Some(idx),
                "primaryTitle" => header.primary_title = Some(idx),
                "originalTitle" => header.original_title = Some(idx),
                "startYear" => header.start_year = Some(idx),
                "runtimeMinutes" => header.runtime_minutes = Some(idx),
                "genres" => header.genres = Some(idx),
                "rating" => header.rating = Some(idx),
                "numVotes" => header.num_votes = Some(idx),
                _ => {}
            }
        }
        if header.primary_title.is_none() && header.original_title.is_none() {
            return Err(LoadError::MissingColumn {
                column: "originalTitle/primaryTitle",
            });
        }
        header.width = fields.len();
        Ok(header)
    }
}

/// Parse the dataset file into movie records, in row order.
///
/// Rows whose title is missing after the `originalTitle` -> `primaryTitle`
/// fallback are skipped; a row with the wrong field count is fatal.
pub fn parse_records(path: &Path) -> Result<Vec<Movie>> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    // Read as bytes and convert lossily; exports aren't always clean UTF-8
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let delimiter = delimiter_for(path);

    let mut rows = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = rows.next() else {
        return Err(LoadError::EmptyFile {
            path: path.display().to_string(),
        });
    };
    let header = Header::resolve(&split_fields(header_line, delimiter))?;

    let mut movies = Vec::new();
    let mut skipped_untitled = 0usize;
    for (line_no, line) in rows {
        let fields = split_fields(line, delimiter);
        if fields.len() != header.width {
            return Err(LoadError::Format {
                line: line_no,
                reason: format!(
                    "expected {} fields but found {}",
                    header.width,
                    fields.len()
                ),
            });
        }

        let title = {
            let original = cell(&fields, header.original_title);
            if is_missing(original) {
                cell(&fields, header.primary_title)
            } else {
                original
            }
        };
        if is_missing(title) {
            skipped_untitled += 1;
            continue;
        }

        movies.push(Movie {
            id: coerce_text(cell(&fields, header.id)),
            title_type: coerce_text(cell(&fields, header.title_type)),
            title: title.trim().to_string(),
            year: coerce_int(cell(&fields, header.start_year))
                .and_then(|v| u16::try_from(v).ok()),
            runtime_minutes: coerce_int(cell(&fields, header.runtime_minutes))
                .and_then(|v| u32::try_from(v).ok()),
            genres: split_genres(cell(&fields, header.genres)),
            rating: coerce_float(cell(&fields, header.rating)),
            votes: coerce_int(cell(&fields, header.num_votes))
                .and_then(|v| u64::try_from(v).ok()),
        });
    }

    if skipped_untitled > 0 {
        tracing::debug!(rows = skipped_untitled, "skipped rows with no usable title");
    }
    Ok(movies)
}

/// Tab for `.tsv`/`.tab` exports, comma otherwise.
fn delimiter_for(path: &Path) -> char {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") | Some("tab") => '\t',
        _ => ',',
    }
}

/// Split one row into fields, honoring double-quoted fields.
///
/// A quoted field may contain the delimiter; a doubled quote inside a
/// quoted field is an escaped quote.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && current.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

/// Missing-value markers used by spreadsheet exports of the dataset.
fn is_missing(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty()
        || trimmed == "\\N"
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("nan")
}

/// Fetch the field at a resolved column index, or `""` when the column
/// is absent from the header or missing from this row.
fn cell(fields: &[String], index: Option<usize>) -> &str {
    match index {
        Some(i) => fields.get(i).map(String::as_str).unwrap_or(""),
        None => "",
    }
}

fn coerce_text(s: &str) -> String {
    if is_missing(s) {
        String::new()
    } else {
        s.trim().to_string()
    }
}

/// Lenient integer coercion. Integer cells serialized as floats
/// (e.g. `1995.0`) still parse; anything else missing or unparseable
/// coerces to `None`.
fn coerce_int(s: &str) -> Option<i64> {
    if is_missing(s) {
        return None;
    }
    let trimmed = s.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn coerce_float(s: &str) -> Option<f32> {
    if is_missing(s) {
        None
    } else {
        s.trim().parse().ok()
    }
}

/// Split a genres cell on commas, dropping empties and missing markers.
fn split_genres(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty() && !is_missing(g))
        .map(str::to_string)
        .collect()
}
