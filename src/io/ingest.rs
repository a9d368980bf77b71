//! CSV ingest.
//!
//! Turns a CSV with `x` and `y` columns into the point set consumed by the
//! fitters.
//!
//! - header row required; `x` / `y` located case-insensitively
//! - rows whose `x` or `y` is not a number (including empty cells) are skipped
//! - input order is preserved; duplicates are kept

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::Point;
use crate::error::AppError;

/// Ingest output: parsed points plus row accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedPoints {
    pub points: Vec<Point>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Load points from a CSV file.
pub fn load_points(path: &Path) -> Result<IngestedPoints, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_points(file)
}

/// Read points from any CSV source.
pub fn read_points<R: Read>(source: R) -> Result<IngestedPoints, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let x_idx = required_column(&header_map, "x")?;
    let y_idx = required_column(&header_map, "y")?;

    let mut points = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header, and lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let parsed = result
            .ok()
            .and_then(|record| Some(Point::new(parse_number(&record, x_idx)?, parse_number(&record, y_idx)?)));

        match parsed {
            Some(point) => points.push(point),
            None => {
                rows_skipped += 1;
                debug!(line, "skipping non-numeric CSV row");
            }
        }
    }

    debug!(rows_read, rows_skipped, "CSV ingest complete");

    Ok(IngestedPoints {
        points,
        rows_read,
        rows_skipped,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

fn parse_number(record: &StringRecord, idx: usize) -> Option<f64> {
    let raw = record.get(idx)?;
    let v: f64 = raw.parse().ok()?;
    (!v.is_nan()).then_some(v)
}
