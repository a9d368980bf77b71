//! Shared "fit pipeline" logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV ingest + inline points -> fit (or comparison)
//!
//! The handlers in `app` then focus on presentation (printing, plotting, exports).

use std::path::Path;

use tracing::info;

use crate::domain::{FitResult, Point, RunConfig};
use crate::error::AppError;
use crate::fit::FitComparison;
use crate::io::ingest::IngestedPoints;

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedPoints,
    pub fit: FitResult,
}

/// Collect points from an optional CSV file followed by inline points.
///
/// Returns exit code 3 when neither source yields a single point.
pub fn gather_points(csv_path: Option<&Path>, inline: &[Point]) -> Result<IngestedPoints, AppError> {
    let mut ingest = match csv_path {
        Some(path) => crate::io::ingest::load_points(path)?,
        None => IngestedPoints {
            points: Vec::new(),
            rows_read: 0,
            rows_skipped: 0,
        },
    };

    if ingest.rows_skipped > 0 {
        info!(
            rows_read = ingest.rows_read,
            rows_skipped = ingest.rows_skipped,
            "skipped CSV rows without numeric x/y"
        );
    }

    ingest.points.extend_from_slice(inline);
    ingest.rows_read += inline.len();

    if ingest.points.is_empty() {
        return Err(AppError::new(
            3,
            "No data points: pass --csv PATH and/or --point X,Y.",
        ));
    }
    Ok(ingest)
}

/// Execute the fitting pipeline for the configured model.
///
/// Without a model the interpolating polynomial is fitted; its degree
/// follows the number of gathered points.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, AppError> {
    let ingest = gather_points(config.csv_path.as_deref(), &config.inline_points)?;
    let fit = match config.model {
        Some(model) => crate::fit::fit(&ingest.points, model),
        None => crate::fit::fit_interpolation(&ingest.points),
    };
    Ok(RunOutput { ingest, fit })
}

/// Fit every model family over the gathered points.
pub fn run_compare(
    csv_path: Option<&Path>,
    inline: &[Point],
    degree: usize,
) -> Result<(IngestedPoints, FitComparison), AppError> {
    let ingest = gather_points(csv_path, inline)?;
    let comparison = crate::fit::compare_fits(&ingest.points, degree);
    Ok((ingest, comparison))
}
