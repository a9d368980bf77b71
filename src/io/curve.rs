//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted curve:
//! - model kind + parameters + equation
//! - fit quality (rmse / r2 / n)
//! - the sampled curve for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, CurveGrid, FitQuality, FitResult};
use crate::error::AppError;

/// Build the saved representation of a successful fit.
pub fn curve_file_from_fit(fit: &FitResult) -> Result<CurveFile, AppError> {
    let params = fit.fitted_params()?.clone();

    Ok(CurveFile {
        tool: "fitcurve".to_string(),
        generated_at: Utc::now(),
        model: fit.model,
        params,
        equation: fit.equation.clone(),
        fit_quality: FitQuality {
            rmse: fit.rmse,
            r2: fit.r2,
            n: fit.n_used,
        },
        grid: CurveGrid {
            x: fit.sample_curve.iter().map(|p| p.x).collect(),
            y: fit.sample_curve.iter().map(|p| p.y).collect(),
        },
    })
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelKind, ModelParams, Point};
    use crate::error::FitError;
    use crate::fit::fit_power;

    #[test]
    fn failed_fit_cannot_be_saved() {
        let fit = FitResult::failed(ModelKind::Linear, FitError::TooFewPoints);
        let err = curve_file_from_fit(&fit).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn write_then_read_keeps_model_and_grid() {
        let points = [Point::new(1.0, 3.0), Point::new(2.0, 12.0), Point::new(3.0, 27.0)];
        let fit = fit_power(&points);
        let curve = curve_file_from_fit(&fit).unwrap();

        let path = std::env::temp_dir().join(format!("fitcurve_curve_{}.json", std::process::id()));
        write_curve_json(&path, &curve).unwrap();
        let back = read_curve_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.model, ModelKind::Power);
        assert!(matches!(back.params, ModelParams::Power { .. }));
        assert_eq!(back.grid.x.len(), 101);
        assert_eq!(back.grid.x[0], 1.0);
        assert_eq!(back.grid.x[100], 3.0);
        assert_eq!(back.fit_quality.n, 3);
        assert_eq!(back.equation, fit.equation);
    }

    #[test]
    fn non_finite_metrics_survive_reload() {
        // Constant y: r2 is NaN, which JSON stores as null.
        let points = [Point::new(1.0, 2.0), Point::new(2.0, 2.0), Point::new(3.0, 2.0)];
        let fit = crate::fit::fit_linear(&points);
        assert!(fit.r2.is_nan());
        let curve = curve_file_from_fit(&fit).unwrap();

        let json = serde_json::to_string(&curve).unwrap();
        let back: CurveFile = serde_json::from_str(&json).unwrap();
        assert!(back.fit_quality.r2.is_nan());
        assert_eq!(back.fit_quality.rmse, 0.0);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_curve_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
