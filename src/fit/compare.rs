//! Side-by-side comparison of all model families on one point set.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{FitResult, ModelKind, Point};
use crate::fit::fitter::fit;

/// Polynomial degree used by comparisons unless the caller picks one.
pub const DEFAULT_COMPARE_DEGREE: usize = 2;

/// Every model's fit plus the index of the best one.
#[derive(Debug, Clone)]
pub struct FitComparison {
    /// Linear, Polynomial, Exponential, Power, in that order.
    pub fits: Vec<FitResult>,
    /// Index into `fits`; `None` when every model failed.
    pub best: Option<usize>,
}

impl FitComparison {
    pub fn best_fit(&self) -> Option<&FitResult> {
        self.best.map(|i| &self.fits[i])
    }
}

/// Fit all four families (independently, in parallel) and pick the best.
pub fn compare_fits(points: &[Point], degree: usize) -> FitComparison {
    let kinds = [
        ModelKind::Linear,
        ModelKind::Polynomial { degree },
        ModelKind::Exponential,
        ModelKind::Power,
    ];

    let fits: Vec<FitResult> = kinds.par_iter().map(|&kind| fit(points, kind)).collect();
    let best = select_best(&fits);

    if let Some(i) = best {
        debug!(best = %fits[i].model, r2 = fits[i].r2, "comparison complete");
    } else {
        debug!("comparison complete: no model could be fitted");
    }

    FitComparison { fits, best }
}

/// Successful fit with the strictly greatest r2; ties keep the earlier model.
///
/// A NaN r2 only wins when no successful fit has a comparable r2.
fn select_best(fits: &[FitResult]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, f) in fits.iter().enumerate() {
        if !f.is_ok() {
            continue;
        }
        match best {
            None => best = Some(i),
            Some(b) if f.r2 > fits[b].r2 || (fits[b].r2.is_nan() && !f.r2.is_nan()) => {
                best = Some(i)
            }
            Some(_) => {}
        }
    }
    best
}
