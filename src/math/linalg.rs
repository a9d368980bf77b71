//! Dense linear algebra primitive for the polynomial fitter.
//!
//! The polynomial model is linear in its coefficients, so we solve the normal
//! equations directly:
//!
//! ```text
//! β = (XᵀX)⁻¹ Xᵀy
//! ```
//!
//! Degrees are small (≤ ~20), so an explicit inverse is acceptable. The
//! inverse is delegated to nalgebra (LU with partial pivoting).

use nalgebra::{DMatrix, DVector};

use crate::error::{FitError, SINGULAR_MATRIX_MESSAGE};

pub fn transpose(m: &DMatrix<f64>) -> DMatrix<f64> {
    m.transpose()
}

/// Matrix product `a · b`.
///
/// Returns an error instead of panicking when the inner dimensions differ.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
    if a.ncols() != b.nrows() {
        return Err(FitError::LinearAlgebra(format!(
            "Dimension mismatch in matrix multiplication ({}x{} · {}x{})",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }
    Ok(a * b)
}

/// Inverse of a square matrix.
pub fn invert(m: &DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
    if !m.is_square() {
        return Err(FitError::LinearAlgebra(format!(
            "Matrix must be square (size: {}x{})",
            m.nrows(),
            m.ncols()
        )));
    }
    let inv = m
        .clone()
        .try_inverse()
        .ok_or_else(|| FitError::LinearAlgebra(SINGULAR_MATRIX_MESSAGE.to_string()))?;

    // A pivot that underflows rather than hitting exactly zero shows up as
    // non-finite entries; report it the same way.
    if inv.iter().all(|v| v.is_finite()) {
        Ok(inv)
    } else {
        Err(FitError::LinearAlgebra(SINGULAR_MATRIX_MESSAGE.to_string()))
    }
}

/// Solve ordinary least squares via the normal equations.
pub fn solve_normal_equations(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, FitError> {
    let xt = transpose(x);
    let xtx = multiply(&xt, x)?;
    let y = DMatrix::from_column_slice(y.len(), 1, y.as_slice());
    let xty = multiply(&xt, &y)?;
    let beta = multiply(&invert(&xtx)?, &xty)?;
    Ok(beta.column(0).into_owned())
}
