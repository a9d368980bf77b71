//! Error types.
//!
//! - `FitError`: reported (never fatal) failures of the fitting engine. Fitters
//!   fold these into `FitResult::error` instead of returning them.
//! - `AppError`: front-end failures (I/O, CSV schema, arguments) carrying a
//!   process exit code.

use serde::{Serialize, Serializer};

/// Message used when the matrix in the normal equations cannot be inverted.
pub const SINGULAR_MATRIX_MESSAGE: &str = "Cannot calculate inverse, determinant is zero";

/// Why a fitter could not produce a usable fit.
///
/// The display text of each variant is the user-facing message and is shown
/// verbatim by front ends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    #[error("No data points provided.")]
    NoData,

    #[error("At least two points are required for linear fit.")]
    TooFewPoints,

    /// Nothing survived the `x > 0 && y > 0` filter of a log-linearized model.
    #[error("No points with positive x and y for {0} fit.")]
    NoPositivePoints(&'static str),

    #[error("At least two valid points are required.")]
    TooFewValidPoints,

    #[error("Denominator zero, cannot compute fit (check points).")]
    ZeroDenominator,

    /// Zero denominator in the log-transformed regression (power/exponential).
    #[error("Denominator is zero, can't compute fit (check data points).")]
    ZeroLogDenominator,

    #[error("Computed parameters are not finite numbers.")]
    NonFiniteParameters,

    /// Failure inside the linear algebra primitive; carries its message.
    #[error("{0}")]
    LinearAlgebra(String),

    #[error("Degree must be at least 1.")]
    DegreeTooLow,

    #[error("Degree must be less than number of points.")]
    DegreeTooHigh,
}

/// Coarse classification of `FitError`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    InsufficientData,
    DegenerateInput,
    NumericOverflow,
    LinearAlgebraFailure,
    InvalidParameter,
}

impl FitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FitError::NoData
            | FitError::TooFewPoints
            | FitError::NoPositivePoints(_)
            | FitError::TooFewValidPoints => ErrorCategory::InsufficientData,
            FitError::ZeroDenominator | FitError::ZeroLogDenominator => ErrorCategory::DegenerateInput,
            FitError::NonFiniteParameters => ErrorCategory::NumericOverflow,
            FitError::LinearAlgebra(_) => ErrorCategory::LinearAlgebraFailure,
            FitError::DegreeTooLow | FitError::DegreeTooHigh => ErrorCategory::InvalidParameter,
        }
    }
}

// Serialized as the plain message so JSON consumers can display it directly.
impl Serialize for FitError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(4, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_shown_verbatim() {
        assert_eq!(
            FitError::NoPositivePoints("power").to_string(),
            "No points with positive x and y for power fit."
        );
        assert_eq!(
            FitError::LinearAlgebra(SINGULAR_MATRIX_MESSAGE.to_string()).to_string(),
            SINGULAR_MATRIX_MESSAGE
        );
    }

    #[test]
    fn categories_cover_taxonomy() {
        assert_eq!(FitError::TooFewValidPoints.category(), ErrorCategory::InsufficientData);
        assert_eq!(FitError::ZeroLogDenominator.category(), ErrorCategory::DegenerateInput);
        assert_eq!(FitError::NonFiniteParameters.category(), ErrorCategory::NumericOverflow);
        assert_eq!(FitError::DegreeTooHigh.category(), ErrorCategory::InvalidParameter);
    }

    #[test]
    fn fit_error_maps_to_exit_code_four() {
        let app: AppError = FitError::NoData.into();
        assert_eq!(app.exit_code(), 4);
        assert_eq!(app.to_string(), "No data points provided.");
    }
}
