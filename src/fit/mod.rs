//! Curve fitting.
//!
//! Responsibilities:
//!
//! - fit a single model (linear, polynomial, power, exponential)
//! - score fits (RMSE / R²) and sample plot-ready curves
//! - compare every model on the same points

pub mod compare;
pub mod fitter;
pub mod metrics;
pub mod sampler;

pub use compare::*;
pub use fitter::*;
pub use metrics::*;
pub use sampler::*;
