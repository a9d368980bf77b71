//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input points and model selectors (`Point`, `ModelKind`, `ModelFamily`)
//! - fit outputs (`FitResult`, `ModelParams`, `FitQuality`)
//! - run configuration and the saved curve schema (`RunConfig`, `CurveFile`)

pub mod types;

pub use types::*;
