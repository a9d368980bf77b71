//! `curve-fit` library crate.
//!
//! The binary (`fitcurve`) is a thin wrapper around this library so that:
//!
//! - the regression engine is testable without spawning processes
//! - the fitting API can be embedded in other tools
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod codegen;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
