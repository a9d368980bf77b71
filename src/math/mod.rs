//! Mathematical utilities: the normal-equation solver and closed-form
//! simple regression.

pub mod linalg;
pub mod regression;

pub use linalg::*;
pub use regression::*;
