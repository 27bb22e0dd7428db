//! Spectral domain — cubic interpolation, CMF tables, and tristimulus integration.

pub mod cmf;
pub mod spectrum;
pub mod spline;

pub use cmf::{CmfInterpolants, CmfTable, TableError};
pub use spectrum::{integrate_tristimulus, spectrum_function, to_spectral_domain};
pub use spline::{CubicSpline, SplineError};
