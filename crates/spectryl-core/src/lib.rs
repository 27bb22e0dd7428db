//! Spectryl Core — domain layer for spectral color sculpting.
//!
//! This crate contains all curve math and color science: Bézier control
//! polygons with ordering constraints, spectrum interpolation, CIE
//! tristimulus integration, and sRGB conversion. No GUI or framework
//! dependencies.

pub mod color;
pub mod curve;
pub mod pipeline;
pub mod spectral;

// Re-exports for convenience.
pub use color::locus::{spectral_locus, LocusPoint, SRGB_PRIMARIES};
pub use color::space::{xyy_to_xyz, xyz_to_srgb8, Chromaticity, Srgb8, Tristimulus};
pub use curve::{Curve, CurveError, MIN_SEPARATION};
pub use pipeline::{evaluate, evaluate_spectrum, PipelineError, PipelineOutput, DEFAULT_SAMPLES};
pub use spectral::cmf::{CmfInterpolants, CmfTable, TableError};
pub use spectral::spline::{CubicSpline, SplineError};
