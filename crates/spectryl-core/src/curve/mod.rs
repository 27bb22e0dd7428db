//! Curve editing — Bézier evaluation and control-point constraints.

pub mod bezier;
pub mod points;

pub use points::{Curve, MIN_SEPARATION};

/// Errors from curve sampling and control-point edits.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("sample count must be at least 2, got {0}")]
    TooFewSamples(usize),
    #[error("a curve needs at least 2 control points, got {0}")]
    TooFewPoints(usize),
    #[error("control point index {index} out of bounds for {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("boundary anchor points cannot be removed")]
    AnchorImmutable,
    #[error("control points must ascend in u (violated at index {0})")]
    Unordered(usize),
    #[error("no room to insert a control point near u={0}")]
    NoRoom(f64),
}
