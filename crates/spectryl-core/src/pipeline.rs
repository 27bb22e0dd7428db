//! The full control-points → color chain in one call.
//!
//! Every user edit triggers this synchronously on the UI thread before the
//! next frame: sample the Bézier curve, map it into the spectral domain,
//! integrate against the CMFs, derive chromaticity and a display swatch.
//! Pure functions of the control-point snapshot plus the static table —
//! no hidden state.

use glam::DVec2;

use crate::color::space::{Chromaticity, Srgb8, Tristimulus};
use crate::curve::{bezier, CurveError};
use crate::spectral::cmf::CmfTable;
use crate::spectral::spectrum::{integrate_tristimulus, spectrum_function};
use crate::spectral::spline::SplineError;

/// Default number of uniform curve samples per evaluation.
pub const DEFAULT_SAMPLES: usize = 100;

/// Errors from a full pipeline evaluation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Spline(#[from] SplineError),
}

/// Everything a listener needs after a curve edit.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOutput {
    pub tristimulus: Tristimulus,
    /// `None` when the tristimulus sum is zero (black spectrum).
    pub chromaticity: Option<Chromaticity>,
    /// Swatch for the current chromaticity at Y = 1; `None` with it.
    pub swatch: Option<Srgb8>,
}

/// Integrate the spectrum described by `control_points` to CIE XYZ.
pub fn evaluate_spectrum(
    control_points: &[DVec2],
    table: &CmfTable,
    samples: usize,
) -> Result<Tristimulus, PipelineError> {
    let sampled = bezier::sample(control_points, samples)?;
    let s = spectrum_function(&sampled, table)?;
    Ok(integrate_tristimulus(&s, &table.interpolants()))
}

/// Run the full chain and derive the display outputs.
///
/// The swatch is computed from the *chromaticity* at unit luminance, not
/// from the raw XYZ, so it shows hue and saturation independent of how
/// much energy the curve encloses.
pub fn evaluate(
    control_points: &[DVec2],
    table: &CmfTable,
    samples: usize,
) -> Result<PipelineOutput, PipelineError> {
    let tristimulus = evaluate_spectrum(control_points, table, samples)?;
    let chromaticity = Chromaticity::from_xyz(tristimulus);
    let swatch = chromaticity.map(|c| c.display_color());
    tracing::debug!(
        "pipeline: XYZ = ({:.4}, {:.4}, {:.4}), chromaticity = {:?}",
        tristimulus.x,
        tristimulus.y,
        tristimulus.z,
        chromaticity.map(|c| (c.x, c.y))
    );
    Ok(PipelineOutput {
        tristimulus,
        chromaticity,
        swatch,
    })
}
