//! Spectral locus and sRGB gamut reference geometry.
//!
//! The chromaticity diagram widget overlays two static elements on its
//! background: the locus of monochromatic light and the sRGB gamut
//! triangle. Both derive from fixed data, so they are precomputed once.

use serde::{Deserialize, Serialize};

use crate::color::space::{Chromaticity, Srgb8};
use crate::spectral::cmf::CmfTable;

/// Chromaticity coordinates of the sRGB primaries (R, G, B) — the gamut
/// triangle on the diagram.
pub const SRGB_PRIMARIES: [(f64, f64); 3] = [(0.64, 0.33), (0.30, 0.60), (0.15, 0.06)];

/// One point on the spectral locus: a monochromatic wavelength, its
/// chromaticity, and a display color for drawing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocusPoint {
    /// Wavelength in nm.
    pub wavelength: f64,
    pub chromaticity: Chromaticity,
    /// Swatch color: the chromaticity lifted to Y = 1 and converted.
    pub color: Srgb8,
}

/// Trace the spectral locus from the reference table.
///
/// Each table row's (x̄, ȳ, z̄) is normalized to a chromaticity; rows whose
/// components sum to zero have no chromaticity and are skipped. Rows above
/// `max_wavelength` are excluded (diagram backgrounds typically stop short
/// of the near-infrared tail, where the locus doubles back on itself).
pub fn spectral_locus(table: &CmfTable, max_wavelength: f64) -> Vec<LocusPoint> {
    table
        .wavelengths()
        .iter()
        .zip(table.values())
        .filter(|&(&wl, _)| wl <= max_wavelength)
        .filter_map(|(&wl, v)| {
            let chromaticity = Chromaticity::from_xyz((*v).into())?;
            Some(LocusPoint {
                wavelength: wl,
                chromaticity,
                color: chromaticity.display_color(),
            })
        })
        .collect()
}
