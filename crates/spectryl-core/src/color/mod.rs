//! Color science — xyY/XYZ/sRGB conversions and diagram geometry.

pub mod locus;
pub mod space;

pub use locus::{spectral_locus, LocusPoint, SRGB_PRIMARIES};
pub use space::{srgb_encode, xyy_to_xyz, xyz_to_srgb8, Chromaticity, Srgb8, Tristimulus};
