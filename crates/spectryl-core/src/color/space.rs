//! xyY/XYZ/sRGB conversions.
//!
//! Conversions use the published sRGB (D65) constants from IEC 61966-2-1.
//! Quantization rounds half away from zero (`f64::round`) — keep pixel
//! expectations in tests on that convention.

use serde::{Deserialize, Serialize};

/// A CIE XYZ tristimulus value. Non-negative for physical spectra; the Y
/// channel carries luminance. Values may exceed 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tristimulus {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Tristimulus {
    /// (0, 0, 0).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new tristimulus value.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component sum, used for chromaticity normalization.
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }
}

impl From<glam::DVec3> for Tristimulus {
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Tristimulus> for glam::DVec3 {
    fn from(t: Tristimulus) -> Self {
        Self::new(t.x, t.y, t.z)
    }
}

/// A chromaticity coordinate (x, y, z) with x + y + z = 1. Discards
/// luminance, retains hue and saturation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Chromaticity {
    /// Project a tristimulus value onto the chromaticity plane.
    ///
    /// Returns `None` when the component sum is not positive — there is no
    /// defined chromaticity for a black (or numerically degenerate)
    /// stimulus, and dividing through would poison rendering with NaN.
    pub fn from_xyz(xyz: Tristimulus) -> Option<Self> {
        let sum = xyz.sum();
        if sum <= 0.0 {
            return None;
        }
        Some(Self {
            x: xyz.x / sum,
            y: xyz.y / sum,
            z: xyz.z / sum,
        })
    }

    /// The display color for this chromaticity at unit luminance:
    /// `XYZtoSRGB(xyYtoXYZ(x, y, 1))`.
    pub fn display_color(&self) -> Srgb8 {
        xyz_to_srgb8(xyy_to_xyz(self.x, self.y, 1.0))
    }
}

/// An 8-bit gamma-encoded sRGB color, clamped into gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Srgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Convert chromaticity-luminance (x, y, Y) to tristimulus XYZ.
///
/// X = x·Y/y, Z = (1−x−y)·Y/y. When y ≤ 0 the coordinate is outside the
/// physically valid chromaticity range; returns (0, 0, 0) rather than
/// dividing by a zero or negative denominator.
pub fn xyy_to_xyz(x: f64, y: f64, big_y: f64) -> Tristimulus {
    if y <= 0.0 {
        return Tristimulus::ZERO;
    }
    Tristimulus {
        x: x * big_y / y,
        y: big_y,
        z: (1.0 - x - y) * big_y / y,
    }
}

/// XYZ → linear sRGB (D65) matrix rows.
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// The sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// f(c) = 0                      c ≤ 0
///        12.92·c                0 < c ≤ 0.0031308
///        1.055·c^(1/2.4) − 0.055   otherwise
/// ```
pub fn srgb_encode(linear: f64) -> f64 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert XYZ (D65) to 8-bit sRGB with gamma correction.
///
/// Applies the XYZ→linear matrix, the transfer function, a clamp to
/// [0, 1], then quantizes with round-half-away-from-zero. The clamp is
/// mandatory: off-gamut chromaticities (common along the spectral locus)
/// would otherwise under/overflow the quantization.
pub fn xyz_to_srgb8(xyz: Tristimulus) -> Srgb8 {
    let channel = |row: [f64; 3]| {
        let linear = row[0] * xyz.x + row[1] * xyz.y + row[2] * xyz.z;
        (srgb_encode(linear).clamp(0.0, 1.0) * 255.0).round() as u8
    };
    Srgb8 {
        r: channel(XYZ_TO_SRGB[0]),
        g: channel(XYZ_TO_SRGB[1]),
        b: channel(XYZ_TO_SRGB[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_xyy_guard_on_non_positive_y() {
        for y in [0.0, -0.1, -5.0] {
            for x in [-1.0, 0.0, 0.3, 2.0] {
                for big_y in [0.0, 1.0, 100.0] {
                    assert_eq!(xyy_to_xyz(x, y, big_y), Tristimulus::ZERO);
                }
            }
        }
    }

    #[test]
    fn test_xyy_to_xyz_identities() {
        let xyz = xyy_to_xyz(0.3127, 0.3290, 1.0);
        assert!((xyz.y - 1.0).abs() < EPSILON);
        assert!((xyz.x - 0.3127 / 0.3290).abs() < EPSILON);
        assert!((xyz.z - (1.0 - 0.3127 - 0.3290) / 0.3290).abs() < EPSILON);
    }

    #[test]
    fn test_chromaticity_sums_to_one() {
        let c = Chromaticity::from_xyz(Tristimulus::new(0.4, 0.7, 0.2)).unwrap();
        assert!((c.x + c.y + c.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_chromaticity_undefined_for_black() {
        assert!(Chromaticity::from_xyz(Tristimulus::ZERO).is_none());
        assert!(Chromaticity::from_xyz(Tristimulus::new(-0.1, 0.05, 0.0)).is_none());
    }

    #[test]
    fn test_gamma_branches_agree_at_threshold() {
        let c: f64 = 0.0031308;
        let linear_branch = 12.92 * c;
        let power_branch = 1.055 * c.powf(1.0 / 2.4) - 0.055;
        assert!(
            (linear_branch - power_branch).abs() < 1e-6,
            "{linear_branch} vs {power_branch}"
        );
        assert_eq!(srgb_encode(0.0), 0.0);
        assert_eq!(srgb_encode(-0.5), 0.0);
    }

    #[test]
    fn test_srgb_encode_is_monotone() {
        let mut prev = srgb_encode(-0.1);
        for i in 0..=1000 {
            let c = i as f64 / 1000.0;
            let encoded = srgb_encode(c);
            assert!(encoded >= prev, "decreased at c={c}");
            prev = encoded;
        }
    }

    #[test]
    fn test_xyz_channels_are_monotone_in_linear_component() {
        // Raising a linear component never lowers its encoded channel.
        let mut prev = 0u8;
        for i in 0..=100 {
            // Pure Y along the G row: G_lin = 1.8758·Y
            let y = i as f64 / 100.0 / 1.8758;
            let g = xyz_to_srgb8(Tristimulus::new(0.0, y, 0.0)).g;
            assert!(g >= prev, "G decreased at Y={y}");
            prev = g;
        }
    }

    #[test]
    fn test_black_maps_to_black() {
        assert_eq!(
            xyz_to_srgb8(Tristimulus::ZERO),
            Srgb8 { r: 0, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_out_of_gamut_is_clamped_not_wrapped() {
        // A spectral-locus green: wildly out of the sRGB gamut
        let xyz = xyy_to_xyz(0.17, 0.80, 1.0);
        let rgb = xyz_to_srgb8(xyz);
        assert_eq!(rgb.b, 0, "negative linear blue must clamp to 0");
        assert_eq!(rgb.g, 255, "overflowing green must clamp to 255");
    }

    #[test]
    fn test_d65_white_is_near_neutral() {
        let xyz = xyy_to_xyz(0.3127, 0.3290, 1.0);
        let rgb = xyz_to_srgb8(xyz);
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 255);
        assert_eq!(rgb.b, 255);
    }

    #[test]
    fn test_quantization_rounds_half_away_from_zero() {
        // The pinned convention is `f64::round`: a tie like an encoded
        // channel of exactly 127.5/255 quantizes to 128, never 127.
        let encoded: f64 = 127.5 / 255.0;
        assert_eq!((encoded.clamp(0.0, 1.0) * 255.0).round() as u8, 128);
    }
}
