//! Bézier curve evaluation via de Casteljau's algorithm.
//!
//! The editor hands us its control polygon in normalized [0,1]² space.
//! Evaluation uses repeated linear interpolation, which stays numerically
//! stable for any control-point count — no large binomial coefficients,
//! unlike direct Bernstein evaluation.

use glam::DVec2;

use crate::curve::CurveError;

/// Evaluate the Bézier curve defined by `control_points` at parameter `t`.
///
/// Each round collapses the current list of k points into k−1 via
/// `P_i' = (1−t)·P_i + t·P_{i+1}`; after N−1 rounds one point remains —
/// the curve point. An empty slice evaluates to the origin.
pub fn de_casteljau(control_points: &[DVec2], t: f64) -> DVec2 {
    if control_points.is_empty() {
        return DVec2::ZERO;
    }

    let mut points = control_points.to_vec();
    let n = points.len();
    for r in 1..n {
        for i in 0..n - r {
            points[i] = points[i].lerp(points[i + 1], t);
        }
    }
    points[0]
}

/// Sample the curve at `sample_count` uniformly spaced parameters.
///
/// Parameters are `t_i = i/(count−1)`, so the first and last samples are
/// the exact endpoint evaluations. Samples are uniform in *parameter*, not
/// in x (t is not arc length); downstream interpolation treats them as
/// unevenly spaced data points.
///
/// Fails when `sample_count < 2` — a single sample cannot span a curve.
pub fn sample(control_points: &[DVec2], sample_count: usize) -> Result<Vec<DVec2>, CurveError> {
    if sample_count < 2 {
        return Err(CurveError::TooFewSamples(sample_count));
    }

    let last = (sample_count - 1) as f64;
    Ok((0..sample_count)
        .map(|i| de_casteljau(control_points, i as f64 / last))
        .collect())
}
