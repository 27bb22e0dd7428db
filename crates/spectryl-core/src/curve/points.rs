//! Editable control polygon with ordering constraints.
//!
//! The spectrum editor needs the curve to stay a single-valued function of
//! its domain axis. Control points are therefore kept strictly ascending
//! in u with a minimum separation, and the two boundary anchors are pinned
//! to zero amplitude (the spectrum's zero-crossings at the domain edges).

use glam::DVec2;

use crate::curve::CurveError;

/// Minimum separation between neighboring control-point u-coordinates.
///
/// Prevents degenerate zero-length segments that would make downstream
/// interpolation ill-defined.
pub const MIN_SEPARATION: f64 = 1e-5;

/// Default control polygon: a broadband arch with anchored endpoints.
pub const DEFAULT_CONTROL_POINTS: [DVec2; 4] = [
    DVec2::new(0.2, 0.0),
    DVec2::new(0.4, 0.4),
    DVec2::new(0.7, 0.5),
    DVec2::new(0.9, 0.0),
];

/// An editable Bézier control polygon in normalized [0,1]² space.
///
/// Invariants, upheld by every mutating method:
/// - at least 2 control points;
/// - u-coordinates strictly ascending, separated by at least
///   [`MIN_SEPARATION`];
/// - the first and last point's v is exactly 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<DVec2>,
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            points: DEFAULT_CONTROL_POINTS.to_vec(),
        }
    }
}

impl Curve {
    /// Create a curve from an explicit point sequence.
    ///
    /// Fails when fewer than 2 points are given or when the u-coordinates
    /// are not ascending by at least [`MIN_SEPARATION`]. Endpoint
    /// amplitudes are pinned to 0 and interior amplitudes clamped to
    /// [0,1], matching what the edit operations enforce.
    pub fn new(mut points: Vec<DVec2>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        for i in 1..points.len() {
            if points[i].x - points[i - 1].x < MIN_SEPARATION {
                return Err(CurveError::Unordered(i));
            }
        }

        let last = points.len() - 1;
        points[0].y = 0.0;
        points[last].y = 0.0;
        for p in &mut points[1..last] {
            p.y = p.y.clamp(0.0, 1.0);
        }

        Ok(Self { points })
    }

    /// The current control points, ascending in u.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Move the point at `index` toward `proposed`, returning the position
    /// actually applied after constraint clamping.
    ///
    /// u is clamped strictly inside the neighboring points' u-range
    /// (endpoints clamp against the [0,1] domain edge on their open side).
    /// The first and last point's v is forced to 0 regardless of the
    /// proposal; interior v is clamped to [0,1].
    pub fn move_point(&mut self, index: usize, proposed: DVec2) -> Result<DVec2, CurveError> {
        let len = self.points.len();
        if index >= len {
            return Err(CurveError::IndexOutOfBounds { index, len });
        }

        let lo = if index == 0 {
            0.0
        } else {
            self.points[index - 1].x + MIN_SEPARATION
        };
        let hi = if index == len - 1 {
            1.0
        } else {
            self.points[index + 1].x - MIN_SEPARATION
        };

        let u = proposed.x.clamp(lo, hi);
        let v = if index == 0 || index == len - 1 {
            0.0
        } else {
            proposed.y.clamp(0.0, 1.0)
        };

        let applied = DVec2::new(u, v);
        self.points[index] = applied;
        Ok(applied)
    }

    /// Insert a new interior point near `(u, v)`, keeping the sequence
    /// ordered. Returns the index the point landed at.
    ///
    /// The point is never placed before the first or after the last anchor;
    /// u is clamped [`MIN_SEPARATION`] away from both chosen neighbors.
    /// Fails when the gap between those neighbors is too narrow.
    pub fn insert(&mut self, u: f64, v: f64) -> Result<usize, CurveError> {
        let len = self.points.len();
        let index = self.points.partition_point(|p| p.x < u).clamp(1, len - 1);

        let lo = self.points[index - 1].x + MIN_SEPARATION;
        let hi = self.points[index].x - MIN_SEPARATION;
        if lo > hi {
            return Err(CurveError::NoRoom(u));
        }

        let point = DVec2::new(u.clamp(lo, hi), v.clamp(0.0, 1.0));
        self.points.insert(index, point);
        Ok(index)
    }

    /// Remove the point at `index`, returning it.
    ///
    /// The boundary anchors are not removable, which also guarantees the
    /// curve never drops below 2 points.
    pub fn remove(&mut self, index: usize) -> Result<DVec2, CurveError> {
        let len = self.points.len();
        if index >= len {
            return Err(CurveError::IndexOutOfBounds { index, len });
        }
        if index == 0 || index == len - 1 {
            return Err(CurveError::AnchorImmutable);
        }
        Ok(self.points.remove(index))
    }
}
