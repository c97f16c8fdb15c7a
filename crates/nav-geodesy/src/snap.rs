//! Nearest point on a polyline.
//!
//! # Method
//!
//! For each segment `[start, stop]` the foot of the perpendicular from the
//! query point is found by intersecting the segment with a cross line
//! through the point.  The cross line runs along `bearing(start, stop) ± 90°`
//! and reaches as far as the farther endpoint, so a foot inside the segment
//! is always crossed.  If there is no crossing the foot lies outside the
//! segment and only the endpoints are candidates, which is the clamp.
//!
//! The intersection test itself is planar in lon/lat degrees.  Route
//! segments are short enough (tens to hundreds of metres) that the
//! difference from the great-circle foot is far below polyline precision.
//!
//! Candidates are compared by great-circle distance.  A later candidate
//! replaces the current best only if it is closer by more than
//! [`TIE_TOLERANCE_KM`], so the earliest segment wins ties within rounding.

use nav_core::{Position, Unit};

use crate::measure::{bearing, destination, distance};
use crate::{GeodesyError, GeodesyResult};

/// Distances closer than this are treated as equal: 1 µm.
pub const TIE_TOLERANCE_KM: f64 = 1e-9;

/// Result of snapping a point onto a polyline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSnap {
    /// Nearest point on the line.
    pub point: Position,
    /// Great-circle distance from the query point to `point`, in kilometers.
    pub distance: f64,
    /// Index of the starting vertex of the winning segment.
    pub segment_index: usize,
}

/// Snap `point` onto `line`.
///
/// # Errors
///
/// [`GeodesyError::InvalidGeometry`] if `line` has fewer than 2 points.
pub fn point_on_line(point: Position, line: &[Position]) -> GeodesyResult<LineSnap> {
    if line.len() < 2 {
        return Err(GeodesyError::InvalidGeometry { points: line.len() });
    }

    let mut best = LineSnap {
        point:         line[0],
        distance:      f64::INFINITY,
        segment_index: 0,
    };

    for (i, pair) in line.windows(2).enumerate() {
        let (start, stop) = (pair[0], pair[1]);

        let start_dist = distance(point, start, Unit::Kilometers);
        let stop_dist  = distance(point, stop, Unit::Kilometers);

        if improves(start_dist, best.distance) {
            best = LineSnap { point: start, distance: start_dist, segment_index: i };
        }
        if improves(stop_dist, best.distance) {
            best = LineSnap { point: stop, distance: stop_dist, segment_index: i };
        }

        let reach     = start_dist.max(stop_dist);
        let direction = bearing(start, stop);
        let cross_a   = destination(point, reach, direction + 90.0, Unit::Kilometers);
        let cross_b   = destination(point, reach, direction - 90.0, Unit::Kilometers);

        if let Some(foot) = segment_intersection(cross_a, cross_b, start, stop) {
            let foot_dist = distance(point, foot, Unit::Kilometers);
            if improves(foot_dist, best.distance) {
                best = LineSnap { point: foot, distance: foot_dist, segment_index: i };
            }
        }
    }

    Ok(best)
}

#[inline]
fn improves(candidate: f64, best: f64) -> bool {
    candidate < best - TIE_TOLERANCE_KM
}

/// Planar intersection of segments `a1→a2` and `b1→b2` in lon/lat space.
///
/// Returns `None` for parallel or collinear segments and when the crossing
/// falls outside either segment.
pub(crate) fn segment_intersection(
    a1: Position,
    a2: Position,
    b1: Position,
    b2: Position,
) -> Option<Position> {
    let (ax, ay) = (a2.lon - a1.lon, a2.lat - a1.lat);
    let (bx, by) = (b2.lon - b1.lon, b2.lat - b1.lat);

    let denominator = by * ax - bx * ay;
    if denominator == 0.0 {
        return None;
    }

    let dy = a1.lat - b1.lat;
    let dx = a1.lon - b1.lon;
    let t  = (bx * dy - by * dx) / denominator;
    let u  = (ax * dy - ay * dx) / denominator;

    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(Position::from_lon_lat(a1.lon + t * ax, a1.lat + t * ay))
}
