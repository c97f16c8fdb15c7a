//! Whole-line measurements.

use nav_core::{Position, Unit};

use crate::measure::distance;
use crate::snap::point_on_line;
use crate::GeodesyResult;

/// Length of `line` measured along its vertices, in `unit`.
///
/// Lines with fewer than two points have length `0.0`.
pub fn line_distance(line: &[Position], unit: Unit) -> f64 {
    line.windows(2)
        .map(|pair| distance(pair[0], pair[1], unit))
        .sum()
}

/// The part of `line` between the snaps of `start` and `stop`.
///
/// Both points are first snapped with [`point_on_line`]; the result runs
/// from the earlier snap to the later one (by segment index) through every
/// intermediate vertex.  The output always has at least two points.
///
/// # Errors
///
/// Propagates [`GeodesyError::InvalidGeometry`](crate::GeodesyError) if
/// `line` has fewer than 2 points.
pub fn line_slice(start: Position, stop: Position, line: &[Position]) -> GeodesyResult<Vec<Position>> {
    let start_snap = point_on_line(start, line)?;
    let stop_snap  = point_on_line(stop, line)?;

    let (first, last) = if start_snap.segment_index <= stop_snap.segment_index {
        (start_snap, stop_snap)
    } else {
        (stop_snap, start_snap)
    };

    let interior = &line[first.segment_index + 1..=last.segment_index];

    let mut clipped = Vec::with_capacity(interior.len() + 2);
    clipped.push(first.point);
    clipped.extend_from_slice(interior);
    clipped.push(last.point);
    Ok(clipped)
}
