//! The route-progress tracker.
//!
//! # Query model
//!
//! Every method is a pure function of `(position, route, index)` plus the
//! tracker's immutable [`TrackerConfig`].  Geometries are decoded on demand
//! at the route's precision; nothing is cached, so a single tracker can be
//! shared by reference across threads and location callbacks.
//!
//! # Step membership
//!
//! A fix belongs to whichever step's geometry it is nearest to.  Because the
//! last vertex of a step is also the first vertex of the next one, a fix at
//! that vertex is at distance zero from both.  Ties within
//! `boundary_epsilon_km` are broken by where the snap sits on each step:
//!
//! | Placement   | Meaning                                          | Rank |
//! |-------------|--------------------------------------------------|------|
//! | `Along`     | before the final vertex of a non-empty step      | 0    |
//! | `ZeroLength`| the step has no length (e.g. an arrival step)    | 1    |
//! | `AtEnd`     | on the final vertex of a non-empty step          | 2    |
//!
//! Lower rank wins; equal rank goes to the earliest step.
//!
//! # Units
//!
//! All distances returned here are kilometers.

use nav_core::{Position, Unit};
use nav_geodesy::{LineSnap, distance, line_distance, point_on_line};
use tracing::{debug, trace};

use crate::config::check_distance;
use crate::{
    ProgressError, ProgressResult, Route, RouteProgress, StepIndex, TrackerConfig,
};

// ── Candidate ranking ─────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SnapPlacement {
    Along,
    ZeroLength,
    AtEnd,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct StepCandidate {
    pub(crate) index: StepIndex,
    distance:         f64,
    placement:        SnapPlacement,
}

// ── RouteProgressTracker ──────────────────────────────────────────────────────

/// Answers "where am I on this route?" for live position fixes.
///
/// # Example
///
/// ```rust,ignore
/// let tracker = RouteProgressTracker::default();
/// let step    = tracker.closest_step(fix, &route)?;
/// let to_turn = tracker.distance_to_next_step(fix, &route, step)?;
/// if tracker.is_off_route(fix, &route)? {
///     // request a new route
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct RouteProgressTracker {
    config: TrackerConfig,
}

impl RouteProgressTracker {
    /// Create a tracker with `config`.
    ///
    /// # Errors
    ///
    /// `ProgressError::Config` if the config fails [`TrackerConfig::validate`].
    pub fn new(config: TrackerConfig) -> ProgressResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Same tracker with a different off-route threshold.
    pub fn with_off_route_threshold_km(mut self, threshold_km: f64) -> ProgressResult<Self> {
        check_distance("off_route_threshold_km", threshold_km)?;
        self.config.off_route_threshold_km = threshold_km;
        Ok(self)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn off_route_threshold_km(&self) -> f64 {
        self.config.off_route_threshold_km
    }

    // ── Step membership ───────────────────────────────────────────────────

    /// `true` iff `step` is the [`closest_step`](Self::closest_step) to
    /// `position`.
    pub fn is_in_step(
        &self,
        position: Position,
        route:    &Route,
        step:     impl Into<StepIndex>,
    ) -> ProgressResult<bool> {
        let index = step.into();
        route.step(index)?;
        Ok(self.closest_step(position, route)? == index)
    }

    /// The step whose geometry is nearest to `position`.
    ///
    /// # Errors
    ///
    /// `EmptyRoute` if the route has no steps; geometry errors from any
    /// step that fails to decode.
    pub fn closest_step(&self, position: Position, route: &Route) -> ProgressResult<StepIndex> {
        let epsilon = self.config.boundary_epsilon_km;
        let indices: Vec<StepIndex> = route.step_indices().collect();
        if indices.is_empty() {
            return Err(ProgressError::EmptyRoute);
        }

        #[cfg(not(feature = "parallel"))]
        let candidates: Vec<StepCandidate> = indices
            .iter()
            .map(|&index| evaluate_step(position, route, index, epsilon))
            .collect::<ProgressResult<_>>()?;

        #[cfg(feature = "parallel")]
        let candidates: Vec<StepCandidate> = {
            use rayon::prelude::*;

            // Indexed collect keeps travel order, so the fold below sees the
            // same sequence as the sequential path.
            indices
                .par_iter()
                .map(|&index| evaluate_step(position, route, index, epsilon))
                .collect::<ProgressResult<_>>()?
        };

        let best = candidates
            .into_iter()
            .reduce(|best, next| prefer(best, next, epsilon))
            .ok_or(ProgressError::EmptyRoute)?;

        trace!(
            %position,
            step = %best.index,
            distance_km = best.distance,
            placement = ?best.placement,
            "closest step resolved"
        );
        Ok(best.index)
    }

    // ── Per-step distances ────────────────────────────────────────────────

    /// Distance from `position` to its snap onto `step`'s geometry.
    ///
    /// Zero for any vertex of the step, in particular its first coordinate.
    pub fn distance_to_step(
        &self,
        position: Position,
        route:    &Route,
        step:     impl Into<StepIndex>,
    ) -> ProgressResult<f64> {
        let snap = self.snap_onto_step(position, route, step.into())?;
        Ok(distance(position, snap.point, Unit::Kilometers))
    }

    /// Distance along `step`'s geometry from the snap of `position` to the
    /// step's final vertex, i.e. the start of the next maneuver.
    ///
    /// At the step's first coordinate this reproduces the step's length.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `step` is the last step of its leg.  Progress is
    /// not aggregated across leg boundaries.
    pub fn distance_to_next_step(
        &self,
        position: Position,
        route:    &Route,
        step:     impl Into<StepIndex>,
    ) -> ProgressResult<f64> {
        let index = step.into();
        if route.is_last_in_leg(index)? {
            let next = StepIndex { leg: index.leg, step: index.step + 1 };
            return Err(ProgressError::IndexOutOfRange {
                index: next,
                legs:  route.legs.len(),
                steps: route.legs[index.leg].steps.len(),
            });
        }
        let coords = route.decode_step(index)?;
        remaining_along(position, &coords)
    }

    /// Perpendicular projection of `position` onto `step`'s geometry.
    ///
    /// Returns `position` itself (up to rounding) when it already lies on
    /// the polyline.
    pub fn snap_to_route(
        &self,
        position: Position,
        route:    &Route,
        step:     impl Into<StepIndex>,
    ) -> ProgressResult<Position> {
        Ok(self.snap_onto_step(position, route, step.into())?.point)
    }

    // ── Whole-route queries ───────────────────────────────────────────────

    /// `true` if `position` is at least the configured threshold (less
    /// `boundary_epsilon_km`) away from the concatenated step geometry.
    pub fn is_off_route(&self, position: Position, route: &Route) -> ProgressResult<bool> {
        self.is_off_route_with_threshold(position, route, self.config.off_route_threshold_km)
    }

    /// As [`is_off_route`](Self::is_off_route) with an explicit threshold
    /// for this query only.
    pub fn is_off_route_with_threshold(
        &self,
        position:     Position,
        route:        &Route,
        threshold_km: f64,
    ) -> ProgressResult<bool> {
        check_distance("off_route_threshold_km", threshold_km)?;
        let line = route.decode_steps_line()?;
        let snap = point_on_line(position, &line)?;
        Ok(classify_off_route(position, &snap, threshold_km, self.config.boundary_epsilon_km))
    }

    /// Distance along the route from the snap of `position` to the route's
    /// final vertex.
    pub fn distance_to_end_of_route(&self, position: Position, route: &Route) -> ProgressResult<f64> {
        let line = route.decode_steps_line()?;
        remaining_along(position, &line)
    }

    /// Everything a navigation UI needs for one location update.
    pub fn progress(&self, position: Position, route: &Route) -> ProgressResult<RouteProgress> {
        let step = self.closest_step(position, route)?;

        let coords = route.decode_step(step)?;
        let snap   = point_on_line(position, &coords)?;

        let distance_to_next_step = if route.is_last_in_leg(step)? {
            None
        } else {
            Some(remaining_along(position, &coords)?)
        };

        let line       = route.decode_steps_line()?;
        let route_snap = point_on_line(position, &line)?;
        let off_route  = classify_off_route(
            position,
            &route_snap,
            self.config.off_route_threshold_km,
            self.config.boundary_epsilon_km,
        );

        Ok(RouteProgress {
            step,
            distance_to_step: distance(position, snap.point, Unit::Kilometers),
            distance_to_next_step,
            snapped: snap.point,
            distance_to_end_of_route: remaining_along(position, &line)?,
            distance_from_route: route_snap.distance,
            off_route,
        })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn snap_onto_step(&self, position: Position, route: &Route, index: StepIndex) -> ProgressResult<LineSnap> {
        let coords = route.decode_step(index)?;
        Ok(point_on_line(position, &coords)?)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Snap `position` onto one step and rank the result for membership.
pub(crate) fn evaluate_step(
    position: Position,
    route:    &Route,
    index:    StepIndex,
    epsilon:  f64,
) -> ProgressResult<StepCandidate> {
    let coords = route.decode_step(index)?;
    let snap   = point_on_line(position, &coords)?;

    let placement = if line_distance(&coords, Unit::Kilometers) <= epsilon {
        SnapPlacement::ZeroLength
    } else if remaining_from_snap(&snap, &coords) <= epsilon {
        SnapPlacement::AtEnd
    } else {
        SnapPlacement::Along
    };

    Ok(StepCandidate { index, distance: snap.distance, placement })
}

/// Pick between the running best and the next candidate in travel order.
pub(crate) fn prefer(best: StepCandidate, next: StepCandidate, epsilon: f64) -> StepCandidate {
    if next.distance < best.distance - epsilon {
        return next;
    }
    if (next.distance - best.distance).abs() <= epsilon && next.placement < best.placement {
        return next;
    }
    best
}

/// Length of `coords` after `snap`, in kilometers.
fn remaining_from_snap(snap: &LineSnap, coords: &[Position]) -> f64 {
    let tail = &coords[snap.segment_index + 1..];
    distance(snap.point, tail[0], Unit::Kilometers) + line_distance(tail, Unit::Kilometers)
}

/// Along-line distance from the snap of `position` to the last vertex of
/// `line`, in kilometers.
///
/// Measured up to the last index rather than to a snap of the last vertex,
/// which would land on an earlier pass when the line closes on itself.
fn remaining_along(position: Position, line: &[Position]) -> ProgressResult<f64> {
    let snap = point_on_line(position, line)?;
    Ok(remaining_from_snap(&snap, line))
}

/// Off-route once the fix is at the threshold, allowing `epsilon` for the
/// round trip through `destination` and `distance`.
fn classify_off_route(position: Position, snap: &LineSnap, threshold_km: f64, epsilon: f64) -> bool {
    let off_route = snap.distance >= threshold_km - epsilon;
    if off_route {
        debug!(
            %position,
            distance_km = snap.distance,
            threshold_km,
            "position is off route"
        );
    }
    off_route
}
