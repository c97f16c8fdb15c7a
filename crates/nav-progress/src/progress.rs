//! Per-fix progress snapshot.

use nav_core::Position;

use crate::StepIndex;

/// Result of [`RouteProgressTracker::progress`] for one position fix.
///
/// All distances are kilometers.
///
/// [`RouteProgressTracker::progress`]: crate::RouteProgressTracker::progress
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteProgress {
    /// Step the fix is currently in.
    pub step: StepIndex,
    /// From the raw fix to its snap onto `step`.
    pub distance_to_step: f64,
    /// Along `step` to the next maneuver; `None` on the last step of a leg.
    pub distance_to_next_step: Option<f64>,
    /// The fix projected onto `step`'s geometry.
    pub snapped: Position,
    /// Along the remaining route to its final vertex.
    pub distance_to_end_of_route: f64,
    /// From the raw fix to the nearest point of the whole route.
    pub distance_from_route: f64,
    pub off_route: bool,
}
