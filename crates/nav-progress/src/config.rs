//! Tracker configuration.

use crate::{ProgressError, ProgressResult};

/// Off-route threshold used when none is configured: 100 m.
pub const DEFAULT_OFF_ROUTE_THRESHOLD_KM: f64 = 0.1;

/// Distance tolerance for treating two snaps as equally close: 1 mm.
pub const DEFAULT_BOUNDARY_EPSILON_KM: f64 = 1e-6;

/// Immutable settings captured by a [`RouteProgressTracker`] at construction.
///
/// Typically deserialised from the application's settings file or built
/// from CLI flags.
///
/// [`RouteProgressTracker`]: crate::RouteProgressTracker
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// A fix farther than this from the route geometry is off-route.
    pub off_route_threshold_km: f64,

    /// Two candidate steps whose snap distances differ by no more than this
    /// are considered tied.
    pub boundary_epsilon_km: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            off_route_threshold_km: DEFAULT_OFF_ROUTE_THRESHOLD_KM,
            boundary_epsilon_km:    DEFAULT_BOUNDARY_EPSILON_KM,
        }
    }
}

impl TrackerConfig {
    /// Reject non-finite or negative distances.
    pub fn validate(&self) -> ProgressResult<()> {
        check_distance("off_route_threshold_km", self.off_route_threshold_km)?;
        check_distance("boundary_epsilon_km", self.boundary_epsilon_km)
    }
}

pub(crate) fn check_distance(name: &str, value: f64) -> ProgressResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProgressError::Config(format!(
            "{name} must be a finite, non-negative distance in kilometers, got {value}"
        )));
    }
    Ok(())
}
