//! Read-only route model handed over by the directions collaborator.
//!
//! A [`Route`] is an ordered list of [`RouteLeg`]s (one per pair of
//! consecutive waypoints); each leg is an ordered list of [`LegStep`]s (one
//! per maneuver).  Every geometry string in a route is encoded at the
//! route's single [`Precision`].
//!
//! The tracker only ever borrows these types.

use std::fmt;

use nav_core::{Position, Properties};
use nav_geodesy::GeodesyError;
use nav_polyline::{EncodedPolyline, Precision};

use crate::{ProgressError, ProgressResult};

// ── StepIndex ─────────────────────────────────────────────────────────────────

/// Address of a step within a route.
///
/// Ordered lexicographically by `(leg, step)`, i.e. in travel order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepIndex {
    pub leg:  usize,
    pub step: usize,
}

impl StepIndex {
    #[inline]
    pub fn new(leg: usize, step: usize) -> Self {
        Self { leg, step }
    }
}

impl From<usize> for StepIndex {
    /// A bare step index addresses the first leg, the single-leg case.
    #[inline]
    fn from(step: usize) -> Self {
        Self { leg: 0, step }
    }
}

impl From<(usize, usize)> for StepIndex {
    #[inline]
    fn from((leg, step): (usize, usize)) -> Self {
        Self { leg, step }
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "leg {} step {}", self.leg, self.step)
    }
}

// ── LegStep ───────────────────────────────────────────────────────────────────

/// One maneuver segment of a leg.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegStep {
    /// Encoded polyline at the owning route's precision.
    pub geometry: String,
    /// Length reported by the directions service, in metres.
    pub distance: f64,
    /// Expected travel time, in seconds.
    pub duration: f64,
    /// Road name, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

impl LegStep {
    pub fn new(geometry: impl Into<String>, distance: f64, duration: f64) -> Self {
        Self {
            geometry: geometry.into(),
            distance,
            duration,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

// ── RouteLeg ──────────────────────────────────────────────────────────────────

/// The steps between two consecutive waypoints.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    pub steps: Vec<LegStep>,
    /// Metres; the sum of step distances.
    pub distance: f64,
    /// Seconds; the sum of step durations.
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: String,
}

impl RouteLeg {
    /// Build a leg whose totals are the sums over `steps`.
    pub fn new(steps: Vec<LegStep>) -> Self {
        let distance = steps.iter().map(|s| s.distance).sum();
        let duration = steps.iter().map(|s| s.duration).sum();
        Self { steps, distance, duration, summary: String::new() }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A complete route as produced upstream.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub legs: Vec<RouteLeg>,
    /// Overview geometry spanning the whole route.  May be empty when the
    /// service was asked for no overview.
    #[cfg_attr(feature = "serde", serde(default))]
    pub geometry: String,
    /// Precision shared by `geometry` and every step geometry.
    pub precision: Precision,
    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    /// Passed through, not interpreted by this crate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Properties,
}

impl Route {
    /// Build a route whose totals are the sums over `legs`.
    pub fn new(legs: Vec<RouteLeg>, precision: Precision) -> Self {
        let distance = legs.iter().map(|l| l.distance).sum();
        let duration = legs.iter().map(|l| l.duration).sum();
        Self {
            legs,
            geometry: String::new(),
            precision,
            distance,
            duration,
            properties: Properties::new(),
        }
    }

    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = geometry.into();
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Total number of steps across all legs.
    pub fn step_count(&self) -> usize {
        self.legs.iter().map(|l| l.steps.len()).sum()
    }

    /// Every step address in travel order.
    pub fn step_indices(&self) -> impl Iterator<Item = StepIndex> + '_ {
        self.legs.iter().enumerate().flat_map(|(leg, l)| {
            (0..l.steps.len()).map(move |step| StepIndex { leg, step })
        })
    }

    pub fn leg(&self, leg: usize) -> ProgressResult<&RouteLeg> {
        self.legs.get(leg).ok_or(ProgressError::IndexOutOfRange {
            index: StepIndex { leg, step: 0 },
            legs:  self.legs.len(),
            steps: 0,
        })
    }

    pub fn step(&self, index: StepIndex) -> ProgressResult<&LegStep> {
        let leg = self.leg(index.leg)?;
        leg.steps.get(index.step).ok_or(ProgressError::IndexOutOfRange {
            index,
            legs:  self.legs.len(),
            steps: leg.steps.len(),
        })
    }

    /// `true` if `index` is the final step of its leg.
    pub fn is_last_in_leg(&self, index: StepIndex) -> ProgressResult<bool> {
        self.step(index)?;
        Ok(index.step + 1 == self.legs[index.leg].steps.len())
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Decode the geometry of one step at the route precision.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad address, `Polyline` for an undecodable
    /// string, and `Geodesy(InvalidGeometry)` if it yields fewer than two
    /// points.
    pub fn decode_step(&self, index: StepIndex) -> ProgressResult<Vec<Position>> {
        let step   = self.step(index)?;
        let coords = nav_polyline::decode(&step.geometry, self.precision)?;
        if coords.len() < 2 {
            return Err(GeodesyError::InvalidGeometry { points: coords.len() }.into());
        }
        Ok(coords)
    }

    /// Concatenation of every step geometry in travel order.
    ///
    /// Shared boundary vertices appear twice; the resulting zero-length
    /// segments do not affect snapping or length.
    pub fn decode_steps_line(&self) -> ProgressResult<Vec<Position>> {
        if self.step_count() == 0 {
            return Err(ProgressError::EmptyRoute);
        }
        let mut line = Vec::new();
        for index in self.step_indices() {
            line.extend(self.decode_step(index)?);
        }
        Ok(line)
    }

    /// Decode the overview geometry.
    pub fn decode_overview(&self) -> ProgressResult<Vec<Position>> {
        Ok(EncodedPolyline::new(self.geometry.as_str(), self.precision).decode()?)
    }

    /// Check the structural invariants the tracker relies on: at least one
    /// leg, no empty leg, and every step geometry decoding to a line.
    pub fn validate(&self) -> ProgressResult<()> {
        if self.legs.is_empty() {
            return Err(ProgressError::EmptyRoute);
        }
        for (leg, l) in self.legs.iter().enumerate() {
            if l.steps.is_empty() {
                return Err(ProgressError::IndexOutOfRange {
                    index: StepIndex { leg, step: 0 },
                    legs:  self.legs.len(),
                    steps: 0,
                });
            }
        }
        for index in self.step_indices() {
            self.decode_step(index)?;
        }
        Ok(())
    }
}
