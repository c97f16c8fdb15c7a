//! Coordinate precision and the self-describing encoded geometry wrapper.

use std::fmt;

use nav_core::Position;

use crate::{PolylineError, PolylineResult};

/// Number of decimal digits kept per coordinate by the encoder.
///
/// The codec multiplies each coordinate by `10^precision` before rounding,
/// so precision 5 resolves ~1.1 m and precision 6 ~0.11 m at the equator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Precision(u32);

impl Precision {
    /// Five digits: the classic polyline format and the directions-API v5
    /// default.
    pub const FIVE: Precision = Precision(5);

    /// Six digits: the `polyline6` geometry variant.
    pub const SIX: Precision = Precision(6);

    /// Largest accepted precision.  `180 × 10^10` still fits the `i64`
    /// accumulator with room to spare.
    pub const MAX: u32 = 10;

    pub fn new(digits: u32) -> PolylineResult<Self> {
        if digits > Self::MAX {
            return Err(PolylineError::InvalidPrecision(digits));
        }
        Ok(Self(digits))
    }

    #[inline]
    pub fn digits(self) -> u32 {
        self.0
    }

    /// Scale factor `10^precision`.
    #[inline]
    pub fn factor(self) -> f64 {
        10f64.powi(self.0 as i32)
    }

    /// Smallest coordinate step representable at this precision, in degrees.
    #[inline]
    pub fn resolution_deg(self) -> f64 {
        1.0 / self.factor()
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::FIVE
    }
}

impl TryFrom<u32> for Precision {
    type Error = PolylineError;

    fn try_from(digits: u32) -> PolylineResult<Self> {
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(p: Precision) -> u32 {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polyline{}", self.0)
    }
}

// ── EncodedPolyline ───────────────────────────────────────────────────────────

/// An encoded geometry string together with the precision it was written at.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedPolyline {
    pub encoded:   String,
    pub precision: Precision,
}

impl EncodedPolyline {
    pub fn new(encoded: impl Into<String>, precision: Precision) -> Self {
        Self { encoded: encoded.into(), precision }
    }

    /// Encode `points` at `precision`.
    pub fn from_points(points: &[Position], precision: Precision) -> PolylineResult<Self> {
        Ok(Self {
            encoded: crate::encode(points, precision)?,
            precision,
        })
    }

    /// Decode into positions.  Decoding is stateless, so this may be called
    /// any number of times.
    pub fn decode(&self) -> PolylineResult<Vec<Position>> {
        crate::decode(&self.encoded, self.precision)
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }
}
