//! Geographic coordinate type.
//!
//! `Position` stores longitude first, matching the `[lon, lat]` order of
//! encoded route geometries once decoded.  All values are `f64` degrees:
//! polyline precision 6 resolves ~0.1 m, which `f32` cannot hold at
//! continental longitudes.

use std::fmt;

/// A WGS-84 geographic coordinate in degrees.
///
/// Altitude is carried for callers that have it but is ignored by every
/// distance and projection computation.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub altitude: Option<f64>,
}

impl Position {
    /// Construct from longitude and latitude, in that order.
    #[inline]
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lon, lat, altitude: None }
    }

    /// Construct from latitude and longitude, in that order.
    #[inline]
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { lon, lat, altitude: None }
    }

    /// Return a copy carrying `altitude` (metres).
    #[inline]
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// `true` if both coordinates are finite and within the WGS-84 range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Horizontal equality within `tolerance_deg` on each axis.  Altitude is
    /// not compared.
    #[inline]
    pub fn approx_eq(&self, other: &Position, tolerance_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance_deg
            && (self.lon - other.lon).abs() <= tolerance_deg
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
