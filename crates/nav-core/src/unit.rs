//! Distance units for geodesic results.
//!
//! Angular math is always done in radians; a `Unit` only chooses the scale
//! of the distance handed back (or accepted) at the API boundary.  The
//! conversion is `length = central_angle_rad × earth_radius(unit)`.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Mean earth radius in metres (IUGG arithmetic mean, R1).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Output scale for distances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Default for every tracker-level result.
    #[default]
    Kilometers,
    Miles,
    /// Central angle expressed in degrees of arc.
    Degrees,
    /// Central angle in radians (unit sphere).
    Radians,
    Meters,
    NauticalMiles,
}

impl Unit {
    /// Every recognised unit, in declaration order.
    pub const ALL: [Unit; 6] = [
        Unit::Kilometers,
        Unit::Miles,
        Unit::Degrees,
        Unit::Radians,
        Unit::Meters,
        Unit::NauticalMiles,
    ];

    /// Earth radius expressed in this unit.
    #[inline]
    pub fn earth_radius(self) -> f64 {
        match self {
            Unit::Kilometers    => EARTH_RADIUS_M / 1_000.0,
            Unit::Miles         => EARTH_RADIUS_M / 1_609.344,
            Unit::Degrees       => 180.0 / std::f64::consts::PI,
            Unit::Radians       => 1.0,
            Unit::Meters        => EARTH_RADIUS_M,
            Unit::NauticalMiles => EARTH_RADIUS_M / 1_852.0,
        }
    }

    /// Convert a central angle in radians to a length in this unit.
    #[inline]
    pub fn radians_to_length(self, radians: f64) -> f64 {
        radians * self.earth_radius()
    }

    /// Convert a length in this unit to a central angle in radians.
    #[inline]
    pub fn length_to_radians(self, length: f64) -> f64 {
        length / self.earth_radius()
    }

    /// Re-express `length` given in `self` as a length in `to`.
    #[inline]
    pub fn convert(self, length: f64, to: Unit) -> f64 {
        to.radians_to_length(self.length_to_radians(length))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Kilometers    => "kilometers",
            Unit::Miles         => "miles",
            Unit::Degrees       => "degrees",
            Unit::Radians       => "radians",
            Unit::Meters        => "meters",
            Unit::NauticalMiles => "nauticalmiles",
        }
    }
}

impl FromStr for Unit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kilometers" | "kilometres" | "km"         => Ok(Unit::Kilometers),
            "miles" | "mi"                             => Ok(Unit::Miles),
            "degrees" | "deg"                          => Ok(Unit::Degrees),
            "radians" | "rad"                          => Ok(Unit::Radians),
            "meters" | "metres" | "m"                  => Ok(Unit::Meters),
            "nauticalmiles" | "nautical_miles" | "nmi" => Ok(Unit::NauticalMiles),
            _ => Err(CoreError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
