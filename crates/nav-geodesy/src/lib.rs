//! `nav-geodesy`: spherical-earth measurement primitives.
//!
//! Every function here is pure and allocation-light; none holds state
//! between calls.  Angular math is done in radians against a sphere of mean
//! radius [`EARTH_RADIUS_M`](nav_core::EARTH_RADIUS_M); a [`Unit`] argument
//! only scales the distance handed back or accepted.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`measure`] | `distance` (haversine), `bearing`, `destination`           |
//! | [`snap`]    | `point_on_line`, `LineSnap`                                |
//! | [`line`]    | `line_distance`, `line_slice`                              |
//! | [`error`]   | `GeodesyError`, `GeodesyResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `LineSnap`.             |
//!
//! [`Unit`]: nav_core::Unit

pub mod error;
pub mod line;
pub mod measure;
pub mod snap;


pub use error::{GeodesyError, GeodesyResult};
pub use line::{line_distance, line_slice};
pub use measure::{bearing, destination, distance};
pub use snap::{LineSnap, TIE_TOLERANCE_KM, point_on_line};
