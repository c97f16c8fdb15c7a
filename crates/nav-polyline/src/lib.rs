//! `nav-polyline`: encoded polyline codec.
//!
//! Implements the de facto polyline text format used by mapping and
//! directions services: each coordinate is scaled by `10^precision`,
//! rounded, delta-encoded against the previous point, zig-zag signed, and
//! split into 5-bit groups written as ASCII characters offset by 63 with
//! bit 5 as the continuation flag.  Latitude precedes longitude.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`codec`]     | `decode`, `encode`                                       |
//! | [`precision`] | `Precision` (`FIVE`, `SIX`), `EncodedPolyline`           |
//! | [`error`]     | `PolylineError`, `PolylineResult<T>`                     |
//!
//! # Precision
//!
//! The precision is not recorded in the string.  Decoding with the wrong
//! precision silently scales every coordinate by a power of ten, so callers
//! must thread the precision declared by whoever produced the geometry.
//!
//! ```
//! use nav_polyline::{Precision, decode};
//!
//! let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", Precision::FIVE).unwrap();
//! assert_eq!(points.len(), 3);
//! assert!((points[0].lat - 38.5).abs() < 1e-9);
//! assert!((points[0].lon + 120.2).abs() < 1e-9);
//! ```

pub mod codec;
pub mod error;
pub mod precision;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode};
pub use error::{PolylineError, PolylineResult};
pub use precision::{EncodedPolyline, Precision};
