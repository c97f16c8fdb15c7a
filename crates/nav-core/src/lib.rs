//! `nav-core`: foundational types for the route-progress navigation core.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and only `thiserror` plus optional `serde`.
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`position`]   | `Position` (lon/lat degrees, optional altitude)        |
//! | [`unit`]       | `Unit` enum, earth-radius conversion factors           |
//! | [`properties`] | `Properties`, opaque pass-through key/value payload    |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod position;
pub mod properties;
pub mod unit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use position::Position;
pub use properties::Properties;
pub use unit::{EARTH_RADIUS_M, Unit};
