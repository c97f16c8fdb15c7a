//! `nav-progress`: where is the traveler relative to the route?
//!
//! Given a live position fix and a previously computed [`Route`], the
//! [`RouteProgressTracker`] answers which step the traveler is in, how far
//! it is to the next maneuver and to the destination, where the fix snaps
//! onto the route, and whether the traveler has left the route.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`model`]    | `Route`, `RouteLeg`, `LegStep`, `StepIndex`                 |
//! | [`config`]   | `TrackerConfig` and its defaults                            |
//! | [`tracker`]  | `RouteProgressTracker`                                      |
//! | [`progress`] | `RouteProgress`, a one-shot snapshot per fix                |
//! | [`error`]    | `ProgressError`, `ProgressResult<T>`                        |
//!
//! # Data flow
//!
//! ```text
//! Route ──decode step geometry (nav-polyline, route precision)──┐
//!                                                               ▼
//! fix ───────────────────────────────▶ point_on_line / line_distance (nav-geodesy)
//!                                                               │
//!                                  step, distances, snap, off-route flag
//! ```
//!
//! Nothing is cached between calls.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Snaps every step on Rayon's pool in `closest_step`.     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |

pub mod config;
pub mod error;
pub mod model;
pub mod progress;
pub mod tracker;


pub use config::{DEFAULT_BOUNDARY_EPSILON_KM, DEFAULT_OFF_ROUTE_THRESHOLD_KM, TrackerConfig};
pub use error::{ProgressError, ProgressResult};
pub use model::{LegStep, Route, RouteLeg, StepIndex};
pub use progress::RouteProgress;
pub use tracker::RouteProgressTracker;
