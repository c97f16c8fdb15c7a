//! Route-progress error type.

use nav_geodesy::GeodesyError;
use nav_polyline::PolylineError;
use thiserror::Error;

use crate::StepIndex;

/// Errors produced by `nav-progress`.
///
/// All of these indicate malformed upstream route data or a caller bug;
/// none is transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProgressError {
    #[error("route has no steps")]
    EmptyRoute,

    #[error("{index} is out of range (route has {legs} leg(s), that leg has {steps} step(s))")]
    IndexOutOfRange {
        index: StepIndex,
        legs:  usize,
        steps: usize,
    },

    #[error("step geometry: {0}")]
    Polyline(#[from] PolylineError),

    #[error("step geometry: {0}")]
    Geodesy(#[from] GeodesyError),

    #[error("tracker configuration error: {0}")]
    Config(String),
}

pub type ProgressResult<T> = Result<T, ProgressError>;
