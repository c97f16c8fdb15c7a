//! Polyline codec error type.

use thiserror::Error;

/// Errors produced by `nav-polyline`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolylineError {
    /// The input is not a well-formed polyline string.  `offset` is the byte
    /// position at which decoding gave up.
    #[error("malformed polyline geometry at byte {offset}: {reason}")]
    MalformedGeometry { offset: usize, reason: &'static str },

    #[error("polyline precision {0} is out of range (0..={max})", max = crate::Precision::MAX)]
    InvalidPrecision(u32),

    #[error("point {index} has a non-finite coordinate and cannot be encoded")]
    NonFiniteCoordinate { index: usize },
}

pub type PolylineResult<T> = Result<T, PolylineError>;
