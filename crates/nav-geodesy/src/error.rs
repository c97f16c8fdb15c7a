//! Geodesy error type.

use thiserror::Error;

/// Errors produced by `nav-geodesy`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeodesyError {
    #[error("a line needs at least 2 points, got {points}")]
    InvalidGeometry { points: usize },
}

pub type GeodesyResult<T> = Result<T, GeodesyError>;
