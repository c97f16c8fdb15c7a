//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as a
//! `#[from]` variant where they surface it.

use thiserror::Error;

/// Errors produced by `nav-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unrecognised distance unit {0:?}")]
    InvalidUnit(String),
}

/// Shorthand result type for `nav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
