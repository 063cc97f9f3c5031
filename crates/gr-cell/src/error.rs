//! Cell-indexing error type.

use thiserror::Error;

/// Errors produced by `gr-cell`.
#[derive(Debug, Error)]
pub enum CellError {
    /// Coordinate outside the WGS-84 domain (or non-finite).
    #[error("coordinate ({lat}, {lon}) outside supported domain")]
    InvalidCoordinate { lat: f32, lon: f32 },

    /// Textual cell key that is not valid for the scheme.
    #[error("malformed cell key {0:?}")]
    MalformedKey(String),
}

pub type CellResult<T> = Result<T, CellError>;
