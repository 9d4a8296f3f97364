//! Error types for the go-diagram crate

use thiserror::Error;

/// Main error type for the go-diagram crate.
///
/// Only invariant violations and malformed input surface here. Ordinary game
/// conditions (illegal stones, missing variations, replay collisions) are
/// reported through return values instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size} (must be between 1 and 52)")]
    InvalidBoardSize { size: i32 },

    #[error("malformed move tree: {reason}")]
    InvalidMoveTree { reason: String },

    #[error("malformed board: {reason}")]
    InvalidGoban { reason: String },

    #[error("point ({x},{y}) is out of bounds for a {size}x{size} board")]
    PointOutOfBounds { x: i32, y: i32, size: i32 },

    #[error("invalid SGF point '{input}': {reason}")]
    InvalidSgfPoint { input: String, reason: String },

    #[error("invalid point key '{input}' (expected format: 'x,y')")]
    InvalidPointKey { input: String },

    #[error("invalid bounding box: top-left {top_left} must not exceed bottom-right {bot_right}")]
    InvalidBoundingBox { top_left: String, bot_right: String },

    #[error("invalid split fractions {fractions:?}: they must sum to less than 1")]
    InvalidSplit { fractions: Vec<f64> },

    #[error("invalid treepath '{input}': {reason}")]
    Treepath { input: String, reason: String },

    #[error("unknown SGF property '{key}'")]
    UnknownProperty { key: String },

    #[error("board region {region} cannot be turned into a crop box")]
    InvalidRegion { region: String },

    #[error("no board region covers the minimal bounding box {bbox}")]
    NoCoveringRegion { bbox: String },

    #[error("board dimension mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    BoardDimensionMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    #[error("invalid board region '{input}'. Expected one of: {expected}")]
    ParseBoardRegion { input: String, expected: String },

    #[error("invalid stone color '{input}'. Expected one of: {expected}")]
    ParseStoneColor { input: String, expected: String },

    #[error("invalid variation display '{input}'. Expected one of: {expected}")]
    ParseShowVariations { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
