//! Errors raised while building a network or generating facts

use crate::ir::Point;
use thiserror::Error;

/// Errors that can occur while converting a diagram into facts
///
/// A conversion either succeeds completely or fails with one of these;
/// no partial fact base is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("edge ({a}, {b}) references point {missing} which is not in the point set")]
    InvalidEdge { a: Point, b: Point, missing: Point },

    #[error("edge connects point {0} to itself")]
    SelfLoop(Point),

    #[error("point {0} appears more than once in the point set")]
    DuplicatePoint(Point),

    #[error("degenerate angle at vertex {vertex} between {a} and {c}")]
    DegenerateAngle { a: Point, vertex: Point, c: Point },

    #[error("point {0} is not in the diagram")]
    UnknownPoint(Point),

    #[error("id range starting at {start} cannot hold {count} points")]
    IdOverflow { start: u32, count: usize },

    #[error("cannot parse fact `{line}`: {reason}")]
    FactParse { line: String, reason: String },
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;
