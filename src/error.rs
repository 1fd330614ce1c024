// Coloring Bench
//! Crate-wide errors.

use std::io;
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// Everything that can go wrong while building a graph or writing a report.
/// Coloring itself never fails; an invalid coloring is reported through
/// `ColoredGraph::validate_colors` instead.
#[derive(Debug, Error)]
pub enum Error {
  /// Some adjacency entry points past the last vertex.
  #[error(
    "invalid topology: vertex {vertex} lists neighbor {neighbor}, \
     but the graph has only {size} vertices"
  )]
  InvalidTopology {
    vertex: usize,
    neighbor: usize,
    size: usize,
  },

  /// A token in the graph text format is not a vertex id.
  #[error("line {line}: `{token}` is not a vertex id")]
  Parse { line: usize, token: String },

  #[error("{0}")]
  InvalidArgument(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

/// Shorthand to make an `InvalidArgument` result with a message
pub fn err<T>(s: &str) -> Result<T> {
  Err(Error::InvalidArgument(s.to_string()))
}

/// Shorthand to use an owned string, such as the result of a formatter.
pub fn errs<T>(s: String) -> Result<T> {
  Err(Error::InvalidArgument(s))
}
