//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unsupported mode: {0:?}")]
  UnsupportedMode(String),

  /// A grammar accepted its input but no handler exists for the captured
  /// shape. Always a programming error.
  #[error("unreachable {grammar} grammar state for query {query:?}")]
  UnreachableGrammar {
    grammar: &'static str,
    query:   String,
  },

  #[error("invalid birth date: {0:?}")]
  InvalidBirthDate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
