//! Error type for `roster-store`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] roster_core::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  /// Raw input was neither a record object nor an array of them.
  #[error("expected a record or an array of records, found {0}")]
  NotARecord(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
