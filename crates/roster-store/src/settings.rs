//! Store configuration.
//!
//! Settings come from an optional TOML file, overridden by `ROSTER_`-prefixed
//! environment variables:
//!
//! ```toml
//! filter_mode = "adjustment"
//! ```

use std::path::Path;

use roster_core::FilterMode;
use serde::Deserialize;

use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
  /// Mode a new store starts in.
  pub filter_mode: FilterMode,
}

/// Settings as read, before mode names are validated.
#[derive(Debug, Deserialize, Default)]
struct RawStoreConfig {
  #[serde(default)]
  filter_mode: Option<String>,
}

impl StoreConfig {
  /// Load settings from `path` (if given and present) and the environment.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(false));
    }
    let settings = builder
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()?;

    Self::from_raw(settings.try_deserialize()?)
  }

  fn from_raw(raw: RawStoreConfig) -> Result<Self> {
    let filter_mode = raw
      .filter_mode
      .as_deref()
      .map(FilterMode::from_name)
      .transpose()?
      .unwrap_or_default();
    Ok(Self { filter_mode })
  }
}
