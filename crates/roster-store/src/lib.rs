//! In-memory backend for the roster people store.
//!
//! [`MemoryStore`] owns the records, holds the active filter mode and runs a
//! query through the registered matchers from `roster-core`:
//!
//! ```rust
//! use roster_store::MemoryStore;
//!
//! let mut store = MemoryStore::from_json_str(
//!   r#"[{ "id": "1", "name": "Ann Lee", "bDate": "05.03.1985" }]"#,
//! )?;
//! store.set_filter_mode("normalize")?;
//!
//! assert_eq!(store.filter("Ann Lee")?.len(), 1);
//! assert_eq!(store.filter("05.03")?.sort_by().age(true).len(), 1);
//! # Ok::<(), roster_store::Error>(())
//! ```

mod settings;
mod store;

pub mod error;

pub use settings::StoreConfig;
pub use error::{Error, Result};
pub use roster_core::{Entries, FilterMode, Person, Role, filter::Query};
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
