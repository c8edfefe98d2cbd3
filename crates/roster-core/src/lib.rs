//! Core types and query engine for the roster people store.
//!
//! This crate is deliberately free of storage, logging and configuration
//! concerns. It knows how to read a [`person::Person`], how to decide whether
//! a free-form query matches one, and how to order them. The store that owns
//! the records lives in `roster-store`.

pub mod compare;
pub mod entries;
pub mod error;
pub mod filter;
pub mod mode;
pub mod person;

pub use entries::Entries;
pub use error::{Error, Result};
pub use mode::FilterMode;
pub use person::{BirthDate, Person, Role};
