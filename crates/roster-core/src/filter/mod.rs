//! Query matchers.
//!
//! A query is self-describing: nothing tells the store which field it is
//! aimed at. Instead every registered [`Matcher`] inspects the query and
//! either recognises it as an instance of its grammar, returning a
//! [`Predicate`], or declines with `Ok(None)` so the next matcher can try.
//!
//! The [`MatchContext`] is captured by value when a predicate is built; a
//! predicate never observes later changes to the store's filter mode.

mod bdate;
mod id;
mod name;

use std::borrow::Cow;

pub use bdate::{BirthDateMatcher, DateQuery};
pub use id::IdMatcher;
pub use name::{NameFlag, NameMatcher, NameQuery};

use crate::{FilterMode, Result, person::Person};

// ─── Query ───────────────────────────────────────────────────────────────────

/// A raw query value as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
  Text(String),
  Number(i64),
}

impl Query {
  /// The query as a string, if it was given as one.
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      Self::Number(_) => None,
    }
  }

  /// The query coerced to a string.
  pub fn to_text(&self) -> Cow<'_, str> {
    match self {
      Self::Text(s) => Cow::Borrowed(s),
      Self::Number(n) => Cow::Owned(n.to_string()),
    }
  }
}

impl std::fmt::Display for Query {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Text(s) => write!(f, "{s:?}"),
      Self::Number(n) => write!(f, "{n}"),
    }
  }
}

impl From<&str> for Query {
  fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

impl From<String> for Query {
  fn from(s: String) -> Self { Self::Text(s) }
}

macro_rules! query_from_int {
  ($($t:ty),*) => {
    $(
      impl From<$t> for Query {
        fn from(n: $t) -> Self { Self::Number(i64::from(n)) }
      }
    )*
  };
}

query_from_int!(i8, i16, i32, i64, u8, u16, u32);

// ─── Context ─────────────────────────────────────────────────────────────────

/// Extra context threaded into every matcher call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchContext {
  pub mode: FilterMode,
}

impl MatchContext {
  pub fn new(mode: FilterMode) -> Self { Self { mode } }

  /// Every mode name a context can carry.
  pub fn modes(&self) -> &'static [&'static str] { FilterMode::names() }
}

// ─── Matcher ─────────────────────────────────────────────────────────────────

/// A self-contained record test built from one query.
pub type Predicate = Box<dyn Fn(&Person) -> bool + Send + Sync>;

/// One query grammar.
pub trait Matcher: Send + Sync {
  /// Short name used in logs.
  fn name(&self) -> &'static str;

  /// Build a predicate for `query`, or `Ok(None)` if the query is not an
  /// instance of this grammar.
  ///
  /// An `Err` means the grammar reached a state it has no handler for and is
  /// never a "no match" signal.
  fn matcher(
    &self,
    query: &Query,
    cx: &MatchContext,
  ) -> Result<Option<Predicate>>;
}

/// The built-in matchers in registration order: id, birth date, name.
pub fn default_matchers() -> Vec<Box<dyn Matcher>> {
  vec![
    Box::new(IdMatcher),
    Box::new(BirthDateMatcher),
    Box::new(NameMatcher),
  ]
}
