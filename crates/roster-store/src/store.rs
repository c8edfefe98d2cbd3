//! [`MemoryStore`] — records held in insertion order, queried through the
//! registered matchers.

use std::{collections::HashMap, fmt};

use roster_core::{
  Entries, FilterMode, Person,
  filter::{MatchContext, Matcher, Query, default_matchers},
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::{Error, Result, StoreConfig};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An in-memory people store.
///
/// Records keep their insertion order; inserting a record whose id is already
/// present replaces it in place.
pub struct MemoryStore {
  records:  Vec<Person>,
  /// id → position in `records`.
  index:    HashMap<String, usize>,
  mode:     FilterMode,
  matchers: Vec<Box<dyn Matcher>>,
}

impl MemoryStore {
  /// An empty store in strict mode with the default matchers.
  pub fn new() -> Self { Self::with_config(&StoreConfig::default()) }

  /// An empty store configured by `config`.
  pub fn with_config(config: &StoreConfig) -> Self {
    Self {
      records:  Vec::new(),
      index:    HashMap::new(),
      mode:     config.filter_mode,
      matchers: default_matchers(),
    }
  }

  pub fn from_records(records: impl IntoIterator<Item = Person>) -> Self {
    let mut store = Self::new();
    store.extend(records);
    store
  }

  /// Build a store from raw JSON: `null` for no records, one record object,
  /// or an array of record objects.
  pub fn from_json(raw: Value) -> Result<Self> {
    let records = match raw {
      Value::Null => Vec::new(),
      Value::Array(items) => items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<Person>, _>>()?,
      record @ Value::Object(_) => vec![serde_json::from_value(record)?],
      Value::Bool(_) => return Err(Error::NotARecord("a boolean")),
      Value::Number(_) => return Err(Error::NotARecord("a number")),
      Value::String(_) => return Err(Error::NotARecord("a string")),
    };
    Ok(Self::from_records(records))
  }

  pub fn from_json_str(raw: &str) -> Result<Self> {
    Self::from_json(serde_json::from_str(raw)?)
  }

  // ── Records ───────────────────────────────────────────────────────────────

  /// Insert `person`, returning the record it replaced, if any.
  pub fn insert(&mut self, person: Person) -> Option<Person> {
    if let Some(&at) = self.index.get(&person.id) {
      return Some(std::mem::replace(&mut self.records[at], person));
    }
    self.index.insert(person.id.clone(), self.records.len());
    self.records.push(person);
    None
  }

  pub fn get(&self, id: &str) -> Option<&Person> {
    self.index.get(id).map(|&at| &self.records[at])
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, Person> { self.records.iter() }

  /// Every record, as a view.
  pub fn all(&self) -> Entries { self.records.iter().cloned().collect() }

  // ── Filter mode ───────────────────────────────────────────────────────────

  /// Name of the active filter mode.
  pub fn filter_mode(&self) -> &'static str { self.mode.name() }

  /// Switch filter mode by name. An unknown name leaves the mode unchanged.
  pub fn set_filter_mode(&mut self, name: &str) -> Result<()> {
    let mode = FilterMode::from_name(name)?;
    self.set_mode(mode);
    Ok(())
  }

  pub fn mode(&self) -> FilterMode { self.mode }

  pub fn set_mode(&mut self, mode: FilterMode) {
    debug!(from = %self.mode, to = %mode, "filter mode changed");
    self.mode = mode;
  }

  /// The context the next filter call will hand to its matchers.
  pub fn context(&self) -> MatchContext { MatchContext::new(self.mode) }

  // ── Matchers ──────────────────────────────────────────────────────────────

  /// Register an extra matcher, tried after the ones already registered.
  pub fn register_matcher(&mut self, matcher: Box<dyn Matcher>) {
    self.matchers.push(matcher);
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// Select the records matching `query` under the current filter mode.
  pub fn filter(&self, query: impl Into<Query>) -> Result<Entries> {
    self.filter_with(&query.into(), &self.context())
  }

  /// Select the records matching `query` under an explicit context.
  ///
  /// Matchers run in registration order. The first one that accepts the query
  /// and selects at least one record decides the result; a matcher that
  /// accepts but selects nothing passes the query on. When no matcher selects
  /// anything the result is empty.
  pub fn filter_with(&self, query: &Query, cx: &MatchContext) -> Result<Entries> {
    for matcher in &self.matchers {
      let Some(predicate) = matcher.matcher(query, cx)? else {
        trace!(matcher = matcher.name(), %query, "query declined");
        continue;
      };

      let selected: Entries =
        self.records.iter().filter(|&p| predicate(p)).cloned().collect();
      if selected.is_empty() {
        trace!(matcher = matcher.name(), %query, "matcher selected nothing");
        continue;
      }

      debug!(
        matcher = matcher.name(),
        %query,
        mode = %cx.mode,
        count = selected.len(),
        "query matched"
      );
      return Ok(selected);
    }

    debug!(%query, mode = %cx.mode, "no matcher selected any record");
    Ok(Entries::default())
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl fmt::Debug for MemoryStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MemoryStore")
      .field("records", &self.records.len())
      .field("mode", &self.mode)
      .field(
        "matchers",
        &self.matchers.iter().map(|m| m.name()).collect::<Vec<_>>(),
      )
      .finish()
  }
}

impl Extend<Person> for MemoryStore {
  fn extend<I: IntoIterator<Item = Person>>(&mut self, iter: I) {
    for person in iter {
      self.insert(person);
    }
  }
}

impl FromIterator<Person> for MemoryStore {
  fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
    Self::from_records(iter)
  }
}

impl<'a> IntoIterator for &'a MemoryStore {
  type IntoIter = std::slice::Iter<'a, Person>;
  type Item = &'a Person;

  fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
