//! [`Entries`] — a filtered or sorted view over person records.
//!
//! Every operation returns a new `Entries`, so calls chain:
//!
//! ```rust
//! use roster_core::{Entries, Person};
//!
//! let entries: Entries = vec![
//!   Person::new("1", "Zoe Adams"),
//!   Person::new("2", "Ann Lee"),
//! ]
//! .into();
//!
//! let sorted = entries.sort_by().first_name(true);
//! assert_eq!(sorted[0].id, "2");
//! ```

use std::{cmp::Ordering, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{compare, person::Person};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entries(Vec<Person>);

impl Entries {
  pub fn new(people: Vec<Person>) -> Self { Self(people) }

  pub fn into_inner(self) -> Vec<Person> { self.0 }

  /// Orderings over these entries.
  pub fn sort_by(&self) -> SortBy<'_> { SortBy(self) }

  /// Visibility filters over these entries.
  pub fn filter_by(&self) -> FilterBy<'_> { FilterBy(self) }

  /// A stably sorted copy.
  fn sorted(&self, cmp: impl Fn(&Person, &Person) -> Ordering) -> Self {
    let mut people = self.0.clone();
    people.sort_by(cmp);
    Self(people)
  }

  fn retained(&self, keep: impl Fn(&Person) -> bool) -> Self {
    self.0.iter().filter(|&p| keep(p)).cloned().collect()
  }
}

/// Bound sort operations; see [`crate::compare`].
#[derive(Debug, Clone, Copy)]
pub struct SortBy<'a>(&'a Entries);

impl SortBy<'_> {
  pub fn first_name(self, ascending: bool) -> Entries {
    self.0.sorted(compare::by_first_name(ascending))
  }

  pub fn last_name(self, ascending: bool) -> Entries {
    self.0.sorted(compare::by_last_name(ascending))
  }

  /// Birthday order within a year, ignoring the year.
  pub fn b_date(self, ascending: bool) -> Entries {
    self.0.sorted(compare::by_birth_date(ascending))
  }

  /// Ascending puts the oldest first.
  pub fn age(self, ascending: bool) -> Entries {
    self.0.sorted(compare::by_age(ascending))
  }
}

/// Bound visibility filters.
#[derive(Debug, Clone, Copy)]
pub struct FilterBy<'a>(&'a Entries);

impl FilterBy<'_> {
  /// Entries flagged private.
  pub fn private(self) -> Entries { self.0.retained(Person::is_private) }

  /// Entries flagged public. Entries with no flag are in neither set.
  pub fn public(self) -> Entries { self.0.retained(Person::is_public) }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl Deref for Entries {
  type Target = [Person];

  fn deref(&self) -> &[Person] { &self.0 }
}

impl From<Vec<Person>> for Entries {
  fn from(people: Vec<Person>) -> Self { Self(people) }
}

impl From<Entries> for Vec<Person> {
  fn from(entries: Entries) -> Self { entries.0 }
}

impl FromIterator<Person> for Entries {
  fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl IntoIterator for Entries {
  type IntoIter = std::vec::IntoIter<Person>;
  type Item = Person;

  fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a Entries {
  type IntoIter = std::slice::Iter<'a, Person>;
  type Item = &'a Person;

  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
