//! Record comparators.
//!
//! Every comparator is built from an `ascending` flag and yields a plain
//! three-way comparison, so it can be handed to [`slice::sort_by`] directly.
//! Descending order only flips the sign of the ascending comparison.
//!
//! Records without a well-formed birth date order before every dated record
//! in ascending order.

use std::cmp::Ordering;

use crate::person::Person;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
  #[default]
  Ascending,
  Descending,
}

impl Direction {
  pub fn from_ascending(ascending: bool) -> Self {
    if ascending { Self::Ascending } else { Self::Descending }
  }

  /// Apply this direction to an ascending comparison.
  pub fn apply(self, ordering: Ordering) -> Ordering {
    match self {
      Self::Ascending => ordering,
      Self::Descending => ordering.reverse(),
    }
  }
}

fn by_key<K, F>(
  ascending: bool,
  key: F,
) -> impl Fn(&Person, &Person) -> Ordering + Copy
where
  K: Ord,
  F: Fn(&Person) -> K + Copy,
{
  let direction = Direction::from_ascending(ascending);
  move |a: &Person, b: &Person| direction.apply(key(a).cmp(&key(b)))
}

/// Compare by first name token.
pub fn by_first_name(
  ascending: bool,
) -> impl Fn(&Person, &Person) -> Ordering + Copy {
  by_key(ascending, |p: &Person| p.first_name().to_owned())
}

/// Compare by last name token.
pub fn by_last_name(
  ascending: bool,
) -> impl Fn(&Person, &Person) -> Ordering + Copy {
  by_key(ascending, |p: &Person| p.last_name().to_owned())
}

/// Compare by birthday within the year: month first, then day. The year is
/// ignored.
pub fn by_birth_date(
  ascending: bool,
) -> impl Fn(&Person, &Person) -> Ordering + Copy {
  by_key(ascending, |p: &Person| p.birth_date().map(|d| (d.month, d.day)))
}

/// Compare by full birth date. Ascending puts the oldest person first, so
/// two people born on the same day of different years are ordered by age
/// even though [`by_birth_date`] sees them as equal.
pub fn by_age(ascending: bool) -> impl Fn(&Person, &Person) -> Ordering + Copy {
  by_key(ascending, |p: &Person| {
    p.birth_date().map(|d| (d.year, d.month, d.day))
  })
}
