//! Person records — the entries a roster store holds.
//!
//! Records are read-only from the point of view of this crate. Every field a
//! query can touch has an empty default, so a sparse input record behaves
//! exactly like one with empty strings and empty lists.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Tokens ──────────────────────────────────────────────────────────────────

/// Split a name-like field into its space-separated tokens.
///
/// Consecutive spaces produce empty tokens and an empty string yields a single
/// empty token; callers rely on that shape when counting tokens.
pub fn tokens(s: &str) -> impl Iterator<Item = &str> { s.split(' ') }

/// The first space-separated token of `s`.
pub fn first_token(s: &str) -> &str { s.split(' ').next().unwrap_or_default() }

/// The last space-separated token of `s`.
pub fn last_token(s: &str) -> &str { s.rsplit(' ').next().unwrap_or_default() }

// ─── Role ────────────────────────────────────────────────────────────────────

/// A part a person performed in a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
  /// The character played; same token structure as [`Person::name`].
  pub name:  String,
  pub nick:  Vec<String>,
  /// Title of the work.
  pub movie: String,
}

impl Role {
  pub fn new(name: impl Into<String>, movie: impl Into<String>) -> Self {
    Self {
      name:  name.into(),
      nick:  Vec::new(),
      movie: movie.into(),
    }
  }

  pub fn first_name(&self) -> &str { first_token(&self.name) }

  pub fn last_name(&self) -> &str { last_token(&self.name) }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A person entry.
///
/// Field names on the wire follow the data files the store is loaded from
/// (`bName`, `bDate`, `_private`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
  /// Opaque identifier, unique within a store.
  pub id:      String,
  /// Space-separated tokens: first token is the first name, last token the
  /// last name.
  pub name:    String,
  pub nick:    Vec<String>,
  pub alias:   Vec<String>,
  /// Birth name, same token structure as `name`.
  #[serde(rename = "bName")]
  pub b_name:  String,
  /// Birth date in fixed `DD.MM.YYYY` form.
  #[serde(rename = "bDate", skip_serializing_if = "Option::is_none")]
  pub b_date:  Option<String>,
  pub roles:   Vec<Role>,
  /// `None` means the record carries no visibility flag at all, in which case
  /// it is neither private nor public.
  #[serde(rename = "_private", skip_serializing_if = "Option::is_none")]
  pub private: Option<bool>,
}

impl Person {
  /// Convenience constructor with every other field left empty.
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      ..Self::default()
    }
  }

  pub fn first_name(&self) -> &str { first_token(&self.name) }

  pub fn last_name(&self) -> &str { last_token(&self.name) }

  /// The parsed birth date, if present and well-formed.
  pub fn birth_date(&self) -> Option<BirthDate> {
    self.b_date.as_deref()?.parse().ok()
  }

  pub fn is_private(&self) -> bool { self.private == Some(true) }

  pub fn is_public(&self) -> bool { self.private == Some(false) }
}

// ─── BirthDate ───────────────────────────────────────────────────────────────

/// A calendar date parsed from the stored `DD.MM.YYYY` form.
///
/// Values are not range-checked; the store only ever compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
  pub day:   u32,
  pub month: u32,
  pub year:  u32,
}

impl FromStr for BirthDate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let invalid = || Error::InvalidBirthDate(s.to_owned());

    let mut parts = s.split('.');
    let (Some(day), Some(month), Some(year), None) =
      (parts.next(), parts.next(), parts.next(), parts.next())
    else {
      return Err(invalid());
    };

    let field = |part: &str, width: usize| -> Result<u32> {
      if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
      }
      part.parse().map_err(|_| invalid())
    };

    Ok(Self {
      day:   field(day, 2)?,
      month: field(month, 2)?,
      year:  field(year, 4)?,
    })
  }
}

impl fmt::Display for BirthDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
  }
}
