//! Birth-date grammar.
//!
//! Accepted shapes (`.` or `-` as separator, used consistently):
//!
//! ```text
//! D{1,2}                  month
//! D{1,2}.D{1,2}           day + month, any year
//! D{1,2}.D{1,2}.D{4}      exact date
//! D{1,2}.                 day
//! D{4}                    year
//! ```
//!
//! A bare one- or two-digit number is a month, never a day; a day on its own
//! needs the trailing separator (`"5."`).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{MatchContext, Matcher, Predicate, Query};
use crate::{Error, Result, person::Person};

static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?:(?P<lead>[0-9]{1,2})(?:\.(?P<dot_month>[0-9]{1,2})(?:\.(?P<dot_year>[0-9]{4}))?|-(?P<dash_month>[0-9]{1,2})(?:-(?P<dash_year>[0-9]{4}))?)?|(?P<day>[0-9]{1,2})\.|(?P<year>[0-9]{4}))$",
  )
  .expect("birth date grammar is a valid regex")
});

/// A parsed birth-date query. Day and month are zero-padded to two digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateQuery {
  Exact {
    day:   String,
    month: String,
    year:  String,
  },
  DayMonth {
    day:   String,
    month: String,
  },
  Day(String),
  Month(String),
  Year(String),
}

impl DateQuery {
  /// Parse `input`, returning `Ok(None)` when it is not a date query.
  pub fn parse(input: &str) -> Result<Option<Self>> {
    let Some(caps) = GRAMMAR.captures(input) else {
      return Ok(None);
    };
    Self::from_captures(input, &caps).map(Some)
  }

  fn from_captures(input: &str, caps: &Captures<'_>) -> Result<Self> {
    let padded = |name: &str| caps.name(name).map(|m| format!("{:0>2}", m.as_str()));
    let plain = |name: &str| caps.name(name).map(|m| m.as_str().to_owned());

    let lead = padded("lead");
    let month = padded("dot_month").or_else(|| padded("dash_month"));
    let year = plain("dot_year").or_else(|| plain("dash_year"));

    let query = match (lead, month, year, padded("day"), plain("year")) {
      (Some(day), Some(month), Some(year), None, None) => {
        Self::Exact { day, month, year }
      }
      (Some(day), Some(month), None, None, None) => {
        Self::DayMonth { day, month }
      }
      (Some(month), None, None, None, None) => Self::Month(month),
      (None, None, None, Some(day), None) => Self::Day(day),
      (None, None, None, None, Some(year)) => Self::Year(year),
      _ => {
        return Err(Error::UnreachableGrammar {
          grammar: "birth date",
          query:   input.to_owned(),
        });
      }
    };
    Ok(query)
  }

  /// Test a stored `DD.MM.YYYY` string against this query.
  pub fn matches(&self, b_date: &str) -> bool {
    match self {
      Self::Exact { day, month, year } => {
        b_date == format!("{day}.{month}.{year}")
      }
      Self::DayMonth { day, month } => {
        b_date.get(0..5) == Some(format!("{day}.{month}").as_str())
      }
      Self::Day(day) => b_date.get(0..2) == Some(day.as_str()),
      Self::Month(month) => b_date.get(3..5) == Some(month.as_str()),
      Self::Year(year) => b_date.get(6..10) == Some(year.as_str()),
    }
  }
}

/// Matches records by (partial) birth date. Accepts text and numeric
/// queries; numbers are read as their decimal string.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthDateMatcher;

impl Matcher for BirthDateMatcher {
  fn name(&self) -> &'static str { "bdate" }

  fn matcher(
    &self,
    query: &Query,
    _cx: &MatchContext,
  ) -> Result<Option<Predicate>> {
    let Some(date) = DateQuery::parse(&query.to_text())? else {
      return Ok(None);
    };

    Ok(Some(Box::new(move |person: &Person| {
      person
        .b_date
        .as_deref()
        .is_some_and(|b_date| date.matches(b_date))
    })))
  }
}
