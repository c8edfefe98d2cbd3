//! Name grammar.
//!
//! A name query is an optional flag, an optional single space, then the text
//! to look for. The flag picks which name-like fields are candidates:
//!
//! ```text
//! q       first + last | name tokens | nick | alias
//! # q     first name | nick | alias
//! + q     name tokens
//! . q     last name
//! * q     birth-name tokens
//! - q     role first + last | role nick + role last | role tokens | role nick
//! -# q    role first name | role nick
//! -+ q    role tokens
//! -. q    role last name
//! -$ q    movie
//! ```
//!
//! The query text must equal one candidate exactly, after both sides are
//! normalized under the active [`FilterMode`].

use std::borrow::Cow;

use super::{MatchContext, Matcher, Predicate, Query};
use crate::{
  FilterMode, Result,
  person::{Person, Role, tokens},
};

// ─── Flags ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameFlag {
  /// No flag.
  #[default]
  Any,
  /// `#`
  First,
  /// `+`
  Tokens,
  /// `.`
  Last,
  /// `*`
  BirthName,
  /// `-`
  Role,
  /// `-#`
  RoleFirst,
  /// `-+`
  RoleTokens,
  /// `-.`
  RoleLast,
  /// `-$`
  RoleMovie,
}

impl NameFlag {
  /// Flags in the order they are tried against a query prefix. Two-character
  /// role flags come before the bare `-`.
  const PARSE_ORDER: [Self; 9] = [
    Self::RoleFirst,
    Self::RoleTokens,
    Self::RoleLast,
    Self::RoleMovie,
    Self::Role,
    Self::First,
    Self::Tokens,
    Self::Last,
    Self::BirthName,
  ];

  /// The prefix token selecting this flag.
  pub fn token(self) -> &'static str {
    match self {
      Self::Any => "",
      Self::First => "#",
      Self::Tokens => "+",
      Self::Last => ".",
      Self::BirthName => "*",
      Self::Role => "-",
      Self::RoleFirst => "-#",
      Self::RoleTokens => "-+",
      Self::RoleLast => "-.",
      Self::RoleMovie => "-$",
    }
  }

  /// The candidate strings of `person` a query under this flag may equal.
  pub fn patterns(self, person: &Person) -> Vec<String> {
    let name: Vec<&str> = tokens(&person.name).collect();
    let roles = &person.roles;

    match self {
      Self::Any => {
        let mut out = Vec::new();
        if name.len() > 1 {
          out.push(format!("{} {}", person.first_name(), person.last_name()));
        }
        out.extend(name.iter().map(|t| (*t).to_owned()));
        out.extend(person.nick.iter().cloned());
        out.extend(person.alias.iter().cloned());
        out
      }
      Self::First => std::iter::once(person.first_name().to_owned())
        .chain(person.nick.iter().cloned())
        .chain(person.alias.iter().cloned())
        .collect(),
      Self::Tokens => name.iter().map(|t| (*t).to_owned()).collect(),
      Self::Last => vec![person.last_name().to_owned()],
      Self::BirthName => tokens(&person.b_name).map(str::to_owned).collect(),
      Self::Role => {
        let full_names = roles
          .iter()
          .filter(|r| has_several_tokens(r))
          .map(|r| format!("{} {}", r.first_name(), r.last_name()));
        let nick_names = roles.iter().filter(|r| has_several_tokens(r)).flat_map(
          |r| r.nick.iter().map(move |n| format!("{n} {}", r.last_name())),
        );
        full_names
          .chain(nick_names)
          .chain(role_tokens(roles))
          .chain(role_nicks(roles))
          .collect()
      }
      Self::RoleFirst => roles
        .iter()
        .map(|r| r.first_name().to_owned())
        .chain(role_nicks(roles))
        .collect(),
      Self::RoleTokens => role_tokens(roles).collect(),
      Self::RoleLast => roles.iter().map(|r| r.last_name().to_owned()).collect(),
      Self::RoleMovie => roles.iter().map(|r| r.movie.clone()).collect(),
    }
  }
}

fn has_several_tokens(role: &Role) -> bool { tokens(&role.name).nth(1).is_some() }

fn role_tokens(roles: &[Role]) -> impl Iterator<Item = String> + '_ {
  roles
    .iter()
    .flat_map(|r| tokens(&r.name).map(str::to_owned))
}

fn role_nicks(roles: &[Role]) -> impl Iterator<Item = String> + '_ {
  roles.iter().flat_map(|r| r.nick.iter().cloned())
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// A parsed name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
  pub flag: NameFlag,
  pub text: String,
}

impl NameQuery {
  /// Split `input` into flag and text.
  ///
  /// Returns `None` when no non-empty single-line text remains. When a flag
  /// would consume the whole input the flag is dropped and the input itself
  /// becomes the text, so `"#"` searches for a literal `#`.
  pub fn parse(input: &str) -> Option<Self> {
    if input.chars().any(is_line_terminator) {
      return None;
    }

    for flag in NameFlag::PARSE_ORDER {
      let Some(rest) = input.strip_prefix(flag.token()) else {
        continue;
      };
      let text = match rest.strip_prefix(' ') {
        Some(after_space) if !after_space.is_empty() => after_space,
        _ => rest,
      };
      if !text.is_empty() {
        return Some(Self {
          flag,
          text: text.to_owned(),
        });
      }
    }

    (!input.is_empty()).then(|| Self {
      flag: NameFlag::Any,
      text: input.to_owned(),
    })
  }

  /// Whether `person` has a candidate equal to this query under `mode`.
  pub fn matches(&self, person: &Person, mode: FilterMode) -> bool {
    let person = normalize_person(person, mode);
    let text = mode.normalize(&self.text);
    self
      .flag
      .patterns(&person)
      .iter()
      .any(|pattern| *pattern == text)
  }
}

fn is_line_terminator(c: char) -> bool {
  matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Normalize every name-like field of `person` under `mode`.
fn normalize_person(person: &Person, mode: FilterMode) -> Cow<'_, Person> {
  if mode == FilterMode::Strict {
    return Cow::Borrowed(person);
  }

  let f = |s: &String| mode.normalize(s).into_owned();
  Cow::Owned(Person {
    id:      person.id.clone(),
    name:    f(&person.name),
    nick:    person.nick.iter().map(f).collect(),
    alias:   person.alias.iter().map(f).collect(),
    b_name:  f(&person.b_name),
    b_date:  person.b_date.clone(),
    private: person.private,
    roles:   person
      .roles
      .iter()
      .map(|role| Role {
        name:  f(&role.name),
        nick:  role.nick.iter().map(f).collect(),
        movie: f(&role.movie),
      })
      .collect(),
  })
}

// ─── Matcher ─────────────────────────────────────────────────────────────────

/// Matches records by any of their names, as selected by a [`NameFlag`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl Matcher for NameMatcher {
  fn name(&self) -> &'static str { "name" }

  fn matcher(
    &self,
    query: &Query,
    cx: &MatchContext,
  ) -> Result<Option<Predicate>> {
    let Some(name_query) = query.as_text().and_then(NameQuery::parse) else {
      return Ok(None);
    };

    let mode = cx.mode;
    Ok(Some(Box::new(move |person: &Person| {
      name_query.matches(person, mode)
    })))
  }
}
