use super::{MatchContext, Matcher, Predicate, Query};
use crate::{Result, person::Person};

/// Matches records whose id equals a string query.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdMatcher;

impl Matcher for IdMatcher {
  fn name(&self) -> &'static str { "id" }

  fn matcher(
    &self,
    query: &Query,
    cx: &MatchContext,
  ) -> Result<Option<Predicate>> {
    let Some(q) = query.as_text() else {
      return Ok(None);
    };

    let mode = cx.mode;
    let q = mode.normalize(q).into_owned();
    Ok(Some(Box::new(move |person: &Person| {
      mode.normalize(&person.id) == q.as_str()
    })))
  }
}
