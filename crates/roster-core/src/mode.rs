//! Filter modes — how strictly query text is compared to record text.
//!
//! Each mode is a superset of the previous one's transform:
//!
//! | Mode         | Transform                         |
//! |--------------|-----------------------------------|
//! | `strict`     | none                              |
//! | `normalize`  | diacritics stripped               |
//! | `adjustment` | diacritics stripped, lower-cased  |

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr, VariantNames};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{Error, Result};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  EnumString,
  IntoStaticStr,
  VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterMode {
  /// Exact comparison.
  #[default]
  Strict,
  /// Accent-insensitive, case-sensitive.
  Normalize,
  /// Accent- and case-insensitive.
  Adjustment,
}

impl FilterMode {
  /// Look up a mode by its recognised name.
  pub fn from_name(name: &str) -> Result<Self> {
    name
      .parse()
      .map_err(|_| Error::UnsupportedMode(name.to_owned()))
  }

  /// The recognised name of this mode.
  pub fn name(self) -> &'static str { self.into() }

  /// Every recognised mode name.
  pub fn names() -> &'static [&'static str] { Self::VARIANTS }

  /// Reduce `s` to the form compared under this mode.
  pub fn normalize(self, s: &str) -> Cow<'_, str> {
    match self {
      Self::Strict => Cow::Borrowed(s),
      Self::Normalize => deburr(s),
      Self::Adjustment => Cow::Owned(deburr(s).to_lowercase()),
    }
  }

  /// Whether `a` and `b` are equal once both are normalized.
  pub fn same(self, a: &str, b: &str) -> bool {
    self.normalize(a) == self.normalize(b)
  }
}

impl std::fmt::Display for FilterMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

// ─── Deburring ───────────────────────────────────────────────────────────────

/// Strip diacritics from `s`.
///
/// Characters are decomposed (NFD) and combining marks dropped. Latin letters
/// that carry a stroke or ligature instead of a separable mark have no
/// decomposition and are folded to their basic-Latin spelling.
pub fn deburr(s: &str) -> Cow<'_, str> {
  if s.is_ascii() {
    return Cow::Borrowed(s);
  }

  let mut out = String::with_capacity(s.len());
  for c in s.nfd().filter(|c| !is_combining_mark(*c)) {
    match fold_letter(c) {
      Some(folded) => out.push_str(folded),
      None => out.push(c),
    }
  }

  if out == s { Cow::Borrowed(s) } else { Cow::Owned(out) }
}

fn fold_letter(c: char) -> Option<&'static str> {
  let folded = match c {
    'Æ' => "Ae",
    'æ' => "ae",
    'Ð' | 'Đ' => "D",
    'ð' | 'đ' => "d",
    'Ø' => "O",
    'ø' => "o",
    'Þ' => "Th",
    'þ' => "th",
    'ß' => "ss",
    'ẞ' => "SS",
    'Ħ' => "H",
    'ħ' => "h",
    'ı' => "i",
    'Ĳ' => "IJ",
    'ĳ' => "ij",
    'ĸ' => "k",
    'Ŀ' | 'Ł' => "L",
    'ŀ' | 'ł' => "l",
    'ŉ' => "'n",
    'Ŋ' => "N",
    'ŋ' => "n",
    'Œ' => "Oe",
    'œ' => "oe",
    'Ŧ' => "T",
    'ŧ' => "t",
    'ſ' => "s",
    _ => return None,
  };
  Some(folded)
}
