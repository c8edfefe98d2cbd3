//! Tests for `MemoryStore` and its configuration.

use roster_core::{
  Error as CoreError, Person, Role,
  filter::{MatchContext, Matcher, Predicate, Query},
};
use serde_json::json;

use crate::{Error, FilterMode, MemoryStore, StoreConfig};

fn ann() -> serde_json::Value {
  json!({
    "id": "1",
    "name": "Ann Lee",
    "bDate": "05.03.1985",
    "roles": [],
    "nick": [],
    "alias": [],
    "bName": "",
    "_private": false,
  })
}

fn cast() -> MemoryStore {
  MemoryStore::from_json(json!([
    {
      "id": "jpb",
      "name": "Jean Paul Belmondo",
      "nick": ["Bebel"],
      "bDate": "09.04.1933",
      "roles": [{ "name": "Michel Poiccard", "movie": "À bout de souffle" }],
      "_private": false,
    },
    {
      "id": "ak",
      "name": "Anna Karina",
      "bName": "Hanne Karin Bayer",
      "bDate": "22.09.1940",
      "roles": [{ "name": "Marianne Renoir", "nick": ["Marianne"], "movie": "Pierrot le fou" }],
      "_private": true,
    },
    {
      "id": "jps",
      "name": "Jean Seberg",
      "bDate": "13.11.1938",
      "roles": [{ "name": "Patricia Franchini", "movie": "À bout de souffle" }],
      "_private": false,
    },
  ]))
  .unwrap()
}

fn ids(entries: &crate::Entries) -> Vec<&str> {
  entries.iter().map(|p| p.id.as_str()).collect()
}

// ─── Construction ────────────────────────────────────────────────────────────

#[test]
fn build_from_zero_one_or_many() {
  assert!(MemoryStore::from_json(json!(null)).unwrap().is_empty());
  assert_eq!(MemoryStore::from_json(ann()).unwrap().len(), 1);
  assert_eq!(cast().len(), 3);
}

#[test]
fn reject_non_record_json() {
  let err = MemoryStore::from_json(json!("Ann Lee")).unwrap_err();
  assert!(matches!(err, Error::NotARecord("a string")));

  let err = MemoryStore::from_json_str("{ not json").unwrap_err();
  assert!(matches!(err, Error::Json(_)));
}

#[test]
fn insert_replaces_by_id_in_place() {
  let mut store = cast();
  let old = store.insert(Person::new("ak", "Anna Karina"));
  assert_eq!(old.unwrap().b_name, "Hanne Karin Bayer");
  assert_eq!(store.len(), 3);
  assert_eq!(store.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), [
    "jpb", "ak", "jps"
  ]);
  assert!(store.get("ak").unwrap().b_name.is_empty());
  assert!(store.get("nobody").is_none());
}

// ─── Filter mode ─────────────────────────────────────────────────────────────

#[test]
fn filter_mode_defaults_to_strict() {
  assert_eq!(MemoryStore::new().filter_mode(), "strict");
}

#[test]
fn set_filter_mode_by_name() {
  let mut store = MemoryStore::new();
  store.set_filter_mode("adjustment").unwrap();
  assert_eq!(store.filter_mode(), "adjustment");
  assert_eq!(store.context().mode, FilterMode::Adjustment);
}

#[test]
fn unsupported_mode_leaves_mode_unchanged() {
  let mut store = MemoryStore::new();
  store.set_filter_mode("normalize").unwrap();

  let err = store.set_filter_mode("fuzzy").unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::UnsupportedMode(_))));
  assert_eq!(store.filter_mode(), "normalize");
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn end_to_end_scenario() {
  let mut store = MemoryStore::from_json(json!([ann()])).unwrap();
  store.set_filter_mode("normalize").unwrap();

  assert_eq!(ids(&store.filter("Ann Lee").unwrap()), ["1"]);
  assert_eq!(ids(&store.filter("05.03").unwrap()), ["1"]);
  assert_eq!(ids(&store.filter("1985").unwrap()), ["1"]);
  assert!(store.filter("99.99").unwrap().is_empty());
}

#[test]
fn id_takes_precedence() {
  let store = MemoryStore::from_records([
    Person {
      b_date: Some("01.01.1985".into()),
      ..Person::new("a", "Ann Lee")
    },
    Person::new("1985", "Numbered Person"),
  ]);
  assert_eq!(ids(&store.filter("1985").unwrap()), ["1985"]);
  assert_eq!(ids(&store.filter(1985).unwrap()), ["a"]);
}

#[test]
fn numeric_queries_skip_text_matchers() {
  let store = cast();
  assert_eq!(ids(&store.filter(1938).unwrap()), ["jps"]);
  assert_eq!(ids(&store.filter(4).unwrap()), ["jpb"]);
  assert!(store.filter(123).unwrap().is_empty());
}

#[test]
fn name_flags_through_the_store() {
  let store = cast();
  assert_eq!(ids(&store.filter("# Jean").unwrap()), ["jpb", "jps"]);
  assert_eq!(ids(&store.filter("Bebel").unwrap()), ["jpb"]);
  assert_eq!(ids(&store.filter("* Bayer").unwrap()), ["ak"]);
  assert_eq!(ids(&store.filter("- Marianne Renoir").unwrap()), ["ak"]);
  assert_eq!(ids(&store.filter("-$ À bout de souffle").unwrap()), [
    "jpb", "jps"
  ]);
  assert!(store.filter("-$ A bout de souffle").unwrap().is_empty());
}

#[test]
fn mode_changes_loosen_matching() {
  let mut store = cast();
  assert!(store.filter("jean seberg").unwrap().is_empty());

  store.set_filter_mode("normalize").unwrap();
  assert_eq!(ids(&store.filter("-$ A bout de souffle").unwrap()), [
    "jpb", "jps"
  ]);
  assert!(store.filter("jean seberg").unwrap().is_empty());

  store.set_filter_mode("adjustment").unwrap();
  assert_eq!(ids(&store.filter("jean seberg").unwrap()), ["jps"]);
  assert_eq!(ids(&store.filter("JPB").unwrap()), ["jpb"]);
}

#[test]
fn explicit_context_overrides_store_mode() {
  let store = cast();
  let cx = MatchContext::new(FilterMode::Adjustment);
  let found = store.filter_with(&Query::from("anna karina"), &cx).unwrap();
  assert_eq!(ids(&found), ["ak"]);
  assert_eq!(store.filter_mode(), "strict");
}

#[test]
fn unmatched_queries_yield_empty_results() {
  let store = cast();
  assert!(store.filter("").unwrap().is_empty());
  assert!(store.filter("Nobody").unwrap().is_empty());
  assert!(store.filter("line\nbreak").unwrap().is_empty());
}

#[test]
fn results_chain_sort_and_visibility() {
  let store = cast();
  let everyone = store.all();

  assert_eq!(ids(&everyone.sort_by().age(true)), ["jpb", "jps", "ak"]);
  assert_eq!(ids(&everyone.sort_by().b_date(true)), ["jpb", "ak", "jps"]);
  assert_eq!(ids(&everyone.sort_by().first_name(false)), ["jpb", "jps", "ak"]);
  assert_eq!(ids(&everyone.sort_by().last_name(true)), ["jpb", "ak", "jps"]);
  assert_eq!(ids(&everyone.filter_by().private()), ["ak"]);

  let public_by_age = store
    .filter("-$ À bout de souffle")
    .unwrap()
    .filter_by()
    .public()
    .sort_by()
    .age(false);
  assert_eq!(ids(&public_by_age), ["jps", "jpb"]);
}

// ─── Custom matchers ─────────────────────────────────────────────────────────

struct MovieCount;

impl Matcher for MovieCount {
  fn name(&self) -> &'static str { "movie-count" }

  fn matcher(
    &self,
    query: &Query,
    _cx: &MatchContext,
  ) -> roster_core::Result<Option<Predicate>> {
    let Some(count) = query.as_text().and_then(|q| q.strip_prefix("roles:"))
    else {
      return Ok(None);
    };
    let Ok(count) = count.parse::<usize>() else {
      return Ok(None);
    };
    Ok(Some(Box::new(move |p: &Person| p.roles.len() == count)))
  }
}

#[test]
fn registered_matchers_run_last() {
  let mut store = cast();
  store.insert(Person {
    roles: vec![Role::new("A B", "C"), Role::new("D E", "F")],
    ..Person::new("busy", "Busy Actor")
  });
  store.register_matcher(Box::new(MovieCount));

  assert_eq!(ids(&store.filter("roles:2").unwrap()), ["busy"]);
  assert_eq!(store.filter("roles:1").unwrap().len(), 3);
}

// ─── Configuration ───────────────────────────────────────────────────────────

fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
  let path = std::env::temp_dir()
    .join(format!("roster-store-{}-{name}.toml", std::process::id()));
  std::fs::write(&path, contents).expect("write config");
  path
}

#[test]
fn config_from_file() {
  let path = write_config("adjust", "filter_mode = \"adjustment\"\n");
  let config = StoreConfig::load(Some(path.as_path())).unwrap();
  std::fs::remove_file(&path).ok();

  assert_eq!(config.filter_mode, FilterMode::Adjustment);
  assert_eq!(MemoryStore::with_config(&config).filter_mode(), "adjustment");
}

#[test]
fn missing_config_file_uses_defaults() {
  let path = std::env::temp_dir().join("roster-store-does-not-exist.toml");
  let config = StoreConfig::load(Some(path.as_path())).unwrap();
  assert_eq!(config, StoreConfig::default());
}

#[test]
fn config_rejects_unknown_mode() {
  let path = write_config("bad", "filter_mode = \"fuzzy\"\n");
  let err = StoreConfig::load(Some(path.as_path())).unwrap_err();
  std::fs::remove_file(&path).ok();

  assert!(matches!(err, Error::Core(CoreError::UnsupportedMode(ref m)) if m == "fuzzy"));
}
