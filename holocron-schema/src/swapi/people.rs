use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of `GET /api/people`.
///
/// `next` is the absolute URL of the following page, or `null` on the last one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwapiPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<SwapiPerson>,
}

/// A character record as served by SWAPI.
///
/// Only the catalog attributes are typed. Everything else the upstream sends
/// (`homeworld`, `films`, `url`, ...) is kept in `extra` so the record can be
/// re-serialized without loss.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SwapiPerson {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SwapiPerson {
    /// Substring match on `name`, ignoring ASCII case.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    }

    /// Equality on `name`, ignoring ASCII case only, the same folding as SQLite `NOCASE`.
    pub fn name_is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
