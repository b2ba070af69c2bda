use serde::{Deserialize, Serialize};
use url::Url;

/// External character source configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// First page of the paginated people listing.
    /// TOML: `source.root_url`. Default: `https://swapi.dev/api/people`.
    #[serde(default = "default_root_url")]
    pub root_url: Url,

    /// Optional upstream HTTP proxy. If set, used for the reqwest client.
    /// TOML: `source.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// TCP connect timeout in seconds.
    /// TOML: `source.connect_timeout_secs`. Default: `10`.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds, applied per page.
    /// TOML: `source.timeout_secs`. Default: `30`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Max upserts in flight during a bulk import. Values below 1 are treated as 1.
    /// TOML: `source.import_concurrency`. Default: `8`.
    #[serde(default = "default_import_concurrency")]
    pub import_concurrency: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            proxy: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            import_concurrency: default_import_concurrency(),
        }
    }
}

fn default_root_url() -> Url {
    Url::parse("https://swapi.dev/api/people").expect("valid SWAPI people URL")
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_import_concurrency() -> usize {
    8
}
