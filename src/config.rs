//! Frontend configuration
//!
//! Read once at startup from `<meta name="planejaqui:*">` tags so the same
//! build can be deployed against different backends.

use std::fmt;
use std::str::FromStr;

pub const STORAGE_KEY: &str = "planejaqui-items";
pub const SNAPSHOT_URL: &str = "/data.json";

const META_PERSISTENCE: &str = "planejaqui:persistence";
const META_ENDPOINT: &str = "planejaqui:endpoint";
const META_LOG_LEVEL: &str = "planejaqui:log-level";

/// Where the collection is loaded from and saved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistenceMode {
    /// Browser local storage
    #[default]
    Local,
    /// Save endpoint over HTTP
    Remote,
    /// Static JSON snapshot, never written
    Snapshot,
    /// Local storage, with every save also sent to the endpoint
    Mirrored,
}

impl FromStr for PersistenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "snapshot" => Ok(Self::Snapshot),
            "mirrored" => Ok(Self::Mirrored),
            other => Err(format!("unknown persistence mode: {}", other)),
        }
    }
}

impl fmt::Display for PersistenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Snapshot => "snapshot",
            Self::Mirrored => "mirrored",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mode: PersistenceMode,
    /// Base URL of the save endpoint, empty for same origin
    pub endpoint: String,
    pub storage_key: String,
    pub snapshot_url: String,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: PersistenceMode::default(),
            endpoint: String::new(),
            storage_key: STORAGE_KEY.to_string(),
            snapshot_url: SNAPSHOT_URL.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read the meta tags of the current document
    pub fn from_document() -> Self {
        Self::from_lookup(read_meta)
    }

    /// Build from a `name -> content` lookup; unknown values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(META_PERSISTENCE) {
            match raw.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => log::warn!("[CONFIG] {}, using {}", e, config.mode),
            }
        }
        if let Some(endpoint) = lookup(META_ENDPOINT) {
            config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = lookup(META_LOG_LEVEL).and_then(|raw| raw.parse().ok()) {
            config.log_level = level;
        }
        config
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
