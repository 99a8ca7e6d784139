//! Layered configuration.
//!
//! Values are resolved from, in increasing order of precedence:
//!
//! 1. Built-in defaults.
//! 2. A config file (TOML, YAML or JSON, picked by extension). Either the path
//!    given explicitly, or `config.toml` in the platform config directory when
//!    it exists.
//! 3. Environment variables prefixed with `CANVAS_`, nested keys separated by
//!    a double underscore (`CANVAS_SESSION__COOKIE_FILE`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_PREFIX: &str = "CANVAS_";
pub const DEFAULT_BASE_URL: &str = "https://canvas.cornell.edu";
pub const DEFAULT_OUTPUT: &str = "courses";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the Canvas instance; every scraped link is resolved against it.
    pub base_url: String,
    /// Where downloaded courses are written. Relative paths are resolved
    /// against the working directory.
    pub output: PathBuf,
    pub session: SessionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            session: SessionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Browser whose cookie store is read when neither `cookie` nor
    /// `cookie_file` is set; Chrome when unset.
    pub browser: Option<String>,
    /// Raw `Cookie` header copied from the browser.
    pub cookie: Option<String>,
    /// Netscape `cookies.txt` exported from the browser.
    pub cookie_file: Option<PathBuf>,
    /// Domain to pick cookies for; the base URL's host when unset.
    pub domain: Option<String>,
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl SessionConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Location of the config file used when none is given explicitly.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "canvas-dl").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads configuration from every layer.
///
/// An explicit `path` must exist. The default path is silently skipped when
/// there is nothing there.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let figment = match path {
        Some(path) => {
            if !path.is_file() {
                exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
            }
            with_file(defaults(), path)?
        },
        None => match default_path() {
            Some(path) if path.is_file() => with_file(defaults(), &path)?,
            _ => defaults(),
        },
    };
    extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn with_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    };
    tracing::debug!(path = %path.display(), "Using config file");
    Ok(figment)
}

fn extract(figment: Figment) -> Result<Config> {
    figment.extract().or_raise(|| ErrorKind::Invalid)
}
