//! Dev server configuration.
//!
//! DESIGN
//! ======
//! The shape follows the usual front-end dev server layout (`server`,
//! `plugins`, `resolve.alias`) so a config file reads the same way the
//! bundler config it replaces did. Values are layered: built-in defaults, an
//! optional YAML file, environment variables, then command-line flags.
//! `validate` runs once after layering so every source obeys the same rules.
//!
//! PORTS
//! =====
//! The hot-reload ports are optional in every layer. Left unset, `hmr.port`
//! resolves to the serve port and `hmr.clientPort` to `hmr.port`, so the
//! shared-listener setup follows the serve port whichever layer sets it.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::plugins;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 100;
pub const DEFAULT_CONFIG_FILE: &str = "repocheck.yaml";
pub const DEFAULT_SITE_ROOT: &str = "target/site";
pub const DEFAULT_ALIAS: &str = "~bootstrap";
pub const DEFAULT_ALIAS_TARGET: &str = "node_modules/bootstrap";
pub const DEFAULT_WATCH_PATHS: &[&str] = &["client/src", "client/style"];

pub const ENV_HOST: &str = "REPOCHECK_HOST";
pub const ENV_PORT: &str = "REPOCHECK_PORT";
pub const ENV_HMR_PORT: &str = "REPOCHECK_HMR_PORT";
pub const ENV_HMR_CLIENT_PORT: &str = "REPOCHECK_HMR_CLIENT_PORT";
pub const ENV_WATCH_POLLING: &str = "REPOCHECK_WATCH_POLLING";
pub const ENV_WATCH_INTERVAL_MS: &str = "REPOCHECK_WATCH_INTERVAL_MS";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read failed: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse failed: {0}")]
    Parse(String),

    #[error("invalid {field}: port must be non-zero")]
    InvalidPort { field: &'static str },

    #[error("invalid alias '{name}': {reason}")]
    InvalidAlias { name: String, reason: &'static str },

    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("plugin listed twice: {0}")]
    DuplicatePlugin(String),

    #[error("watch interval must be at least 1ms")]
    InvalidInterval,
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Hot-reload websocket channel. Unset ports follow the serve port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HmrConfig {
    /// Port the server listens on for hot-reload connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Port the browser should dial. Differs from `port` behind a proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WatchConfig {
    pub use_polling: bool,
    pub interval_ms: u64,
    /// Source directories, relative to the root, whose edits trigger a reload.
    pub paths: Vec<PathBuf>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            use_polling: true,
            interval_ms: DEFAULT_WATCH_INTERVAL_MS,
            paths: DEFAULT_WATCH_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub hmr: HmrConfig,
    pub watch: WatchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            hmr: HmrConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

/// Module-resolution aliases: `~name` -> directory relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    pub alias: BTreeMap<String, PathBuf>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        let mut alias = BTreeMap::new();
        alias.insert(DEFAULT_ALIAS.to_owned(), PathBuf::from(DEFAULT_ALIAS_TARGET));
        Self { alias }
    }
}

// =============================================================================
// DEV CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DevConfig {
    /// Project root. Set by the loader, never read from the file.
    #[serde(skip)]
    pub root: PathBuf,
    /// Directory holding the built site, relative to `root`.
    pub site_root: PathBuf,
    pub server: ServerConfig,
    pub plugins: Vec<String>,
    pub resolve: ResolveConfig,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            server: ServerConfig::default(),
            plugins: vec![plugins::LEPTOS_PLUGIN.to_owned()],
            resolve: ResolveConfig::default(),
        }
    }
}

/// Command-line overrides, applied last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl DevConfig {
    /// Parse a YAML document. Missing sections keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid YAML for
    /// this shape.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&raw)
    }

    /// Load the file named by `explicit`, or `root/repocheck.yaml` if it
    /// exists, or defaults. An explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_file(path)?,
            None => {
                let path = root.join(DEFAULT_CONFIG_FILE);
                if path.is_file() { Self::load_file(&path)? } else { Self::default() }
            }
        };
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// Apply `REPOCHECK_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a variable is set to an unparsable value.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a variable is set to an unparsable value.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = env_value::<u16>(&lookup, ENV_PORT)? {
            self.server.port = port;
        }
        if let Some(port) = env_value::<u16>(&lookup, ENV_HMR_PORT)? {
            self.server.hmr.port = Some(port);
        }
        if let Some(port) = env_value::<u16>(&lookup, ENV_HMR_CLIENT_PORT)? {
            self.server.hmr.client_port = Some(port);
        }
        if let Some(raw) = lookup(ENV_WATCH_POLLING) {
            self.server.watch.use_polling = parse_bool(ENV_WATCH_POLLING, &raw)?;
        }
        if let Some(interval) = env_value::<u64>(&lookup, ENV_WATCH_INTERVAL_MS)? {
            self.server.watch.interval_ms = interval;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(host) = &overrides.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    /// Port the hot-reload listener binds.
    #[must_use]
    pub fn hmr_port(&self) -> u16 {
        self.server.hmr.port.unwrap_or(self.server.port)
    }

    /// Port the browser dials for hot reload.
    #[must_use]
    pub fn hmr_client_port(&self) -> u16 {
        self.server.hmr.client_port.unwrap_or_else(|| self.hmr_port())
    }

    /// Check ports, polling interval, aliases and plugin names.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort { field: "server.port" });
        }
        if self.hmr_port() == 0 {
            return Err(ConfigError::InvalidPort { field: "server.hmr.port" });
        }
        if self.hmr_client_port() == 0 {
            return Err(ConfigError::InvalidPort { field: "server.hmr.clientPort" });
        }
        if self.server.watch.use_polling && self.server.watch.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        for (name, target) in &self.resolve.alias {
            validate_alias(name, target)?;
        }
        for (i, name) in self.plugins.iter().enumerate() {
            if !plugins::is_known(name) {
                return Err(ConfigError::UnknownPlugin(name.clone()));
            }
            if self.plugins[..i].contains(name) {
                return Err(ConfigError::DuplicatePlugin(name.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn hmr_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.hmr_port())
    }

    /// Whether the hot-reload websocket is served on the main listener.
    #[must_use]
    pub fn hmr_shares_listener(&self) -> bool {
        self.hmr_port() == self.server.port
    }

    #[must_use]
    pub fn site_dir(&self) -> PathBuf {
        self.root.join(&self.site_root)
    }

    /// Directories the polling watcher scans: the built site plus every
    /// configured source path, deduplicated in first-seen order.
    #[must_use]
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        let mut roots = vec![self.site_dir()];
        for path in self.server.watch.paths.iter().map(|p| self.root.join(p)) {
            if !roots.contains(&path) {
                roots.push(path);
            }
        }
        roots
    }

    /// Map an aliased request path to a file path under the project root.
    ///
    /// `~bootstrap/dist/css/bootstrap.css` resolves to
    /// `<root>/node_modules/bootstrap/dist/css/bootstrap.css`. Returns `None`
    /// for unknown aliases and for any path that tries to leave the target
    /// directory.
    #[must_use]
    pub fn resolve_alias(&self, request: &str) -> Option<PathBuf> {
        let request = request.strip_prefix('/').unwrap_or(request);
        let (name, rest) = request.split_once('/').unwrap_or((request, ""));
        let target = self.resolve.alias.get(name)?;
        let base = self.root.join(target);
        if rest.is_empty() {
            return Some(base);
        }
        let rest = Path::new(rest);
        if rest.components().any(|c| !matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(base.join(rest))
    }
}

/// Build the effective configuration: file, env, flags, then validation.
///
/// # Errors
///
/// Returns an error if any layer fails to load or the result is invalid.
pub fn load(root: &Path, explicit: Option<&Path>, overrides: &Overrides) -> Result<DevConfig, ConfigError> {
    let mut config = DevConfig::discover(root, explicit)?;
    config.apply_env()?;
    config.apply_overrides(overrides);
    config.validate()?;
    Ok(config)
}

fn validate_alias(name: &str, target: &Path) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidAlias { name: name.to_owned(), reason };
    if !name.starts_with('~') {
        return Err(invalid("name must start with '~'"));
    }
    if name.len() < 2 {
        return Err(invalid("name is empty"));
    }
    if name.contains('/') {
        return Err(invalid("name must not contain '/'"));
    }
    if target.as_os_str().is_empty() {
        return Err(invalid("target is empty"));
    }
    Ok(())
}

fn env_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("invalid {key}: {raw}"))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse(format!("invalid {key}: {raw}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
