//! Dev server plugins.
//!
//! A plugin contributes routes to the main router. Plugins are named in the
//! config file, checked for duplicates by `DevConfig::validate`, and
//! instantiated once at startup.

use axum::Router;
use tower_http::services::ServeDir;

use crate::config::{ConfigError, DevConfig};

pub const LEPTOS_PLUGIN: &str = "leptos";

const KNOWN_PLUGINS: &[&str] = &[LEPTOS_PLUGIN];

pub trait DevPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Routes merged into the main router.
    fn routes(&self, config: &DevConfig) -> Router;
}

/// Serves the compiled WASM bundle from `<site_root>/pkg`.
pub struct LeptosPlugin;

impl DevPlugin for LeptosPlugin {
    fn name(&self) -> &'static str {
        LEPTOS_PLUGIN
    }

    fn routes(&self, config: &DevConfig) -> Router {
        Router::new().nest_service("/pkg", ServeDir::new(config.site_dir().join("pkg")))
    }
}

#[must_use]
pub fn is_known(name: &str) -> bool {
    KNOWN_PLUGINS.contains(&name)
}

/// Instantiate plugins in the order they are listed.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownPlugin`] for a name with no implementation.
pub fn instantiate(names: &[String]) -> Result<Vec<Box<dyn DevPlugin>>, ConfigError> {
    names
        .iter()
        .map(|name| match name.as_str() {
            LEPTOS_PLUGIN => Ok(Box::new(LeptosPlugin) as Box<dyn DevPlugin>),
            other => Err(ConfigError::UnknownPlugin(other.to_owned())),
        })
        .collect()
}

#[cfg(test)]
#[path = "plugins_test.rs"]
mod tests;
