//! Dashboard configuration.
//!
//! Values are layered, later wins:
//! built-in defaults -> preferences store (`preferences.json`) -> environment.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tauri::{AppHandle, Manager};
use tauri_plugin_store::StoreExt;
use tracing::warn;
use url::Url;

use crate::error::InsightdeckError;

/// Name of the tauri-plugin-store file that holds user preferences.
pub const PREFERENCES_STORE: &str = "preferences.json";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Preference keys.
pub const KEY_API_BASE_URL: &str = "api_base_url";
pub const KEY_REQUEST_TIMEOUT_SECS: &str = "request_timeout_secs";
pub const KEY_SNAPSHOT_DIR: &str = "snapshot_dir";

/// Environment overrides.
pub const ENV_API_BASE_URL: &str = "INSIGHTDECK_API_BASE";
pub const ENV_SNAPSHOT_DIR: &str = "INSIGHTDECK_SNAPSHOT_DIR";

/// Directory (inside the bundle resources) that holds the fallback snapshots.
const BUNDLED_SNAPSHOT_DIR: &str = "snapshots";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Overrides the bundled snapshot directory when set.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            snapshot_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Build a config from a preferences lookup and an environment lookup.
    /// Invalid values are logged and ignored.
    pub fn from_lookups(
        preference: impl Fn(&str) -> Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::default();

        let base_candidates = [
            preference(KEY_API_BASE_URL),
            env(ENV_API_BASE_URL),
        ];
        for raw in base_candidates.into_iter().flatten() {
            match normalize_base_url(&raw) {
                Some(url) => config.api_base_url = url,
                None => warn!("Ignoring invalid API base URL '{}'", raw),
            }
        }

        if let Some(raw) = preference(KEY_REQUEST_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout_secs = secs,
                _ => warn!("Ignoring invalid request timeout '{}'", raw),
            }
        }

        let dir_candidates = [preference(KEY_SNAPSHOT_DIR), env(ENV_SNAPSHOT_DIR)];
        for raw in dir_candidates.into_iter().flatten() {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.snapshot_dir = Some(PathBuf::from(trimmed));
            }
        }

        config
    }

    /// Load the effective config for the running app.
    pub fn load(app: &AppHandle) -> Result<Self, InsightdeckError> {
        let store = app.store(PREFERENCES_STORE).map_err(|e| {
            warn!("Failed to open preferences store: {}", e);
            InsightdeckError::Store(e.to_string())
        })?;

        Ok(Self::from_lookups(
            |key| store.get(key).and_then(|v| v.as_str().map(|s| s.to_string())),
            |key| std::env::var(key).ok(),
        ))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Directory the fallback snapshots are read from.
    pub fn resolve_snapshot_dir(&self, app: &AppHandle) -> Result<PathBuf, InsightdeckError> {
        if let Some(dir) = &self.snapshot_dir {
            return Ok(dir.clone());
        }
        let resources = app
            .path()
            .resource_dir()
            .map_err(|e| InsightdeckError::Config(format!("Failed to locate resource dir: {}", e)))?;
        Ok(resources.join(BUNDLED_SNAPSHOT_DIR))
    }
}

/// Accept only absolute http(s) URLs; strip trailing slashes.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).ok()?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => {
            Some(trimmed.trim_end_matches('/').to_string())
        }
        _ => None,
    }
}
