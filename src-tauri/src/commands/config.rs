use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::{DashboardConfig, PREFERENCES_STORE};

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    let value = store.get(key).and_then(|v| v.as_str().map(|s| s.to_string()));
    Ok(value)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}

/// Effective configuration after defaults, preferences and environment are applied.
#[derive(Debug, serde::Serialize)]
pub struct EffectiveConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub snapshot_dir: String,
}

#[tauri::command]
pub fn get_dashboard_config(app: AppHandle) -> Result<EffectiveConfig, String> {
    let config = DashboardConfig::load(&app)?;
    let snapshot_dir = config.resolve_snapshot_dir(&app)?;
    Ok(EffectiveConfig {
        api_base_url: config.api_base_url,
        request_timeout_secs: config.request_timeout_secs,
        snapshot_dir: snapshot_dir.to_string_lossy().to_string(),
    })
}
