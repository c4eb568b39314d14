//! Agent configuration form persistence.
//!
//! Each agent's form is stored in the preferences store under
//! `agent_config.{agent_id}`.

use serde::{Deserialize, Serialize};
use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::PREFERENCES_STORE;
use crate::error::InsightdeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
    Tablet,
}

/// The agent configuration form. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfiguration {
    pub agent_title: String,
    pub language: String,
    pub feature_focus: String,
    pub target_age: String,
    pub location: String,
    pub devices: Vec<DeviceType>,
    pub opening_message: String,
    pub interview_type: String,
    pub thank_you_message: String,
}

pub fn config_key(agent_id: &str) -> String {
    format!("agent_config.{}", agent_id)
}

fn decode(agent_id: &str, value: serde_json::Value) -> Option<AgentConfiguration> {
    match serde_json::from_value(value) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Discarding unreadable configuration for '{}': {}", agent_id, e);
            None
        }
    }
}

#[tauri::command]
pub fn get_agent_configuration(
    app: AppHandle,
    agent_id: &str,
) -> Result<Option<AgentConfiguration>, String> {
    let store = app
        .store(PREFERENCES_STORE)
        .map_err(|e| InsightdeckError::Store(e.to_string()))?;
    Ok(store
        .get(config_key(agent_id))
        .and_then(|value| decode(agent_id, value)))
}

#[tauri::command]
pub fn save_agent_configuration(
    app: AppHandle,
    agent_id: &str,
    configuration: AgentConfiguration,
) -> Result<(), String> {
    info!(
        "Saving configuration for agent '{}' (title '{}', {} devices)",
        agent_id,
        configuration.agent_title,
        configuration.devices.len()
    );
    let store = app
        .store(PREFERENCES_STORE)
        .map_err(|e| InsightdeckError::Store(e.to_string()))?;
    let value = serde_json::to_value(&configuration)
        .map_err(|e| InsightdeckError::Store(e.to_string()))?;
    store.set(config_key(agent_id), value);
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        InsightdeckError::Store(e.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_is_per_agent() {
        assert_eq!(config_key("agent-id-1"), "agent_config.agent-id-1");
        assert_ne!(config_key("a"), config_key("b"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let value = serde_json::json!({
            "agent_title": "Churn Prevention Bot",
            "devices": ["mobile", "tablet"]
        });
        let config = decode("agent", value).unwrap();
        assert_eq!(config.agent_title, "Churn Prevention Bot");
        assert_eq!(config.devices, vec![DeviceType::Mobile, DeviceType::Tablet]);
        assert!(config.language.is_empty());
    }

    #[test]
    fn test_unreadable_config_is_dropped() {
        let value = serde_json::json!({ "devices": ["smartwatch"] });
        assert!(decode("agent", value).is_none());
    }
}
