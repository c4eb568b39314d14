//! Tauri commands backing the resolver-driven dashboard views.

use serde::de::DeserializeOwned;
use tauri::AppHandle;
use tracing::info;

use crate::config::DashboardConfig;
use crate::datasource::types::{ConversationsPayload, OverviewPayload};
use crate::datasource::{resolve, DashboardView, RemoteSource, Resolved, SnapshotSource};
use crate::error::InsightdeckError;

/// Conversations for `agent_id`, from the API or the bundled snapshot.
#[tauri::command]
pub async fn load_conversations(
    app: AppHandle,
    agent_id: String,
) -> Result<Resolved<ConversationsPayload>, String> {
    load_view(&app, &agent_id, DashboardView::Conversations).await
}

/// Sentiment overview for `agent_id`, from the API or the bundled snapshot.
#[tauri::command]
pub async fn load_overview(
    app: AppHandle,
    agent_id: String,
) -> Result<Resolved<OverviewPayload>, String> {
    load_view(&app, &agent_id, DashboardView::Overview).await
}

/// Config is re-read on every call so preference edits apply to the next load.
async fn load_view<T: DeserializeOwned>(
    app: &AppHandle,
    agent_id: &str,
    view: DashboardView,
) -> Result<Resolved<T>, String> {
    info!("Loading {} for agent '{}'", view, agent_id);

    let config = DashboardConfig::load(app)?;
    let remote = RemoteSource::new(&config.api_base_url, config.request_timeout())
        .map_err(|e| InsightdeckError::Config(e.to_string()))?;
    let fallback = SnapshotSource::new(config.resolve_snapshot_dir(app)?);

    let resolved = resolve(&remote, &fallback, agent_id, view)
        .await
        .map_err(InsightdeckError::from)?;
    Ok(resolved)
}
