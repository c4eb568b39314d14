pub mod commands;
pub mod config;
pub mod datasource;
mod error;

pub use datasource::{resolve, DashboardView, DataSource, DataSourceKind, Resolved};
pub use error::InsightdeckError;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::config::get_dashboard_config,
            commands::dashboard::load_conversations,
            commands::dashboard::load_overview,
            commands::configuration::get_agent_configuration,
            commands::configuration::save_agent_configuration,
            commands::chat::submit_chat_message,
        ])
        .setup(|app| {
            // Log where data will come from so a fallback is easy to diagnose.
            match config::DashboardConfig::load(app.handle()) {
                Ok(cfg) => {
                    let snapshots = cfg
                        .resolve_snapshot_dir(app.handle())
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|e| e.to_string());
                    tracing::info!(
                        "Dashboard API at {} (timeout {}s), snapshots in {}",
                        cfg.api_base_url,
                        cfg.request_timeout_secs,
                        snapshots
                    );
                }
                Err(e) => tracing::warn!("Failed to load dashboard config: {}", e),
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
