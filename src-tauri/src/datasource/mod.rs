//! Fetch-with-fallback resolution for dashboard views.
//!
//! Every view payload is resolved the same way:
//! 1. Ask the remote API (`{base}/agent/{agentId}/{view}`)
//! 2. If that fails for any reason (network, non-2xx, bad JSON), log it and
//!    read the bundled snapshot file for the view instead
//! 3. If the snapshot fails too, report a single terminal error
//!
//! Nothing is cached between calls; each resolution repeats both steps.

pub mod remote;
pub mod snapshot;
pub mod types;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub use self::remote::RemoteSource;
pub use self::snapshot::SnapshotSource;

/// The dashboard views that are backed by remote data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Conversations,
    Overview,
}

impl DashboardView {
    /// Path segment appended to `{base}/agent/{agentId}/`.
    pub fn endpoint(self) -> &'static str {
        match self {
            DashboardView::Conversations => "conversations",
            DashboardView::Overview => "overview",
        }
    }

    /// File name of the bundled snapshot for this view.
    pub fn fallback_file(self) -> &'static str {
        match self {
            DashboardView::Conversations => "conversations.json",
            DashboardView::Overview => "overview.json",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Where a resolved payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    Api,
    File,
}

/// A payload together with the source that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub payload: T,
    pub source: DataSourceKind,
}

/// Failure of a single source attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid payload: {0}")]
    Parse(String),

    #[error("failed to read snapshot: {0}")]
    Io(String),
}

/// Terminal failure: both the API and the snapshot failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Failed to load {view} from both API and local file")]
    BothFailed {
        view: DashboardView,
        remote: SourceError,
        fallback: SourceError,
    },
}

/// A place a view payload can be read from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Return the raw body for `view`. Implementations report failures as
    /// values; they never panic.
    async fn fetch(&self, agent_id: &str, view: DashboardView) -> Result<Vec<u8>, SourceError>;

    fn name(&self) -> &'static str;
}

/// Resolve `view` for `agent_id`, preferring `remote` and degrading to `fallback`.
///
/// The fallback is only touched when the remote attempt failed. The remote
/// error is logged and swallowed; only the combined failure is returned.
pub async fn resolve<T, R, F>(
    remote: &R,
    fallback: &F,
    agent_id: &str,
    view: DashboardView,
) -> Result<Resolved<T>, ResolveError>
where
    T: DeserializeOwned,
    R: DataSource + ?Sized,
    F: DataSource + ?Sized,
{
    let remote_err = match attempt::<T, R>(remote, agent_id, view).await {
        Ok(payload) => {
            info!("Loaded {} for agent '{}' from {}", view, agent_id, remote.name());
            return Ok(Resolved {
                payload,
                source: DataSourceKind::Api,
            });
        }
        Err(e) => {
            warn!(
                "{} request for {} (agent '{}') failed: {}, falling back to {}",
                remote.name(),
                view,
                agent_id,
                e,
                fallback.name()
            );
            e
        }
    };

    match attempt::<T, F>(fallback, agent_id, view).await {
        Ok(payload) => {
            info!("Loaded {} for agent '{}' from {}", view, agent_id, fallback.name());
            Ok(Resolved {
                payload,
                source: DataSourceKind::File,
            })
        }
        Err(e) => {
            warn!("All data loading methods failed for {}: {}", view, e);
            Err(ResolveError::BothFailed {
                view,
                remote: remote_err,
                fallback: e,
            })
        }
    }
}

async fn attempt<T, S>(source: &S, agent_id: &str, view: DashboardView) -> Result<T, SourceError>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let body = source.fetch(agent_id, view).await?;
    serde_json::from_slice(&body).map_err(|e| SourceError::Parse(e.to_string()))
}
