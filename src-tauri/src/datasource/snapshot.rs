use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{DashboardView, DataSource, SourceError};

/// Bundled JSON snapshots, one file per view.
///
/// The snapshot is shared by every agent, so the agent id is ignored.
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, view: DashboardView) -> PathBuf {
        self.dir.join(view.fallback_file())
    }
}

#[async_trait]
impl DataSource for SnapshotSource {
    async fn fetch(&self, _agent_id: &str, view: DashboardView) -> Result<Vec<u8>, SourceError> {
        let path = self.path_for(view);
        debug!("Reading snapshot {:?}", path);
        tokio::fs::read(&path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", path.display(), e)))
    }

    fn name(&self) -> &'static str {
        "local snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_view_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("overview.json"), b"{\"ok\":true}").unwrap();

        let snapshot = SnapshotSource::new(dir.path());
        let body = snapshot.fetch("any-agent", DashboardView::Overview).await.unwrap();
        assert_eq!(body, b"{\"ok\":true}".to_vec());
    }

    #[tokio::test]
    async fn test_agent_id_does_not_change_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("conversations.json"), b"[]").unwrap();

        let snapshot = SnapshotSource::new(dir.path());
        let a = snapshot.fetch("agent-a", DashboardView::Conversations).await.unwrap();
        let b = snapshot.fetch("agent-b", DashboardView::Conversations).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let snapshot = SnapshotSource::new(dir.path());

        let err = snapshot.fetch("agent", DashboardView::Conversations).await.unwrap_err();
        match err {
            SourceError::Io(msg) => assert!(msg.contains("conversations.json"), "{}", msg),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_path_for_view() {
        let snapshot = SnapshotSource::new("/opt/insightdeck/snapshots");
        assert_eq!(
            snapshot.path_for(DashboardView::Overview),
            PathBuf::from("/opt/insightdeck/snapshots/overview.json")
        );
    }
}
