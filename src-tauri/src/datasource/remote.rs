use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{DashboardView, DataSource, SourceError};

const USER_AGENT: &str = "Insightdeck/0.1";

/// The agent analytics API: `GET {base}/agent/{agentId}/{view}`.
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSource {
    /// Build a client for `base_url`. Trailing slashes are dropped so the
    /// endpoint never contains `//agent`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client (proxy settings, TLS roots, ...).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a view. The agent id is an opaque string, so it is
    /// percent-encoded as a single path segment.
    pub fn endpoint(&self, agent_id: &str, view: DashboardView) -> String {
        format!(
            "{}/agent/{}/{}",
            self.base_url,
            urlencoding::encode(agent_id),
            view.endpoint()
        )
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn fetch(&self, agent_id: &str, view: DashboardView) -> Result<Vec<u8>, SourceError> {
        let url = self.endpoint(agent_id, view);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response body: {}", e)))?;

        Ok(body.to_vec())
    }

    fn name(&self) -> &'static str {
        "API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one canned HTTP response and report the request line.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}", addr), rx)
    }

    fn source(base: &str) -> RemoteSource {
        // Talk to the local stub directly even if the environment sets a proxy.
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        RemoteSource::with_client(client, base)
    }

    #[test]
    fn test_endpoint_layout() {
        let remote = source("https://api.example.com/v1/");
        assert_eq!(
            remote.endpoint("my-agent-123", DashboardView::Conversations),
            "https://api.example.com/v1/agent/my-agent-123/conversations"
        );
        assert_eq!(
            remote.endpoint("my-agent-123", DashboardView::Overview),
            "https://api.example.com/v1/agent/my-agent-123/overview"
        );
    }

    #[test]
    fn test_endpoint_encodes_agent_id() {
        let remote = source("https://api.example.com");
        assert_eq!(
            remote.endpoint("team a/b", DashboardView::Overview),
            "https://api.example.com/agent/team%20a%2Fb/overview"
        );
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let (base, request) = serve_once("200 OK", r#"{"conversations":[]}"#).await;
        let remote = source(&base);

        let body = remote.fetch("agent-7", DashboardView::Conversations).await.unwrap();
        assert_eq!(body, br#"{"conversations":[]}"#.to_vec());

        let request_line = request.await.unwrap();
        assert_eq!(request_line, "GET /agent/agent-7/conversations HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let (base, _request) = serve_once("503 Service Unavailable", r#"{"error":"down"}"#).await;
        let remote = source(&base);

        let err = remote.fetch("agent-7", DashboardView::Overview).await.unwrap_err();
        assert_eq!(err, SourceError::Status(503));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let remote = source(&format!("http://{}", addr));
        let err = remote.fetch("agent-7", DashboardView::Overview).await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)), "got {:?}", err);
    }
}
