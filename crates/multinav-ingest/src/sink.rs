//! Fire-and-forget HTTP delivery of log records.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::event::LogEvent;

/// POSTs [`LogEvent`]s as JSON to the ingest server.
///
/// Delivery is best effort: failures are logged and never retried.
#[derive(Debug, Clone)]
pub struct IngestSink {
    http: reqwest::Client,
    url: reqwest::Url,
}

impl IngestSink {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, IngestError> {
        let url = reqwest::Url::parse(url).map_err(|e| IngestError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(IngestError::InvalidUrl(format!(
                "{url}: scheme must be http or https"
            )));
        }
        let mut builder = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout);
        if is_loopback(&url) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Post one record and wait for the response status.
    pub async fn send(&self, event: &LogEvent) -> Result<(), IngestError> {
        let resp = self.http.post(self.url.clone()).json(event).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(IngestError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// Spawn delivery on `runtime` and return immediately.
    pub fn ship(&self, runtime: &Handle, event: LogEvent) -> JoinHandle<()> {
        let sink = self.clone();
        runtime.spawn(async move {
            match sink.send(&event).await {
                Ok(()) => debug!(
                    event_id = %event.event_id,
                    pane_id = %event.client.pane_id,
                    "log event shipped"
                ),
                Err(e) => warn!(
                    event_id = %event.event_id,
                    url = %sink.url,
                    error = %e,
                    "log event delivery failed"
                ),
            }
        })
    }
}

/// Local ingest servers are never reached through a system proxy.
fn is_loopback(url: &reqwest::Url) -> bool {
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_matches(['[', ']'])
            .parse::<std::net::IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::ContentPayload;
    use crate::prompt::PromptTracker;
    use chrono::Utc;
    use multinav_common::DEFAULT_INGEST_URL;
    use multinav_common::types::PaneIndex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn sample_event() -> LogEvent {
        let payload = ContentPayload {
            provider: "test".into(),
            model: None,
            text: "hello".into(),
            tokens_out: None,
            latency_ms: None,
            detected_at: None,
        };
        LogEvent::from_content(PaneIndex(0), &payload, &PromptTracker::new(), Utc::now())
    }

    fn header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    /// Accept one request, answer with `status_line`, return the raw request.
    async fn one_shot_server(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = sock.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = header_end(&buf) {
                    let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                    let len = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + len {
                        break;
                    }
                }
            }
            let resp = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            sock.write_all(resp.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        });
        (format!("http://{addr}/log"), task)
    }

    #[test]
    fn rejects_bad_urls() {
        let t = Duration::from_secs(1);
        assert!(matches!(
            IngestSink::new("not a url", t),
            Err(IngestError::InvalidUrl(_))
        ));
        assert!(matches!(
            IngestSink::new("ftp://127.0.0.1/log", t),
            Err(IngestError::InvalidUrl(_))
        ));
        assert!(IngestSink::new(DEFAULT_INGEST_URL, t).is_ok());
    }

    #[test]
    fn loopback_detection() {
        let url = |s: &str| reqwest::Url::parse(s).unwrap();
        assert!(is_loopback(&url("http://127.0.0.1:8787/log")));
        assert!(is_loopback(&url("http://localhost/log")));
        assert!(is_loopback(&url("http://[::1]:80/log")));
        assert!(!is_loopback(&url("https://ingest.example.com/log")));
    }

    #[tokio::test]
    async fn posts_json_body() {
        let (url, server) = one_shot_server("HTTP/1.1 200 OK").await;
        let sink = IngestSink::new(&url, Duration::from_secs(5)).unwrap();
        let event = sample_event();

        sink.send(&event).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /log"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(&event.event_id));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (url, server) = one_shot_server("HTTP/1.1 500 Internal Server Error").await;
        let sink = IngestSink::new(&url, Duration::from_secs(5)).unwrap();
        let err = sink.send(&sample_event()).await.unwrap_err();
        assert!(matches!(err, IngestError::Status(500)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let port = {
            let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
            l.local_addr().unwrap().port()
        };
        let sink = IngestSink::new(&format!("http://127.0.0.1:{port}/log"), Duration::from_secs(2))
            .unwrap();
        let err = sink.send(&sample_event()).await.unwrap_err();
        assert!(matches!(err, IngestError::Network(_)));
    }

    #[tokio::test]
    async fn ship_swallows_failures() {
        let port = {
            let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
            l.local_addr().unwrap().port()
        };
        let sink = IngestSink::new(&format!("http://127.0.0.1:{port}/log"), Duration::from_secs(2))
            .unwrap();
        let task = sink.ship(&Handle::current(), sample_event());
        assert!(task.await.is_ok());
    }
}
