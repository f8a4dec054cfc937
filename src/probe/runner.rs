use std::sync::Arc;
use std::time::Duration;

use crate::errors::ProbeError;
use crate::models::{ProbeResult, TargetService};
use crate::report::Diagnostics;
use super::transport::Transport;

/// Issues one probe per candidate path: builds the URL, announces it on the
/// diagnostics stream, sends it through the transport under a deadline.
pub struct ProbeRunner {
    transport: Arc<dyn Transport>,
    diagnostics: Arc<dyn Diagnostics>,
    deadline: Duration,
}

impl ProbeRunner {
    pub fn new(
        transport: Arc<dyn Transport>,
        diagnostics: Arc<dyn Diagnostics>,
        deadline: Duration,
    ) -> Self {
        Self {
            transport,
            diagnostics,
            deadline,
        }
    }

    /// Probe a single candidate path. `MalformedTarget` is the only
    /// path-local failure: it is logged here and the caller skips to the
    /// next mutation. Transport errors and timeouts propagate and fail the
    /// whole sweep.
    pub async fn probe(
        &self,
        path: &str,
        service: &TargetService,
    ) -> Result<ProbeResult, ProbeError> {
        let url = match service.url_for(path) {
            Ok(url) => url,
            Err(e) => {
                self.diagnostics
                    .error(&format!("Unable to handle url for path {path}: {e}"));
                return Err(e);
            }
        };

        self.diagnostics.info(&format!("Request: {url}"));

        match tokio::time::timeout(self.deadline, self.transport.send(url, service)).await {
            Ok(result) => result,
            Err(_) => {
                let err = ProbeError::Timeout(self.deadline.as_secs());
                self.diagnostics
                    .error(&format!("Probe of {path} failed: {err}"));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use reqwest::Url;

    use crate::models::ProbeResult;
    use crate::report::MemoryDiagnostics;
    use super::*;

    /// Transport that never answers, standing in for an unresponsive
    /// service.
    struct StalledTransport;

    #[async_trait]
    impl Transport for StalledTransport {
        async fn send(
            &self,
            _url: Url,
            _service: &TargetService,
        ) -> Result<ProbeResult, ProbeError> {
            futures::future::pending().await
        }
    }

    #[tokio::test]
    async fn stalled_probe_hits_the_deadline() {
        let diagnostics = Arc::new(MemoryDiagnostics::new());
        let runner = ProbeRunner::new(
            Arc::new(StalledTransport),
            diagnostics.clone(),
            Duration::from_millis(20),
        );
        let service = TargetService::new("http", "localhost", 4502);

        let err = runner.probe("/etc.json", &service).await.unwrap_err();
        assert!(matches!(err, ProbeError::Timeout(_)));
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[tokio::test]
    async fn malformed_path_never_reaches_the_transport() {
        let diagnostics = Arc::new(MemoryDiagnostics::new());
        let runner = ProbeRunner::new(
            Arc::new(StalledTransport),
            diagnostics.clone(),
            Duration::from_millis(20),
        );
        let service = TargetService::new("http", "bad host", 80);

        let err = runner.probe("/etc", &service).await.unwrap_err();
        assert!(err.is_path_local());
        assert_eq!(diagnostics.error_count(), 1);
        // No URL was announced because none was built.
        assert!(diagnostics.infos.lock().unwrap().is_empty());
    }
}
