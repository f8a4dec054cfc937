use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{redirect, Client, Url};

use crate::config::ScanConfig;
use crate::errors::ProbeError;
use crate::models::{ProbeResult, TargetService};

/// The single outbound call the core needs. TLS, proxying and connection
/// management all live behind this seam.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: Url, service: &TargetService) -> Result<ProbeResult, ProbeError>;
}

/// GET-based transport over a shared reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ScanConfig) -> Result<Self, ProbeError> {
        let redirect_policy = if config.follow_redirects {
            redirect::Policy::limited(10)
        } else {
            redirect::Policy::none()
        };
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(redirect_policy)
            .timeout(std::time::Duration::from_secs(config.probe_timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: Url, _service: &TargetService) -> Result<ProbeResult, ProbeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(ProbeResult {
            url,
            status,
            headers,
            body,
        })
    }
}
