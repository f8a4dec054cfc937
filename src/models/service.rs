use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::ProbeError;

/// The service a scan probes: scheme, host and port. Immutable, supplied
/// externally per base request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetService {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl TargetService {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// Derive a service descriptor from a full URL, filling in the scheme's
    /// default port when none is explicit.
    pub fn from_url(url: &Url) -> Result<Self, ProbeError> {
        let host = url
            .host_str()
            .ok_or_else(|| ProbeError::Config(format!("URL has no host: {url}")))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| ProbeError::Config(format!("URL has no usable port: {url}")))?;
        Ok(Self::new(url.scheme(), host, port))
    }

    /// Combine this service with a candidate path into a concrete URL.
    /// Fails with `MalformedTarget` when the pair does not form a valid URL;
    /// callers treat that as skip-this-mutation, never as a sweep abort.
    pub fn url_for(&self, path: &str) -> Result<Url, ProbeError> {
        let separator = if path.starts_with('/') { "" } else { "/" };
        let raw = format!(
            "{}://{}:{}{}{}",
            self.scheme, self.host, self.port, separator, path
        );
        Url::parse(&raw).map_err(|e| ProbeError::MalformedTarget {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Display for TargetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}
