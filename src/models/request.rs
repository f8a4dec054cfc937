use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::ProbeError;
use super::service::TargetService;

/// The captured request that seeds a scan. Immutable for the scan's
/// duration; every detector instance built for it shares this view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRequest {
    pub service: TargetService,
    /// Path (and query, if any) of the originally observed request.
    pub path: String,
}

impl BaseRequest {
    pub fn new(service: TargetService, path: impl Into<String>) -> Self {
        Self {
            service,
            path: path.into(),
        }
    }

    /// Build a base request from a target URL string, e.g. as supplied on
    /// the command line.
    pub fn from_target(target: &str) -> Result<Self, ProbeError> {
        let url = Url::parse(target)
            .map_err(|e| ProbeError::Config(format!("Invalid target '{target}': {e}")))?;
        let service = TargetService::from_url(&url)?;
        let path = match url.query() {
            Some(q) => format!("{}?{}", url.path(), q),
            None => url.path().to_string(),
        };
        Ok(Self::new(service, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_target_splits_service_and_path() {
        let base = BaseRequest::from_target("http://localhost:4502/content/we-retail.html").unwrap();
        assert_eq!(base.service.host, "localhost");
        assert_eq!(base.service.port, 4502);
        assert_eq!(base.path, "/content/we-retail.html");
    }

    #[test]
    fn from_target_rejects_garbage() {
        assert!(BaseRequest::from_target("not a url").is_err());
    }
}
