use std::collections::HashMap;

use reqwest::Url;

/// The observed response for one candidate path. Transient — consumed by
/// the detection predicate and referenced by at most one finding.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: Url,
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProbeResult {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
