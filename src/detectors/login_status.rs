use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Detector;
use crate::models::{ProbeResult, Severity};

static LOGIN_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"authenticated=(?:true|false)").unwrap());

/// Probes the login-status servlet. Its plain-text answer confirms the
/// product stack and whether anonymous sessions are handed out, which is
/// reconnaissance rather than direct compromise — hence medium severity.
pub struct LoginStatusDetector;

impl LoginStatusDetector {
    pub const KIND: &'static str = "login-status";

    const PATHS: &'static [&'static str] = &["/system/sling/loginstatus"];
    const EXTENSIONS: &'static [&'static str] = &["json", "css", "html"];
}

impl Detector for LoginStatusDetector {
    fn name(&self) -> &str {
        "Login status servlet disclosure"
    }

    fn description_template(&self) -> &str {
        "The login status servlet at {url} discloses session state to \
         anonymous callers."
    }

    fn paths(&self) -> Vec<String> {
        Self::PATHS.iter().map(|p| p.to_string()).collect()
    }

    fn extensions(&self) -> Vec<String> {
        Self::EXTENSIONS.iter().map(|e| e.to_string()).collect()
    }

    fn issue_detected(&self, result: &ProbeResult) -> bool {
        result.is_success() && LOGIN_STATUS.is_match(&result.body)
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest::Url;

    use super::*;

    fn probed(status: u16, body: &str) -> ProbeResult {
        ProbeResult {
            url: Url::parse("http://localhost:4502/system/sling/loginstatus.json").unwrap(),
            status,
            headers: HashMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn fires_on_status_disclosure() {
        let detector = LoginStatusDetector;
        assert!(detector.issue_detected(&probed(200, "authenticated=false")));
        assert!(detector.issue_detected(&probed(200, "authenticated=true, impersonated=false")));
    }

    #[test]
    fn reports_medium_severity() {
        let detector = LoginStatusDetector;
        assert_eq!(detector.severity(), Severity::Medium);
    }

    #[test]
    fn unrelated_body_does_not_fire() {
        let detector = LoginStatusDetector;
        assert!(!detector.issue_detected(&probed(200, "<html>welcome</html>")));
    }
}
