use crate::detect::Detector;
use crate::models::ProbeResult;

/// Looks for a reachable OSGi web console, which hands out bundle
/// management (and therefore code execution) to whoever can load it.
pub struct FelixConsoleDetector;

impl FelixConsoleDetector {
    pub const KIND: &'static str = "felix-console";

    const PATHS: &'static [&'static str] = &[
        "/system/console",
        "/system/console/bundles",
        "/system/console/configMgr",
    ];
}

impl Detector for FelixConsoleDetector {
    fn name(&self) -> &str {
        "OSGi web console exposure"
    }

    fn description_template(&self) -> &str {
        "The OSGi web console at {url} is reachable. Console access allows \
         bundle installation and remote code execution."
    }

    fn paths(&self) -> Vec<String> {
        Self::PATHS.iter().map(|p| p.to_string()).collect()
    }

    fn extensions(&self) -> Vec<String> {
        Vec::new()
    }

    fn issue_detected(&self, result: &ProbeResult) -> bool {
        result.is_success()
            && (result.body.contains("Apache Felix") || result.body.contains("Web Console"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest::Url;

    use super::*;

    fn probed(status: u16, body: &str) -> ProbeResult {
        ProbeResult {
            url: Url::parse("http://localhost:4502/system/console").unwrap(),
            status,
            headers: HashMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn fires_on_console_page() {
        let detector = FelixConsoleDetector;
        assert!(detector.issue_detected(&probed(
            200,
            "<title>Apache Felix Web Console - Bundles</title>"
        )));
    }

    #[test]
    fn auth_challenge_is_not_a_finding() {
        let detector = FelixConsoleDetector;
        assert!(!detector.issue_detected(&probed(401, "Authentication required")));
    }
}
