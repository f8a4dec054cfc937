use chrono::Utc;

use crate::models::{Confidence, Finding, ProbeResult, Severity};

/// Placeholder in a detector's description template that gets replaced with
/// the triggering URL.
pub const URL_PLACEHOLDER: &str = "{url}";

/// Build a finding from a positive detection. Pure construction — always
/// succeeds; submission to the issue sink is a separate, explicit step so
/// this stays testable without any sink wired up.
pub fn build_finding(
    result: &ProbeResult,
    name: &str,
    description_template: &str,
    severity: Severity,
    confidence: Confidence,
) -> Finding {
    let detail = description_template.replace(URL_PLACEHOLDER, result.url.as_str());
    Finding {
        name: name.to_string(),
        detail,
        severity,
        confidence,
        url: result.url.to_string(),
        status: result.status,
        detected_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest::Url;

    use super::*;

    fn probed(url: &str, status: u16) -> ProbeResult {
        ProbeResult {
            url: Url::parse(url).unwrap(),
            status,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    #[test]
    fn interpolates_triggering_url() {
        let result = probed("http://localhost:4502/console.bak", 200);
        let finding = build_finding(
            &result,
            "Backup file exposure",
            "Backup artifact reachable at {url}.",
            Severity::High,
            Confidence::Certain,
        );
        assert_eq!(
            finding.detail,
            "Backup artifact reachable at http://localhost:4502/console.bak."
        );
        assert_eq!(finding.status, 200);
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.confidence, Confidence::Certain);
    }

    #[test]
    fn template_without_placeholder_passes_through() {
        let result = probed("http://localhost:4502/etc.json", 200);
        let finding = build_finding(
            &result,
            "n",
            "Static description.",
            Severity::Medium,
            Confidence::Firm,
        );
        assert_eq!(finding.detail, "Static description.");
        assert_eq!(finding.url, "http://localhost:4502/etc.json");
    }
}
