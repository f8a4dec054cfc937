use crate::detect::Detector;
use crate::models::ProbeResult;

/// Probes the querybuilder endpoints, which allow arbitrary repository
/// queries when reachable anonymously.
pub struct QueryBuilderDetector;

impl QueryBuilderDetector {
    pub const KIND: &'static str = "querybuilder";

    const PATHS: &'static [&'static str] = &[
        "/bin/querybuilder.json",
        "/bin/querybuilder.json.servlet",
        "/bin/querybuilder.feed",
    ];
}

impl Detector for QueryBuilderDetector {
    fn name(&self) -> &str {
        "Querybuilder endpoint exposure"
    }

    fn description_template(&self) -> &str {
        "The querybuilder endpoint at {url} answers unauthenticated requests, \
         allowing arbitrary repository queries."
    }

    fn paths(&self) -> Vec<String> {
        Self::PATHS.iter().map(|p| p.to_string()).collect()
    }

    fn extensions(&self) -> Vec<String> {
        Vec::new()
    }

    fn issue_detected(&self, result: &ProbeResult) -> bool {
        if !result.is_success() {
            return false;
        }
        result.body.contains("\"hits\"")
            || result.body.contains("<feed")
            || result
                .header("content-type")
                .is_some_and(|ct| ct.contains("atom"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest::Url;

    use super::*;

    fn probed(status: u16, body: &str) -> ProbeResult {
        ProbeResult {
            url: Url::parse("http://localhost:4502/bin/querybuilder.json").unwrap(),
            status,
            headers: HashMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn fires_on_query_result_payload() {
        let detector = QueryBuilderDetector;
        assert!(detector.issue_detected(&probed(200, r#"{"success":true,"hits":[]}"#)));
    }

    #[test]
    fn fires_on_feed_content_type() {
        let detector = QueryBuilderDetector;
        let mut result = probed(200, "");
        result
            .headers
            .insert("content-type".into(), "application/atom+xml".into());
        assert!(detector.issue_detected(&result));
    }

    #[test]
    fn probes_paths_verbatim() {
        let detector = QueryBuilderDetector;
        assert!(detector.extensions().is_empty());
    }

    #[test]
    fn ignores_unauthorized() {
        let detector = QueryBuilderDetector;
        assert!(!detector.issue_detected(&probed(401, "")));
    }
}
