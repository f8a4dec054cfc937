use crate::detect::Detector;
use crate::models::ProbeResult;

/// Checks whether repository content leaks through default GET-servlet
/// renderings: well-known content roots crossed with the renderer
/// extensions that commonly bypass dispatcher filters.
pub struct GetServletDetector;

impl GetServletDetector {
    pub const KIND: &'static str = "get-servlet";

    const PATHS: &'static [&'static str] = &["/", "/etc", "/var", "/apps", "/home"];
    const EXTENSIONS: &'static [&'static str] = &[
        "json",
        "1.json",
        "4.2.1...json",
        "json.html",
        "json/a.css",
    ];
}

impl Detector for GetServletDetector {
    fn name(&self) -> &str {
        "Default GET servlet exposure"
    }

    fn description_template(&self) -> &str {
        "Repository content is rendered by the default GET servlet at {url}. \
         Sensitive node properties may be readable without authentication."
    }

    fn paths(&self) -> Vec<String> {
        Self::PATHS.iter().map(|p| p.to_string()).collect()
    }

    fn extensions(&self) -> Vec<String> {
        Self::EXTENSIONS.iter().map(|e| e.to_string()).collect()
    }

    fn issue_detected(&self, result: &ProbeResult) -> bool {
        result.is_success()
            && (result.body.contains("jcr:primaryType") || result.body.trim_start().starts_with('{'))
    }
}
