use std::sync::Arc;

use dashmap::DashMap;

use crate::errors::ProbeError;
use crate::models::BaseRequest;
use super::context::ScanContext;
use super::detector::Detector;

/// Constructor for one detector kind. Takes exactly the shared context and
/// one base request — no other configuration enters at this layer.
pub type DetectorCtor = Arc<
    dyn Fn(Arc<ScanContext>, Arc<BaseRequest>) -> Result<Box<dyn Detector>, ProbeError>
        + Send
        + Sync,
>;

/// Maps detector-kind identifiers to constructors. Kinds are registered
/// once at startup; lookup failure is a typed error, so an unknown kind in
/// a dispatch batch is skipped rather than aborting the batch.
#[derive(Default)]
pub struct DetectorRegistry {
    ctors: DashMap<String, DetectorCtor>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, kind: impl Into<String>, ctor: F)
    where
        F: Fn(Arc<ScanContext>, Arc<BaseRequest>) -> Result<Box<dyn Detector>, ProbeError>
            + Send
            + Sync
            + 'static,
    {
        self.ctors.insert(kind.into(), Arc::new(ctor));
    }

    pub fn create(
        &self,
        kind: &str,
        ctx: Arc<ScanContext>,
        base: Arc<BaseRequest>,
    ) -> Result<Box<dyn Detector>, ProbeError> {
        let ctor = self
            .ctors
            .get(kind)
            .ok_or_else(|| ProbeError::UnknownDetectorKind(kind.to_string()))?
            .clone();

        ctor(ctx, base).map_err(|e| ProbeError::DetectorConstruction {
            kind: kind.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.ctors.contains_key(kind)
    }

    /// Registered kind identifiers, sorted for stable display.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.ctors.iter().map(|e| e.key().clone()).collect();
        kinds.sort();
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::models::{Confidence, ProbeResult, Severity, TargetService};
    use crate::probe::Transport;
    use crate::report::{CollectorSink, MemoryDiagnostics};
    use async_trait::async_trait;
    use reqwest::Url;

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn send(
            &self,
            url: Url,
            _service: &TargetService,
        ) -> Result<ProbeResult, ProbeError> {
            Ok(ProbeResult {
                url,
                status: 404,
                headers: Default::default(),
                body: String::new(),
            })
        }
    }

    struct FixedDetector;

    impl Detector for FixedDetector {
        fn name(&self) -> &str {
            "fixed"
        }
        fn description_template(&self) -> &str {
            "fired at {url}"
        }
        fn paths(&self) -> Vec<String> {
            vec!["/etc".into()]
        }
        fn extensions(&self) -> Vec<String> {
            vec![]
        }
        fn issue_detected(&self, _result: &ProbeResult) -> bool {
            false
        }
    }

    fn test_ctx() -> Arc<ScanContext> {
        Arc::new(ScanContext::new(
            ScanConfig::default(),
            Arc::new(NullTransport),
            Arc::new(MemoryDiagnostics::new()),
            Arc::new(CollectorSink::new()),
        ))
    }

    fn test_base() -> Arc<BaseRequest> {
        Arc::new(BaseRequest::new(
            TargetService::new("http", "localhost", 4502),
            "/",
        ))
    }

    #[test]
    fn unknown_kind_is_a_typed_error() {
        let registry = DetectorRegistry::new();
        let err = registry
            .create("no-such-kind", test_ctx(), test_base())
            .unwrap_err();
        assert!(matches!(err, ProbeError::UnknownDetectorKind(k) if k == "no-such-kind"));
    }

    #[test]
    fn registered_kind_constructs() {
        let registry = DetectorRegistry::new();
        registry.register("fixed", |_ctx, _base| {
            Ok(Box::new(FixedDetector) as Box<dyn Detector>)
        });

        assert!(registry.contains("fixed"));
        assert!(!registry.contains("missing"));

        let detector = registry.create("fixed", test_ctx(), test_base()).unwrap();
        assert_eq!(detector.name(), "fixed");
        assert_eq!(detector.severity(), Severity::High);
        assert_eq!(detector.confidence(), Confidence::Certain);
    }

    #[test]
    fn constructor_failure_is_wrapped() {
        let registry = DetectorRegistry::new();
        registry.register("broken", |_ctx, _base| {
            Err(ProbeError::Config("missing seed".into()))
        });

        let err = registry
            .create("broken", test_ctx(), test_base())
            .unwrap_err();
        assert!(matches!(err, ProbeError::DetectorConstruction { kind, .. } if kind == "broken"));
    }

    #[test]
    fn kinds_are_sorted() {
        let registry = DetectorRegistry::new();
        registry.register("zz", |_c, _b| Ok(Box::new(FixedDetector) as Box<dyn Detector>));
        registry.register("aa", |_c, _b| Ok(Box::new(FixedDetector) as Box<dyn Detector>));
        assert_eq!(registry.kinds(), vec!["aa".to_string(), "zz".to_string()]);
    }
}
