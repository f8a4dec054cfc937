use std::sync::Arc;

use crate::errors::ProbeError;
use crate::models::{BaseRequest, Confidence, Finding, ProbeResult, Severity};
use crate::report::build_finding;
use super::context::ScanContext;
use super::mutation::mutate_paths;

/// One vulnerability class: a mutation space (base paths × extensions), a
/// detection predicate over a probe response, and reporting metadata.
///
/// Implementations hold their paths, extensions and base request immutably
/// for their lifetime; an instance serves exactly one sweep. New detector
/// kinds implement this trait and register a constructor — the dispatch
/// layer never special-cases a kind.
pub trait Detector: Send + Sync {
    /// Display name used as the finding title.
    fn name(&self) -> &str;

    /// Description template for findings; occurrences of
    /// [`crate::report::URL_PLACEHOLDER`] are replaced with the URL that
    /// fired the predicate.
    fn description_template(&self) -> &str;

    /// Base paths defining the mutation space.
    fn paths(&self) -> Vec<String>;

    /// Optional extension set; empty means the paths are probed verbatim.
    fn extensions(&self) -> Vec<String>;

    /// The detection predicate: a pure decision over one probe outcome.
    fn issue_detected(&self, result: &ProbeResult) -> bool;

    /// Severity attached to findings from this detector.
    fn severity(&self) -> Severity {
        Severity::High
    }

    /// Confidence attached to findings from this detector.
    fn confidence(&self) -> Confidence {
        Confidence::Certain
    }
}

impl std::fmt::Debug for dyn Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector").field("name", &self.name()).finish()
    }
}

/// The fixed sweep algorithm, identical for every detector kind: mutate,
/// probe each candidate in order, apply the predicate, build findings.
///
/// A malformed URL for one mutation is logged by the probe runner and
/// skipped; any other probe failure aborts this sweep (and only this
/// sweep — the dispatch layer isolates it to the one task).
pub async fn run_sweep(
    detector: &dyn Detector,
    ctx: &ScanContext,
    base: &BaseRequest,
) -> Result<Vec<Finding>, ProbeError> {
    let candidates = mutate_paths(&detector.paths(), &detector.extensions());
    let runner = ctx.probe_runner();
    let mut findings = Vec::new();

    for path in &candidates {
        let result = match runner.probe(path, &base.service).await {
            Ok(result) => result,
            Err(e) if e.is_path_local() => continue,
            Err(e) => return Err(e),
        };

        if detector.issue_detected(&result) {
            findings.push(build_finding(
                &result,
                detector.name(),
                detector.description_template(),
                detector.severity(),
                detector.confidence(),
            ));
        }
    }

    Ok(findings)
}

/// Run a sweep as one scheduled unit of work: findings are submitted to the
/// context's issue sink as a side effect, and the count is returned for the
/// dispatch summary.
pub async fn run_as_task(
    detector: Box<dyn Detector>,
    ctx: Arc<ScanContext>,
    base: Arc<BaseRequest>,
) -> Result<usize, ProbeError> {
    let findings = run_sweep(detector.as_ref(), &ctx, &base).await?;
    let count = findings.len();
    for finding in findings {
        ctx.issues.submit(finding);
    }
    Ok(count)
}
