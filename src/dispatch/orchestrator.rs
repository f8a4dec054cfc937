use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::detect::{run_as_task, DetectorRegistry, ScanContext};
use crate::errors::ProbeError;
use crate::models::BaseRequest;

/// Aggregate outcome of one dispatch run, available after `drain`.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchSummary {
    pub run_id: String,
    /// Tasks actually handed to the worker pool.
    pub submitted: usize,
    /// (kind, request) pairs dropped because the detector could not be
    /// instantiated.
    pub skipped: usize,
    pub completed: usize,
    pub failed: usize,
    pub findings: usize,
}

/// Fans detector sweeps out over a batch of base requests.
///
/// Each (base request, detector kind) pair becomes one independent task in
/// a semaphore-bounded tokio pool. Submission is non-blocking and ordered
/// (requests outer, kinds inner); completion order is unspecified. A failed
/// or cancelled task never disturbs its siblings — callers observe failures
/// only as counts in the drain summary.
pub struct DispatchOrchestrator {
    registry: Arc<DetectorRegistry>,
    ctx: Arc<ScanContext>,
    semaphore: Arc<Semaphore>,
    cancel_token: CancellationToken,
    run_id: String,
    handles: Vec<JoinHandle<Result<usize, ProbeError>>>,
    skipped: usize,
}

impl DispatchOrchestrator {
    pub fn new(registry: Arc<DetectorRegistry>, ctx: Arc<ScanContext>) -> Self {
        let permits = ctx.config.concurrency.max(1);
        Self {
            registry,
            ctx,
            semaphore: Arc::new(Semaphore::new(permits)),
            cancel_token: CancellationToken::new(),
            run_id: Uuid::new_v4().to_string(),
            handles: Vec::new(),
            skipped: 0,
        }
    }

    /// Replace the orchestrator's cancel token with an external one so the
    /// caller's `.cancel()` actually stops outstanding sweeps.
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Instantiate and submit one task per (base request, detector kind)
    /// pair. A kind that cannot be instantiated is logged and skipped; it
    /// never blocks the rest of the batch. Returns the number of tasks
    /// submitted by this call.
    pub fn dispatch(&mut self, kinds: &[String], base_requests: &[BaseRequest]) -> usize {
        let mut submitted = 0;

        for base in base_requests {
            let base = Arc::new(base.clone());
            for kind in kinds {
                match self
                    .registry
                    .create(kind, self.ctx.clone(), base.clone())
                {
                    Ok(detector) => {
                        self.ctx
                            .diagnostics
                            .info(&format!("Submitting {kind} against {}", base.service));
                        self.handles.push(self.spawn_sweep(kind, detector, base.clone()));
                        submitted += 1;
                    }
                    Err(e) => {
                        self.ctx
                            .diagnostics
                            .error(&format!("Unable to instantiate {kind}: {e}"));
                        self.skipped += 1;
                    }
                }
            }
        }

        info!(
            run_id = %self.run_id,
            submitted,
            skipped = self.skipped,
            "Detector sweeps submitted for execution"
        );
        submitted
    }

    fn spawn_sweep(
        &self,
        kind: &str,
        detector: Box<dyn crate::detect::Detector>,
        base: Arc<BaseRequest>,
    ) -> JoinHandle<Result<usize, ProbeError>> {
        let ctx = self.ctx.clone();
        let semaphore = self.semaphore.clone();
        let cancel_token = self.cancel_token.clone();
        let kind = kind.to_string();
        let run_id = self.run_id.clone();

        tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|_| ProbeError::Dispatch("worker pool closed".into()))?;

            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!(run_id = %run_id, kind = %kind, "Sweep cancelled");
                    Err(ProbeError::Dispatch("cancelled".into()))
                }
                result = run_as_task(detector, ctx.clone(), base) => {
                    match &result {
                        Ok(findings) => {
                            info!(run_id = %run_id, kind = %kind, findings, "Sweep complete");
                        }
                        Err(e) => {
                            ctx.diagnostics.error(&format!("Sweep for {kind} failed: {e}"));
                        }
                    }
                    result
                }
            }
        })
    }

    /// Signal all outstanding sweeps to stop between probes.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// Wait for every submitted task and fold the outcomes into a summary.
    /// A panicked task counts as failed; it is never propagated.
    pub async fn drain(&mut self) -> DispatchSummary {
        let handles = std::mem::take(&mut self.handles);
        let submitted = handles.len();
        let mut completed = 0;
        let mut failed = 0;
        let mut findings = 0;

        for outcome in futures::future::join_all(handles).await {
            match outcome {
                Ok(Ok(count)) => {
                    completed += 1;
                    findings += count;
                }
                Ok(Err(_)) => failed += 1,
                Err(e) => {
                    warn!(run_id = %self.run_id, error = %e, "Sweep task panicked");
                    failed += 1;
                }
            }
        }

        let summary = DispatchSummary {
            run_id: self.run_id.clone(),
            submitted,
            skipped: self.skipped,
            completed,
            failed,
            findings,
        };
        info!(
            run_id = %self.run_id,
            submitted = summary.submitted,
            completed = summary.completed,
            failed = summary.failed,
            findings = summary.findings,
            "Dispatch drained"
        );
        summary
    }
}
