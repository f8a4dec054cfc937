use std::sync::Mutex;

use tracing::{error, info};

use crate::models::Finding;

/// Destination for finished findings. Implementations must tolerate
/// concurrent submission from many sweep tasks; the core treats `submit`
/// as fire-and-forget.
pub trait IssueSink: Send + Sync {
    fn submit(&self, finding: Finding);
}

/// Best-effort textual diagnostics emitted throughout a run. Passed to
/// every task explicitly rather than reached through a global.
pub trait Diagnostics: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Thread-safe in-memory sink. The CLI drains it once dispatch completes;
/// tests inspect it directly.
#[derive(Default)]
pub struct CollectorSink {
    findings: Mutex<Vec<Finding>>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Finding> {
        std::mem::take(&mut *self.findings.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.findings.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IssueSink for CollectorSink {
    fn submit(&self, finding: Finding) {
        self.findings.lock().unwrap().push(finding);
    }
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Records every line it receives. Test double for asserting on the
/// diagnostic stream.
#[derive(Default)]
pub struct MemoryDiagnostics {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
