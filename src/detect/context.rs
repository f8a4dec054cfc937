use std::sync::Arc;
use std::time::Duration;

use crate::config::ScanConfig;
use crate::probe::{ProbeRunner, Transport};
use crate::report::{Diagnostics, IssueSink};

/// Everything a detector instance shares with the rest of a run: the
/// transport it probes through and the two append-only sinks. Built once
/// per dispatch and handed to each detector constructor; no ambient
/// singletons.
pub struct ScanContext {
    pub config: ScanConfig,
    pub transport: Arc<dyn Transport>,
    pub diagnostics: Arc<dyn Diagnostics>,
    pub issues: Arc<dyn IssueSink>,
}

impl ScanContext {
    pub fn new(
        config: ScanConfig,
        transport: Arc<dyn Transport>,
        diagnostics: Arc<dyn Diagnostics>,
        issues: Arc<dyn IssueSink>,
    ) -> Self {
        Self {
            config,
            transport,
            diagnostics,
            issues,
        }
    }

    pub fn probe_runner(&self) -> ProbeRunner {
        ProbeRunner::new(
            self.transport.clone(),
            self.diagnostics.clone(),
            Duration::from_secs(self.config.probe_timeout_secs),
        )
    }
}
