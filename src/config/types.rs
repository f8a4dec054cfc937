use serde::{Deserialize, Serialize};

fn default_concurrency() -> usize {
    10
}

fn default_probe_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("pathprobe/{}", env!("CARGO_PKG_VERSION"))
}

/// Tunables for a probing run. All fields have defaults sized for
/// interactive use; CLI flags override file values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Size of the bounded worker pool executing detector sweeps.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Deadline applied to each individual probe.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Probes report the status of the probed path itself, so redirects are
    /// not followed unless explicitly asked for.
    #[serde(default)]
    pub follow_redirects: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            probe_timeout_secs: default_probe_timeout_secs(),
            user_agent: default_user_agent(),
            follow_redirects: false,
        }
    }
}
