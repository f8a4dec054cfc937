use std::path::Path;

use crate::errors::ProbeError;
use super::types::ScanConfig;

pub async fn load_config(path: &Path) -> Result<ScanConfig, ProbeError> {
    if !path.exists() {
        return Err(ProbeError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ProbeError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: ScanConfig = serde_yaml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ScanConfig) -> Result<(), ProbeError> {
    if config.concurrency == 0 {
        return Err(ProbeError::Config(
            "concurrency must be at least 1".into(),
        ));
    }
    if config.probe_timeout_secs == 0 {
        return Err(ProbeError::Config(
            "probe_timeout_secs must be at least 1".into(),
        ));
    }
    Ok(())
}
