use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{load_config, ScanConfig};
use crate::detect::{DetectorRegistry, ScanContext};
use crate::detectors::register_builtins;
use crate::dispatch::DispatchOrchestrator;
use crate::errors::ProbeError;
use crate::models::BaseRequest;
use crate::probe::HttpTransport;
use crate::report::{CollectorSink, TracingDiagnostics};
use super::commands::ScanArgs;

pub async fn handle_scan(args: ScanArgs) -> Result<(), ProbeError> {
    let config = resolve_config(&args).await?;

    let base_requests: Vec<BaseRequest> = args
        .target
        .iter()
        .map(|t| BaseRequest::from_target(t))
        .collect::<Result<_, _>>()?;

    let registry = Arc::new(DetectorRegistry::new());
    register_builtins(&registry);

    let kinds = match &args.detectors {
        Some(list) => {
            let kinds: Vec<String> = list
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
            if kinds.is_empty() {
                return Err(ProbeError::Config("No detector kinds selected".into()));
            }
            kinds
        }
        None => registry.kinds(),
    };

    for kind in &kinds {
        if !registry.contains(kind) {
            warn!(kind = %kind, "Detector kind not registered; it will be skipped at dispatch");
        }
    }

    let issues = Arc::new(CollectorSink::new());
    let transport = Arc::new(HttpTransport::new(&config)?);
    let ctx = Arc::new(ScanContext::new(
        config,
        transport,
        Arc::new(TracingDiagnostics),
        issues.clone(),
    ));

    let mut orchestrator = DispatchOrchestrator::new(registry, ctx);
    info!(
        run_id = %orchestrator.run_id(),
        targets = base_requests.len(),
        kinds = kinds.len(),
        "Starting scan"
    );

    orchestrator.dispatch(&kinds, &base_requests);
    let summary = orchestrator.drain().await;

    let mut findings = issues.drain();
    findings.sort_by_key(|f| f.severity.rank());
    tokio::fs::write(&args.output, serde_json::to_string_pretty(&findings)?).await?;
    info!(path = %args.output, count = findings.len(), "Findings written");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "run {}: {} submitted, {} completed, {} failed, {} skipped, {} findings",
            summary.run_id,
            summary.submitted,
            summary.completed,
            summary.failed,
            summary.skipped,
            summary.findings
        );
        for finding in &findings {
            println!(
                "[{:?}/{:?}] {} — {}",
                finding.severity, finding.confidence, finding.name, finding.url
            );
        }
    }

    Ok(())
}

async fn resolve_config(args: &ScanArgs) -> Result<ScanConfig, ProbeError> {
    let mut config = match &args.config {
        Some(path) => load_config(Path::new(path)).await?,
        None => ScanConfig::default(),
    };
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(timeout) = args.timeout {
        config.probe_timeout_secs = timeout;
    }
    if args.follow_redirects {
        config.follow_redirects = true;
    }
    if config.concurrency == 0 {
        return Err(ProbeError::Config("concurrency must be at least 1".into()));
    }
    if config.probe_timeout_secs == 0 {
        return Err(ProbeError::Config(
            "probe_timeout_secs must be at least 1".into(),
        ));
    }
    Ok(config)
}
