use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathprobe::cli;
use pathprobe::config::load_config;
use pathprobe::detect::DetectorRegistry;
use pathprobe::detectors::register_builtins;
use pathprobe::errors::ProbeError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Scan(args) => cli::scan::handle_scan(args).await,
        cli::Commands::List => handle_list(),
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                ProbeError::Config(_) => 2,
                ProbeError::UnknownDetectorKind(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

fn handle_list() -> Result<(), ProbeError> {
    let registry = DetectorRegistry::new();
    register_builtins(&registry);
    for kind in registry.kinds() {
        println!("{kind}");
    }
    Ok(())
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), ProbeError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = load_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
