use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pathprobe", version, about = "Concurrent web-path probing engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run detector sweeps against one or more targets
    Scan(ScanArgs),
    /// List registered detector kinds
    List,
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Target base URLs to probe
    #[arg(short, long, required = true, num_args = 1..)]
    pub target: Vec<String>,

    /// Comma-separated detector kinds (default: all registered)
    #[arg(short, long)]
    pub detectors: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Worker pool size (overrides config file)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-probe timeout in seconds (overrides config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Follow HTTP redirects while probing
    #[arg(long)]
    pub follow_redirects: bool,

    /// Write findings JSON to this file
    #[arg(short, long, default_value = "findings.json")]
    pub output: String,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
