mod platform;

use std::path::PathBuf;

use clap::Parser;
use ecues_logging::LogDestination;

#[derive(Parser)]
#[command(name = "ecues")]
#[command(about = "On-scene emergency incident tally (terminal shell)")]
#[command(version)]
struct Cli {
    /// Configuration file (RON); defaults to ./ecues.ron when present
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory for exported reports (overrides the config file)
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Log destination: file, terminal or both (overrides the config file)
    #[arg(long)]
    log: Option<LogDestination>,

    /// Log at debug level
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run_app(platform::LaunchOptions {
        config_path: cli.config,
        output_dir: cli.output_dir,
        log: cli.log,
        verbose: cli.verbose,
    })
}
