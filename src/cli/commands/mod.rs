//! CLI command dispatch and shared command utilities

pub mod analyze;
pub mod export;

use crate::Result;
use crate::cli::args::{Args, Commands};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Run the command selected on the command line
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Analyze(analyze_args)) => {
            analyze_args.validate()?;
            setup_logging(analyze_args.get_log_level(), analyze_args.quiet)?;
            analyze::run(analyze_args).await
        }
        Some(Commands::Export(export_args)) => {
            export_args.validate()?;
            setup_logging(export_args.get_log_level(), export_args.quiet)?;
            export::run(export_args).await
        }
        None => Ok(()),
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("herd_analyzer={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
