use clap::Parser;
use herd_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - output has already been produced by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Herd Analyzer - Livestock Weighing Analytics");
    println!("============================================");
    println!();
    println!("Turn irregular, multi-format weighing sheets into per-animal growth");
    println!("metrics, cohort statistics and chart-ready geometry.");
    println!();
    println!("USAGE:");
    println!("    herd-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze a weighing sheet and print the cohort report");
    println!("    export      Export per-animal growth records as CSV");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a sheet with no filters:");
    println!("    herd-analyzer analyze --input weighings.csv");
    println!();
    println!("    # Cohort report for 9-12 month females on one pasture:");
    println!("    herd-analyzer analyze --input weighings.csv \\");
    println!("                          --location North --age-bracket 9-12 --sex F");
    println!();
    println!("    # Machine-readable report including one animal's history:");
    println!("    herd-analyzer analyze --input weighings.csv --animal A17 --output-format json");
    println!();
    println!("    # Export the filtered cohort as CSV:");
    println!("    herd-analyzer export --input weighings.csv --sex M --output males.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    herd-analyzer <COMMAND> --help");
}
