use clap::Parser;
use interchange_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
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
    println!("Interchange Processor - Zonal Interchange Report Builder");
    println!("=========================================================");
    println!();
    println!("Clean the daily FOIS interchange extract and render the two-section");
    println!("HANDEDOVER/TAKENOVER report as a CSV grid ready for spreadsheet review.");
    println!();
    println!("USAGE:");
    println!("    interchange-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process            Build the report from a daily extract (main command)");
    println!("    classifications    Inspect or extend the wagon classification table");
    println!("    help               Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process a daily extract into ./intermediate and ./reports:");
    println!("    interchange-processor process ic_2024_03_17.csv");
    println!();
    println!("    # Stamp an explicit report date and keep artifacts elsewhere:");
    println!("    interchange-processor process ic_2024_03_17.csv --output /data/reports \\");
    println!("                                  --report-date 17-03-2024");
    println!();
    println!("    # Teach the classifier a new wagon type:");
    println!("    interchange-processor classifications add --mapping BFNS=JUMBO");
    println!();
    println!("    # Get help for specific commands:");
    println!("    interchange-processor process --help");
    println!("    interchange-processor classifications --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    interchange-processor <COMMAND> --help");
}
