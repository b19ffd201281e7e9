mod commands;

use clap::{Parser, Subcommand};

use commands::run::RunArgs;

#[derive(Parser)]
#[command(
    name = "modern-window",
    version,
    about = "A frameless window with a custom title bar and native snap layouts"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the window and run until it is closed (default)
    Run(RunArgs),
    /// Create the default configuration file
    Init,
    /// Check the configuration and the host system
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::execute(&args),
        Commands::Init => commands::init::execute(),
        Commands::Doctor => commands::doctor::execute(),
    }
}
