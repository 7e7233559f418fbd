use std::io::{self, Write};

use clap::{Parser, Subcommand};
use resource_namer_cli::commands::{
    compose_cmd::{self, ComposeArgs},
    init_cmd::{self, InitArgs},
    validate_cmd::{self, ValidateArgs},
};
use resource_namer_cli::errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// resource-namer: compose consistent, length-bounded resource names
#[derive(Parser)]
#[command(name = "resource-namer")]
#[command(about = "Compose consistent, length-bounded resource names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a resource name from a base name, resource name and type
    Compose(ComposeArgs),

    /// Write a starter configuration file
    Init(InitArgs),

    /// Check a name against RFC 1035
    Validate(ValidateArgs),

    /// Show the CLI version
    Version,
}

fn run(command: &Commands) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    match command {
        Commands::Compose(args) => compose_cmd::execute(args, &mut stdout),
        Commands::Init(args) => init_cmd::execute(args, &mut stdout),
        Commands::Validate(args) => validate_cmd::execute(args, &mut stdout),
        Commands::Version => {
            writeln!(stdout, "resource-namer version {}", env!("CARGO_PKG_VERSION"))
                .map_err(|_| Error::StdOutFlushFailed)
        }
    }
}

fn main() {
    // Logs go to stderr so stdout only carries results.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("RESOURCE_NAMER_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli.command) {
        error!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
