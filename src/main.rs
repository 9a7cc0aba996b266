//! # westext CLI Entry Point
//!
//! This is the main executable for the `westext` command-line tool.
//! It parses CLI arguments using clap and routes commands to the appropriate
//! handlers.
//!
//! ## Command Structure
//!
//! - **Build**: `sitl_build`
//! - **Shell**: `completion`

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use westext::commands;

#[derive(Parser)]
#[command(name = "westext")]
#[command(about = "Standalone west extension commands", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs sitl build and install
    #[command(name = "sitl_build")]
    #[command(long_about = "Basic test runner\n\nRuns twister and other tests as necessary")]
    SitlBuild {
        /// The app directory
        app: String,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::SitlBuild { app } => {
            let status = commands::sitl_build::run(app)?;
            if !status.success() {
                // Pass the build tool's exit code through unchanged.
                std::process::exit(status.code().unwrap_or(1));
            }
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}
