mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "rhtmx-pattern")]
#[command(version, about = "Inspect and reverse RHTMX route patterns", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pattern and show its structure
    Parse {
        /// Pattern, e.g. "GET example.com/users/{id}"
        pattern: String,

        /// Print the parsed pattern as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a path from a pattern and positional values
    Build {
        /// Pattern to reverse
        pattern: String,

        /// Values for the wildcards, in declaration order
        values: Vec<String>,
    },

    /// Load a route table and list its routes
    Check {
        /// Route table file (TOML with a [routes] table)
        file: PathBuf,
    },

    /// Build a path for a named route from a route table
    Url {
        /// Route table file
        file: PathBuf,

        /// Route name
        name: String,

        /// Positional values for the wildcards
        values: Vec<String>,

        /// Name-keyed value (repeatable), e.g. --param id=42
        #[arg(short, long = "param", value_name = "KEY=VALUE", conflicts_with = "values")]
        params: Vec<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Parse { pattern, json } => {
            commands::parse::execute(&pattern, json)?;
        }
        Commands::Build { pattern, values } => {
            commands::build::execute(&pattern, &values)?;
        }
        Commands::Check { file } => {
            commands::check::execute(&file)?;
        }
        Commands::Url {
            file,
            name,
            values,
            params,
        } => {
            commands::url::execute(&file, &name, &values, &params)?;
        }
    }

    Ok(())
}
