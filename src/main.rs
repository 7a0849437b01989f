//! keycalc - four-function keypad calculator
//!
//! Provides both a REPL and one-shot evaluation of key sequences.

mod commands;
mod config;
mod keymap;
mod repl;

use clap::{Parser, Subcommand};
use colored::Colorize;
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keycalc")]
#[command(about = "Four-function keypad calculator")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, env = "KEYCALC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start interactive REPL
    Repl,

    /// Apply a key sequence to a fresh calculator and print the display
    Eval {
        /// Keys, e.g. "12+3=" (see `keycalc repl` then `help` for the key map)
        keys: String,

        /// Print the full calculator state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current time
    Clock,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Some(Commands::Repl) | None => repl::run(&config)?,
        Some(cmd) => match commands::execute(cmd, &config) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("{}: {}", "Error".red(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
