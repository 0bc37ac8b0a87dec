//! # Campus Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Campus CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the configuration
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `calc`, `grades`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! campus --help
//!
//! # Chat with debug logging
//! campus -vv chat
//!
//! # Use a specific configuration file
//! campus --config ~/campus.toml grades
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (chat, calc, grades)
mod common; // Shared utilities (prompts, formatting)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "campus",
    about = "Campus: a keyword chatbot, a basic calculator, and a grade book",
    long_about = "Three small classroom tools in one CLI: chat with a rule-based bot,\n\
                  run arithmetic from a menu or the command line, and grade a class.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to load on top of the user and project configs.
    #[arg(long, global = true, env = "CAMPUS_CONFIG")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat with the keyword chatbot
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Basic arithmetic calculator
    #[command(alias = "k")]
    Calc(commands::calc::CalcArgs),
    /// Collect student marks and print results
    #[command(alias = "g")]
    Grades(commands::grades::GradesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = core::config::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Chat(args) => commands::chat::handle_chat(args, &config),
            Commands::Calc(args) => commands::calc::handle_calc(args),
            Commands::Grades(args) => commands::grades::handle_grades(args, &config),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
