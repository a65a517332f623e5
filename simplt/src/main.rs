//! Simplt CLI - command-line front end for the simpliCty lexer.
//!
//! This is the main entry point for the simplt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::CommandDescription;
use commands::{
    run_check, run_tokenize, CheckArgs, CheckCommand, TokenizeArgs, TokenizeCommand,
};
use config::Config;
use error::{Result, SimpltError};

/// Simplt - a CLI for the simpliCty lexer
///
/// Simplt scans simpliCty source files and prints their token streams or
/// reports characters the language does not recognize.
#[derive(Parser, Debug)]
#[command(name = "simplt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI for the simpliCty lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SIMPLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SIMPLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SIMPLT_NO_COLOR")]
    no_color: bool,

    /// Number of files scanned in parallel (default: from config)
    #[arg(short, long, global = true)]
    jobs: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the simplt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokenizeCommand::description(), long_about = TokenizeCommand::help())]
    Tokenize(TokenizeOpts),

    #[command(about = CheckCommand::description(), long_about = CheckCommand::help())]
    Check(CheckOpts),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeOpts {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Fail if any unrecognized character is found
    #[arg(long)]
    strict: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the simplt CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, cli.jobs, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SimpltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(
    command: Commands,
    verbose: bool,
    jobs: Option<u32>,
    config: Config,
) -> Result<()> {
    match command {
        Commands::Tokenize(opts) => execute_tokenize(opts, verbose, jobs, config),
        Commands::Check(opts) => execute_check(opts, verbose, jobs, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(
    opts: TokenizeOpts,
    verbose: bool,
    jobs: Option<u32>,
    config: Config,
) -> Result<()> {
    let args = TokenizeArgs {
        verbose,
        files: opts.files,
        format: opts.format,
        strict: opts.strict,
        jobs,
    };
    run_tokenize(args, config).map(|_| ())
}

/// Execute the check command.
fn execute_check(opts: CheckOpts, verbose: bool, jobs: Option<u32>, config: Config) -> Result<()> {
    let args = CheckArgs {
        verbose,
        files: opts.files,
        jobs,
    };
    run_check(args, config).map(|_| ())
}
