mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{check, compare, completions, parse, sort, Context};
use crate::error::{exit_code_for, report_error};
use brphone_config as config;
use brphone_core::PhoneParser;

#[derive(Debug, Parser)]
#[command(name = "brphone", version, about = "Brazilian phone number toolkit")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one number strictly and print it
    Parse(parse::ParseArgs),
    /// Report validity and renderings for each input
    Check(check::CheckArgs),
    /// Compare two numbers by canonical value
    Compare(compare::CompareArgs),
    /// Sort numbers read from stdin, one per line
    Sort(sort::SortArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
                debug!(
                    timeout_ms = app_config.matching.timeout.as_millis() as u64,
                    "match budget"
                );
            }

            let parser = PhoneParser::new(app_config.matching);
            let ctx = Context {
                json,
                config: &app_config,
                parser: &parser,
            };

            match command {
                Command::Parse(args) => parse::parse_number(&ctx, args),
                Command::Check(args) => check::check_numbers(&ctx, args),
                Command::Compare(args) => compare::compare_numbers(&ctx, args),
                Command::Sort(args) => sort::sort_numbers(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config loading")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
