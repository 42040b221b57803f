//! # dto-zod
//!
//! Generate TypeScript Zod schemas from DTO manifests.
//!
//! ## Usage
//!
//! ```bash
//! # Generate using ./dto-zod.toml, or defaults
//! dto-zod
//!
//! # Generate from a specific input into a specific output directory
//! dto-zod --input ./contracts --output ./web/src/dtos
//!
//! # Preview without writing files
//! dto-zod --dry-run
//!
//! # Fail with exit code 2 when generated files are out of date
//! dto-zod --check
//! ```

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use dto_zod_cli::{
    config::{CliArgs, ConfigManager},
    error::CliError,
    generator::{GenerationOutcome, SchemaGenerator},
    logging,
    writer::{StaleReason, WriteMode, WriteResult},
};

#[derive(Parser)]
#[command(name = "dto-zod")]
#[command(author, version, about = "Generate TypeScript Zod schemas from DTO manifests", long_about = None)]
struct Cli {
    /// Manifest file, or directory containing *.dto.json / *.dto.toml files
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for generated TypeScript files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter manifests by path pattern (glob)
    #[arg(long)]
    filter: Option<String>,

    /// Also write the shared helpers module
    #[arg(long)]
    emit_helpers: bool,

    /// Preview changes without writing files
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// Verify generated files are up-to-date without writing
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn mode(&self) -> WriteMode {
        if self.dry_run {
            WriteMode::DryRun
        } else if self.check {
            WriteMode::Check
        } else {
            WriteMode::Write
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mode = cli.mode();

    let config = ConfigManager::load(cli.config.as_deref())?;
    logging::init(&config.logging.level)?;

    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            input: cli.input,
            output: cli.output,
            filter: cli.filter,
            emit_helpers: cli.emit_helpers.then_some(true),
        },
    );

    let outcome = SchemaGenerator::new(config).run(mode)?;

    match mode {
        WriteMode::Write => Ok(()),
        WriteMode::DryRun => {
            print_dry_run(&outcome);
            Ok(())
        }
        WriteMode::Check => report_check(&outcome),
    }
}

/// Print every file a dry run would have written.
fn print_dry_run(outcome: &GenerationOutcome) {
    for result in &outcome.results {
        if let WriteResult::DryRun { content, path } = result {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            print!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }
}

/// Report check results, failing when anything is stale.
fn report_check(outcome: &GenerationOutcome) -> Result<(), CliError> {
    let stale: Vec<&WriteResult> = outcome.stale().collect();

    if stale.is_empty() {
        println!("{} Schemas are up-to-date", "✓".green());
        return Ok(());
    }

    println!("{} Schemas are out of date", "✗".red());
    for result in &stale {
        let label = match result {
            WriteResult::Stale {
                reason: StaleReason::Missing,
                ..
            } => "missing",
            _ => "outdated",
        };
        println!("  {} {}", label.yellow(), result.path().display());
    }
    println!("  Run 'dto-zod' to update");

    Err(CliError::Validation(format!(
        "{} generated file(s) out of date",
        stale.len()
    )))
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
