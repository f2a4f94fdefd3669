use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use clispec_core::Violation;
use clispec_loader::{BaselineCheck, LoadedDocument, lint_document};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "clispec")]
#[command(about = "Lint CLI specification documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a CLI specification document.
    Lint(LintArgs),
}

#[derive(Debug, Args)]
struct LintArgs {
    /// Specification document (.json, .yaml, or .yml).
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clispec_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Lint(args) => run_lint(args),
    }
}

fn run_lint(args: LintArgs) -> ExitCode {
    let violations = match try_lint(&args.file) {
        Ok(violations) => violations,
        Err(err) => {
            report_fatal(err.as_ref());
            return ExitCode::from(1);
        }
    };

    if violations.is_empty() {
        println!("Document is valid");
        return ExitCode::SUCCESS;
    }

    for violation in &violations {
        println!("{violation}");
    }
    eprintln!("Document isn't valid");
    ExitCode::from(2)
}

fn try_lint(file: &Path) -> Result<Vec<Violation>, Box<dyn Error>> {
    let document = LoadedDocument::from_path(file)?;
    debug!(path = %file.display(), "document loaded");
    let baseline = BaselineCheck::new()?;
    Ok(lint_document(&document, &baseline)?)
}

fn report_fatal(err: &dyn Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = cause.source();
    }
}
