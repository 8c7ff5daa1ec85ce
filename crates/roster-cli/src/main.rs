mod logging;
mod session;
mod shell;
mod utils;
mod workspace;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use roster_core::{DatasetStore, dataset_json_schema};
use roster_eval::render_report;
use thiserror::Error;

use logging::init_logging;
use session::{Session, SessionError};
use shell::{print_accepted, run_shell, upload_file};
use workspace::{WorkspaceError, WorkspacePaths, load_or_create_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Employee dataset generator and analyzer")]
struct Cli {
    /// Workspace directory holding config, data and logs.
    #[arg(long, global = true, default_value = ".roster")]
    workspace: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a synthetic dataset and store it.
    Generate(GenerateArgs),
    /// Validate a JSON dataset and store it.
    Upload(UploadArgs),
    /// Summarize a dataset (the stored one by default).
    Process(ProcessArgs),
    /// Print the JSON Schema of the dataset file.
    Schema,
    /// Interactive session keeping the current dataset between commands.
    Shell,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of employees (defaults to `default_count` in settings.toml).
    #[arg(long)]
    count: Option<usize>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct UploadArgs {
    /// JSON file with an array of employees.
    file: PathBuf,
}

#[derive(Args, Debug)]
struct ProcessArgs {
    /// Dataset file to summarize instead of the stored dataset.
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Schema = cli.command {
        println!("{}", expected_structure()?);
        return Ok(());
    }

    let paths = WorkspacePaths::new(cli.workspace);
    paths.ensure_dirs()?;
    let settings = load_or_create_settings(&paths)?;
    init_logging(&paths.cli_log_path())?;

    let store = DatasetStore::new(paths.resolve(&settings.dataset_path));
    let session = Session::new(store, settings);

    tracing::info!(event = "run_started", workspace = %paths.root.display());
    let timer = Instant::now();

    execute(&session, cli.command).await?;

    tracing::info!(
        event = "run_finished",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

/// Run one subcommand against the session. Failures are returned so the
/// process exits non-zero; only the interactive shell keeps going.
async fn execute(session: &Session, command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => {
            println!("Generating random dataset...");
            let accepted = session.generate(args.count, args.seed).await?;
            print_accepted(accepted, "generated");
        }
        Command::Upload(args) => upload_file(session, &args.file).await?,
        Command::Process(args) => run_process(session, args.file).await?,
        Command::Shell => run_shell(session).await?,
        Command::Schema => println!("{}", expected_structure()?),
    }
    Ok(())
}

/// Summarize `file`, or the stored dataset when no file is given.
async fn run_process(session: &Session, file: Option<PathBuf>) -> Result<(), CliError> {
    let source = match file {
        Some(path) => read_source(&path).await?,
        None => match read_source(session.store().path()).await {
            Err(CliError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                return Err(SessionError::NoDataset.into());
            }
            other => other?,
        },
    };
    session.open(source).await?;

    let report = session.process().await?;
    println!("{}", render_report(&report));
    Ok(())
}

async fn read_source(path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path).await.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty JSON Schema describing a valid dataset file.
fn expected_structure() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&dataset_json_schema())
}
