use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::session::{Accepted, Session, SessionError};
use crate::utils::format_file_size;
use crate::{CliError, expected_structure, read_source};

const HELP: &str = "\
commands:
  generate [COUNT] [SEED]  generate a synthetic dataset
  upload <FILE>            load, validate and store a JSON dataset
  process                  summarize the current dataset
  schema                   print the dataset JSON Schema
  help                     show this message
  quit                     leave the shell";

/// Interactive loop holding one session's current dataset between commands.
pub async fn run_shell(session: &Session) -> Result<(), CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("Ready to process datasets. Type `help` for commands.");
    loop {
        stdout.write_all(b"roster> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        match command {
            "generate" => {
                let count = match parse_arg(args.first(), "COUNT") {
                    Ok(value) => value,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };
                let seed = match parse_arg(args.get(1), "SEED") {
                    Ok(value) => value,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };
                println!("Generating random dataset...");
                match session.generate(count, seed).await {
                    Ok(accepted) => print_accepted(accepted, "generated"),
                    Err(err) => println!("Error: {err}"),
                }
            }
            "upload" => {
                let Some(path) = args.first() else {
                    println!("usage: upload <FILE>");
                    continue;
                };
                if let Err(err) = upload_file(session, Path::new(path)).await {
                    println!("Error loading dataset: {err}");
                }
            }
            "process" => match session.process().await {
                Ok(report) => println!("{}", roster_eval::render_report(&report)),
                Err(err) => println!("Error processing dataset: {err}"),
            },
            "schema" => println!("{}", expected_structure()?),
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; type `help`"),
        }
    }

    Ok(())
}

/// Read `path` and hand it to the session as an upload, printing the outcome.
/// A rejected file also prints the expected structure before the error is
/// returned.
pub async fn upload_file(session: &Session, path: &Path) -> Result<(), CliError> {
    println!("Loading custom dataset...");
    let source = read_source(path).await?;

    let accepted = session.upload(source).await.inspect_err(|err| {
        if matches!(err, SessionError::Decode(_) | SessionError::Validation(_)) {
            if let Ok(schema) = expected_structure() {
                println!("Please ensure your JSON file matches this structure:\n{schema}");
            }
        }
    })?;
    print_accepted(accepted, "loaded");
    Ok(())
}

pub fn print_accepted(accepted: Accepted, verb: &str) {
    println!(
        "Dataset {verb} successfully! {} employee records, size: {}",
        accepted.records,
        format_file_size(accepted.bytes)
    );
    if let Some(seed) = accepted.seed {
        println!("Seed: {seed}");
    }
    match accepted.persisted {
        Ok(receipt) => println!(
            "Dataset saved to: {} (sha256 {})",
            receipt.path.display(),
            receipt.sha256
        ),
        Err(err) => println!("Warning: dataset is loaded but was not saved: {err}"),
    }
}

fn parse_arg<T: std::str::FromStr>(value: Option<&&str>, name: &str) -> Result<Option<T>, String> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid {name}: {raw}")),
    }
}
