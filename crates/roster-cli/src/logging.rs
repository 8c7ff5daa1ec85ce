use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use parking_lot::{Mutex, MutexGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::CliError;

/// Route roster events as JSON lines into the workspace run log at `path`.
pub fn init_logging(path: &Path) -> Result<(), CliError> {
    let run_log = RunLog::open(path)?;
    let events = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(run_log);

    tracing_subscriber::registry()
        .with(event_filter())
        .with(events)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// `info` unless `RUST_LOG` says otherwise; unparsable directives are skipped.
fn event_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Append-only log file shared by every event writer.
struct RunLog {
    file: Mutex<File>,
}

impl RunLog {
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

/// Holds the file lock while one event is written.
struct RunLogEntry<'a>(MutexGuard<'a, File>);

impl<'a> MakeWriter<'a> for RunLog {
    type Writer = RunLogEntry<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RunLogEntry(self.file.lock())
    }
}

impl Write for RunLogEntry<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
