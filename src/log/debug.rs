//! File-backed log writer
//!
//! Entries are handed to a background thread over a bounded channel so the
//! menu never waits on disk I/O. The file lives at `~/.ssh-menu/logs/sshmenu.log`
//! and is created lazily on the first entry.

use super::{LogError, LogLevel, formatter::LogFormatter};
use crate::config;
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{
        Mutex,
        mpsc::{self, Receiver, RecvTimeoutError, SyncSender},
    },
    thread,
    time::{Duration, Instant},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

const LOG_FILE_NAME: &str = "sshmenu.log";
const FLUSH_BYTES: usize = 8 * 1024;
const FLUSH_INTERVAL: Duration = Duration::from_millis(100);
const QUEUE_CAPACITY: usize = 512;
#[cfg(unix)]
const PRIVATE_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_FILE_MODE: u32 = 0o600;

enum LogCommand {
    Write(LogLevel, String),
    Flush(SyncSender<Result<(), String>>),
}

struct WriterState {
    writer: Option<BufWriter<File>>,
    pending_bytes: usize,
    last_flush: Instant,
    last_error: Option<String>,
}

impl WriterState {
    fn new() -> Self {
        Self {
            writer: None,
            pending_bytes: 0,
            last_flush: Instant::now(),
            last_error: None,
        }
    }
}

pub(super) struct DebugLogger {
    formatter: LogFormatter,
    sender: Mutex<Option<SyncSender<LogCommand>>>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::new(true, true),
            sender: Mutex::new(None),
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let sender = self.ensure_worker()?;
        sender
            .send(LogCommand::Write(level, message.to_string()))
            .map_err(|err| LogError::FormattingError(format!("failed to enqueue log entry: {}", err)))
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let sender = {
            let guard = match self.sender.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.as_ref().cloned()
        };

        // Nothing was ever logged, so there is nothing to flush.
        let Some(sender) = sender else {
            return Ok(());
        };

        let (ack_tx, ack_rx) = mpsc::sync_channel(0);
        sender
            .send(LogCommand::Flush(ack_tx))
            .map_err(|err| LogError::FormattingError(format!("failed to enqueue log flush: {}", err)))?;

        match ack_rx.recv() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(message)) => Err(LogError::FormattingError(message)),
            Err(err) => Err(LogError::FormattingError(format!("log writer stopped before acknowledging flush: {}", err))),
        }
    }

    fn ensure_worker(&self) -> Result<SyncSender<LogCommand>, LogError> {
        let mut guard = match self.sender.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("Log writer lock poisoned; continuing with recovered state");
                poisoned.into_inner()
            }
        };
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.clone());
        }

        let (tx, rx) = mpsc::sync_channel(QUEUE_CAPACITY);
        let formatter = self.formatter.clone();

        thread::Builder::new()
            .name("debug-log-writer".to_string())
            .spawn(move || run_writer(rx, formatter))
            .map_err(|err| LogError::FormattingError(format!("failed to spawn log writer: {}", err)))?;

        *guard = Some(tx.clone());
        Ok(tx)
    }
}

fn log_file_path() -> Result<PathBuf, LogError> {
    let log_dir = config::app_dir()
        .ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?
        .join("logs");
    create_private_directory(&log_dir)?;
    Ok(log_dir.join(LOG_FILE_NAME))
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_DIR_MODE))?;
    }
    Ok(())
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(PRIVATE_FILE_MODE);
    }
    let file = options.open(path)?;
    // An existing file keeps its old mode unless it is reset explicitly.
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_FILE_MODE))?;
    }
    Ok(file)
}

fn run_writer(receiver: Receiver<LogCommand>, formatter: LogFormatter) {
    let mut state = WriterState::new();

    loop {
        match receiver.recv_timeout(FLUSH_INTERVAL) {
            Ok(LogCommand::Write(level, message)) => {
                if let Err(err) = write_entry(&mut state, &formatter, level, &message) {
                    state.last_error = Some(err.to_string());
                }
            }
            Ok(LogCommand::Flush(ack)) => {
                let _ = ack.send(flush_and_report(&mut state).map_err(|err| err.to_string()));
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Err(err) = flush_if_due(&mut state) {
                    state.last_error = Some(err.to_string());
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                let _ = flush_and_report(&mut state);
                break;
            }
        }
    }
}

fn write_entry(state: &mut WriterState, formatter: &LogFormatter, level: LogLevel, message: &str) -> Result<(), LogError> {
    if state.writer.is_none() {
        let file = open_private_append_file(&log_file_path()?)?;
        state.writer = Some(BufWriter::new(file));
    }

    let line = formatter.format(Some(level), message);
    if let Some(writer) = state.writer.as_mut() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    state.pending_bytes = state.pending_bytes.saturating_add(line.len() + 1);

    flush_if_due(state)
}

fn flush_if_due(state: &mut WriterState) -> Result<(), LogError> {
    if should_flush(state.pending_bytes, state.last_flush.elapsed()) {
        flush_writer(state)?;
    }
    Ok(())
}

fn flush_writer(state: &mut WriterState) -> Result<(), LogError> {
    if let Some(writer) = state.writer.as_mut() {
        writer.flush()?;
        state.pending_bytes = 0;
        state.last_flush = Instant::now();
    }
    Ok(())
}

fn flush_and_report(state: &mut WriterState) -> Result<(), LogError> {
    flush_writer(state)?;
    match state.last_error.take() {
        Some(message) => Err(LogError::FormattingError(message)),
        None => Ok(()),
    }
}

fn should_flush(pending_bytes: usize, since_last_flush: Duration) -> bool {
    pending_bytes > 0 && (pending_bytes >= FLUSH_BYTES || since_last_flush >= FLUSH_INTERVAL)
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
