use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ProcessingError;

use super::unified::IngestionFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Non-fatal event (e.g. a file that loaded but contained no players).
    Warning,
    /// Error-level event (the roster could not be loaded).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
    /// Format used for ingestion.
    pub format: IngestionFormat,
}

/// Stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of players loaded.
    pub players: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record logs or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called after a successful ingestion that still looks suspicious (e.g. zero players).
    fn on_warning(&self, _ctx: &IngestionContext, _message: &str) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &ProcessingError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_warning(&self, ctx: &IngestionContext, message: &str) {
        for o in &self.observers {
            o.on_warning(ctx, message);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        eprintln!("{}", success_line(ctx, stats));
    }

    fn on_warning(&self, ctx: &IngestionContext, message: &str) {
        eprintln!("{}", warning_line(ctx, message));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        eprintln!("{}", failure_line("roster", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        eprintln!("{}", failure_line("ALERT", ctx, severity, error));
    }
}

/// Appends ingestion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {line}", unix_ts());
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append_line(&success_line(ctx, stats));
    }

    fn on_warning(&self, ctx: &IngestionContext, message: &str) {
        self.append_line(&warning_line(ctx, message));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        self.append_line(&failure_line("roster", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) {
        self.append_line(&failure_line("ALERT", ctx, severity, error));
    }
}

fn success_line(ctx: &IngestionContext, stats: IngestionStats) -> String {
    format!(
        "[roster][ok] format={:?} path={} players={}",
        ctx.format,
        ctx.path.display(),
        stats.players
    )
}

fn warning_line(ctx: &IngestionContext, message: &str) -> String {
    format!(
        "[roster][{:?}] format={:?} path={} {message}",
        IngestionSeverity::Warning,
        ctx.format,
        ctx.path.display()
    )
}

fn failure_line(tag: &str, ctx: &IngestionContext, severity: IngestionSeverity, error: &ProcessingError) -> String {
    format!(
        "[{tag}][{:?}] format={:?} path={} err={}",
        severity,
        ctx.format,
        ctx.path.display(),
        error
    )
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
