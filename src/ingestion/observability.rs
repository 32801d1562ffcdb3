//! Diagnostic reporting for preview attempts.
//!
//! Failures during preview are absorbed into an empty result, so observers are the only place
//! they become visible.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::PreviewError;

use super::unified::SourceFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreviewSeverity {
    /// Informational event.
    Info,
    /// Nothing usable in the file (blank or header-only).
    Warning,
    /// Content did not decode as the detected format.
    Error,
    /// The bytes could not be read at all.
    Critical,
}

impl PreviewSeverity {
    /// Severity of an absorbed failure.
    pub fn for_error(e: &PreviewError) -> Self {
        match e {
            PreviewError::Io(_) => Self::Critical,
            PreviewError::Decode { .. } => Self::Error,
            #[cfg(feature = "excel")]
            PreviewError::Excel(calamine::Error::Io(_)) => Self::Critical,
            #[cfg(feature = "excel")]
            PreviewError::Excel(_) => Self::Error,
            #[cfg(feature = "excel")]
            PreviewError::XlsxWrite(_) => Self::Error,
            PreviewError::EmptyContent { .. } => Self::Warning,
            PreviewError::NoFileSelected => Self::Info,
        }
    }
}

/// Context about a preview attempt.
#[derive(Debug, Clone)]
pub struct PreviewContext {
    /// File name (or path) being previewed.
    pub source: PathBuf,
    /// Format the file was routed to.
    pub format: SourceFormat,
}

/// Stats reported on a successful preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewStats {
    /// Rows in the preview (already bounded).
    pub rows: usize,
    /// Columns in the header.
    pub columns: usize,
}

/// Observer interface for preview outcomes.
pub trait PreviewObserver: Send + Sync {
    /// Called when a preview is produced.
    fn on_success(&self, _ctx: &PreviewContext, _stats: PreviewStats) {}

    /// Called when a failure is absorbed.
    fn on_failure(&self, _ctx: &PreviewContext, _severity: PreviewSeverity, _error: &PreviewError) {}

    /// Called when an absorbed failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PreviewObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn PreviewObserver>>) -> Self {
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

impl PreviewObserver for CompositeObserver {
    fn on_success(&self, ctx: &PreviewContext, stats: PreviewStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        self.observers.iter().for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        self.observers.iter().for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// One reported outcome, rendered as a single `key=value` log line.
enum Event<'a> {
    Ok(PreviewStats),
    Fail(PreviewSeverity, &'a PreviewError),
    Alert(PreviewSeverity, &'a PreviewError),
}

struct LogLine<'a> {
    ctx: &'a PreviewContext,
    event: Event<'a>,
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (format, source) = (self.ctx.format, self.ctx.source.display());
        match self.event {
            Event::Ok(stats) => write!(
                f,
                "ok format={format:?} source={source} rows={} columns={}",
                stats.rows, stats.columns
            ),
            Event::Fail(severity, error) => {
                write!(f, "fail severity={severity:?} format={format:?} source={source} err={error}")
            }
            Event::Alert(severity, error) => {
                write!(f, "ALERT severity={severity:?} format={format:?} source={source} err={error}")
            }
        }
    }
}

/// Logs preview events to stderr, prefixed with `[preview]`.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    fn log(ctx: &PreviewContext, event: Event<'_>) {
        eprintln!("[preview] {}", LogLine { ctx, event });
    }
}

impl PreviewObserver for StdErrObserver {
    fn on_success(&self, ctx: &PreviewContext, stats: PreviewStats) {
        Self::log(ctx, Event::Ok(stats));
    }

    fn on_failure(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        Self::log(ctx, Event::Fail(severity, error));
    }

    fn on_alert(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        Self::log(ctx, Event::Alert(severity, error));
    }
}

/// Appends timestamped preview events to a local log file.
///
/// Writes are best-effort: a log file that cannot be opened never fails a preview.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn log(&self, ctx: &PreviewContext, event: Event<'_>) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {}", unix_ts(), LogLine { ctx, event });
        }
    }
}

impl PreviewObserver for FileObserver {
    fn on_success(&self, ctx: &PreviewContext, stats: PreviewStats) {
        self.log(ctx, Event::Ok(stats));
    }

    fn on_failure(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        self.log(ctx, Event::Fail(severity, error));
    }

    fn on_alert(&self, ctx: &PreviewContext, severity: PreviewSeverity, error: &PreviewError) {
        self.log(ctx, Event::Alert(severity, error));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
