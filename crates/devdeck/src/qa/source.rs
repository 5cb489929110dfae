//! Loading the raw Q&A text off the UI thread, and noticing when it changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Context;
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};

pub const DEFAULT_FILENAME: &str = "Q&A_Questions.md";

const WATCH_DEBOUNCE: Duration = Duration::from_millis(250);

pub fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(String),
    Failed,
}

/// A document read running on a background thread.
///
/// Dropping it cancels delivery: the worker's send fails silently and the
/// result never reaches a view that has gone away.
pub struct PendingDocument {
    rx: Receiver<LoadOutcome>,
}

impl PendingDocument {
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let outcome = match read(&path) {
                Ok(text) => LoadOutcome::Loaded(text),
                Err(e) => {
                    tracing::warn!(error = %e, "Error loading Q&A content");
                    LoadOutcome::Failed
                }
            };
            if tx.send(outcome).is_err() {
                tracing::trace!(path = %path.display(), "Q&A load finished after its view closed");
            }
        });
        Self { rx }
    }

    /// Non-blocking check for the result.
    pub fn poll(&self) -> Option<LoadOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(LoadOutcome::Failed),
        }
    }
}

/// Watches the Q&A file for changes while the Q&A view is open.
pub struct DocumentWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<DebounceEventResult>,
    file_name: Option<std::ffi::OsString>,
}

impl DocumentWatcher {
    /// Watch the directory holding `path`. Returns `None` (and logs) when the
    /// platform watcher cannot be set up; the view then simply never reloads.
    pub fn new(path: &Path) -> Option<Self> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let (tx, rx) = mpsc::channel();
        let mut debouncer = match new_debouncer(WATCH_DEBOUNCE, tx) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "file watching unavailable");
                return None;
            }
        };
        if let Err(e) = debouncer.watcher().watch(&dir, RecursiveMode::NonRecursive) {
            tracing::warn!(dir = %dir.display(), error = %e, "could not watch Q&A directory");
            return None;
        }
        tracing::debug!(dir = %dir.display(), "watching Q&A directory");
        Some(Self {
            _debouncer: debouncer,
            rx,
            file_name: path.file_name().map(|n| n.to_os_string()),
        })
    }

    /// Drain pending events; true when any of them touched the watched file.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    changed |= events
                        .iter()
                        .any(|e| e.path.file_name() == self.file_name.as_deref());
                }
                Err(e) => tracing::debug!(error = %e, "watch error"),
            }
        }
        changed
    }
}
