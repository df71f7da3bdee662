//! Background reloading of the worktree list.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Result;

use arbor_core::Worktree;

/// Function listing the worktrees of the repository at a path.
pub type Loader = fn(&Path) -> Result<Vec<Worktree>>;

/// Result sent back by the worker thread.
#[derive(Debug)]
pub struct RefreshResult {
    /// Location the list was loaded for
    pub location: PathBuf,
    /// Loaded worktrees, or the formatted error
    pub worktrees: Result<Vec<Worktree>, String>,
}

/// Runs the loader on a worker thread, one request at a time.
///
/// A new request replaces the one in flight; its result is dropped.
pub struct RefreshWorker {
    loader: Loader,
    receiver: Option<Receiver<RefreshResult>>,
}

impl RefreshWorker {
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            receiver: None,
        }
    }

    /// Load synchronously on the calling thread.
    pub fn load(&self, location: &Path) -> Result<Vec<Worktree>> {
        (self.loader)(location)
    }

    /// Start loading `location` in the background.
    pub fn spawn(&mut self, location: PathBuf) {
        let (tx, rx) = mpsc::channel();
        let loader = self.loader;

        thread::spawn(move || {
            let worktrees = loader(&location).map_err(|e| format!("{:#}", e));
            // Receiver is gone when a newer request replaced this one.
            let _ = tx.send(RefreshResult {
                location,
                worktrees,
            });
        });

        self.receiver = Some(rx);
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Take the finished result, if any, without blocking.
    pub fn try_recv(&mut self) -> Option<RefreshResult> {
        let rx = self.receiver.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Refresh worker exited without a result");
                self.receiver = None;
                None
            }
        }
    }
}

impl std::fmt::Debug for RefreshWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshWorker")
            .field("pending", &self.is_pending())
            .finish()
    }
}
