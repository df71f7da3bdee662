//! Collaborator traits the worktree panel calls into.
//!
//! The application owns one context object implementing all of them and
//! passes it to every handler, so no panel state lives in globals.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{BackendError, ConfirmationRequest, RefreshMode, RefreshScope, Worktree};

/// Read access to the list the panel operates on.
pub trait ListContext {
    /// Currently selected worktree, if any.
    fn selected(&self) -> Option<Worktree>;
}

/// Modal confirmation dialogs.
pub trait ConfirmService {
    /// Raise a confirmation dialog.
    ///
    /// Returns `false` without side effects when another request is
    /// still outstanding.
    fn confirm(&mut self, request: ConfirmationRequest) -> bool;

    /// Whether a request is waiting for the user.
    fn has_pending_confirmation(&self) -> bool;
}

/// Version-control operations.
pub trait WorktreeBackend {
    /// Remove the worktree checked out at `path`.
    fn delete(&mut self, path: &Path, force: bool) -> Result<(), BackendError>;
}

/// List reloading.
pub trait RefreshService {
    /// Request a reload; with [`RefreshMode::Async`] this returns immediately.
    fn refresh(&mut self, scope: RefreshScope, mode: RefreshMode);
}

/// Switching the active repository.
pub trait NavigationHost {
    /// Location the user is at right now.
    fn current_location(&self) -> Result<PathBuf>;

    /// Remember a location to return to later.
    fn push(&mut self, location: PathBuf) -> Result<()>;

    /// Drop the most recently pushed location.
    fn pop(&mut self) -> Option<PathBuf>;

    /// Make `target` the active repository, optionally focusing its view.
    fn switch_to(&mut self, target: &Path, focus: bool) -> Result<()>;
}

/// User-visible command log.
pub trait ActionLog {
    /// Record that a user action is about to run.
    fn log_action(&mut self, action: &str);
}

/// Everything a worktree panel handler needs from its host.
pub trait PanelHost:
    ListContext + ConfirmService + WorktreeBackend + RefreshService + NavigationHost + ActionLog
{
}

impl<T> PanelHost for T where
    T: ListContext + ConfirmService + WorktreeBackend + RefreshService + NavigationHost + ActionLog
{
}
