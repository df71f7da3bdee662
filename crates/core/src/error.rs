//! Error taxonomy for panel handlers and the execution backend.
//!
//! An empty selection is not an error: guarded handlers return `Ok(())`
//! without calling anything. A recoverable backend failure is never
//! surfaced either; it is turned into a forced-delete confirmation.

use thiserror::Error;

/// Error returned by a panel handler.
///
/// The host surfaces each `Err` exactly once to the user.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The target may not be acted upon (main or current worktree).
    #[error("{0}")]
    PreconditionViolation(String),

    /// The backend failed and no further escalation is possible.
    ///
    /// Displays the backend message unchanged.
    #[error("{0}")]
    FatalExecutionFailure(String),

    /// The caller's location could not be resolved or the view switch failed.
    #[error("{0:#}")]
    NavigationFailure(anyhow::Error),
}

impl PanelError {
    /// Whether the error came from the entry guard (no backend involved).
    pub fn is_precondition(&self) -> bool {
        matches!(self, PanelError::PreconditionViolation(_))
    }
}

/// Error returned by [`crate::WorktreeBackend::delete`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The operation failed but may succeed when forced.
    #[error("{0}")]
    Failed(String),

    /// The operation failed in a way forcing cannot fix.
    #[error("{0}")]
    Fatal(String),
}

impl BackendError {
    /// Whether escalation to a forced retry must be skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BackendError::Fatal(_))
    }

    /// Backend message, verbatim.
    pub fn message(&self) -> &str {
        match self {
            BackendError::Failed(msg) | BackendError::Fatal(msg) => msg,
        }
    }
}
