//! Requests the panel sends to its host.
//!
//! Continuations are plain data tags so the host can hold a pending
//! request without borrowing the panel that raised it.

use std::path::PathBuf;

/// Continuation to run when a confirmation dialog is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove the worktree at `path`, forcing when `force` is set.
    DeleteWorktree {
        /// Worktree checkout to remove
        path: PathBuf,
        /// Whether this is the escalated (forced) attempt
        force: bool,
    },
}

/// A modal Yes/No question raised by a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    /// Dialog title
    pub title: String,
    /// Dialog body, already resolved against its placeholders
    pub prompt: String,
    /// What to do when the user confirms
    pub on_confirm: ConfirmAction,
}

impl ConfirmationRequest {
    /// Create a new confirmation request.
    pub fn new(
        title: impl Into<String>,
        prompt: impl Into<String>,
        on_confirm: ConfirmAction,
    ) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            on_confirm,
        }
    }
}

/// Which list a refresh request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshScope {
    /// The worktree list
    Worktrees,
}

/// How a refresh request is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Reload in the background; the caller does not wait.
    #[default]
    Async,
    /// Reload before returning.
    Sync,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_mode_default_is_async() {
        assert_eq!(RefreshMode::default(), RefreshMode::Async);
    }

    #[test]
    fn test_confirmation_request_new() {
        let req = ConfirmationRequest::new(
            "Delete worktree",
            "Are you sure?",
            ConfirmAction::DeleteWorktree {
                path: PathBuf::from("/repo/wt"),
                force: false,
            },
        );
        assert_eq!(req.title, "Delete worktree");
        assert!(matches!(
            req.on_confirm,
            ConfirmAction::DeleteWorktree { force: false, .. }
        ));
    }
}
