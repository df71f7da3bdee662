//! Application state.
//!
//! `AppState` is the host context handed to the worktree panel: it owns the
//! list, the single confirmation slot, the navigation stack and the git
//! backend, and implements every collaborator trait from `arbor-core`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ratatui::layout::Rect;

use arbor_config::Config;
use arbor_core::{
    ActionLog, BackendError, ConfirmService, ConfirmationRequest, ListContext, NavigationHost,
    PanelError, RefreshMode, RefreshScope, RefreshService, Worktree, WorktreeBackend,
};
use arbor_git::GitWorktreeBackend;
use arbor_i18n as i18n;
use arbor_theme::Theme;

pub use arbor_modal::{ActiveModal, ConfirmModal, ErrorModal};

use crate::list::WorktreeList;
use crate::refresh::{Loader, RefreshResult, RefreshWorker};

/// Pane receiving list navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Detail,
}

/// Screen areas from the last render, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutInfo {
    pub list: Rect,
    pub detail: Rect,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
    /// Application configuration
    pub config: Config,
    /// Current theme
    pub theme: &'static Theme,
    /// Worktrees of the active repository
    pub worktrees: WorktreeList,
    /// Repository the list was loaded from
    pub location: PathBuf,
    /// Locations to return to, most recent last
    pub nav_stack: Vec<PathBuf>,
    /// Active modal window
    pub active_modal: Option<ActiveModal>,
    /// Confirmation waiting for the user's answer
    pub pending_action: Option<ConfirmationRequest>,
    /// Status message (message, is_error)
    pub status_message: Option<(String, bool)>,
    pub focus: Focus,
    pub layout: LayoutInfo,
    backend: GitWorktreeBackend,
    refresh_worker: RefreshWorker,
}

impl AppState {
    /// Create state for the repository at `location` using git to list worktrees.
    pub fn new(config: Config, location: PathBuf) -> Self {
        Self::with_loader(config, location, arbor_git::list_worktrees)
    }

    /// Create state with a custom worktree loader.
    pub fn with_loader(config: Config, location: PathBuf, loader: Loader) -> Self {
        let theme = Theme::get_by_name(&config.general.theme);
        Self {
            should_quit: false,
            needs_redraw: true,
            config,
            theme,
            worktrees: WorktreeList::default(),
            backend: GitWorktreeBackend::new(&location),
            location,
            nav_stack: Vec::new(),
            active_modal: None,
            pending_action: None,
            status_message: None,
            focus: Focus::List,
            layout: LayoutInfo::default(),
            refresh_worker: RefreshWorker::new(loader),
        }
    }

    /// Reload the list on the calling thread.
    pub fn reload(&mut self) -> Result<()> {
        let worktrees = self.refresh_worker.load(&self.location)?;
        self.worktrees.set_items(worktrees);
        self.needs_redraw = true;
        Ok(())
    }

    /// Apply a finished background refresh. Returns true when the list changed.
    pub fn poll_refresh(&mut self) -> bool {
        let Some(result) = self.refresh_worker.try_recv() else {
            return false;
        };
        self.apply_refresh(result)
    }

    fn apply_refresh(&mut self, result: RefreshResult) -> bool {
        if result.location != self.location {
            log::debug!(
                "Dropping refresh for {} (now at {})",
                result.location.display(),
                self.location.display()
            );
            return false;
        }
        match result.worktrees {
            Ok(worktrees) => {
                log::debug!("Refreshed {} worktrees", worktrees.len());
                self.worktrees.set_items(worktrees);
            }
            Err(message) => {
                log::error!("Failed to refresh worktrees: {}", message);
                self.set_status_error(message);
            }
        }
        self.needs_redraw = true;
        true
    }

    /// Go back to the location saved before the last `enter`.
    pub fn return_to_previous(&mut self) -> Result<()> {
        let Some(previous) = self.pop() else {
            return Ok(());
        };
        if let Err(e) = self.switch_to(&previous, true) {
            self.nav_stack.push(previous);
            return Err(e);
        }
        Ok(())
    }

    /// Surface a handler error once: error dialog plus log line.
    pub fn report_error(&mut self, error: &PanelError) {
        self.show_error(error.to_string());
    }

    /// Show an error dialog, or a status line when a dialog is already open.
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        arbor_logger::error(message.clone());

        if self.active_modal.is_some() {
            self.set_status_error(message);
        } else {
            let modal = ErrorModal::new(i18n::t().error_title(), message);
            self.active_modal = Some(ActiveModal::Error(Box::new(modal)));
        }
        self.needs_redraw = true;
    }

    pub fn set_status_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), true));
        self.needs_redraw = true;
    }

    pub fn set_status_info(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), false));
        self.needs_redraw = true;
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
        self.needs_redraw = true;
    }

}

impl ListContext for AppState {
    fn selected(&self) -> Option<Worktree> {
        self.worktrees.selected().cloned()
    }
}

impl ConfirmService for AppState {
    fn confirm(&mut self, request: ConfirmationRequest) -> bool {
        if self.pending_action.is_some() || self.active_modal.is_some() {
            log::debug!("Rejecting '{}': a dialog is already open", request.title);
            return false;
        }

        let modal = ConfirmModal::new(request.title.clone(), request.prompt.clone());
        self.active_modal = Some(ActiveModal::Confirm(Box::new(modal)));
        self.pending_action = Some(request);
        self.needs_redraw = true;
        true
    }

    fn has_pending_confirmation(&self) -> bool {
        self.pending_action.is_some()
    }
}

impl WorktreeBackend for AppState {
    /// A removed worktree leaves the list at once; the refresh that follows
    /// only confirms it.
    fn delete(&mut self, path: &Path, force: bool) -> Result<(), BackendError> {
        self.backend.delete(path, force)?;
        if self.worktrees.remove(path) {
            self.needs_redraw = true;
        }
        Ok(())
    }
}

impl RefreshService for AppState {
    fn refresh(&mut self, scope: RefreshScope, mode: RefreshMode) {
        match (scope, mode) {
            (RefreshScope::Worktrees, RefreshMode::Async) => {
                self.refresh_worker.spawn(self.location.clone());
            }
            (RefreshScope::Worktrees, RefreshMode::Sync) => {
                if let Err(e) = self.reload() {
                    log::error!("Failed to reload worktrees: {:#}", e);
                    self.set_status_error(format!("{:#}", e));
                }
            }
        }
    }
}

impl NavigationHost for AppState {
    fn current_location(&self) -> Result<PathBuf> {
        std::env::current_dir().context("Failed to resolve current directory")
    }

    fn push(&mut self, location: PathBuf) -> Result<()> {
        self.nav_stack.push(location);
        Ok(())
    }

    fn pop(&mut self) -> Option<PathBuf> {
        self.nav_stack.pop()
    }

    /// List the target first so a failure leaves everything unchanged.
    fn switch_to(&mut self, target: &Path, focus: bool) -> Result<()> {
        let worktrees = self
            .refresh_worker
            .load(target)
            .with_context(|| format!("Failed to list worktrees in {}", target.display()))?;
        std::env::set_current_dir(target)
            .with_context(|| format!("Failed to enter {}", target.display()))?;

        self.location = target.to_path_buf();
        self.backend.set_repo_dir(target);
        self.worktrees.set_items(worktrees);
        if focus {
            self.focus = Focus::List;
        }
        self.status_message = None;
        self.needs_redraw = true;

        arbor_logger::info(format!("Switched to {}", target.display()));
        Ok(())
    }
}

impl ActionLog for AppState {
    fn log_action(&mut self, action: &str) {
        arbor_logger::info(format!("Action: {}", action));
        self.set_status_info(action.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::ConfirmAction;

    fn loader(path: &Path) -> Result<Vec<Worktree>> {
        if path.ends_with("broken") {
            anyhow::bail!("not a git repository");
        }
        Ok(vec![
            Worktree::new("repo", path).main().current(),
            Worktree::new("feature", path.join("feature")),
        ])
    }

    fn state() -> AppState {
        let mut state = AppState::with_loader(Config::default(), PathBuf::from("/repo"), loader);
        state.reload().unwrap();
        state
    }

    fn request(name: &str) -> ConfirmationRequest {
        ConfirmationRequest::new(
            "Delete worktree",
            format!("Delete {}?", name),
            ConfirmAction::DeleteWorktree {
                path: PathBuf::from("/repo").join(name),
                force: false,
            },
        )
    }

    #[test]
    fn test_reload_populates_list() {
        let state = state();
        assert_eq!(state.worktrees.len(), 2);
        assert_eq!(state.selected().unwrap().name, "repo");
    }

    #[test]
    fn test_single_confirmation_slot() {
        let mut state = state();

        assert!(state.confirm(request("feature")));
        assert!(state.has_pending_confirmation());
        assert!(matches!(state.active_modal, Some(ActiveModal::Confirm(_))));

        assert!(!state.confirm(request("other")));
        assert_eq!(
            state.pending_action.as_ref().unwrap().prompt,
            "Delete feature?"
        );
    }

    #[test]
    fn test_confirm_rejected_while_error_shown() {
        let mut state = state();
        state.show_error("boom");
        assert!(!state.confirm(request("feature")));
        assert!(!state.has_pending_confirmation());
    }

    #[test]
    fn test_error_while_dialog_open_goes_to_status_bar() {
        let mut state = state();
        state.confirm(request("feature"));

        state.show_error("refresh failed");

        assert!(matches!(state.active_modal, Some(ActiveModal::Confirm(_))));
        assert_eq!(
            state.status_message,
            Some(("refresh failed".to_string(), true))
        );
    }

    #[test]
    fn test_report_error_shows_message_verbatim() {
        let mut state = state();
        state.report_error(&PanelError::FatalExecutionFailure(
            "fatal: worktree is locked".to_string(),
        ));

        match &state.active_modal {
            Some(ActiveModal::Error(modal)) => {
                assert_eq!(modal.message(), "fatal: worktree is locked")
            }
            other => panic!("unexpected modal: {:?}", other),
        }
    }

    #[test]
    fn test_stale_refresh_is_dropped() {
        let mut state = state();
        let applied = state.apply_refresh(RefreshResult {
            location: PathBuf::from("/elsewhere"),
            worktrees: Ok(Vec::new()),
        });

        assert!(!applied);
        assert_eq!(state.worktrees.len(), 2);
    }

    #[test]
    fn test_refresh_error_keeps_list() {
        let mut state = state();
        state.apply_refresh(RefreshResult {
            location: PathBuf::from("/repo"),
            worktrees: Err("git exploded".to_string()),
        });

        assert_eq!(state.worktrees.len(), 2);
        assert_eq!(state.status_message, Some(("git exploded".to_string(), true)));
    }

    #[test]
    fn test_switch_failure_leaves_state_unchanged() {
        let mut state = state();

        let err = state
            .switch_to(Path::new("/no/such/arbor/dir/broken"), true)
            .unwrap_err();

        assert!(err.to_string().contains("Failed to list worktrees"));
        assert_eq!(state.location, PathBuf::from("/repo"));
        assert_eq!(state.worktrees.len(), 2);
    }

    #[test]
    fn test_failed_enter_leaves_stack_empty() {
        let mut state = state();
        let target = Worktree::new("broken", "/repo/broken");

        let err = arbor_panel_worktrees::enter(&mut state, &target).unwrap_err();

        assert!(err.to_string().contains("Failed to list worktrees in /repo/broken"));
        assert!(state.nav_stack.is_empty());
        assert_eq!(state.location, PathBuf::from("/repo"));
    }

    #[test]
    fn test_failed_delete_keeps_row() {
        let mut state = state();
        state.worktrees.select(1);

        let result = state.delete(Path::new("/repo/feature"), false);

        assert!(result.is_err());
        assert_eq!(state.worktrees.len(), 2);
        assert_eq!(state.selected().unwrap().name, "feature");
    }

    #[test]
    fn test_return_with_empty_stack_is_noop() {
        let mut state = state();
        state.return_to_previous().unwrap();
        assert_eq!(state.location, PathBuf::from("/repo"));
    }

    #[test]
    fn test_failed_return_keeps_stack_entry() {
        let mut state = state();
        state.push(PathBuf::from("/no/such/arbor/dir")).unwrap();

        assert!(state.return_to_previous().is_err());
        assert_eq!(state.nav_stack, vec![PathBuf::from("/no/such/arbor/dir")]);
    }

    #[test]
    fn test_log_action_sets_status() {
        let mut state = state();
        state.log_action("Delete worktree");
        assert_eq!(
            state.status_message,
            Some(("Delete worktree".to_string(), false))
        );
    }
}
