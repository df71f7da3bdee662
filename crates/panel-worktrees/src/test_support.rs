//! Recording host used by the panel tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use arbor_core::{
    ActionLog, BackendError, ConfirmService, ConfirmationRequest, ListContext, NavigationHost,
    RefreshMode, RefreshScope, RefreshService, Worktree, WorktreeBackend,
};

/// One collaborator call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Confirm(ConfirmationRequest),
    Delete { path: PathBuf, force: bool },
    Refresh(RefreshScope, RefreshMode),
    Push(PathBuf),
    Pop,
    SwitchTo(PathBuf, bool),
    LogAction(String),
}

/// Fake host recording every call and answering from canned values.
pub struct RecordingHost {
    pub selection: Option<Worktree>,
    pub calls: Vec<Call>,
    pub pending: Option<ConfirmationRequest>,
    /// Results handed out by `delete`, oldest first; `Ok` once exhausted.
    pub delete_results: VecDeque<Result<(), BackendError>>,
    pub location: Option<PathBuf>,
    pub fail_push: bool,
    pub fail_switch: bool,
    pub stack: Vec<PathBuf>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            selection: None,
            calls: Vec::new(),
            pending: None,
            delete_results: VecDeque::new(),
            location: Some(PathBuf::from("/repo")),
            fail_push: false,
            fail_switch: false,
            stack: Vec::new(),
        }
    }

    pub fn with_selection(worktree: Worktree) -> Self {
        let mut host = Self::new();
        host.selection = Some(worktree);
        host
    }

    pub fn fail_delete(&mut self, error: BackendError) {
        self.delete_results.push_back(Err(error));
    }

    /// Take the outstanding dialog, as the host does when the user answers.
    pub fn answer(&mut self) -> ConfirmationRequest {
        self.pending.take().expect("no confirmation pending")
    }

    pub fn confirms(&self) -> Vec<&ConfirmationRequest> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Confirm(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> Vec<(PathBuf, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Delete { path, force } => Some((path.clone(), *force)),
                _ => None,
            })
            .collect()
    }

    pub fn refreshes(&self) -> Vec<(RefreshScope, RefreshMode)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Refresh(scope, mode) => Some((*scope, *mode)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }
}

impl ListContext for RecordingHost {
    fn selected(&self) -> Option<Worktree> {
        self.selection.clone()
    }
}

impl ConfirmService for RecordingHost {
    fn confirm(&mut self, request: ConfirmationRequest) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.calls.push(Call::Confirm(request.clone()));
        self.pending = Some(request);
        true
    }

    fn has_pending_confirmation(&self) -> bool {
        self.pending.is_some()
    }
}

impl WorktreeBackend for RecordingHost {
    fn delete(&mut self, path: &Path, force: bool) -> Result<(), BackendError> {
        self.calls.push(Call::Delete {
            path: path.to_path_buf(),
            force,
        });
        self.delete_results.pop_front().unwrap_or(Ok(()))
    }
}

impl RefreshService for RecordingHost {
    fn refresh(&mut self, scope: RefreshScope, mode: RefreshMode) {
        self.calls.push(Call::Refresh(scope, mode));
    }
}

impl NavigationHost for RecordingHost {
    fn current_location(&self) -> Result<PathBuf> {
        self.location
            .clone()
            .ok_or_else(|| anyhow!("current directory is gone"))
    }

    fn push(&mut self, location: PathBuf) -> Result<()> {
        if self.fail_push {
            return Err(anyhow!("navigation stack is full"));
        }
        self.calls.push(Call::Push(location.clone()));
        self.stack.push(location);
        Ok(())
    }

    fn pop(&mut self) -> Option<PathBuf> {
        self.calls.push(Call::Pop);
        self.stack.pop()
    }

    fn switch_to(&mut self, target: &Path, focus: bool) -> Result<()> {
        if self.fail_switch {
            return Err(anyhow!("cannot enter {}", target.display()));
        }
        self.calls.push(Call::SwitchTo(target.to_path_buf(), focus));
        Ok(())
    }
}

impl ActionLog for RecordingHost {
    fn log_action(&mut self, action: &str) {
        self.calls.push(Call::LogAction(action.to_string()));
    }
}
