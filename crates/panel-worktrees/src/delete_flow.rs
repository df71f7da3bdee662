//! Confirmation flow for removing a worktree.
//!
//! ```text
//! Idle --begin--> ConfirmPending(Soft) --yes--> delete(force=false)
//!                                                 ok   -> Idle + refresh
//!                                                 err  -> ConfirmPending(Forced)
//! ConfirmPending(Forced) --yes--> delete(force=true)
//!                                                 ok   -> Idle + refresh
//!                                                 err  -> Idle, error reported
//! any ConfirmPending --no--> Idle
//! ```
//!
//! Deletion runs to completion inside [`DeleteFlow::resolve`], so there is
//! no observable executing state. A forced confirmation is only ever raised
//! from a soft failure, which bounds escalation to one extra attempt.

use arbor_core::{
    ConfirmAction, ConfirmationRequest, PanelError, PanelHost, RefreshMode, RefreshScope,
    Worktree,
};
use arbor_i18n::{self as i18n, resolve_placeholder_string};

/// Which delete attempt a confirmation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Plain `git worktree remove`
    Soft,
    /// Retry with `--force` after a soft failure
    Forced,
}

impl DeleteMode {
    pub fn force(self) -> bool {
        matches!(self, DeleteMode::Forced)
    }
}

/// State of the delete flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlowState {
    #[default]
    Idle,
    /// A confirmation dialog for `target` is waiting for the user.
    ConfirmPending { target: Worktree, mode: DeleteMode },
}

/// Result of answering a delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User said no; nothing ran.
    Declined,
    /// The worktree was removed and a refresh requested.
    Deleted,
    /// Soft delete failed; a forced confirmation is now pending.
    Escalated,
}

/// Delete confirmation state machine.
#[derive(Debug, Default)]
pub struct DeleteFlow {
    state: DeleteFlowState,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteFlowState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DeleteFlowState::Idle
    }

    /// Start deleting `target`.
    ///
    /// Main and current worktrees are refused before any dialog is shown,
    /// the main check first. If the host already has a dialog open the
    /// request is dropped and the flow stays idle.
    pub fn begin<H>(&mut self, host: &mut H, target: Worktree) -> Result<(), PanelError>
    where
        H: PanelHost + ?Sized,
    {
        if !target.is_deletable() {
            let t = i18n::t();
            let reason = if target.is_main {
                t.cant_delete_main_worktree()
            } else {
                t.cant_delete_current_worktree()
            };
            return Err(PanelError::PreconditionViolation(reason.to_string()));
        }

        self.request(host, target, DeleteMode::Soft);
        Ok(())
    }

    /// Apply the user's answer to the pending confirmation.
    ///
    /// `action` is the continuation the host stored with the dialog. An
    /// answer that does not belong to the pending state is ignored.
    pub fn resolve<H>(
        &mut self,
        action: &ConfirmAction,
        confirmed: bool,
        host: &mut H,
    ) -> Result<DeleteOutcome, PanelError>
    where
        H: PanelHost + ?Sized,
    {
        let (target, mode) = match std::mem::take(&mut self.state) {
            DeleteFlowState::ConfirmPending { target, mode } => (target, mode),
            DeleteFlowState::Idle => {
                log::warn!("Delete confirmation answered with no delete pending");
                return Ok(DeleteOutcome::Declined);
            }
        };

        let ConfirmAction::DeleteWorktree { path, force } = action;
        if *path != target.path || *force != mode.force() {
            log::warn!("Stale delete confirmation for {}", path.display());
            return Ok(DeleteOutcome::Declined);
        }

        if !confirmed {
            log::debug!("Delete of {} declined", target.path.display());
            return Ok(DeleteOutcome::Declined);
        }

        host.log_action(i18n::t().action_delete_worktree());
        match host.delete(&target.path, mode.force()) {
            Ok(()) => {
                host.refresh(RefreshScope::Worktrees, RefreshMode::Async);
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) if mode == DeleteMode::Soft && !err.is_fatal() => {
                log::info!(
                    "Soft delete of {} failed, asking to force: {}",
                    target.path.display(),
                    err
                );
                if self.request(host, target, DeleteMode::Forced) {
                    Ok(DeleteOutcome::Escalated)
                } else {
                    Err(PanelError::FatalExecutionFailure(err.message().to_string()))
                }
            }
            Err(err) => Err(PanelError::FatalExecutionFailure(err.message().to_string())),
        }
    }

    /// Raise the confirmation for `mode`; true when the host accepted it.
    fn request<H>(&mut self, host: &mut H, target: Worktree, mode: DeleteMode) -> bool
    where
        H: PanelHost + ?Sized,
    {
        let t = i18n::t();
        let template = match mode {
            DeleteMode::Soft => t.delete_worktree_prompt(),
            DeleteMode::Forced => t.force_delete_worktree_prompt(),
        };
        let prompt =
            resolve_placeholder_string(template, &[("worktreeName", target.name.as_str())]);
        let request = ConfirmationRequest::new(
            t.delete_worktree_title(),
            prompt,
            ConfirmAction::DeleteWorktree {
                path: target.path.clone(),
                force: mode.force(),
            },
        );

        if host.confirm(request) {
            self.state = DeleteFlowState::ConfirmPending { target, mode };
            true
        } else {
            log::debug!("Confirmation already pending, dropping delete request");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, RecordingHost};
    use arbor_core::BackendError;
    use std::path::PathBuf;

    const DIRTY: &str =
        "fatal: '/wt/feature' contains modified or untracked files, use --force to delete it";

    fn feature() -> Worktree {
        Worktree::new("feature", "/wt/feature")
    }

    /// Answer the dialog the host is currently showing.
    fn answer(
        flow: &mut DeleteFlow,
        host: &mut RecordingHost,
        yes: bool,
    ) -> Result<DeleteOutcome, PanelError> {
        let request = host.answer();
        flow.resolve(&request.on_confirm, yes, host)
    }

    #[test]
    fn test_main_worktree_is_refused() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();

        let err = flow.begin(&mut host, feature().main()).unwrap_err();

        assert!(err.is_precondition());
        assert_eq!(err.to_string(), "You cannot delete the main worktree");
        assert!(host.calls.is_empty());
        assert!(flow.is_idle());
    }

    #[test]
    fn test_current_worktree_is_refused() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();

        let err = flow.begin(&mut host, feature().current()).unwrap_err();

        assert_eq!(err.to_string(), "You cannot delete the current worktree");
        assert!(host.deletes().is_empty());
    }

    #[test]
    fn test_main_check_wins_over_current() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();

        let err = flow.begin(&mut host, feature().main().current()).unwrap_err();
        assert_eq!(err.to_string(), "You cannot delete the main worktree");
    }

    #[test]
    fn test_soft_prompt_names_worktree() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();

        flow.begin(&mut host, feature()).unwrap();

        let confirms = host.confirms();
        assert_eq!(confirms.len(), 1);
        assert_eq!(confirms[0].title, "Delete worktree");
        assert_eq!(
            confirms[0].prompt,
            "Are you sure you want to delete worktree 'feature'?"
        );
        assert_eq!(
            confirms[0].on_confirm,
            ConfirmAction::DeleteWorktree {
                path: PathBuf::from("/wt/feature"),
                force: false
            }
        );
        assert_eq!(
            *flow.state(),
            DeleteFlowState::ConfirmPending {
                target: feature(),
                mode: DeleteMode::Soft
            }
        );
    }

    #[test]
    fn test_decline_has_no_side_effects() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();

        let outcome = answer(&mut flow, &mut host, false).unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(host.deletes().is_empty());
        assert!(host.refreshes().is_empty());
        assert!(flow.is_idle());
    }

    #[test]
    fn test_soft_success_refreshes_once() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();

        let outcome = answer(&mut flow, &mut host, true).unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            host.calls[1..],
            [
                Call::LogAction("Delete worktree".to_string()),
                Call::Delete {
                    path: PathBuf::from("/wt/feature"),
                    force: false
                },
                Call::Refresh(RefreshScope::Worktrees, RefreshMode::Async),
            ]
        );
        assert_eq!(host.confirms().len(), 1);
        assert!(flow.is_idle());
    }

    #[test]
    fn test_soft_failure_escalates_to_forced_confirmation() {
        let mut host = RecordingHost::new();
        host.fail_delete(BackendError::Failed(DIRTY.to_string()));
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();

        let outcome = answer(&mut flow, &mut host, true).unwrap();

        assert_eq!(outcome, DeleteOutcome::Escalated);
        let confirms = host.confirms();
        assert_eq!(confirms.len(), 2);
        assert_ne!(confirms[0].prompt, confirms[1].prompt);
        assert!(confirms[1].prompt.contains("'feature'"));
        assert!(host.refreshes().is_empty());
        assert_eq!(
            *flow.state(),
            DeleteFlowState::ConfirmPending {
                target: feature(),
                mode: DeleteMode::Forced
            }
        );
    }

    #[test]
    fn test_forced_success_refreshes() {
        let mut host = RecordingHost::new();
        host.fail_delete(BackendError::Failed(DIRTY.to_string()));
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();
        answer(&mut flow, &mut host, true).unwrap();

        let outcome = answer(&mut flow, &mut host, true).unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            host.deletes(),
            vec![
                (PathBuf::from("/wt/feature"), false),
                (PathBuf::from("/wt/feature"), true)
            ]
        );
        assert_eq!(
            host.refreshes(),
            vec![(RefreshScope::Worktrees, RefreshMode::Async)]
        );
    }

    #[test]
    fn test_forced_failure_reports_backend_message_verbatim() {
        let mut host = RecordingHost::new();
        host.fail_delete(BackendError::Failed(DIRTY.to_string()));
        host.fail_delete(BackendError::Failed("fatal: still locked".to_string()));
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();
        answer(&mut flow, &mut host, true).unwrap();

        let err = answer(&mut flow, &mut host, true).unwrap_err();

        assert!(matches!(err, PanelError::FatalExecutionFailure(_)));
        assert_eq!(err.to_string(), "fatal: still locked");
        // No second escalation.
        assert_eq!(host.confirms().len(), 2);
        assert!(host.pending.is_none());
        assert!(host.refreshes().is_empty());
        assert!(flow.is_idle());
    }

    #[test]
    fn test_declining_forced_confirmation() {
        let mut host = RecordingHost::new();
        host.fail_delete(BackendError::Failed(DIRTY.to_string()));
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();
        answer(&mut flow, &mut host, true).unwrap();

        let outcome = answer(&mut flow, &mut host, false).unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(host.deletes().len(), 1);
        assert!(flow.is_idle());
    }

    #[test]
    fn test_fatal_backend_error_is_not_escalated() {
        let mut host = RecordingHost::new();
        host.fail_delete(BackendError::Fatal("git: command not found".to_string()));
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();

        let err = answer(&mut flow, &mut host, true).unwrap_err();

        assert_eq!(err.to_string(), "git: command not found");
        assert_eq!(host.confirms().len(), 1);
        assert!(flow.is_idle());
    }

    #[test]
    fn test_busy_confirm_service_keeps_flow_idle() {
        let mut host = RecordingHost::new();
        host.pending = Some(ConfirmationRequest::new(
            "Other",
            "Other dialog",
            ConfirmAction::DeleteWorktree {
                path: PathBuf::from("/elsewhere"),
                force: false,
            },
        ));
        let mut flow = DeleteFlow::new();

        flow.begin(&mut host, feature()).unwrap();

        assert!(flow.is_idle());
        assert!(host.confirms().is_empty());
    }

    #[test]
    fn test_stale_answer_is_ignored() {
        let mut host = RecordingHost::new();
        let mut flow = DeleteFlow::new();
        flow.begin(&mut host, feature()).unwrap();
        host.answer();

        let stale = ConfirmAction::DeleteWorktree {
            path: PathBuf::from("/wt/other"),
            force: false,
        };
        let outcome = flow.resolve(&stale, true, &mut host).unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(host.deletes().is_empty());
    }
}
