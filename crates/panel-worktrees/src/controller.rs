//! Worktree panel controller: routes input to guarded handlers.

use crossterm::event::KeyEvent;

use arbor_config::UniversalKeys;
use arbor_core::{ConfirmAction, PanelError, PanelHost};
use arbor_theme::Theme;

use crate::bindings::{Binding, BindingTable, WorktreeAction};
use crate::delete_flow::{DeleteFlow, DeleteFlowState, DeleteOutcome};
use crate::detail::{render_detail, DetailView};
use crate::guard::guarded;
use crate::navigation;

/// Command dispatch for the worktree panel.
#[derive(Debug)]
pub struct WorktreesController {
    bindings: BindingTable,
    delete_flow: DeleteFlow,
}

impl WorktreesController {
    pub fn new(keys: &UniversalKeys) -> Self {
        Self {
            bindings: BindingTable::from_config(keys),
            delete_flow: DeleteFlow::new(),
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        self.bindings.bindings()
    }

    pub fn delete_state(&self) -> &DeleteFlowState {
        self.delete_flow.state()
    }

    /// Handle a key press. Returns `Ok(false)` when the key is not bound.
    ///
    /// Nothing is dispatched while a confirmation is open.
    pub fn handle_key<H>(&mut self, key: &KeyEvent, host: &mut H) -> Result<bool, PanelError>
    where
        H: PanelHost + ?Sized,
    {
        if host.has_pending_confirmation() {
            return Ok(false);
        }
        match self.bindings.lookup(key) {
            Some(action) => self.dispatch(action, host).map(|()| true),
            None => Ok(false),
        }
    }

    /// Mouse click on a list row: same as the enter binding.
    pub fn on_click<H>(&mut self, host: &mut H) -> Result<(), PanelError>
    where
        H: PanelHost + ?Sized,
    {
        if host.has_pending_confirmation() {
            return Ok(());
        }
        self.dispatch(WorktreeAction::Enter, host)
    }

    /// Run `action` on the current selection.
    pub fn dispatch<H>(&mut self, action: WorktreeAction, host: &mut H) -> Result<(), PanelError>
    where
        H: PanelHost + ?Sized,
    {
        log::debug!("Dispatching {:?}", action);
        let delete_flow = &mut self.delete_flow;
        guarded(host, |host, item| match action {
            WorktreeAction::Enter => navigation::enter(host, &item),
            WorktreeAction::Delete => delete_flow.begin(host, item),
        })
    }

    /// Continue after the user answered a confirmation dialog.
    pub fn resolve_confirmation<H>(
        &mut self,
        action: &ConfirmAction,
        confirmed: bool,
        host: &mut H,
    ) -> Result<(), PanelError>
    where
        H: PanelHost + ?Sized,
    {
        match action {
            ConfirmAction::DeleteWorktree { .. } => {
                let outcome = self.delete_flow.resolve(action, confirmed, host)?;
                if outcome == DeleteOutcome::Deleted {
                    log::info!("Worktree deleted");
                }
                Ok(())
            }
        }
    }

    /// Detail pane for the current selection.
    pub fn detail<H>(&self, host: &H, theme: &Theme) -> DetailView
    where
        H: PanelHost + ?Sized,
    {
        render_detail(host.selected().as_ref(), theme)
    }
}

impl Default for WorktreesController {
    fn default() -> Self {
        Self::new(&UniversalKeys::default())
    }
}
