//! Keyboard event handling.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::App;
use crate::keys::GlobalAction;

impl App {
    /// Handle keyboard event
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Open dialogs get every key
        if self.state.active_modal.is_some() {
            return self.handle_modal_key(key);
        }

        if let Some(action) = self.keys.action(&key) {
            self.handle_global_action(action);
            return Ok(());
        }

        if let Err(e) = self.controller.handle_key(&key, &mut self.state) {
            self.state.report_error(&e);
        }
        Ok(())
    }

    fn handle_global_action(&mut self, action: GlobalAction) {
        match action {
            GlobalAction::Quit => self.state.should_quit = true,
            GlobalAction::Return => {
                if let Err(e) = self.state.return_to_previous() {
                    self.state.show_error(format!("{:#}", e));
                }
            }
            GlobalAction::NextItem => self.state.worktrees.select_next(),
            GlobalAction::PrevItem => self.state.worktrees.select_prev(),
            GlobalAction::FirstItem => self.state.worktrees.select_first(),
            GlobalAction::LastItem => self.state.worktrees.select_last(),
        }
    }
}
