//! Modal window handling for the application.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use arbor_modal::{ActiveModal, Modal, ModalResult};

use super::App;

/// What a closed modal asks the application to do.
enum ModalOutcome {
    /// Confirmation answered (true = yes)
    Answered(bool),
    /// Error dialog dismissed
    Dismissed,
}

impl App {
    /// Handle keyboard event in modal window
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let outcome = match self.state.active_modal.as_mut() {
            Some(ActiveModal::Confirm(m)) => m.handle_key(key)?.map(answer),
            Some(ActiveModal::Error(m)) => m.handle_key(key)?.map(|_| ModalOutcome::Dismissed),
            None => None,
        };
        self.finish_modal(outcome);
        Ok(())
    }

    /// Handle mouse event in modal window
    pub(super) fn handle_modal_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let outcome = match self.state.active_modal.as_mut() {
            Some(ActiveModal::Confirm(m)) => m.handle_mouse(mouse)?.map(answer),
            Some(ActiveModal::Error(m)) => m.handle_mouse(mouse)?.map(|_| ModalOutcome::Dismissed),
            None => None,
        };
        self.finish_modal(outcome);
        Ok(())
    }

    fn finish_modal(&mut self, outcome: Option<ModalOutcome>) {
        let Some(outcome) = outcome else {
            return;
        };
        self.state.close_modal();

        if let ModalOutcome::Answered(confirmed) = outcome {
            let Some(request) = self.state.pending_action.take() else {
                return;
            };
            if let Err(e) =
                self.controller
                    .resolve_confirmation(&request.on_confirm, confirmed, &mut self.state)
            {
                self.state.report_error(&e);
            }
        }
    }
}

fn answer(result: ModalResult<bool>) -> ModalOutcome {
    ModalOutcome::Answered(matches!(result, ModalResult::Confirmed(true)))
}
